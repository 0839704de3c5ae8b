/// Hands out `prefix + n` identifiers continuing after the highest existing one.
///
/// Ids that do not carry the prefix or a numeric suffix are ignored when
/// looking for the maximum.
#[derive(Debug, Clone)]
pub struct IdSequence {
    prefix: &'static str,
    next: u64,
}

impl IdSequence {
    pub fn after<'a, I>(prefix: &'static str, existing: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let max = existing
            .into_iter()
            .filter_map(|id| id.strip_prefix(prefix))
            .filter_map(|suffix| suffix.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self {
            prefix,
            next: max + 1,
        }
    }

    pub fn next_id(&mut self) -> String {
        let id = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continues_after_max_suffix() {
        let mut ids = IdSequence::after("f", ["f3", "f12", "f7"]);
        assert_eq!(ids.next_id(), "f13");
        assert_eq!(ids.next_id(), "f14");
    }

    #[test]
    fn test_ignores_foreign_ids() {
        let mut ids = IdSequence::after("p", ["p2", "x9", "pay", "p"]);
        assert_eq!(ids.next_id(), "p3");
    }

    #[test]
    fn test_starts_at_one_when_empty() {
        let mut ids = IdSequence::after("e", std::iter::empty::<&str>());
        assert_eq!(ids.next_id(), "e1");
    }
}
