pub mod date_utils;
pub mod logging;

/// Unwrap a read for rendering; failures are logged and render as empty
pub fn loaded<T: Default>(result: anyhow::Result<T>, what: &str) -> T {
    result.unwrap_or_else(|e| {
        log::error!("Failed to load {}: {:#}", what, e);
        T::default()
    })
}

/// Re-read the record held in a router slot. A record deleted since the
/// navigation comes back as `None`.
pub fn refreshed<T>(
    slot: Option<T>,
    fetch: impl FnOnce(&T) -> anyhow::Result<Option<T>>,
    what: &str,
) -> Option<T> {
    slot.and_then(|held| loaded(fetch(&held), what))
}

#[cfg(test)]
mod tests {
    use super::*;
    use daycare_backend::DaycareBackend;
    use shared::{FormSubmission, RecordStatus};

    #[test]
    fn test_refreshed_reads_current_form() {
        let backend = DaycareBackend::new().unwrap();
        let forms = &backend.form_service;
        let held = forms.get_form("f4").unwrap().unwrap();
        assert_eq!(held.status, RecordStatus::Outstanding);

        forms
            .submit_form(
                "f4",
                &FormSubmission {
                    parent_name: "Sarah James".to_string(),
                    emergency_contact: "403-555-0101".to_string(),
                    notes: String::new(),
                    signature: "Sarah James".to_string(),
                    consent: true,
                },
            )
            .unwrap();

        let current = refreshed(Some(held), |f| forms.get_form(&f.id), "form").unwrap();
        assert_eq!(current.status, RecordStatus::Pending);
    }

    #[test]
    fn test_refreshed_handles_empty_and_missing() {
        let backend = DaycareBackend::new().unwrap();
        let forms = &backend.form_service;
        assert!(refreshed(None, |f: &shared::Form| forms.get_form(&f.id), "form").is_none());

        let mut gone = forms.get_form("f4").unwrap().unwrap();
        gone.id = "f999".to_string();
        assert!(refreshed(Some(gone), |f| forms.get_form(&f.id), "form").is_none());
    }

    #[test]
    fn test_loaded_defaults_on_error() {
        let value: Vec<String> = loaded(Err(anyhow::anyhow!("store unavailable")), "names");
        assert!(value.is_empty());
    }
}
