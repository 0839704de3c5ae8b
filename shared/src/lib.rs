//! Data model shared by the Sunnyview daycare backend and frontend.
//!
//! Everything in here is plain data plus the rules that belong to the data
//! itself: status lifecycles, draft validation and the child multi-select.
//! There is no I/O in this crate.

pub mod calendar;
pub mod clock;
pub mod drafts;
pub mod models;
pub mod responses;
pub mod selection;
pub mod status;
pub mod validation;

pub use calendar::*;
pub use clock::*;
pub use drafts::*;
pub use models::*;
pub use responses::*;
pub use selection::*;
pub use status::*;
pub use validation::*;

/// Format a money amount for display, e.g. `$35.00`.
pub fn format_amount(currency_symbol: &str, amount: f64) -> String {
    format!("{}{:.2}", currency_symbol, amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount("$", 35.0), "$35.00");
        assert_eq!(format_amount("$", 850.5), "$850.50");
    }
}
