use chrono::NaiveDate;
use shared::{ClockTime, Meridiem};

/// Value for an `<input type="date">`
pub fn date_input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
}

pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Hours offered by the time picker, 1 through 12
pub fn hour_options() -> impl Iterator<Item = u8> {
    1..=12
}

/// Minutes offered by the time picker, every five minutes
pub fn minute_options() -> impl Iterator<Item = u8> {
    (0..60).step_by(5)
}

/// Rebuild a time from the three picker selects; any blank part gives `None`
pub fn clock_time_from_parts(hour: &str, minute: &str, meridiem: &str) -> Option<ClockTime> {
    let hour: u8 = hour.parse().ok()?;
    let minute: u8 = minute.parse().ok()?;
    let meridiem = match meridiem {
        "AM" => Meridiem::Am,
        "PM" => Meridiem::Pm,
        _ => return None,
    };
    ClockTime::new(hour, minute, meridiem)
}

/// "08:00am - 03:30pm", or a placeholder when either end is missing
pub fn time_range_or_placeholder(start: Option<ClockTime>, end: Option<ClockTime>) -> String {
    match (start, end) {
        (Some(start), Some(end)) => shared::format_time_range(&start, &end),
        _ => "Time not set".to_string(),
    }
}

/// Placeholder text for optional free-text fields
pub fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.trim().is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}
