use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Half of the day for a 12-hour clock time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    pub fn label(&self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }
}

/// A 12-hour wall clock time such as `08:00am`.
///
/// Serialized as its display string so seed files stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    hour: u8,
    minute: u8,
    meridiem: Meridiem,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid clock time: '{0}'")]
pub struct ClockTimeParseError(pub String);

impl ClockTime {
    /// Returns `None` unless `hour` is 1..=12 and `minute` is 0..=59.
    pub fn new(hour: u8, minute: u8, meridiem: Meridiem) -> Option<Self> {
        if (1..=12).contains(&hour) && minute < 60 {
            Some(Self { hour, minute, meridiem })
        } else {
            None
        }
    }

    /// For compile-time constants whose fields are known to be in range
    pub(crate) const fn fixed(hour: u8, minute: u8, meridiem: Meridiem) -> Self {
        Self { hour, minute, meridiem }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn meridiem(&self) -> Meridiem {
        self.meridiem
    }

    pub fn minutes_since_midnight(&self) -> u32 {
        let hour_24 = match (self.hour, self.meridiem) {
            (12, Meridiem::Am) => 0,
            (12, Meridiem::Pm) => 12,
            (hour, Meridiem::Am) => hour,
            (hour, Meridiem::Pm) => hour + 12,
        };
        u32::from(hour_24) * 60 + u32::from(self.minute)
    }

    pub fn to_naive_time(&self) -> NaiveTime {
        NaiveTime::from_num_seconds_from_midnight_opt(self.minutes_since_midnight() * 60, 0)
            .unwrap_or_default()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_naive_time().format("%I:%M%P"))
    }
}

impl FromStr for ClockTime {
    type Err = ClockTimeParseError;

    /// Accepts `08:00am`, `8:00 AM`, `12:30pm`. A single space may separate
    /// the time from the meridiem; no other whitespace is allowed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ClockTimeParseError(s.to_string());
        let trimmed = s.trim();
        if trimmed.len() < 2 || !trimmed.is_char_boundary(trimmed.len() - 2) {
            return Err(invalid());
        }
        let (time, meridiem) = trimmed.split_at(trimmed.len() - 2);
        let compact = format!("{}{}", time.strip_suffix(' ').unwrap_or(time), meridiem);
        if compact.contains(char::is_whitespace) {
            return Err(invalid());
        }

        let parsed = NaiveTime::parse_from_str(&compact, "%I:%M%p").map_err(|_| invalid())?;
        let (is_pm, hour) = parsed.hour12();
        let meridiem = if is_pm { Meridiem::Pm } else { Meridiem::Am };
        ClockTime::new(hour as u8, parsed.minute() as u8, meridiem).ok_or_else(invalid)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ClockTimeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}

/// Display a start/end pair as `09:00am - 10:30am`.
pub fn format_time_range(start: &ClockTime, end: &ClockTime) -> String {
    format!("{} - {}", start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pads_hour_and_minute() {
        let time = ClockTime::new(8, 5, Meridiem::Am).unwrap();
        assert_eq!(time.to_string(), "08:05am");
        let time = ClockTime::new(12, 0, Meridiem::Pm).unwrap();
        assert_eq!(time.to_string(), "12:00pm");
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        assert!(ClockTime::new(0, 0, Meridiem::Am).is_none());
        assert!(ClockTime::new(13, 0, Meridiem::Am).is_none());
        assert!(ClockTime::new(1, 60, Meridiem::Pm).is_none());
    }

    #[test]
    fn test_parse_accepts_loose_formats() {
        let expected = ClockTime::new(8, 0, Meridiem::Am).unwrap();
        assert_eq!("08:00am".parse::<ClockTime>().unwrap(), expected);
        assert_eq!("8:00 AM".parse::<ClockTime>().unwrap(), expected);
        assert!("25:00pm".parse::<ClockTime>().is_err());
        assert!("08:00".parse::<ClockTime>().is_err());
        assert!("noon".parse::<ClockTime>().is_err());
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!("+8:+5am".parse::<ClockTime>().is_err());
        assert!("8 : 5 pm".parse::<ClockTime>().is_err());
        assert!("08:00  am".parse::<ClockTime>().is_err());
        assert!("08:00xm".parse::<ClockTime>().is_err());
        assert!("08:-1am".parse::<ClockTime>().is_err());
        assert!("00:30am".parse::<ClockTime>().is_err());
        assert!("".parse::<ClockTime>().is_err());
        assert!("é".parse::<ClockTime>().is_err());
    }

    #[test]
    fn test_parse_maps_meridiem() {
        let time: ClockTime = "12:30pm".parse().unwrap();
        assert_eq!((time.hour(), time.minute(), time.meridiem()), (12, 30, Meridiem::Pm));
        let time: ClockTime = "12:15AM".parse().unwrap();
        assert_eq!((time.hour(), time.minute(), time.meridiem()), (12, 15, Meridiem::Am));
        assert_eq!(time.to_string(), "12:15am");
    }

    #[test]
    fn test_minutes_since_midnight_handles_noon_and_midnight() {
        let midnight = ClockTime::new(12, 0, Meridiem::Am).unwrap();
        let noon = ClockTime::new(12, 0, Meridiem::Pm).unwrap();
        let afternoon = ClockTime::new(3, 30, Meridiem::Pm).unwrap();
        assert_eq!(midnight.minutes_since_midnight(), 0);
        assert_eq!(noon.minutes_since_midnight(), 720);
        assert_eq!(afternoon.minutes_since_midnight(), 930);
    }
}
