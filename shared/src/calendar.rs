use serde::{Deserialize, Serialize};

/// Type of calendar day for explicit rendering logic
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum CalendarDayType {
    /// Empty padding day before the start of the month
    PaddingBefore,
    /// Actual day within the month
    MonthDay,
}

/// A month grid ready to render, Sunday first
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarMonth {
    pub month: u32,
    pub year: u32,
    pub days: Vec<CalendarDay>,
    pub first_day_of_week: u32, // 0 = Sunday, 1 = Monday, etc.
}

impl CalendarMonth {
    pub fn month_days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.days
            .iter()
            .filter(|day| day.day_type == CalendarDayType::MonthDay)
    }
}

/// One cell of the grid. Padding cells have day 0 and no events.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarDay {
    pub day: u32,
    pub day_type: CalendarDayType,
    pub is_today: bool,
    /// Ids of the events on this day
    pub event_ids: Vec<String>,
}

impl CalendarDay {
    pub fn padding() -> Self {
        Self {
            day: 0,
            day_type: CalendarDayType::PaddingBefore,
            is_today: false,
            event_ids: Vec::new(),
        }
    }

    pub fn has_event(&self) -> bool {
        !self.event_ids.is_empty()
    }
}

/// Month/year the calendar is showing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarFocus {
    pub month: u32,
    pub year: u32,
}

impl CalendarFocus {
    pub fn new(month: u32, year: u32) -> Self {
        Self { month, year }
    }

    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self::new(12, self.year - 1)
        } else {
            Self::new(self.month - 1, self.year)
        }
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self::new(1, self.year + 1)
        } else {
            Self::new(self.month + 1, self.year)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_wraps_year() {
        let january = CalendarFocus::new(1, 2026);
        assert_eq!(january.previous(), CalendarFocus::new(12, 2025));
        let december = CalendarFocus::new(12, 2025);
        assert_eq!(december.next(), CalendarFocus::new(1, 2026));
        assert_eq!(CalendarFocus::new(6, 2025).next(), CalendarFocus::new(7, 2025));
    }

    #[test]
    fn test_padding_day_has_no_event() {
        let day = CalendarDay::padding();
        assert!(!day.has_event());
        assert_eq!(day.day_type, CalendarDayType::PaddingBefore);
    }
}
