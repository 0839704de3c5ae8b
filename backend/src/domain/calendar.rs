//! Calendar domain logic for the daycare.
//!
//! Month grids for the parent and staff home screens, month navigation and
//! date formatting. The UI only renders what this module computes; "today"
//! comes from configuration so the prototype always shows the same week.

use chrono::{Datelike, NaiveDate};
use log::debug;
use shared::{CalendarDay, CalendarDayType, CalendarFocus, CalendarMonth, Event};
use std::collections::BTreeMap;

/// Calendar service that handles all calendar-related business logic
#[derive(Clone)]
pub struct CalendarService {
    today: NaiveDate,
}

impl CalendarService {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// The month containing today, where both calendars open
    pub fn today_focus(&self) -> CalendarFocus {
        CalendarFocus::new(self.today.month(), self.today.year() as u32)
    }

    pub fn previous_month(&self, focus: CalendarFocus) -> CalendarFocus {
        focus.previous()
    }

    pub fn next_month(&self, focus: CalendarFocus) -> CalendarFocus {
        focus.next()
    }

    /// Generate a month grid: padding cells up to the first weekday, then one
    /// cell per day carrying the ids of that day's events
    pub fn generate_calendar_month(&self, month: u32, year: u32, events: &[Event]) -> CalendarMonth {
        let days_in_month = self.days_in_month(month, year);
        let first_day = self.first_day_of_month(month, year);
        debug!(
            "🗓️ Generating calendar for {}/{}: {} days, first weekday {}",
            month, year, days_in_month, first_day
        );

        let events_by_day = self.group_events_by_day(month, year, events);

        let mut days: Vec<CalendarDay> = (0..first_day).map(|_| CalendarDay::padding()).collect();
        for day in 1..=days_in_month {
            days.push(CalendarDay {
                day,
                day_type: CalendarDayType::MonthDay,
                is_today: self.is_today(day, month, year),
                event_ids: events_by_day.get(&day).cloned().unwrap_or_default(),
            });
        }

        CalendarMonth {
            month,
            year,
            days,
            first_day_of_week: first_day,
        }
    }

    /// Get the number of days in a given month and year
    pub fn days_in_month(&self, month: u32, year: u32) -> u32 {
        match month {
            2 => {
                if self.is_leap_year(year) {
                    29
                } else {
                    28
                }
            }
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    pub fn is_leap_year(&self, year: u32) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    /// Get the first day of month (0 = Sunday, 1 = Monday, etc.)
    pub fn first_day_of_month(&self, month: u32, year: u32) -> u32 {
        NaiveDate::from_ymd_opt(year as i32, month, 1)
            .map(|date| date.weekday().num_days_from_sunday())
            .unwrap_or(0)
    }

    /// Get the human-readable name for a month number
    pub fn month_name(&self, month: u32) -> &'static str {
        match month {
            1 => "January",
            2 => "February",
            3 => "March",
            4 => "April",
            5 => "May",
            6 => "June",
            7 => "July",
            8 => "August",
            9 => "September",
            10 => "October",
            11 => "November",
            12 => "December",
            _ => "Invalid Month",
        }
    }

    /// Header text such as "November 2025"
    pub fn month_title(&self, focus: CalendarFocus) -> String {
        format!("{} {}", self.month_name(focus.month), focus.year)
    }

    /// "November 7, 2025"
    pub fn format_date(&self, date: NaiveDate) -> String {
        date.format("%B %-d, %Y").to_string()
    }

    /// "Nov 7"
    pub fn format_short_date(&self, date: NaiveDate) -> String {
        date.format("%b %-d").to_string()
    }

    /// Events falling in the given month, in date order
    pub fn events_in_month<'a>(&self, focus: CalendarFocus, events: &'a [Event]) -> Vec<&'a Event> {
        let mut in_month: Vec<&Event> = events
            .iter()
            .filter(|e| e.date.month() == focus.month && e.date.year() as u32 == focus.year)
            .collect();
        in_month.sort_by_key(|e| e.date);
        in_month
    }

    fn is_today(&self, day: u32, month: u32, year: u32) -> bool {
        self.today.day() == day && self.today.month() == month && self.today.year() as u32 == year
    }

    fn group_events_by_day(&self, month: u32, year: u32, events: &[Event]) -> BTreeMap<u32, Vec<String>> {
        let mut by_day: BTreeMap<u32, Vec<String>> = BTreeMap::new();
        for event in events {
            if event.date.month() == month && event.date.year() as u32 == year {
                by_day.entry(event.date.day()).or_default().push(event.id.clone());
            }
        }
        by_day
    }
}
