use shared::CalendarFocus;
use yew::prelude::*;

pub struct UseCalendarResult {
    pub focus: CalendarFocus,
    pub prev_month: Callback<MouseEvent>,
    pub next_month: Callback<MouseEvent>,
}

/// Month shown by a calendar, starting at `initial`
#[hook]
pub fn use_calendar(initial: CalendarFocus) -> UseCalendarResult {
    let focus = use_state(move || initial);

    let prev_month = {
        let focus = focus.clone();
        Callback::from(move |_: MouseEvent| focus.set(focus.previous()))
    };

    let next_month = {
        let focus = focus.clone();
        Callback::from(move |_: MouseEvent| focus.set(focus.next()))
    };

    UseCalendarResult {
        focus: *focus,
        prev_month,
        next_month,
    }
}
