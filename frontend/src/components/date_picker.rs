use chrono::{Datelike, NaiveDate};
use gloo::utils::window;
use shared::{CalendarDayType, CalendarFocus};
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::hooks::{use_app, use_calendar};

#[derive(Properties, PartialEq)]
pub struct DatePickerProps {
    pub label: AttrValue,
    /// Selected date, or None before one is picked
    pub value: Option<NaiveDate>,
    pub on_change: Callback<NaiveDate>,
}

/// Button showing the chosen date that opens a month calendar dropdown
#[function_component(DatePicker)]
pub fn date_picker(props: &DatePickerProps) -> Html {
    let app = use_app();
    let calendar_service = &app.backend.calendar_service;
    let show_calendar = use_state(|| false);
    let picker_ref = use_node_ref();

    let initial_focus = props
        .value
        .map(|d| CalendarFocus::new(d.month(), d.year() as u32))
        .unwrap_or_else(|| calendar_service.today_focus());
    let calendar = use_calendar(initial_focus);

    let display_text = props
        .value
        .map(|d| calendar_service.format_date(d))
        .unwrap_or_else(|| "Select a date".to_string());

    let toggle_calendar = {
        let show_calendar = show_calendar.clone();
        Callback::from(move |_: MouseEvent| show_calendar.set(!*show_calendar))
    };

    // Close the dropdown on any click outside the picker
    {
        let show_calendar = show_calendar.clone();
        let picker_ref = picker_ref.clone();
        use_effect_with(*show_calendar, move |is_open| {
            let listener = is_open.then(|| {
                gloo::events::EventListener::new(&window(), "click", move |e| {
                    let Some(target) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                        return;
                    };
                    if let Some(picker) = picker_ref.cast::<Element>() {
                        if !picker.contains(Some(&target)) {
                            show_calendar.set(false);
                        }
                    }
                })
            });
            move || drop(listener)
        });
    }

    let focus = calendar.focus;
    let grid = calendar_service.generate_calendar_month(focus.month, focus.year, &[]);
    let days = grid.days.iter().map(|day| {
        if day.day_type == CalendarDayType::PaddingBefore {
            return html! { <span class="calendar-day empty"></span> };
        }
        let date = NaiveDate::from_ymd_opt(focus.year as i32, focus.month, day.day);
        let is_selected = date.is_some() && date == props.value;
        let on_select = {
            let on_change = props.on_change.clone();
            let show_calendar = show_calendar.clone();
            Callback::from(move |_: MouseEvent| {
                if let Some(date) = date {
                    on_change.emit(date);
                    show_calendar.set(false);
                }
            })
        };
        html! {
            <button
                type="button"
                class={classes!("calendar-day", day.is_today.then_some("today"), is_selected.then_some("selected"))}
                onclick={on_select}
            >
                {day.day}
            </button>
        }
    });

    html! {
        <div class="form-group date-picker" ref={picker_ref}>
            <label class="date-picker-label">{props.label.clone()}</label>
            <button type="button" class="date-display-button" onclick={toggle_calendar}>
                <span class="date-text">{display_text}</span>
                <span class="calendar-icon">{"📅"}</span>
            </button>
            {if *show_calendar {
                html! {
                    <div class="calendar-dropdown">
                        <div class="calendar-header">
                            <button type="button" class="nav-button" onclick={calendar.prev_month.clone()}>{"‹"}</button>
                            <span class="month-year">{calendar_service.month_title(focus)}</span>
                            <button type="button" class="nav-button" onclick={calendar.next_month.clone()}>{"›"}</button>
                        </div>
                        <div class="weekday-header">
                            {for ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"].iter().map(|d| html! { <span>{*d}</span> })}
                        </div>
                        <div class="calendar-days">{for days}</div>
                    </div>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
