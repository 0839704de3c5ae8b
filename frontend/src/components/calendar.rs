use shared::{CalendarDayType, CalendarMonth};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MonthCalendarProps {
    pub title: AttrValue,
    pub calendar_data: CalendarMonth,
    pub on_prev: Callback<MouseEvent>,
    pub on_next: Callback<MouseEvent>,
}

/// Month grid with a dot on days that have events
#[function_component(MonthCalendar)]
pub fn month_calendar(props: &MonthCalendarProps) -> Html {
    let calendar_days = props.calendar_data.days.iter().map(|day| {
        if day.day_type == CalendarDayType::PaddingBefore {
            return html! { <div class="calendar-day empty"></div> };
        }
        let class = classes!(
            "calendar-day",
            day.is_today.then_some("today"),
            day.has_event().then_some("has-event")
        );
        html! {
            <div class={class}>
                <div class="day-number">{day.day}</div>
                {if day.has_event() {
                    html! { <span class="event-marker"></span> }
                } else {
                    html! {}
                }}
            </div>
        }
    });

    html! {
        <div class="calendar">
            <div class="calendar-header">
                <button class="btn btn-link" onclick={props.on_prev.clone()}>{"‹"}</button>
                <h2>{props.title.clone()}</h2>
                <button class="btn btn-link" onclick={props.on_next.clone()}>{"›"}</button>
            </div>
            <div class="calendar-weekdays">
                <div class="weekday">{"Sun"}</div>
                <div class="weekday">{"Mon"}</div>
                <div class="weekday">{"Tue"}</div>
                <div class="weekday">{"Wed"}</div>
                <div class="weekday">{"Thu"}</div>
                <div class="weekday">{"Fri"}</div>
                <div class="weekday">{"Sat"}</div>
            </div>
            <div class="calendar-grid">
                {for calendar_days}
            </div>
        </div>
    }
}
