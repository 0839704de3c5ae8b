use daycare_backend::{NavPayload, StaffScreen};
use shared::Event;
use yew::prelude::*;

use crate::components::calendar::MonthCalendar;
use crate::components::common::{ScreenHeader, StaffTabBar};
use crate::hooks::{use_app, use_calendar, AppContext};
use crate::services::date_utils::or_placeholder;
use crate::services::loaded;

/// Row that opens the staff event details
pub fn staff_event_row(app: &AppContext, event: &Event) -> Html {
    let on_click = {
        let app = app.clone();
        let event = event.clone();
        Callback::from(move |_: MouseEvent| {
            app.staff_to(StaffScreen::EventDetails, Some(NavPayload::Event(event.clone())))
        })
    };
    let calendar = &app.backend.calendar_service;
    html! {
        <li class="event-row" onclick={on_click}>
            <div class="event-date">{calendar.format_short_date(event.date)}</div>
            <div class="event-summary">
                <div class="event-title">{&event.title}</div>
                <div class="event-meta">
                    {format!("{} · {}", shared::format_time_range(&event.start_time, &event.end_time),
                        or_placeholder(&event.location, "Location not specified"))}
                </div>
            </div>
        </li>
    }
}

#[function_component(StaffHome)]
pub fn staff_home() -> Html {
    let app = use_app();
    let calendar_service = &app.backend.calendar_service;
    let calendar = use_calendar(calendar_service.today_focus());

    let events = loaded(app.backend.event_service.list_events(), "events");
    let calendar_data =
        calendar_service.generate_calendar_month(calendar.focus.month, calendar.focus.year, &events);
    let this_month = calendar_service.events_in_month(calendar.focus, &events);

    let greeting = app
        .session()
        .staff()
        .map(|s| format!("Hello, {}", s.name))
        .unwrap_or_else(|| "Staff".to_string());
    let on_logout = {
        let app = app.clone();
        Callback::from(move |_: MouseEvent| app.logout())
    };

    html! {
        <div class="screen staff-home">
            <ScreenHeader title={greeting}>
                <button class="btn btn-link" onclick={on_logout}>{"Log Out"}</button>
            </ScreenHeader>

            <p class="today">{format!("Today is {}", calendar_service.format_date(calendar_service.today()))}</p>

            <MonthCalendar
                title={calendar_service.month_title(calendar.focus)}
                calendar_data={calendar_data}
                on_prev={calendar.prev_month.clone()}
                on_next={calendar.next_month.clone()}
            />

            <section class="events-this-month">
                <h2>{"Events this month"}</h2>
                {if this_month.is_empty() {
                    html! { <p class="empty">{"No events this month"}</p> }
                } else {
                    html! { <ul class="event-list">{for this_month.iter().map(|e| staff_event_row(&app, e))}</ul> }
                }}
            </section>

            <StaffTabBar current={StaffScreen::Home} />
        </div>
    }
}
