use daycare_backend::{NavPayload, ParentScreen};
use shared::{Child, Event};
use yew::prelude::*;

use crate::components::calendar::MonthCalendar;
use crate::components::common::{ParentTabBar, ScreenHeader};
use crate::hooks::{use_app, use_calendar, AppContext};
use crate::services::date_utils::or_placeholder;
use crate::services::loaded;

/// Row that opens event details for the parent
pub fn event_row(app: &AppContext, event: &Event) -> Html {
    let on_click = {
        let app = app.clone();
        let event = event.clone();
        Callback::from(move |_: MouseEvent| {
            app.parent_to(ParentScreen::EventDetails, Some(NavPayload::Event(event.clone())))
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

/// The signed-in parent's children, empty when signed out
pub fn my_children(app: &AppContext) -> Vec<Child> {
    loaded(app.session().parent_children(&app.backend.child_service), "children")
}

#[function_component(ParentHome)]
pub fn parent_home() -> Html {
    let app = use_app();
    let calendar_service = &app.backend.calendar_service;
    let calendar = use_calendar(calendar_service.today_focus());

    let children = my_children(&app);
    let child_ids: Vec<String> = children.iter().map(|c| c.child_id.clone()).collect();
    let events = loaded(app.backend.event_service.events_for_children(&child_ids), "events");
    let calendar_data =
        calendar_service.generate_calendar_month(calendar.focus.month, calendar.focus.year, &events);
    let this_month = calendar_service.events_in_month(calendar.focus, &events);

    let greeting = app
        .session()
        .parent()
        .map(|p| format!("Welcome, {}", p.name))
        .unwrap_or_else(|| "Welcome".to_string());

    let on_logout = {
        let app = app.clone();
        Callback::from(move |_: MouseEvent| app.logout())
    };

    html! {
        <div class="screen parent-home">
            <ScreenHeader title={greeting}>
                <button class="btn btn-link" onclick={on_logout}>{"Log Out"}</button>
            </ScreenHeader>

            <MonthCalendar
                title={calendar_service.month_title(calendar.focus)}
                calendar_data={calendar_data}
                on_prev={calendar.prev_month.clone()}
                on_next={calendar.next_month.clone()}
            />

            <section class="events-this-month">
                <h2>{"Events this month"}</h2>
                {if children.is_empty() {
                    html! { <p class="empty">{"No children are linked to your account yet."}</p> }
                } else {
                    html! {
                        <>{for children.iter().map(|child| {
                            let child_events: Vec<&Event> = this_month
                                .iter()
                                .copied()
                                .filter(|e| e.includes_child(&child.child_id))
                                .collect();
                            html! {
                                <div class="child-events">
                                    <h3>{&child.name}</h3>
                                    {if child_events.is_empty() {
                                        html! { <p class="empty">{"No events"}</p> }
                                    } else {
                                        html! { <ul>{for child_events.iter().map(|e| event_row(&app, e))}</ul> }
                                    }}
                                </div>
                            }
                        })}</>
                    }
                }}
            </section>

            <ParentTabBar current={ParentScreen::Home} />
        </div>
    }
}
