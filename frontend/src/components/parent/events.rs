use daycare_backend::{NavPayload, ParentScreen};
use shared::Event;
use yew::prelude::*;

use super::home::{event_row, my_children};
use crate::components::common::{ParentTabBar, ScreenHeader};
use crate::hooks::use_app;
use crate::services::date_utils::or_placeholder;
use crate::services::{loaded, refreshed};

/// Events grouped by child, one tab per child
#[function_component(ParentEvents)]
pub fn parent_events() -> Html {
    let app = use_app();
    let children = my_children(&app);
    let active_tab = use_state(|| 0usize);

    let index = (*active_tab).min(children.len().saturating_sub(1));
    let active_child = children.get(index);
    let events: Vec<Event> = active_child
        .map(|child| loaded(app.backend.event_service.events_for_child(&child.child_id), "events"))
        .unwrap_or_default();

    html! {
        <div class="screen parent-events">
            <ScreenHeader title="Events" />
            <div class="child-tabs">
                {for children.iter().enumerate().map(|(i, child)| {
                    let active_tab = active_tab.clone();
                    let class = if i == index { "child-tab active" } else { "child-tab" };
                    html! {
                        <button class={class} onclick={Callback::from(move |_: MouseEvent| active_tab.set(i))}>
                            {&child.name}
                        </button>
                    }
                })}
            </div>
            {if events.is_empty() {
                html! { <p class="empty">{"No events"}</p> }
            } else {
                html! { <ul class="event-list">{for events.iter().map(|e| event_row(&app, e))}</ul> }
            }}
            <ParentTabBar current={ParentScreen::Events} />
        </div>
    }
}

#[function_component(ParentEventDetails)]
pub fn parent_event_details() -> Html {
    let app = use_app();
    let calendar = &app.backend.calendar_service;
    let back = app.parent_link(ParentScreen::Events);

    let selected = app.session().parent_router.selected_event.clone();
    let event = refreshed(selected, |event| app.backend.event_service.get_event(&event.id), "event");
    let Some(event) = event else {
        return html! {
            <div class="screen event-details">
                <ScreenHeader title="Event Details" on_back={Some(back)} />
                <p class="empty">{"No event selected"}</p>
                <ParentTabBar current={ParentScreen::EventDetails} />
            </div>
        };
    };

    // The parent's children going to this event, each with their own form and fee
    let attending: Vec<_> = my_children(&app)
        .into_iter()
        .filter(|child| event.includes_child(&child.child_id))
        .collect();

    html! {
        <div class="screen event-details">
            <ScreenHeader title={event.title.clone()} on_back={Some(back)} />
            <dl class="details">
                <dt>{"Date"}</dt>
                <dd>{calendar.format_date(event.date)}</dd>
                <dt>{"Time"}</dt>
                <dd>{shared::format_time_range(&event.start_time, &event.end_time)}</dd>
                <dt>{"Location"}</dt>
                <dd>{or_placeholder(&event.location, "Location not specified")}</dd>
                <dt>{"Description"}</dt>
                <dd>{or_placeholder(&event.description, "No description")}</dd>
                <dt>{"Notes"}</dt>
                <dd>{or_placeholder(&event.notes, "No notes")}</dd>
            </dl>

            {for attending.iter().map(|child| {
                let form = loaded(
                    app.backend.form_service.form_for_event_child(&event.id, &child.child_id),
                    "form",
                );
                let payment = loaded(
                    app.backend.payment_service.payment_for_event_child(&event.id, &child.child_id),
                    "payment",
                );
                let on_view_form = {
                    let app = app.clone();
                    Callback::from(move |_: MouseEvent| match form.clone() {
                        Some(form) => app.parent_to(ParentScreen::FormView, Some(NavPayload::Form(form))),
                        None => app.parent_to(ParentScreen::Forms, None),
                    })
                };
                let on_pay = {
                    let app = app.clone();
                    Callback::from(move |_: MouseEvent| {
                        app.parent_to(ParentScreen::Payments, payment.clone().map(NavPayload::Payment))
                    })
                };
                html! {
                    <div class="event-child-actions">
                        <h3>{&child.name}</h3>
                        {if event.has_form {
                            html! { <button class="btn btn-secondary" onclick={on_view_form}>{"View Form"}</button> }
                        } else {
                            html! {}
                        }}
                        <button class="btn btn-primary" onclick={on_pay}>{"Pay"}</button>
                    </div>
                }
            })}

            <ParentTabBar current={ParentScreen::EventDetails} />
        </div>
    }
}
