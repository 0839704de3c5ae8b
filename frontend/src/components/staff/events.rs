use daycare_backend::{NavPayload, StaffScreen};
use yew::prelude::*;

use super::home::staff_event_row;
use crate::components::common::{confirm, ErrorList, ScreenHeader, StaffTabBar};
use crate::hooks::{use_app, use_feedback};
use crate::services::date_utils::or_placeholder;
use crate::services::{loaded, refreshed};

#[function_component(StaffEvents)]
pub fn staff_events() -> Html {
    let app = use_app();
    let events = loaded(app.backend.event_service.list_events(), "events");

    html! {
        <div class="screen staff-events">
            <ScreenHeader title="Events">
                <button class="btn btn-primary" onclick={app.staff_link(StaffScreen::AddEvent)}>{"+ Add Event"}</button>
            </ScreenHeader>
            {if events.is_empty() {
                html! { <p class="empty">{"No events scheduled"}</p> }
            } else {
                html! {
                    <ul class="event-list">
                        {for events.iter().map(|event| {
                            let on_details = {
                                let app = app.clone();
                                let event = event.clone();
                                Callback::from(move |_: MouseEvent| {
                                    app.staff_to(StaffScreen::EventDetails, Some(NavPayload::Event(event.clone())))
                                })
                            };
                            html! {
                                <div class="event-list-item">
                                    {staff_event_row(&app, event)}
                                    <button class="btn btn-secondary" onclick={on_details}>{"Details"}</button>
                                </div>
                            }
                        })}
                    </ul>
                }
            }}
            <StaffTabBar current={StaffScreen::Events} />
        </div>
    }
}

#[function_component(StaffEventDetails)]
pub fn staff_event_details() -> Html {
    let app = use_app();
    let feedback = use_feedback();
    let back = app.staff_link(StaffScreen::Events);

    // Re-read so a just-saved edit shows its new fields
    let selected = app.session().staff_router.selected_event.clone();
    let event = refreshed(selected, |event| app.backend.event_service.get_event(&event.id), "event");
    let Some(event) = event else {
        return html! {
            <div class="screen staff-event-details">
                <ScreenHeader title="Event Details" on_back={Some(back)} />
                <p class="empty">{"No event selected"}</p>
                <StaffTabBar current={StaffScreen::EventDetails} />
            </div>
        };
    };

    let calendar = &app.backend.calendar_service;
    let attendees: Vec<String> = event
        .children
        .iter()
        .map(|id| loaded(app.backend.child_service.child_name(id), "child"))
        .collect();

    let on_edit = {
        let app = app.clone();
        let event = event.clone();
        Callback::from(move |_: MouseEvent| {
            app.staff_to(StaffScreen::EditEvent, Some(NavPayload::Event(event.clone())))
        })
    };
    let on_delete = {
        let app = app.clone();
        let feedback = feedback.clone();
        let (event_id, title) = (event.id.clone(), event.title.clone());
        Callback::from(move |_: MouseEvent| {
            if !confirm(&format!("Delete \"{}\"? Its forms and fees will be removed too.", title)) {
                return;
            }
            match app.backend.event_service.delete_event(&event_id) {
                Ok(response) => {
                    gloo::dialogs::alert(&response.success_message);
                    app.data_changed();
                    app.staff_to(StaffScreen::Events, None);
                }
                Err(err) => feedback.show_error(&err),
            }
        })
    };

    html! {
        <div class="screen staff-event-details">
            <ScreenHeader title={event.title.clone()} on_back={Some(back)}>
                <button class="btn btn-secondary" onclick={on_edit}>{"Edit"}</button>
                <button class="btn btn-danger" onclick={on_delete}>{"Delete"}</button>
            </ScreenHeader>
            <ErrorList errors={(*feedback.errors).clone()} />
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
                <dt>{"Permission Form"}</dt>
                <dd>
                    {match (&event.has_form, &event.form_file) {
                        (true, Some(file)) => file.clone(),
                        (true, None) => event.form_title(),
                        (false, _) => "No form required".to_string(),
                    }}
                </dd>
                <dt>{format!("Attending ({})", attendees.len())}</dt>
                <dd>
                    {if attendees.is_empty() {
                        html! { {"No children selected"} }
                    } else {
                        html! { <ul class="attendees">{for attendees.iter().map(|name| html! { <li>{name}</li> })}</ul> }
                    }}
                </dd>
            </dl>
            <StaffTabBar current={StaffScreen::EventDetails} />
        </div>
    }
}
