use chrono::NaiveDate;
use daycare_backend::{NavPayload, StaffScreen};
use shared::{ClockTime, EventDraft};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::child_multi_select::ChildMultiSelect;
use crate::components::common::{bind, bind_textarea, ErrorList, ScreenHeader, StaffTabBar};
use crate::components::date_picker::DatePicker;
use crate::components::time_picker::TimePicker;
use crate::hooks::{use_app, use_feedback};
use crate::services::{loaded, refreshed};

#[derive(Properties, PartialEq)]
pub struct EventEditorProps {
    /// The event being edited; `None` adds a new one
    #[prop_or_default]
    pub event: Option<shared::Event>,
}

/// Add/edit event form. The permission form is tracked by file name only.
#[function_component(EventEditor)]
pub fn event_editor(props: &EventEditorProps) -> Html {
    let app = use_app();
    let feedback = use_feedback();
    let draft = use_state(|| props.event.as_ref().map(EventDraft::from_event).unwrap_or_default());
    let title = use_state(|| draft.title.clone());
    let location = use_state(|| draft.location.clone());
    let description = use_state(|| draft.description.clone());
    let notes = use_state(|| draft.notes.clone());

    let roster = loaded(app.backend.child_service.list_children(), "roster");
    let roster_ids: Vec<String> = roster.iter().map(|c| c.child_id.clone()).collect();
    let editing = props.event.clone();

    let update = {
        let draft = draft.clone();
        move |change: &dyn Fn(&mut EventDraft)| {
            let mut next = (*draft).clone();
            change(&mut next);
            draft.set(next);
        }
    };

    let on_date = {
        let update = update.clone();
        Callback::from(move |date: NaiveDate| update(&|d| d.date = Some(date)))
    };
    let on_start = {
        let update = update.clone();
        Callback::from(move |time: Option<ClockTime>| update(&|d| d.start_time = time))
    };
    let on_end = {
        let update = update.clone();
        Callback::from(move |time: Option<ClockTime>| update(&|d| d.end_time = time))
    };
    let on_toggle = {
        let update = update.clone();
        Callback::from(move |child_id: String| {
            update(&|d| {
                d.children.toggle(&child_id);
            })
        })
    };
    let on_toggle_all = {
        let update = update.clone();
        Callback::from(move |_: ()| update(&|d| d.children.toggle_all(&roster_ids)))
    };
    let on_attach = {
        let update = update.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let file_name = input
                .files()
                .and_then(|files| files.get(0))
                .map(|file| file.name());
            if let Some(file_name) = file_name {
                update(&|d| d.attach_form(file_name.clone()));
            }
        })
    };
    let on_remove_form = {
        let update = update.clone();
        Callback::from(move |_: MouseEvent| update(&|d| d.remove_form()))
    };

    let on_save = {
        let app = app.clone();
        let feedback = feedback.clone();
        let draft = draft.clone();
        let (title, location, description, notes) =
            (title.clone(), location.clone(), description.clone(), notes.clone());
        let editing = editing.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut submitted = (*draft).clone();
            submitted.title = (*title).clone();
            submitted.location = (*location).clone();
            submitted.description = (*description).clone();
            submitted.notes = (*notes).clone();

            let service = &app.backend.event_service;
            let saved = match &editing {
                Some(event) => service
                    .update_event(&event.id, &submitted)
                    .map(|r| (r.event, r.success_message)),
                None => service
                    .create_event(&submitted)
                    .map(|r| (r.event, r.success_message)),
            };
            match saved {
                Ok((event, message)) => {
                    gloo::dialogs::alert(&message);
                    app.data_changed();
                    app.staff_to(StaffScreen::EventDetails, Some(NavPayload::Event(event)));
                }
                Err(err) => feedback.show_error(&err),
            }
        })
    };

    let has_form = draft.resolved_has_form(editing.as_ref().map(|e| e.has_form).unwrap_or(false));
    let (heading, screen, back) = match &editing {
        Some(event) => {
            let app = app.clone();
            let event = event.clone();
            let back = Callback::from(move |_: MouseEvent| {
                app.staff_to(StaffScreen::EventDetails, Some(NavPayload::Event(event.clone())))
            });
            ("Edit Event", StaffScreen::EditEvent, back)
        }
        None => ("Add Event", StaffScreen::AddEvent, app.staff_link(StaffScreen::Events)),
    };

    html! {
        <div class="screen staff-event-editor">
            <ScreenHeader title={heading} on_back={Some(back)} />
            <ErrorList errors={(*feedback.errors).clone()} />
            <form class="event-form" onsubmit={on_save}>
                <div class="form-group">
                    <label for="event-title">{"Title"}</label>
                    <input id="event-title" type="text" value={(*title).clone()} oninput={bind(&title)} />
                </div>
                <div class="form-group">
                    <label for="event-location">{"Location"}</label>
                    <input id="event-location" type="text" value={(*location).clone()} oninput={bind(&location)} />
                </div>
                <DatePicker label="Date" value={draft.date} on_change={on_date} />
                <div class="form-row">
                    <TimePicker label="Start Time" value={draft.start_time} on_change={on_start} />
                    <TimePicker label="End Time" value={draft.end_time} on_change={on_end} />
                </div>
                <div class="form-group">
                    <label>{"Children"}</label>
                    <ChildMultiSelect
                        roster={roster.clone()}
                        selection={draft.children.clone()}
                        on_toggle={on_toggle}
                        on_toggle_all={on_toggle_all}
                    />
                </div>
                <div class="form-group">
                    <label for="event-description">{"Description"}</label>
                    <textarea id="event-description" value={(*description).clone()} oninput={bind_textarea(&description)} />
                </div>
                <div class="form-group">
                    <label for="event-notes">{"Notes"}</label>
                    <textarea id="event-notes" value={(*notes).clone()} oninput={bind_textarea(&notes)} />
                </div>
                <div class="form-group form-attachment">
                    <label>{"Permission Form"}</label>
                    {if has_form {
                        let file = draft.form_file.clone().unwrap_or_else(|| "Permission form attached".to_string());
                        html! {
                            <div class="attached-form">
                                <span class="file-name">{format!("📎 {}", file)}</span>
                                <button type="button" class="btn btn-link" onclick={on_remove_form}>{"Remove form"}</button>
                            </div>
                        }
                    } else {
                        html! { <input type="file" accept=".pdf,.doc,.docx" onchange={on_attach} /> }
                    }}
                </div>
                <div class="form-actions">
                    <button type="submit" class="btn btn-primary">{if editing.is_some() { "Save Changes" } else { "Add Event" }}</button>
                </div>
            </form>
            <StaffTabBar current={screen} />
        </div>
    }
}

#[function_component(AddEvent)]
pub fn add_event() -> Html {
    html! { <EventEditor /> }
}

#[function_component(EditEvent)]
pub fn edit_event() -> Html {
    let app = use_app();
    let selected = app.session().staff_router.selected_event.clone();
    match refreshed(selected, |event| app.backend.event_service.get_event(&event.id), "event") {
        Some(event) => html! { <EventEditor key={event.id.clone()} event={Some(event.clone())} /> },
        None => html! {
            <div class="screen staff-event-editor">
                <ScreenHeader title="Edit Event" on_back={Some(app.staff_link(StaffScreen::Events))} />
                <p class="empty">{"No event selected"}</p>
                <StaffTabBar current={StaffScreen::EditEvent} />
            </div>
        },
    }
}
