//! Activity log screens: the editor used for both new and existing logs,
//! and the list of saved logs.

use daycare_backend::{NavPayload, StaffScreen};
use shared::{ActivityLog, ActivityLogDraft, ClockTime};
use web_sys::{HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::child_multi_select::ChildMultiSelect;
use crate::components::common::{bind, bind_textarea, confirm, ErrorList, ScreenHeader, StaffTabBar, SuccessBanner};
use crate::components::time_picker::TimePicker;
use crate::hooks::{use_app, use_feedback};
use crate::services::{loaded, refreshed};

#[derive(Properties, PartialEq)]
pub struct LogEditorProps {
    /// The log being edited; `None` writes a new one
    #[prop_or_default]
    pub log: Option<ActivityLog>,
}

#[function_component(LogEditor)]
pub fn log_editor(props: &LogEditorProps) -> Html {
    let app = use_app();
    let feedback = use_feedback();
    let draft = use_state(|| {
        props
            .log
            .as_ref()
            .map(ActivityLogDraft::from_log)
            .unwrap_or_default()
    });
    let activity_name = use_state(|| draft.activity_name.clone());
    let notes = use_state(|| draft.notes.clone());
    let note_child = use_state(String::new);

    let roster = loaded(app.backend.child_service.list_children(), "roster");
    let roster_ids: Vec<String> = roster.iter().map(|c| c.child_id.clone()).collect();
    let editing = props.log.clone();

    let update = {
        let draft = draft.clone();
        move |change: &dyn Fn(&mut ActivityLogDraft)| {
            let mut next = (*draft).clone();
            change(&mut next);
            draft.set(next);
        }
    };

    let on_toggle = {
        let update = update.clone();
        Callback::from(move |child_id: String| update(&|d| d.toggle_child(&child_id)))
    };
    let on_toggle_all = {
        let update = update.clone();
        let roster_ids = roster_ids.clone();
        Callback::from(move |_: ()| update(&|d| d.toggle_all_children(&roster_ids)))
    };
    let on_start = {
        let update = update.clone();
        Callback::from(move |time: Option<ClockTime>| update(&|d| d.start_time = time))
    };
    let on_end = {
        let update = update.clone();
        Callback::from(move |time: Option<ClockTime>| update(&|d| d.end_time = time))
    };
    let on_note_child = {
        let note_child = note_child.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            note_child.set(select.value());
        })
    };
    let on_add_note = {
        let update = update.clone();
        let note_child = note_child.clone();
        Callback::from(move |_: MouseEvent| {
            let child_id = (*note_child).clone();
            if !child_id.is_empty() {
                update(&|d| {
                    d.add_note(&child_id);
                });
                note_child.set(String::new());
            }
        })
    };

    let on_save = {
        let app = app.clone();
        let feedback = feedback.clone();
        let draft = draft.clone();
        let (activity_name, notes) = (activity_name.clone(), notes.clone());
        let editing = editing.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut submitted = (*draft).clone();
            submitted.activity_name = (*activity_name).clone();
            submitted.notes = (*notes).clone();

            let service = &app.backend.activity_log_service;
            let result = match &editing {
                Some(log) => service.update_log(&log.id, &submitted),
                None => service.create_log(&submitted),
            };
            match result {
                Ok(log) => {
                    app.data_changed();
                    if editing.is_some() {
                        app.staff_to(StaffScreen::ViewLogs, None);
                    } else {
                        feedback.show_success(format!("Activity \"{}\" logged", log.activity_name));
                        draft.set(ActivityLogDraft::new());
                        activity_name.set(String::new());
                        notes.set(String::new());
                    }
                }
                Err(err) => feedback.show_error(&err),
            }
        })
    };

    let child_name = |child_id: &str| {
        roster
            .iter()
            .find(|c| c.child_id == child_id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| child_id.to_string())
    };
    let available = draft.children_available_for_note();

    let (title, screen) = if editing.is_some() {
        ("Edit Log", StaffScreen::EditLog)
    } else {
        ("Activity Log", StaffScreen::Log)
    };
    let back = editing
        .is_some()
        .then(|| app.staff_link(StaffScreen::ViewLogs));

    html! {
        <div class="screen staff-log">
            <ScreenHeader title={title} on_back={back}>
                <button class="btn btn-link" onclick={app.staff_link(StaffScreen::ViewLogs)}>{"View Logs"}</button>
            </ScreenHeader>
            <SuccessBanner message={(*feedback.success).clone()} />
            <ErrorList errors={(*feedback.errors).clone()} />

            <form class="log-form" onsubmit={on_save}>
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
                    <label for="activity-name">{"Activity Name"}</label>
                    <input id="activity-name" type="text" value={(*activity_name).clone()} oninput={bind(&activity_name)} />
                </div>
                <div class="form-row">
                    <TimePicker label="Start Time" value={draft.start_time} on_change={on_start} />
                    <TimePicker label="End Time" value={draft.end_time} on_change={on_end} />
                </div>
                <div class="form-group">
                    <label for="log-notes">{"General Notes"}</label>
                    <textarea id="log-notes" value={(*notes).clone()} oninput={bind_textarea(&notes)} />
                </div>

                <section class="behavioral-notes">
                    <h3>{"Behavioral Notes"}</h3>
                    {for draft.behavioral_notes.iter().enumerate().map(|(index, note)| {
                        let on_text = {
                            let update = update.clone();
                            Callback::from(move |e: InputEvent| {
                                let area: HtmlTextAreaElement = e.target_unchecked_into();
                                let text = area.value();
                                update(&|d| d.update_note(index, text.clone()));
                            })
                        };
                        let on_remove = {
                            let update = update.clone();
                            Callback::from(move |_: MouseEvent| update(&|d| d.remove_note(index)))
                        };
                        html! {
                            <div class="behavioral-note">
                                <div class="note-header">
                                    <strong>{child_name(&note.child_id)}</strong>
                                    <button type="button" class="btn btn-link" onclick={on_remove}>{"Remove"}</button>
                                </div>
                                <textarea value={note.note.clone()} oninput={on_text} />
                            </div>
                        }
                    })}
                    {if available.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <div class="add-note">
                                <select onchange={on_note_child}>
                                    <option value="" selected={note_child.is_empty()}>{"Choose a child"}</option>
                                    {for available.iter().map(|id| html! {
                                        <option value={id.clone()} selected={*note_child == *id}>{child_name(id)}</option>
                                    })}
                                </select>
                                <button type="button" class="btn btn-secondary" onclick={on_add_note}>{"Add Note"}</button>
                            </div>
                        }
                    }}
                </section>

                <div class="form-actions">
                    <button type="submit" class="btn btn-primary">{if editing.is_some() { "Save" } else { "Submit" }}</button>
                </div>
            </form>
            <StaffTabBar current={screen} />
        </div>
    }
}

#[function_component(NewLog)]
pub fn new_log() -> Html {
    html! { <LogEditor /> }
}

#[function_component(EditLog)]
pub fn edit_log() -> Html {
    let app = use_app();
    let selected = app.session().staff_router.selected_log.clone();
    match refreshed(selected, |held| app.backend.activity_log_service.get_log(&held.id), "log") {
        Some(log) => html! { <LogEditor key={log.id.clone()} log={Some(log.clone())} /> },
        None => html! {
            <div class="screen staff-log">
                <ScreenHeader title="Edit Log" on_back={Some(app.staff_link(StaffScreen::ViewLogs))} />
                <p class="empty">{"No log selected"}</p>
                <StaffTabBar current={StaffScreen::EditLog} />
            </div>
        },
    }
}

#[function_component(ViewLogs)]
pub fn view_logs() -> Html {
    let app = use_app();
    let feedback = use_feedback();
    let logs = loaded(app.backend.activity_log_service.list_logs(), "activity logs");
    let calendar = &app.backend.calendar_service;

    html! {
        <div class="screen staff-view-logs">
            <ScreenHeader title="Activity Logs" on_back={Some(app.staff_link(StaffScreen::Log))}>
                <button class="btn btn-primary" onclick={app.staff_link(StaffScreen::Log)}>{"+ Add Log"}</button>
            </ScreenHeader>
            <SuccessBanner message={(*feedback.success).clone()} />
            <ErrorList errors={(*feedback.errors).clone()} />
            {if logs.is_empty() {
                html! { <p class="empty">{"No activity logs yet"}</p> }
            } else {
                html! {
                    <ul class="log-list">
                        {for logs.into_iter().map(|log| {
                            let date = log
                                .date
                                .map(|d| calendar.format_date(d))
                                .unwrap_or_else(|| "Date not set".to_string());
                            let time = shared::format_time_range(&log.start_time, &log.end_time);
                            let count = log.selected_child_ids().len();
                            let on_edit = {
                                let app = app.clone();
                                let log = log.clone();
                                Callback::from(move |_: MouseEvent| {
                                    app.staff_to(StaffScreen::EditLog, Some(NavPayload::Log(log.clone())))
                                })
                            };
                            let on_delete = {
                                let app = app.clone();
                                let feedback = feedback.clone();
                                let (log_id, name) = (log.id.clone(), log.activity_name.clone());
                                Callback::from(move |_: MouseEvent| {
                                    if !confirm(&format!("Delete the \"{}\" log?", name)) {
                                        return;
                                    }
                                    match app.backend.activity_log_service.delete_log(&log_id) {
                                        Ok(()) => {
                                            feedback.show_success(format!("Deleted \"{}\"", name));
                                            app.data_changed();
                                        }
                                        Err(err) => feedback.show_error(&err),
                                    }
                                })
                            };
                            html! {
                                <li class="log-row">
                                    <div class="log-date">{date}</div>
                                    <div class="log-name">{&log.activity_name}</div>
                                    <div class="log-time">{time}</div>
                                    <div class="log-children">{format!("{} children", count)}</div>
                                    <div class="row-actions">
                                        <button class="btn btn-secondary" onclick={on_edit}>{"Edit"}</button>
                                        <button class="btn btn-danger" onclick={on_delete}>{"Delete"}</button>
                                    </div>
                                </li>
                            }
                        })}
                    </ul>
                }
            }}
            <StaffTabBar current={StaffScreen::ViewLogs} />
        </div>
    }
}
