use daycare_backend::StaffScreen;
use yew::prelude::*;

use crate::components::common::{ErrorList, ScreenHeader, StaffTabBar, SuccessBanner};
use crate::hooks::{use_app, use_feedback};
use crate::services::date_utils::or_placeholder;
use crate::services::loaded;

#[function_component(ClassList)]
pub fn class_list() -> Html {
    let app = use_app();
    let sheet = loaded(app.backend.attendance_service.attendance_sheet(), "attendance");
    let present = loaded(app.backend.attendance_service.present_count(), "attendance count");

    html! {
        <div class="screen staff-class-list">
            <ScreenHeader title="Class List">
                <button class="btn btn-primary" onclick={app.staff_link(StaffScreen::Attendance)}>{"Attendance"}</button>
            </ScreenHeader>
            <p class="attendance-count">{format!("{} of {} present today", present, sheet.len())}</p>
            <table class="class-table">
                <thead>
                    <tr>
                        <th>{"Name"}</th>
                        <th>{"Age"}</th>
                        <th>{"Allergies"}</th>
                        <th>{"Medical"}</th>
                        <th>{"Contact"}</th>
                        <th>{"Today"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for sheet.iter().map(|entry| {
                        let child = &entry.child;
                        html! {
                            <tr>
                                <td>{&child.name}</td>
                                <td>{child.age}</td>
                                <td>{or_placeholder(&child.allergies, "None")}</td>
                                <td>{or_placeholder(&child.medical, "None")}</td>
                                <td>{or_placeholder(&child.contact, "Not provided")}</td>
                                <td class={if entry.present { "present" } else { "absent" }}>
                                    {if entry.present { "✓ Present" } else { "Absent" }}
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
            <StaffTabBar current={StaffScreen::ClassList} />
        </div>
    }
}

/// Checkbox sheet. Each click updates today's marks; Submit records the
/// sheet and reports the count.
#[function_component(Attendance)]
pub fn attendance() -> Html {
    let app = use_app();
    let feedback = use_feedback();
    let service = &app.backend.attendance_service;
    let sheet = loaded(service.attendance_sheet(), "attendance");
    let present = loaded(service.present_count(), "attendance count");
    let all_present = !sheet.is_empty() && present == sheet.len();

    let on_toggle_all = {
        let app = app.clone();
        let feedback = feedback.clone();
        Callback::from(move |_: MouseEvent| match app.backend.attendance_service.toggle_all() {
            Ok(()) => app.data_changed(),
            Err(err) => feedback.show_error(&err),
        })
    };

    let on_submit = {
        let app = app.clone();
        let feedback = feedback.clone();
        Callback::from(move |_: MouseEvent| {
            let service = &app.backend.attendance_service;
            match service.present_ids().and_then(|ids| service.save_attendance(&ids)) {
                Ok(summary) => {
                    feedback.show_success(summary.success_message);
                    app.data_changed();
                }
                Err(err) => feedback.show_error(&err),
            }
        })
    };

    html! {
        <div class="screen staff-attendance">
            <ScreenHeader title="Attendance" on_back={Some(app.staff_link(StaffScreen::ClassList))}>
                <button class="btn btn-secondary" onclick={on_toggle_all}>
                    {if all_present { "Deselect All" } else { "Select All" }}
                </button>
            </ScreenHeader>
            <SuccessBanner message={(*feedback.success).clone()} />
            <ErrorList errors={(*feedback.errors).clone()} />
            <ul class="attendance-list">
                {for sheet.iter().map(|entry| {
                    let on_change = {
                        let app = app.clone();
                        let feedback = feedback.clone();
                        let child_id = entry.child.child_id.clone();
                        Callback::from(move |_: Event| match app.backend.attendance_service.toggle_child(&child_id) {
                            Ok(_) => app.data_changed(),
                            Err(err) => feedback.show_error(&err),
                        })
                    };
                    html! {
                        <li class="attendance-row">
                            <label>
                                <input type="checkbox" checked={entry.present} onchange={on_change} />
                                {&entry.child.name}
                            </label>
                        </li>
                    }
                })}
            </ul>
            <p class="attendance-count">{format!("{} of {} marked present", present, sheet.len())}</p>
            <button class="btn btn-primary" onclick={on_submit}>{"Submit"}</button>
            <StaffTabBar current={StaffScreen::Attendance} />
        </div>
    }
}
