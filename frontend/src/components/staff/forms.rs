use daycare_backend::{NavPayload, StaffScreen};
use shared::{Form, RecordStatus};
use yew::prelude::*;

use crate::components::common::{confirm, ErrorList, ScreenHeader, StaffTabBar, StatusBadge, SuccessBanner};
use crate::hooks::{use_app, use_feedback, AppContext};
use crate::services::date_utils::or_placeholder;
use crate::services::{loaded, refreshed};

fn form_row(app: &AppContext, form: &Form) -> Html {
    let child_name = loaded(app.backend.child_service.child_name(&form.child_id), "child");
    let due = app.backend.calendar_service.format_short_date(form.due_date);
    let on_click = {
        let app = app.clone();
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            app.staff_to(StaffScreen::FormDetail, Some(NavPayload::Form(form.clone())))
        })
    };
    html! {
        <li class="form-row" onclick={on_click}>
            <div class="form-child">{child_name}</div>
            <div class="form-title">{&form.title}</div>
            <div class="form-due">{format!("Due {}", due)}</div>
        </li>
    }
}

#[function_component(StaffForms)]
pub fn staff_forms() -> Html {
    let app = use_app();
    let grouped = loaded(app.backend.form_service.forms_by_status(), "forms");

    html! {
        <div class="screen staff-forms">
            <ScreenHeader title="Permission Forms" />
            {for RecordStatus::ALL.into_iter().map(|status| {
                let forms = grouped.section(status);
                html! {
                    <section class={classes!("form-section", status.css_class())}>
                        <h2>{format!("{} ({})", status.label(), forms.len())}</h2>
                        {if forms.is_empty() {
                            html! { <p class="empty">{format!("No {} forms", status.label().to_lowercase())}</p> }
                        } else {
                            html! { <ul class="form-list">{for forms.iter().map(|form| form_row(&app, form))}</ul> }
                        }}
                    </section>
                }
            })}
            <StaffTabBar current={StaffScreen::Forms} />
        </div>
    }
}

#[function_component(StaffFormDetail)]
pub fn staff_form_detail() -> Html {
    let app = use_app();
    let feedback = use_feedback();
    let back = app.staff_link(StaffScreen::Forms);

    let selected = app.session().staff_router.selected_form.clone();
    let form = refreshed(selected, |form| app.backend.form_service.get_form(&form.id), "form");
    let Some(form) = form else {
        return html! {
            <div class="screen staff-form-detail">
                <ScreenHeader title="Form" on_back={Some(back)} />
                <p class="empty">{"No form selected"}</p>
                <StaffTabBar current={StaffScreen::FormDetail} />
            </div>
        };
    };

    let child_name = loaded(app.backend.child_service.child_name(&form.child_id), "child");
    let calendar = &app.backend.calendar_service;

    let review = |approve: bool| {
        let app = app.clone();
        let feedback = feedback.clone();
        let form_id = form.id.clone();
        let prompt = if approve {
            format!("Approve this form for {}?", child_name)
        } else {
            format!("Reject this form and send it back to {}'s parent?", child_name)
        };
        Callback::from(move |_: MouseEvent| {
            if !confirm(&prompt) {
                return;
            }
            let service = &app.backend.form_service;
            let result = if approve {
                service.approve_form(&form_id)
            } else {
                service.reject_form(&form_id)
            };
            match result {
                Ok(form) => {
                    feedback.show_success(format!("Form is now {}", form.status.label()));
                    app.data_changed();
                }
                Err(err) => feedback.show_error(&err),
            }
        })
    };

    html! {
        <div class="screen staff-form-detail">
            <ScreenHeader title={form.title.clone()} on_back={Some(back)} />
            <SuccessBanner message={(*feedback.success).clone()} />
            <ErrorList errors={(*feedback.errors).clone()} />
            <dl class="details">
                <dt>{"Child"}</dt>
                <dd>{&child_name}</dd>
                <dt>{"Due"}</dt>
                <dd>{calendar.format_date(form.due_date)}</dd>
                <dt>{"Status"}</dt>
                <dd><StatusBadge status={form.status} /></dd>
                <dt>{"Parent/Guardian"}</dt>
                <dd>{or_placeholder(&form.parent_name, "Not submitted")}</dd>
                <dt>{"Emergency Contact"}</dt>
                <dd>{or_placeholder(&form.emergency_contact, "Not submitted")}</dd>
                <dt>{"Notes"}</dt>
                <dd>{or_placeholder(&form.notes, "No notes")}</dd>
                <dt>{"Signature"}</dt>
                <dd class="signature">{or_placeholder(&form.signature, "Not signed")}</dd>
                <dt>{"Consent"}</dt>
                <dd>{if form.consent { "Given" } else { "Not given" }}</dd>
            </dl>
            {if form.status == RecordStatus::Pending {
                html! {
                    <div class="form-actions">
                        <button class="btn btn-danger" onclick={review(false)}>{"Reject"}</button>
                        <button class="btn btn-primary" onclick={review(true)}>{"Approve"}</button>
                    </div>
                }
            } else {
                html! {}
            }}
            <StaffTabBar current={StaffScreen::FormDetail} />
        </div>
    }
}
