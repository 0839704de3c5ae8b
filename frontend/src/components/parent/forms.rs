use daycare_backend::{NavPayload, ParentScreen};
use shared::{FormSubmission, RecordStatus};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::home::my_children;
use crate::components::common::{bind, bind_textarea, ErrorList, ParentTabBar, ScreenHeader, StatusBadge};
use crate::hooks::{use_app, use_feedback};
use crate::services::{loaded, refreshed};

#[function_component(ParentForms)]
pub fn parent_forms() -> Html {
    let app = use_app();
    let children = my_children(&app);
    let calendar = &app.backend.calendar_service;

    html! {
        <div class="screen parent-forms">
            <ScreenHeader title="Forms" />
            {for children.iter().map(|child| {
                let forms = loaded(app.backend.form_service.forms_for_child(&child.child_id), "forms");
                html! {
                    <section class="child-forms">
                        <h2>{&child.name}</h2>
                        {if forms.is_empty() {
                            html! { <p class="empty">{"No forms"}</p> }
                        } else {
                            html! {
                                <ul class="form-list">
                                    {for forms.into_iter().map(|form| {
                                        let due = format!("Due {}", calendar.format_date(form.due_date));
                                        let title = form.title.clone();
                                        let status = form.status;
                                        let action = match status {
                                            RecordStatus::Outstanding => {
                                                let app = app.clone();
                                                let on_click = Callback::from(move |_: MouseEvent| {
                                                    app.parent_to(ParentScreen::FormView, Some(NavPayload::Form(form.clone())))
                                                });
                                                html! { <button class="btn btn-primary" onclick={on_click}>{"Fill Out"}</button> }
                                            }
                                            RecordStatus::Pending => html! { <span class="awaiting">{"Awaiting review"}</span> },
                                            RecordStatus::Completed => html! { <span class="done">{"✓"}</span> },
                                        };
                                        html! {
                                            <li class="form-row">
                                                <div class="form-title">{title}</div>
                                                <div class="form-due">{due}</div>
                                                <StatusBadge status={status} />
                                                {action}
                                            </li>
                                        }
                                    })}
                                </ul>
                            }
                        }}
                    </section>
                }
            })}
            <ParentTabBar current={ParentScreen::Forms} />
        </div>
    }
}

#[function_component(FormView)]
pub fn form_view() -> Html {
    let app = use_app();
    let feedback = use_feedback();
    let parent_name = use_state(|| {
        app.session()
            .parent()
            .map(|p| p.name.clone())
            .unwrap_or_default()
    });
    let emergency_contact = use_state(String::new);
    let notes = use_state(String::new);
    let signature = use_state(String::new);
    let consent = use_state(|| false);
    let back = app.parent_link(ParentScreen::Forms);

    let selected = app.session().parent_router.selected_form.clone();
    let form = refreshed(selected, |form| app.backend.form_service.get_form(&form.id), "form");
    let Some(form) = form else {
        return html! {
            <div class="screen form-view">
                <ScreenHeader title="Form" on_back={Some(back)} />
                <p class="empty">{"No form selected"}</p>
                <ParentTabBar current={ParentScreen::FormView} />
            </div>
        };
    };
    let child_name = loaded(app.backend.child_service.child_name(&form.child_id), "child");

    let on_consent = {
        let consent = consent.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            consent.set(input.checked());
        })
    };
    let on_clear_signature = {
        let signature = signature.clone();
        Callback::from(move |_: MouseEvent| signature.set(String::new()))
    };
    let on_download = {
        let title = form.title.clone();
        Callback::from(move |_: MouseEvent| {
            gloo::dialogs::alert(&format!("PDF download of \"{}\" is not available in this preview.", title))
        })
    };

    let on_submit = {
        let app = app.clone();
        let feedback = feedback.clone();
        let form_id = form.id.clone();
        let (parent_name, emergency_contact, notes, signature, consent) = (
            parent_name.clone(),
            emergency_contact.clone(),
            notes.clone(),
            signature.clone(),
            consent.clone(),
        );
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let submission = FormSubmission {
                parent_name: (*parent_name).clone(),
                emergency_contact: (*emergency_contact).clone(),
                notes: (*notes).clone(),
                signature: (*signature).clone(),
                consent: *consent,
            };
            match app.backend.form_service.submit_form(&form_id, &submission) {
                Ok(_) => {
                    gloo::dialogs::alert("Form submitted! Staff will review it shortly.");
                    app.data_changed();
                    app.parent_to(ParentScreen::Forms, None);
                }
                Err(err) => feedback.show_error(&err),
            }
        })
    };

    html! {
        <div class="screen form-view">
            <ScreenHeader title={form.title.clone()} on_back={Some(back)} />
            <p class="form-child">{format!("For {}", child_name)}</p>
            <ErrorList errors={(*feedback.errors).clone()} />
            {if form.status != RecordStatus::Outstanding {
                html! {
                    <p class="awaiting">
                        {"This form has already been submitted. Status: "}
                        <StatusBadge status={form.status} />
                    </p>
                }
            } else {
                html! {}
            }}
            <form class="permission-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="parent-name">{"Parent/Guardian Name"}</label>
                    <input id="parent-name" type="text" value={(*parent_name).clone()} oninput={bind(&parent_name)} />
                </div>
                <div class="form-group">
                    <label for="emergency-contact">{"Emergency Contact"}</label>
                    <input id="emergency-contact" type="tel" value={(*emergency_contact).clone()} oninput={bind(&emergency_contact)} />
                </div>
                <div class="form-group">
                    <label for="notes">{"Notes"}</label>
                    <textarea id="notes" value={(*notes).clone()} oninput={bind_textarea(&notes)} />
                </div>
                <div class="form-group signature">
                    <label for="signature">{"Signature"}</label>
                    <input id="signature" type="text" class="signature-input" placeholder="Type your full name"
                        value={(*signature).clone()} oninput={bind(&signature)} />
                    <button type="button" class="btn btn-link" onclick={on_clear_signature}>{"Clear"}</button>
                </div>
                <label class="consent">
                    <input type="checkbox" checked={*consent} onchange={on_consent} />
                    {format!("I give permission for {} to take part.", child_name)}
                </label>
                <div class="form-actions">
                    <button type="button" class="btn btn-secondary" onclick={on_download}>{"Download PDF"}</button>
                    <button type="submit" class="btn btn-primary" disabled={form.status != RecordStatus::Outstanding}>{"Submit"}</button>
                </div>
            </form>
            <ParentTabBar current={ParentScreen::FormView} />
        </div>
    }
}
