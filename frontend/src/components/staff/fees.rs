use daycare_backend::StaffScreen;
use shared::{format_amount, FeeDraft, FeeSummary, FeeType, RecordStatus};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::child_multi_select::ChildMultiSelect;
use crate::components::common::{bind, ErrorList, ScreenHeader, StaffTabBar, StatusBadge, SuccessBanner};
use crate::hooks::{use_app, use_feedback, AppContext, Feedback};
use crate::services::loaded;

fn fee_card(app: &AppContext, feedback: &Feedback, summary: &FeeSummary, expanded: &UseStateHandle<Vec<String>>) -> Html {
    let symbol = &app.backend.config.currency_symbol;
    let is_open = expanded.contains(&summary.child_id);
    let on_toggle = {
        let expanded = expanded.clone();
        let child_id = summary.child_id.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*expanded).clone();
            if next.contains(&child_id) {
                next.retain(|id| id != &child_id);
            } else {
                next.push(child_id.clone());
            }
            expanded.set(next);
        })
    };

    html! {
        <div class="fee-card">
            <div class="fee-card-header">
                <h3>{&summary.child_name}</h3>
                <span class={classes!("status-badge", summary.status.css_class())}>{summary.status.label()}</span>
            </div>
            <div class="fee-totals">
                <div>{format!("Outstanding: {}", format_amount(symbol, summary.outstanding_total))}</div>
                <div>{format!("Pending: {}", format_amount(symbol, summary.pending_total))}</div>
                <div class="fee-total">{format!("Total: {}", format_amount(symbol, summary.total))}</div>
            </div>
            <button class="btn btn-link" onclick={on_toggle}>{if is_open { "Hide details" } else { "View details" }}</button>
            {if is_open {
                html! {
                    <ul class="payment-list">
                        {for summary.payments.iter().map(|payment| {
                            let mark_paid = (payment.status == RecordStatus::Pending).then(|| {
                                let app = app.clone();
                                let feedback = feedback.clone();
                                let payment_id = payment.payment_id.clone();
                                Callback::from(move |_: MouseEvent| {
                                    match app.backend.payment_service.mark_paid(&payment_id) {
                                        Ok(paid) => {
                                            feedback.show_success(format!("{} marked as paid", paid.description));
                                            app.data_changed();
                                        }
                                        Err(err) => feedback.show_error(&err),
                                    }
                                })
                            });
                            html! {
                                <li class="payment-row">
                                    <div class="payment-description">{&payment.description}</div>
                                    <div class="payment-amount">{format_amount(symbol, payment.amount)}</div>
                                    <StatusBadge status={payment.status} payment={true} />
                                    {match mark_paid {
                                        Some(on_click) => html! {
                                            <button class="btn btn-primary" onclick={on_click}>{"Mark as Paid"}</button>
                                        },
                                        None => html! {},
                                    }}
                                </li>
                            }
                        })}
                    </ul>
                }
            } else {
                html! {}
            }}
        </div>
    }
}

#[function_component(StaffFees)]
pub fn staff_fees() -> Html {
    let app = use_app();
    let feedback = use_feedback();
    let expanded = use_state(Vec::<String>::new);
    let summaries = loaded(app.backend.payment_service.fee_summaries(), "fee summaries");

    html! {
        <div class="screen staff-fees">
            <ScreenHeader title="Fees">
                <button class="btn btn-primary" onclick={app.staff_link(StaffScreen::AddFee)}>{"+ Add Fee"}</button>
            </ScreenHeader>
            <SuccessBanner message={(*feedback.success).clone()} />
            <ErrorList errors={(*feedback.errors).clone()} />
            {for summaries.iter().map(|summary| fee_card(&app, &feedback, summary, &expanded))}
            <StaffTabBar current={StaffScreen::Fees} />
        </div>
    }
}

#[function_component(AddFee)]
pub fn add_fee() -> Html {
    let app = use_app();
    let feedback = use_feedback();
    let draft = use_state(FeeDraft::new);
    let amount = use_state(String::new);
    let description = use_state(String::new);

    let roster = loaded(app.backend.child_service.list_children(), "roster");
    let roster_ids: Vec<String> = roster.iter().map(|c| c.child_id.clone()).collect();
    let events = loaded(app.backend.event_service.list_events(), "events");
    let calendar = &app.backend.calendar_service;

    let update = {
        let draft = draft.clone();
        move |change: &dyn Fn(&mut FeeDraft)| {
            let mut next = (*draft).clone();
            change(&mut next);
            draft.set(next);
        }
    };

    let on_fee_type = {
        let update = update.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let fee_type = if select.value() == "tuition" { FeeType::Tuition } else { FeeType::Event };
            update(&|d| d.set_fee_type(fee_type));
        })
    };
    let on_event = {
        let update = update.clone();
        let events = events.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let chosen = events.iter().find(|event| event.id == select.value()).cloned();
            update(&|d| d.select_event(chosen.as_ref()));
        })
    };
    let on_status = {
        let update = update.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let status = RecordStatus::ALL
                .into_iter()
                .find(|s| s.css_class() == select.value())
                .unwrap_or(RecordStatus::Outstanding);
            update(&|d| d.status = status);
        })
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

    let on_submit = {
        let app = app.clone();
        let feedback = feedback.clone();
        let draft = draft.clone();
        let (amount, description) = (amount.clone(), description.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut submitted = (*draft).clone();
            submitted.amount_input = (*amount).clone();
            submitted.description = (*description).clone();
            match app.backend.payment_service.add_fee(&submitted) {
                Ok(response) => {
                    gloo::dialogs::alert(&response.success_message);
                    app.data_changed();
                    app.staff_to(StaffScreen::Fees, None);
                }
                Err(err) => feedback.show_error(&err),
            }
        })
    };

    let is_event_fee = draft.fee_type == FeeType::Event;
    let selected_event = draft.event_id.clone().unwrap_or_default();

    html! {
        <div class="screen staff-add-fee">
            <ScreenHeader title="Add Fee" on_back={Some(app.staff_link(StaffScreen::Fees))} />
            <ErrorList errors={(*feedback.errors).clone()} />
            <form class="fee-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="fee-type">{"Fee Type"}</label>
                    <select id="fee-type" onchange={on_fee_type}>
                        <option value="event" selected={is_event_fee}>{"Event"}</option>
                        <option value="tuition" selected={!is_event_fee}>{"Tuition"}</option>
                    </select>
                </div>
                <div class="form-group">
                    <label for="fee-amount">{format!("Amount ({})", app.backend.config.currency_symbol)}</label>
                    <input id="fee-amount" type="text" inputmode="decimal" placeholder="0.00"
                        value={(*amount).clone()} oninput={bind(&amount)} />
                </div>
                {if is_event_fee {
                    html! {
                        <div class="form-group">
                            <label for="fee-event">{"Event"}</label>
                            <select id="fee-event" onchange={on_event}>
                                <option value="" selected={selected_event.is_empty()}>{"Select an event"}</option>
                                {for events.iter().map(|event| html! {
                                    <option value={event.id.clone()} selected={selected_event == event.id}>
                                        {format!("{} ({})", event.title, calendar.format_short_date(event.date))}
                                    </option>
                                })}
                            </select>
                        </div>
                    }
                } else {
                    html! {}
                }}
                <div class="form-group">
                    <label for="fee-status">{"Status"}</label>
                    <select id="fee-status" onchange={on_status}>
                        {for RecordStatus::ALL.iter().map(|status| html! {
                            <option value={status.css_class()} selected={draft.status == *status}>{status.payment_label()}</option>
                        })}
                    </select>
                </div>
                <div class="form-group">
                    <label for="fee-description">{"Description"}</label>
                    <input id="fee-description" type="text" value={(*description).clone()} oninput={bind(&description)} />
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
                <div class="form-actions">
                    <button type="submit" class="btn btn-primary">{"Add Fee"}</button>
                </div>
            </form>
            <StaffTabBar current={StaffScreen::AddFee} />
        </div>
    }
}
