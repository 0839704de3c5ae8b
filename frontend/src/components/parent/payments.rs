use daycare_backend::ParentScreen;
use shared::{format_amount, Payment, PaymentDetails, PaymentReceipt, RecordStatus};
use yew::prelude::*;

use super::home::my_children;
use crate::components::common::{bind, ErrorList, ParentTabBar, ScreenHeader, StatusBadge};
use crate::hooks::{use_app, use_feedback};
use crate::services::{loaded, refreshed};

#[derive(Clone, PartialEq)]
enum PaymentStep {
    List,
    CardEntry(Payment),
    Confirmation(PaymentReceipt),
}

/// List → card entry → confirmation. A preselected outstanding payment
/// skips straight to card entry.
#[function_component(ParentPayments)]
pub fn parent_payments() -> Html {
    let app = use_app();
    let feedback = use_feedback();
    let step = use_state(|| {
        let selected = app.session().parent_router.selected_payment.clone();
        match refreshed(selected, |p| app.backend.payment_service.get_payment(&p.payment_id), "payment") {
            Some(payment) if payment.status == RecordStatus::Outstanding => PaymentStep::CardEntry(payment),
            _ => PaymentStep::List,
        }
    });
    let cardholder_name = use_state(String::new);
    let card_number = use_state(String::new);
    let expiry = use_state(String::new);
    let cvv = use_state(String::new);

    let symbol = app.backend.config.currency_symbol.clone();
    let to_list = {
        let step = step.clone();
        let feedback = feedback.clone();
        Callback::from(move |_: MouseEvent| {
            feedback.clear();
            step.set(PaymentStep::List);
        })
    };

    let body = match (*step).clone() {
        PaymentStep::List => {
            let children = my_children(&app);
            html! {
                <>
                    {for children.iter().map(|child| {
                        let payments = loaded(app.backend.payment_service.payments_for_child(&child.child_id), "payments");
                        html! {
                            <section class="child-payments">
                                <h2>{&child.name}</h2>
                                {if payments.is_empty() {
                                    html! { <p class="empty">{"No fees"}</p> }
                                } else {
                                    html! {
                                        <ul class="payment-list">
                                            {for payments.into_iter().map(|payment| {
                                                let amount = format_amount(&symbol, payment.amount);
                                                let description = payment.description.clone();
                                                let status = payment.status;
                                                let action = if status == RecordStatus::Outstanding {
                                                    let step = step.clone();
                                                    let on_click = Callback::from(move |_: MouseEvent| {
                                                        step.set(PaymentStep::CardEntry(payment.clone()))
                                                    });
                                                    html! { <button class="btn btn-primary" onclick={on_click}>{"Pay"}</button> }
                                                } else {
                                                    html! {}
                                                };
                                                html! {
                                                    <li class="payment-row">
                                                        <div class="payment-description">{description}</div>
                                                        <div class="payment-amount">{amount}</div>
                                                        <StatusBadge status={status} payment={true} />
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
                </>
            }
        }
        PaymentStep::CardEntry(payment) => {
            let on_submit = {
                let app = app.clone();
                let feedback = feedback.clone();
                let step = step.clone();
                let payment_id = payment.payment_id.clone();
                let (cardholder_name, card_number, expiry, cvv) =
                    (cardholder_name.clone(), card_number.clone(), expiry.clone(), cvv.clone());
                Callback::from(move |e: SubmitEvent| {
                    e.prevent_default();
                    let details = PaymentDetails {
                        cardholder_name: (*cardholder_name).clone(),
                        card_number: (*card_number).clone(),
                        expiry: (*expiry).clone(),
                        cvv: (*cvv).clone(),
                    };
                    match app.backend.payment_service.pay(&payment_id, &details) {
                        Ok(receipt) => {
                            feedback.clear();
                            for field in [&cardholder_name, &card_number, &expiry, &cvv] {
                                field.set(String::new());
                            }
                            app.data_changed();
                            step.set(PaymentStep::Confirmation(receipt));
                        }
                        Err(err) => feedback.show_error(&err),
                    }
                })
            };
            html! {
                <>
                    <div class="payment-summary">
                        <div class="payment-description">{&payment.description}</div>
                        <div class="payment-amount">{format_amount(&symbol, payment.amount)}</div>
                    </div>
                    <ErrorList errors={(*feedback.errors).clone()} />
                    <form class="card-form" onsubmit={on_submit}>
                        <div class="form-group">
                            <label for="cardholder">{"Cardholder Name"}</label>
                            <input id="cardholder" type="text" value={(*cardholder_name).clone()} oninput={bind(&cardholder_name)} />
                        </div>
                        <div class="form-group">
                            <label for="card-number">{"Card Number"}</label>
                            <input id="card-number" type="text" inputmode="numeric" placeholder="1234 5678 9012 3456"
                                value={(*card_number).clone()} oninput={bind(&card_number)} />
                        </div>
                        <div class="form-row">
                            <div class="form-group">
                                <label for="expiry">{"Expiry"}</label>
                                <input id="expiry" type="text" placeholder="MM/YY" value={(*expiry).clone()} oninput={bind(&expiry)} />
                            </div>
                            <div class="form-group">
                                <label for="cvv">{"CVV"}</label>
                                <input id="cvv" type="password" inputmode="numeric" value={(*cvv).clone()} oninput={bind(&cvv)} />
                            </div>
                        </div>
                        <div class="form-actions">
                            <button type="button" class="btn btn-secondary" onclick={to_list.clone()}>{"Cancel"}</button>
                            <button type="submit" class="btn btn-primary">{format!("Pay {}", format_amount(&symbol, payment.amount))}</button>
                        </div>
                    </form>
                </>
            }
        }
        PaymentStep::Confirmation(receipt) => html! {
            <div class="payment-confirmation">
                <div class="confirmation-icon">{"✓"}</div>
                <h2>{"Payment Submitted"}</h2>
                <p>{&receipt.payment.description}</p>
                <p class="payment-amount">{format_amount(&symbol, receipt.payment.amount)}</p>
                <p class="card-used">{format!("Card ending in {}", receipt.card_last_four)}</p>
                <p class="awaiting">{"Staff will confirm your payment shortly."}</p>
                <button class="btn btn-primary" onclick={to_list.clone()}>{"Back to Payments"}</button>
            </div>
        },
    };

    html! {
        <div class="screen parent-payments">
            <ScreenHeader title="Payments" />
            {body}
            <ParentTabBar current={ParentScreen::Payments} />
        </div>
    }
}
