//! Signed-out screens: landing, both login screens, register and the mocked
//! password reset.

use daycare_backend::ParentScreen;
use shared::{Account, LoginRequest, PasswordResetRequest, RegisterRequest};
use yew::prelude::*;

use crate::components::common::{bind, ErrorList, ScreenHeader, SuccessBanner};
use crate::hooks::{use_app, use_feedback};

#[function_component(Landing)]
pub fn landing() -> Html {
    let app = use_app();
    html! {
        <div class="screen landing">
            <h1 class="brand">{&app.backend.config.daycare_name}</h1>
            <p class="tagline">{"Stay connected with your child's day"}</p>
            <div class="landing-actions">
                <button class="btn btn-primary" onclick={app.parent_link(ParentScreen::Login)}>{"Parent Login"}</button>
                <button class="btn btn-secondary" onclick={app.parent_link(ParentScreen::Register)}>{"Register"}</button>
                <button class="btn btn-link" onclick={app.parent_link(ParentScreen::StaffLogin)}>{"Staff Login"}</button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LoginScreenProps {
    /// Staff login screen rather than the parent one
    #[prop_or_default]
    pub staff: bool,
}

#[function_component(LoginScreen)]
pub fn login_screen(props: &LoginScreenProps) -> Html {
    let app = use_app();
    let feedback = use_feedback();
    let email = use_state(String::new);
    let password = use_state(String::new);

    let on_submit = {
        let app = app.clone();
        let feedback = feedback.clone();
        let email = email.clone();
        let password = password.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = LoginRequest {
                email: (*email).clone(),
                password: (*password).clone(),
            };
            match app.backend.auth_service.authenticate(&request) {
                Ok(account) => {
                    feedback.clear();
                    app.sign_in(account);
                }
                Err(err) => feedback.show_error(&err),
            }
        })
    };

    let title = if props.staff { "Staff Login" } else { "Parent Login" };
    html! {
        <div class="screen auth">
            <ScreenHeader title={title} on_back={Some(app.parent_link(ParentScreen::Landing))} />
            <ErrorList errors={(*feedback.errors).clone()} />
            <form class="auth-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="email">{"Email"}</label>
                    <input id="email" type="email" value={(*email).clone()} oninput={bind(&email)} />
                </div>
                <div class="form-group">
                    <label for="password">{"Password"}</label>
                    <input id="password" type="password" value={(*password).clone()} oninput={bind(&password)} />
                </div>
                <button type="submit" class="btn btn-primary">{"Log In"}</button>
            </form>
            {if props.staff {
                html! {}
            } else {
                html! {
                    <div class="auth-links">
                        <button class="btn btn-link" onclick={app.parent_link(ParentScreen::ForgotPassword)}>{"Forgot password?"}</button>
                        <button class="btn btn-link" onclick={app.parent_link(ParentScreen::Register)}>{"Create an account"}</button>
                    </div>
                }
            }}
        </div>
    }
}

#[function_component(RegisterScreen)]
pub fn register_screen() -> Html {
    let app = use_app();
    let feedback = use_feedback();
    let full_name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm_password = use_state(String::new);

    let on_submit = {
        let app = app.clone();
        let feedback = feedback.clone();
        let (full_name, email, password, confirm_password) = (
            full_name.clone(),
            email.clone(),
            password.clone(),
            confirm_password.clone(),
        );
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = RegisterRequest {
                full_name: (*full_name).clone(),
                email: (*email).clone(),
                password: (*password).clone(),
                confirm_password: (*confirm_password).clone(),
            };
            match app.backend.auth_service.register(&request) {
                Ok(response) => {
                    log::info!("{}", response.success_message);
                    app.sign_in(Account::Parent(response.account));
                    app.data_changed();
                }
                Err(err) => feedback.show_error(&err),
            }
        })
    };

    html! {
        <div class="screen auth">
            <ScreenHeader title="Create Account" on_back={Some(app.parent_link(ParentScreen::Landing))} />
            <ErrorList errors={(*feedback.errors).clone()} />
            <form class="auth-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="full-name">{"Full Name"}</label>
                    <input id="full-name" type="text" value={(*full_name).clone()} oninput={bind(&full_name)} />
                </div>
                <div class="form-group">
                    <label for="email">{"Email"}</label>
                    <input id="email" type="email" value={(*email).clone()} oninput={bind(&email)} />
                </div>
                <div class="form-group">
                    <label for="password">{"Password"}</label>
                    <input id="password" type="password" value={(*password).clone()} oninput={bind(&password)} />
                </div>
                <div class="form-group">
                    <label for="confirm-password">{"Confirm Password"}</label>
                    <input id="confirm-password" type="password" value={(*confirm_password).clone()} oninput={bind(&confirm_password)} />
                </div>
                <button type="submit" class="btn btn-primary">{"Register"}</button>
            </form>
            <div class="auth-links">
                <button class="btn btn-link" onclick={app.parent_link(ParentScreen::Login)}>{"Already have an account? Log in"}</button>
            </div>
        </div>
    }
}

#[function_component(ForgotPasswordScreen)]
pub fn forgot_password_screen() -> Html {
    let app = use_app();
    let feedback = use_feedback();
    let email = use_state(String::new);

    let on_submit = {
        let app = app.clone();
        let feedback = feedback.clone();
        let email = email.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = PasswordResetRequest {
                email: (*email).clone(),
            };
            match app.backend.auth_service.request_password_reset(&request) {
                Ok(response) => feedback.show_success(response.success_message),
                Err(err) => feedback.show_error(&err),
            }
        })
    };

    html! {
        <div class="screen auth">
            <ScreenHeader title="Reset Password" on_back={Some(app.parent_link(ParentScreen::Login))} />
            <ErrorList errors={(*feedback.errors).clone()} />
            <SuccessBanner message={(*feedback.success).clone()} />
            <form class="auth-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="email">{"Email"}</label>
                    <input id="email" type="email" value={(*email).clone()} oninput={bind(&email)} />
                </div>
                <button type="submit" class="btn btn-primary">{"Send Reset Link"}</button>
            </form>
        </div>
    }
}
