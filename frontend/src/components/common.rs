use daycare_backend::{ParentScreen, ParentTab, StaffScreen, StaffTab};
use shared::RecordStatus;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::hooks::use_app;

/// Text input bound to a string state
pub fn bind(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

pub fn bind_textarea(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let area: HtmlTextAreaElement = e.target_unchecked_into();
        state.set(area.value());
    })
}

#[derive(Properties, PartialEq)]
pub struct ErrorListProps {
    pub errors: Vec<String>,
}

/// Bulleted validation errors shown above a submit button
#[function_component(ErrorList)]
pub fn error_list(props: &ErrorListProps) -> Html {
    if props.errors.is_empty() {
        return html! {};
    }
    html! {
        <div class="form-message error">
            <ul>
                {for props.errors.iter().map(|error| html! { <li>{error}</li> })}
            </ul>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SuccessBannerProps {
    pub message: Option<String>,
}

#[function_component(SuccessBanner)]
pub fn success_banner(props: &SuccessBannerProps) -> Html {
    match &props.message {
        Some(message) => html! { <div class="form-message success">{format!("🎉 {}", message)}</div> },
        None => html! {},
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusBadgeProps {
    pub status: RecordStatus,
    /// Payments say "Paid" where forms say "Completed"
    #[prop_or_default]
    pub payment: bool,
}

#[function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> Html {
    let label = if props.payment {
        props.status.payment_label()
    } else {
        props.status.label()
    };
    html! {
        <span class={classes!("status-badge", props.status.css_class())}>{label}</span>
    }
}

#[derive(Properties, PartialEq)]
pub struct ScreenHeaderProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub on_back: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(ScreenHeader)]
pub fn screen_header(props: &ScreenHeaderProps) -> Html {
    html! {
        <header class="screen-header">
            {if let Some(on_back) = props.on_back.clone() {
                html! { <button class="btn btn-link back-button" onclick={on_back}>{"← Back"}</button> }
            } else {
                html! {}
            }}
            <h1>{props.title.clone()}</h1>
            <div class="header-actions">{props.children.clone()}</div>
        </header>
    }
}

#[derive(Properties, PartialEq)]
pub struct ParentTabBarProps {
    pub current: ParentScreen,
}

#[function_component(ParentTabBar)]
pub fn parent_tab_bar(props: &ParentTabBarProps) -> Html {
    let app = use_app();
    let active = props.current.tab();
    html! {
        <nav class="tab-bar">
            {for ParentTab::ALL.iter().map(|tab| {
                let class = if Some(*tab) == active { "tab active" } else { "tab" };
                html! {
                    <button class={class} onclick={app.parent_link(tab.screen())}>{tab.label()}</button>
                }
            })}
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct StaffTabBarProps {
    pub current: StaffScreen,
}

#[function_component(StaffTabBar)]
pub fn staff_tab_bar(props: &StaffTabBarProps) -> Html {
    let app = use_app();
    let active = props.current.tab();
    html! {
        <nav class="tab-bar staff">
            {for StaffTab::ALL.iter().map(|tab| {
                let class = if *tab == active { "tab active" } else { "tab" };
                html! {
                    <button class={class} onclick={app.staff_link(tab.screen())}>{tab.label()}</button>
                }
            })}
        </nav>
    }
}

/// Ask before destructive actions
pub fn confirm(message: &str) -> bool {
    gloo::dialogs::confirm(message)
}
