use daycare_backend::{AppMode, DaycareBackend, ParentScreen, StaffScreen};
use log::LevelFilter;
use std::rc::Rc;
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::parent::*;
use components::staff::*;
use hooks::{use_app, AppContext, SessionState};

fn parent_screen(screen: ParentScreen) -> Html {
    match screen {
        ParentScreen::Landing => html! { <Landing /> },
        ParentScreen::Login => html! { <LoginScreen /> },
        ParentScreen::StaffLogin => html! { <LoginScreen staff={true} /> },
        ParentScreen::Register => html! { <RegisterScreen /> },
        ParentScreen::ForgotPassword => html! { <ForgotPasswordScreen /> },
        ParentScreen::Home => html! { <ParentHome /> },
        ParentScreen::Events => html! { <ParentEvents /> },
        ParentScreen::EventDetails => html! { <ParentEventDetails /> },
        ParentScreen::MyChildren => html! { <MyChildren /> },
        ParentScreen::DailyActivity => html! { <DailyActivity /> },
        ParentScreen::ActivityDetails => html! { <ActivityDetails /> },
        ParentScreen::Forms => html! { <ParentForms /> },
        ParentScreen::FormView => html! { <FormView /> },
        ParentScreen::Payments => html! { <ParentPayments /> },
    }
}

fn staff_screen(screen: StaffScreen) -> Html {
    match screen {
        StaffScreen::Home => html! { <StaffHome /> },
        StaffScreen::Log => html! { <NewLog /> },
        StaffScreen::ClassList => html! { <ClassList /> },
        StaffScreen::Attendance => html! { <Attendance /> },
        StaffScreen::Events => html! { <StaffEvents /> },
        StaffScreen::EventDetails => html! { <StaffEventDetails /> },
        StaffScreen::AddEvent => html! { <AddEvent /> },
        StaffScreen::EditEvent => html! { <EditEvent /> },
        StaffScreen::ViewLogs => html! { <ViewLogs /> },
        StaffScreen::EditLog => html! { <EditLog /> },
        StaffScreen::Forms => html! { <StaffForms /> },
        StaffScreen::FormDetail => html! { <StaffFormDetail /> },
        StaffScreen::Fees => html! { <StaffFees /> },
        StaffScreen::AddFee => html! { <AddFee /> },
    }
}

/// Picks the current screen of whichever router the session is using.
/// Each screen is keyed by its slug so local state starts fresh on entry.
#[function_component(ScreenSwitch)]
fn screen_switch() -> Html {
    let app = use_app();
    let session = app.session();
    let (key, screen) = match session.mode() {
        AppMode::Parent => {
            let current = session.parent_router.current();
            (current.slug(), parent_screen(current))
        }
        AppMode::Staff => {
            let current = session.staff_router.current();
            (current.slug(), staff_screen(current))
        }
    };
    html! {
        <div class="app-frame" key={key}>{screen}</div>
    }
}

#[function_component(App)]
fn app() -> Html {
    let backend = use_state(|| match DaycareBackend::new() {
        Ok(backend) => {
            log::set_max_level(backend.config.level_filter());
            Ok(Rc::new(backend))
        }
        Err(e) => {
            log::error!("❌ Failed to start the daycare backend: {:#}", e);
            Err(format!("{:#}", e))
        }
    });
    let state = use_reducer(SessionState::default);

    match &*backend {
        Ok(backend) => {
            let context = AppContext {
                backend: backend.clone(),
                state,
            };
            html! {
                <ContextProvider<AppContext> context={context}>
                    <main class="app">
                        <ScreenSwitch />
                    </main>
                </ContextProvider<AppContext>>
            }
        }
        Err(message) => html! {
            <main class="app">
                <div class="startup-error">
                    <h1>{"Something went wrong"}</h1>
                    <p>{message}</p>
                </div>
            </main>
        },
    }
}

fn main() {
    services::logging::init(LevelFilter::Info);
    log::info!("🚀 Starting daycare frontend");
    yew::Renderer::<App>::new().render();
}
