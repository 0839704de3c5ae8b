use daycare_backend::{DaycareBackend, DaycareSession, NavPayload, ParentScreen, StaffScreen};
use shared::Account;
use std::rc::Rc;
use yew::prelude::*;

/// Session plus a counter bumped after every data change so screens re-read
/// the store
#[derive(Clone, PartialEq, Default)]
pub struct SessionState {
    pub session: DaycareSession,
    pub revision: u32,
}

pub enum SessionAction {
    Parent(ParentScreen, Option<NavPayload>),
    Staff(StaffScreen, Option<NavPayload>),
    SignIn(Account),
    Logout,
    DataChanged,
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            SessionAction::Parent(screen, payload) => next.session.parent_router.navigate(screen, payload),
            SessionAction::Staff(screen, payload) => next.session.staff_router.navigate(screen, payload),
            SessionAction::SignIn(account) => next.session.sign_in(account),
            SessionAction::Logout => next.session.logout(),
            SessionAction::DataChanged => next.revision = next.revision.wrapping_add(1),
        }
        Rc::new(next)
    }
}

/// Everything a screen needs: the in-process backend and the session
#[derive(Clone)]
pub struct AppContext {
    pub backend: Rc<DaycareBackend>,
    pub state: UseReducerHandle<SessionState>,
}

impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.backend, &other.backend) && self.state == other.state
    }
}

impl AppContext {
    pub fn session(&self) -> &DaycareSession {
        &self.state.session
    }

    pub fn parent_to(&self, screen: ParentScreen, payload: Option<NavPayload>) {
        self.state.dispatch(SessionAction::Parent(screen, payload));
    }

    pub fn staff_to(&self, screen: StaffScreen, payload: Option<NavPayload>) {
        self.state.dispatch(SessionAction::Staff(screen, payload));
    }

    /// Click handler that moves the parent router without a payload
    pub fn parent_link(&self, screen: ParentScreen) -> Callback<MouseEvent> {
        let app = self.clone();
        Callback::from(move |_: MouseEvent| app.parent_to(screen, None))
    }

    pub fn staff_link(&self, screen: StaffScreen) -> Callback<MouseEvent> {
        let app = self.clone();
        Callback::from(move |_: MouseEvent| app.staff_to(screen, None))
    }

    pub fn sign_in(&self, account: Account) {
        self.state.dispatch(SessionAction::SignIn(account));
    }

    pub fn logout(&self) {
        self.state.dispatch(SessionAction::Logout);
    }

    pub fn data_changed(&self) {
        self.state.dispatch(SessionAction::DataChanged);
    }
}

#[hook]
pub fn use_app() -> AppContext {
    use_context::<AppContext>().expect("AppContext not provided")
}
