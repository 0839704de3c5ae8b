//! Who is signed in and which router is driving the screen.

use anyhow::Result;
use log::info;
use shared::{Account, Child, ParentAccount, StaffAccount};

use super::parent_router::{ParentRouter, ParentScreen};
use super::staff_router::StaffRouter;
use crate::domain::ChildService;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Parent,
    Staff,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DaycareSession {
    mode: AppMode,
    parent: Option<ParentAccount>,
    staff: Option<StaffAccount>,
    pub parent_router: ParentRouter,
    pub staff_router: StaffRouter,
}

impl Default for DaycareSession {
    fn default() -> Self {
        Self {
            mode: AppMode::Parent,
            parent: None,
            staff: None,
            parent_router: ParentRouter::new(),
            staff_router: StaffRouter::new(),
        }
    }
}

impl DaycareSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn parent(&self) -> Option<&ParentAccount> {
        self.parent.as_ref()
    }

    pub fn staff(&self) -> Option<&StaffAccount> {
        self.staff.as_ref()
    }

    /// Route an authenticated account to its home screen. Either login
    /// screen accepts either role, and a fresh registration arrives here as a
    /// parent account.
    pub fn sign_in(&mut self, account: Account) {
        match account {
            Account::Staff(staff) => {
                info!("👩‍🏫 Staff mode for {}", staff.name);
                self.parent = None;
                self.staff = Some(staff);
                self.staff_router.reset();
                self.mode = AppMode::Staff;
            }
            Account::Parent(parent) => {
                info!("👪 Parent mode for {}", parent.name);
                self.staff = None;
                self.parent = Some(parent);
                self.parent_router.go(ParentScreen::Home);
                self.mode = AppMode::Parent;
            }
        }
    }

    /// Both roles land back on the parent landing screen
    pub fn logout(&mut self) {
        info!("👋 Signing out");
        self.parent = None;
        self.staff = None;
        self.staff_router.reset();
        self.parent_router.reset();
        self.mode = AppMode::Parent;
    }

    /// The signed-in parent's children; empty when nobody is signed in
    pub fn parent_children(&self, children: &ChildService) -> Result<Vec<Child>> {
        match &self.parent {
            Some(parent) => children.children_for_parent(&parent.parent_id),
            None => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AuthService;
    use crate::navigation::staff_router::StaffScreen;
    use crate::storage::memory::test_utils::TestEnvironment;
    use shared::{LoginRequest, RegisterRequest};

    fn services(env: &TestEnvironment) -> (AuthService, ChildService) {
        (
            AuthService::new(env.account_repo()),
            ChildService::new(env.child_repo()),
        )
    }

    /// Same steps as the login screen: authenticate, then sign the account in
    fn log_in(session: &mut DaycareSession, auth: &AuthService, email: &str, password: &str) -> Result<()> {
        let account = auth.authenticate(&LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })?;
        session.sign_in(account);
        Ok(())
    }

    #[test]
    fn test_staff_login_switches_to_staff_home() {
        let env = TestEnvironment::seeded().unwrap();
        let (auth, _) = services(&env);
        let mut session = DaycareSession::new();
        session.parent_router.go(ParentScreen::StaffLogin);
        session.staff_router.go(StaffScreen::Fees);

        log_in(&mut session, &auth, "teacher@sunnyview.com", "teach123").unwrap();
        assert_eq!(session.mode(), AppMode::Staff);
        assert_eq!(session.staff_router.current(), StaffScreen::Home);
        assert!(session.parent().is_none());
        assert!(session.staff().is_some());
    }

    #[test]
    fn test_parent_login_goes_home_with_own_children() {
        let env = TestEnvironment::seeded().unwrap();
        let (auth, children) = services(&env);
        let mut session = DaycareSession::new();
        session.parent_router.go(ParentScreen::Login);

        log_in(&mut session, &auth, "sarah.james@example.com", "password123").unwrap();
        assert_eq!(session.mode(), AppMode::Parent);
        assert_eq!(session.parent_router.current(), ParentScreen::Home);

        let kids = session.parent_children(&children).unwrap();
        assert_eq!(kids.len(), 3);
        assert!(kids.iter().all(|c| c.parent_id == "u4"));
    }

    #[test]
    fn test_failed_login_keeps_screen() {
        let env = TestEnvironment::seeded().unwrap();
        let (auth, _) = services(&env);
        let mut session = DaycareSession::new();
        session.parent_router.go(ParentScreen::Login);

        assert!(log_in(&mut session, &auth, "nobody@example.com", "x").is_err());
        assert_eq!(session.parent_router.current(), ParentScreen::Login);
        assert!(session.parent().is_none());
        assert!(session.staff().is_none());
    }

    #[test]
    fn test_logout_returns_to_landing() {
        let env = TestEnvironment::seeded().unwrap();
        let (auth, _) = services(&env);
        let mut session = DaycareSession::new();

        log_in(&mut session, &auth, "staff@sunnyview.com", "staff123").unwrap();
        session.logout();
        assert_eq!(session.mode(), AppMode::Parent);
        assert_eq!(session.parent_router.current(), ParentScreen::Landing);

        log_in(&mut session, &auth, "sarah.james@example.com", "password123").unwrap();
        session.logout();
        assert!(session.parent().is_none());
        assert_eq!(session.parent_router.current(), ParentScreen::Landing);
    }

    #[test]
    fn test_registered_parent_signs_in_without_children() {
        let env = TestEnvironment::seeded().unwrap();
        let (auth, children) = services(&env);
        let mut session = DaycareSession::new();
        session.parent_router.go(ParentScreen::Register);

        let response = auth
            .register(&RegisterRequest {
                full_name: "Jo Lee".to_string(),
                email: "jo.lee@example.com".to_string(),
                password: "secret".to_string(),
                confirm_password: "secret".to_string(),
            })
            .unwrap();
        session.sign_in(Account::Parent(response.account));
        assert_eq!(session.parent_router.current(), ParentScreen::Home);
        assert_eq!(session.parent().map(|p| p.name.as_str()), Some("Jo Lee"));
        assert!(session.parent_children(&children).unwrap().is_empty());
    }
}
