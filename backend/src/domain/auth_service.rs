//! Sign-in, registration and the mocked password reset.
//!
//! Credentials are compared literally against the seeded account lists;
//! there is no hashing and no session token.

use anyhow::Result;
use log::{info, warn};
use std::sync::Arc;

use crate::domain::errors::DaycareError;
use crate::domain::ids::IdSequence;
use crate::storage::AccountStorage;
use shared::{
    Account, LoginRequest, ParentAccount, PasswordResetRequest, PasswordResetResponse,
    RegisterRequest, RegisterResponse, ValidationError,
};

#[derive(Clone)]
pub struct AuthService {
    accounts: Arc<dyn AccountStorage>,
}

fn same_email(stored: &str, typed: &str) -> bool {
    stored.trim().eq_ignore_ascii_case(typed.trim())
}

impl AuthService {
    pub fn new(accounts: Arc<dyn AccountStorage>) -> Self {
        Self { accounts }
    }

    /// Match the pair against the staff list first, then the parent list
    pub fn authenticate(&self, request: &LoginRequest) -> Result<Account> {
        info!("🔑 Login attempt for {}", request.email.trim());

        let validation = request.validate();
        if !validation.is_valid {
            return Err(DaycareError::Validation(validation.errors).into());
        }

        let staff = self
            .accounts
            .list_staff_accounts()?
            .into_iter()
            .find(|s| same_email(&s.email, &request.email) && s.password == request.password);
        if let Some(staff) = staff {
            info!("✅ Staff member {} signed in", staff.staff_id);
            return Ok(Account::Staff(staff));
        }

        let parent = self
            .accounts
            .list_parent_accounts()?
            .into_iter()
            .find(|p| same_email(&p.email, &request.email) && p.password == request.password);
        if let Some(parent) = parent {
            info!("✅ Parent {} signed in", parent.parent_id);
            return Ok(Account::Parent(parent));
        }

        warn!("🚫 Invalid credentials for {}", request.email.trim());
        Err(DaycareError::InvalidCredentials.into())
    }

    /// Create a parent account in memory. The new parent has no children.
    pub fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse> {
        info!("📝 Registering parent {}", request.email.trim());

        let validation = request.validate();
        if !validation.is_valid {
            return Err(DaycareError::Validation(validation.errors).into());
        }

        let parents = self.accounts.list_parent_accounts()?;
        let staff = self.accounts.list_staff_accounts()?;
        let taken = parents.iter().any(|p| same_email(&p.email, &request.email))
            || staff.iter().any(|s| same_email(&s.email, &request.email));
        if taken {
            warn!("⚠️ Email already registered: {}", request.email.trim());
            return Err(DaycareError::Validation(vec![ValidationError::EmailTaken]).into());
        }

        let mut ids = IdSequence::after("u", parents.iter().map(|p| p.parent_id.as_str()));
        let account = ParentAccount {
            parent_id: ids.next_id(),
            name: request.full_name.trim().to_string(),
            email: request.email.trim().to_string(),
            password: request.password.clone(),
        };
        self.accounts.store_parent_account(&account)?;

        info!("✅ Registered parent {} as {}", account.name, account.parent_id);
        Ok(RegisterResponse {
            success_message: format!("Welcome to Sunnyview, {}!", account.name),
            account,
        })
    }

    /// Mocked reset: nothing is sent, the request is only logged
    pub fn request_password_reset(
        &self,
        request: &PasswordResetRequest,
    ) -> Result<PasswordResetResponse> {
        let validation = request.validate();
        if !validation.is_valid {
            return Err(DaycareError::Validation(validation.errors).into());
        }

        let email = request.email.trim().to_string();
        info!("📧 Password reset requested for {}", email);
        Ok(PasswordResetResponse {
            success_message: format!(
                "If an account exists for {}, a reset link has been sent.",
                email
            ),
            email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::user_messages;
    use crate::storage::memory::test_utils::TestEnvironment;

    fn service(env: &TestEnvironment) -> AuthService {
        AuthService::new(env.account_repo())
    }

    fn login(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_staff_credentials_give_staff_account() {
        let env = TestEnvironment::seeded().unwrap();
        let account = service(&env)
            .authenticate(&login("staff@sunnyview.com", "staff123"))
            .unwrap();
        assert!(matches!(account, Account::Staff(_)));
    }

    #[test]
    fn test_parent_credentials_give_parent_account() {
        let env = TestEnvironment::seeded().unwrap();
        let account = service(&env)
            .authenticate(&login(" Sarah.James@example.com ", "password123"))
            .unwrap();
        match account {
            Account::Parent(parent) => assert_eq!(parent.parent_id, "u4"),
            other => panic!("expected parent, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_pair_is_rejected() {
        let env = TestEnvironment::seeded().unwrap();
        let err = service(&env)
            .authenticate(&login("staff@sunnyview.com", "wrong"))
            .unwrap_err();
        assert_eq!(user_messages(&err), vec!["Invalid email or password".to_string()]);
    }

    #[test]
    fn test_blank_fields_report_validation_errors() {
        let env = TestEnvironment::seeded().unwrap();
        let err = service(&env).authenticate(&login("", "")).unwrap_err();
        assert_eq!(
            user_messages(&err),
            vec![
                "Please enter your email".to_string(),
                "Please enter your password".to_string()
            ]
        );
    }

    #[test]
    fn test_register_creates_parent_that_can_sign_in() {
        let env = TestEnvironment::seeded().unwrap();
        let auth = service(&env);
        let response = auth
            .register(&RegisterRequest {
                full_name: "Jo Lee".to_string(),
                email: "jo.lee@example.com".to_string(),
                password: "secret".to_string(),
                confirm_password: "secret".to_string(),
            })
            .unwrap();
        assert_eq!(response.account.parent_id, "u8");

        let account = auth.authenticate(&login("jo.lee@example.com", "secret")).unwrap();
        assert_eq!(account.name(), "Jo Lee");
    }

    #[test]
    fn test_register_rejects_taken_email() {
        let env = TestEnvironment::seeded().unwrap();
        let err = service(&env)
            .register(&RegisterRequest {
                full_name: "Someone".to_string(),
                email: "sarah.james@example.com".to_string(),
                password: "x".to_string(),
                confirm_password: "x".to_string(),
            })
            .unwrap_err();
        assert_eq!(
            user_messages(&err),
            vec!["An account with this email already exists".to_string()]
        );
    }

    #[test]
    fn test_password_reset_requires_email() {
        let env = TestEnvironment::seeded().unwrap();
        let auth = service(&env);
        assert!(auth
            .request_password_reset(&PasswordResetRequest::default())
            .is_err());
        let response = auth
            .request_password_reset(&PasswordResetRequest {
                email: "sarah.james@example.com".to_string(),
            })
            .unwrap();
        assert_eq!(response.email, "sarah.james@example.com");
    }
}
