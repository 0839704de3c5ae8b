use shared::{TransitionError, ValidationError};

/// Structured failures raised by the domain services.
///
/// Services return `anyhow::Result`; screens that need to show the error
/// list downcast to this type through [`user_messages`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DaycareError {
    #[error("{}", join_messages(.0))]
    Validation(Vec<ValidationError>),
    #[error(transparent)]
    Transition(#[from] TransitionError),
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
    #[error("Seed data error: {0}")]
    Seed(String),
}

impl DaycareError {
    pub fn not_found(kind: &'static str, id: &str) -> Self {
        DaycareError::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}

impl From<Vec<ValidationError>> for DaycareError {
    fn from(errors: Vec<ValidationError>) -> Self {
        DaycareError::Validation(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Flatten any service error into the bulleted messages a screen shows
pub fn user_messages(error: &anyhow::Error) -> Vec<String> {
    match error.downcast_ref::<DaycareError>() {
        Some(DaycareError::Validation(errors)) => errors.iter().map(|e| e.to_string()).collect(),
        Some(other) => vec![other.to_string()],
        None => vec![error.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{FormAction, RecordStatus};

    #[test]
    fn test_validation_messages_are_split_back_out() {
        let err: anyhow::Error = DaycareError::Validation(vec![
            ValidationError::MissingEmail,
            ValidationError::MissingPassword,
        ])
        .into();
        assert_eq!(
            user_messages(&err),
            vec![
                "Please enter your email".to_string(),
                "Please enter your password".to_string()
            ]
        );
        assert_eq!(
            err.to_string(),
            "Please enter your email; Please enter your password"
        );
    }

    #[test]
    fn test_other_errors_become_single_message() {
        let err: anyhow::Error = DaycareError::InvalidCredentials.into();
        assert_eq!(user_messages(&err), vec!["Invalid email or password".to_string()]);

        let err: anyhow::Error = DaycareError::from(TransitionError::Form {
            from: RecordStatus::Completed,
            action: FormAction::Submit,
        })
        .into();
        assert_eq!(
            user_messages(&err),
            vec!["Cannot submit a form that is Completed".to_string()]
        );

        let err = anyhow::anyhow!("store unavailable");
        assert_eq!(user_messages(&err), vec!["store unavailable".to_string()]);
    }

    #[test]
    fn test_not_found_display() {
        let err = DaycareError::not_found("Event", "e42");
        assert_eq!(err.to_string(), "Event not found: e42");
    }
}
