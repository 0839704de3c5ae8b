use gloo::timers::callback::Timeout;
use yew::prelude::*;

const SUCCESS_VISIBLE_MS: u32 = 3000;

/// Error list and success banner shared by every data-entry screen
#[derive(Clone, PartialEq)]
pub struct Feedback {
    pub errors: UseStateHandle<Vec<String>>,
    pub success: UseStateHandle<Option<String>>,
}

impl Feedback {
    pub fn show_errors(&self, errors: Vec<String>) {
        self.success.set(None);
        self.errors.set(errors);
    }

    pub fn show_error(&self, error: &anyhow::Error) {
        self.show_errors(daycare_backend::user_messages(error));
    }

    /// Show the banner and hide it again after a few seconds
    pub fn show_success(&self, message: String) {
        self.errors.set(Vec::new());
        self.success.set(Some(message));
        let success = self.success.clone();
        Timeout::new(SUCCESS_VISIBLE_MS, move || success.set(None)).forget();
    }

    pub fn clear(&self) {
        self.errors.set(Vec::new());
        self.success.set(None);
    }
}

#[hook]
pub fn use_feedback() -> Feedback {
    Feedback {
        errors: use_state(Vec::new),
        success: use_state(|| None),
    }
}
