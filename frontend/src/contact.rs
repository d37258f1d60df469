use std::rc::Rc;

use log::warn;
use yew::functional::Reducible;

use crate::api::Backend;
use crate::models::{ContactField, ContactForm};

pub const SENDING_TEXT: &str = "Sending...";
pub const SUCCESS_TEXT: &str = "Thanks! We'll get back within 24 hours.";
pub const FAILURE_TEXT: &str = "Something went wrong. Please email us at hello@nfxcreations.com";
pub const INCOMPLETE_TEXT: &str = "Please fill in your name, email and project details.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed,
    Incomplete,
}

impl SubmitStatus {
    pub fn message(self) -> &'static str {
        match self {
            SubmitStatus::Idle => "",
            SubmitStatus::Sending => SENDING_TEXT,
            SubmitStatus::Sent => SUCCESS_TEXT,
            SubmitStatus::Failed => FAILURE_TEXT,
            SubmitStatus::Incomplete => INCOMPLETE_TEXT,
        }
    }
}

/// Form fields plus where the last submission got to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactDesk {
    pub form: ContactForm,
    pub status: SubmitStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ContactAction {
    Edit(ContactField, String),
    Sending,
    Delivered,
    Failed,
    /// Submit pressed with a required field blank or whitespace-only.
    Incomplete,
}

impl ContactDesk {
    pub fn is_pending(&self) -> bool {
        self.status == SubmitStatus::Sending
    }

    /// The body to post, or `None` while a submission is in flight or a
    /// required field is blank.
    pub fn outgoing(&self) -> Option<ContactForm> {
        if self.is_pending() || !self.form.missing_required().is_empty() {
            return None;
        }
        Some(self.form.clone())
    }
}

impl Reducible for ContactDesk {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut desk = (*self).clone();
        match action {
            ContactAction::Edit(field, value) => desk.form.set(field, value),
            ContactAction::Sending => desk.status = SubmitStatus::Sending,
            ContactAction::Incomplete if self.is_pending() => return self,
            ContactAction::Incomplete => desk.status = SubmitStatus::Incomplete,
            ContactAction::Delivered | ContactAction::Failed if !self.is_pending() => return self,
            ContactAction::Delivered => {
                desk.form = ContactForm::default();
                desk.status = SubmitStatus::Sent;
            }
            ContactAction::Failed => desk.status = SubmitStatus::Failed,
        }
        Rc::new(desk)
    }
}

/// Posts the form and reports the outcome as the action to dispatch.
pub async fn deliver(backend: &dyn Backend, form: ContactForm) -> ContactAction {
    match backend.submit_contact(&form).await {
        Ok(()) => ContactAction::Delivered,
        Err(e) => {
            warn!("Contact submission failed: {}", e);
            ContactAction::Failed
        }
    }
}
