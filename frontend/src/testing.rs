use std::cell::RefCell;

use async_trait::async_trait;

use crate::api::Backend;
use crate::error::{Result, SiteError};
use crate::models::{ContactForm, Project};

/// Backend double that answers from memory and records what it was asked.
#[derive(Default)]
pub struct StubBackend {
    projects: Vec<Project>,
    failure: Option<u16>,
    categories: RefCell<Vec<Option<String>>>,
    submissions: RefCell<Vec<ContactForm>>,
}

impl StubBackend {
    pub fn with_projects(projects: Vec<Project>) -> Self {
        Self {
            projects,
            ..Default::default()
        }
    }

    pub fn accepting() -> Self {
        Self::default()
    }

    pub fn failing(status: u16) -> Self {
        Self {
            failure: Some(status),
            ..Default::default()
        }
    }

    pub fn requested_categories(&self) -> Vec<Option<String>> {
        self.categories.borrow().clone()
    }

    pub fn submissions(&self) -> Vec<ContactForm> {
        self.submissions.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Backend for StubBackend {
    async fn projects(&self, category: Option<&str>) -> Result<Vec<Project>> {
        self.categories.borrow_mut().push(category.map(str::to_string));
        match self.failure {
            Some(status) => Err(SiteError::Status(status)),
            None => Ok(self.projects.clone()),
        }
    }

    async fn submit_contact(&self, form: &ContactForm) -> Result<()> {
        self.submissions.borrow_mut().push(form.clone());
        match self.failure {
            Some(status) => Err(SiteError::Status(status)),
            None => Ok(()),
        }
    }
}
