use std::rc::Rc;

use async_trait::async_trait;
use gloo_net::http::Request;
use log::info;

use crate::config;
use crate::error::{Result, SiteError};
use crate::models::{ContactForm, Project};

/// The two calls the site makes against the studio backend.
#[async_trait(?Send)]
pub trait Backend {
    async fn projects(&self, category: Option<&str>) -> Result<Vec<Project>>;
    async fn submit_contact(&self, form: &ContactForm) -> Result<()>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpBackend {
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn from_config() -> Self {
        Self::new(config::get_backend_url())
    }
}

/// Backend shared with the sections through a Yew context.
#[derive(Clone)]
pub struct BackendHandle(pub Rc<dyn Backend>);

impl BackendHandle {
    pub fn from_config() -> Self {
        Self(Rc::new(HttpBackend::from_config()))
    }
}

impl PartialEq for BackendHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

pub fn projects_url(base_url: &str, category: Option<&str>) -> String {
    match category.filter(|c| !c.is_empty()) {
        Some(category) => format!(
            "{}/projects?category={}",
            base_url,
            urlencoding::encode(category)
        ),
        None => format!("{}/projects", base_url),
    }
}

pub fn contact_url(base_url: &str) -> String {
    format!("{}/contact", base_url)
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    async fn projects(&self, category: Option<&str>) -> Result<Vec<Project>> {
        let url = projects_url(&self.base_url, category);
        info!("Fetching projects from {}", url);
        let response = Request::get(&url).send().await?;
        if !response.ok() {
            return Err(SiteError::Status(response.status()));
        }
        Ok(response.json::<Vec<Project>>().await?)
    }

    async fn submit_contact(&self, form: &ContactForm) -> Result<()> {
        let response = Request::post(&contact_url(&self.base_url))
            .json(form)?
            .send()
            .await?;
        if !response.ok() {
            return Err(SiteError::Status(response.status()));
        }
        Ok(())
    }
}
