use log::warn;

use crate::api::Backend;
use crate::models::Project;

pub const CATEGORIES: [&str; 6] = ["All", "AI Ad", "Music Video", "Product", "Model Shoot", "Visuals"];
const ALL: &str = "All";

pub const LOADING_TEXT: &str = "Loading projects…";
pub const EMPTY_TEXT: &str = "No projects yet. Add via POST /projects.";

/// Category chip selection; `None` is the "All" chip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryFilter(Option<String>);

impl CategoryFilter {
    pub fn from_chip(chip: &str) -> Self {
        if chip == ALL || chip.is_empty() {
            Self(None)
        } else {
            Self(Some(chip.to_string()))
        }
    }

    pub fn category(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_active(&self, chip: &str) -> bool {
        match &self.0 {
            None => chip == ALL,
            Some(category) => category == chip,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Gallery {
    Loading,
    Ready(Vec<Project>),
}

pub enum GalleryContent<'a> {
    Loading,
    Empty,
    Cards(&'a [Project]),
}

impl Gallery {
    pub fn content(&self) -> GalleryContent<'_> {
        match self {
            Gallery::Loading => GalleryContent::Loading,
            Gallery::Ready(projects) if projects.is_empty() => GalleryContent::Empty,
            Gallery::Ready(projects) => GalleryContent::Cards(projects),
        }
    }
}

/// Fetches the projects for `filter`. Failures degrade to an empty list.
pub async fn load_projects(backend: &dyn Backend, filter: &CategoryFilter) -> Vec<Project> {
    match backend.projects(filter.category()).await {
        Ok(projects) => projects,
        Err(e) => {
            warn!("Project fetch failed, showing empty gallery: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubBackend;

    fn project(id: &str, title: &str, category: &str) -> Project {
        Project {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            tags: vec![],
            thumbnail_url: format!("{}.jpg", id),
            video_url: None,
        }
    }

    #[test]
    fn n_records_become_n_cards_with_their_own_captions() {
        let backend = StubBackend::with_projects(vec![
            project("1", "Neon Drive", "AI Ad"),
            project("2", "Chrome Hearts", "Music Video"),
            project("3", "Glass Bottle", "Product"),
        ]);

        let gallery = Gallery::Ready(tokio_test::block_on(load_projects(
            &backend,
            &CategoryFilter::default(),
        )));

        let GalleryContent::Cards(cards) = gallery.content() else {
            panic!("expected cards");
        };
        assert_eq!(cards.len(), 3);
        let captions: Vec<(&str, &str)> = cards
            .iter()
            .map(|p| (p.title.as_str(), p.category.as_str()))
            .collect();
        assert_eq!(
            captions,
            vec![
                ("Neon Drive", "AI Ad"),
                ("Chrome Hearts", "Music Video"),
                ("Glass Bottle", "Product")
            ]
        );
    }

    #[test]
    fn empty_response_shows_only_placeholder() {
        let backend = StubBackend::with_projects(vec![]);
        let gallery = Gallery::Ready(tokio_test::block_on(load_projects(
            &backend,
            &CategoryFilter::default(),
        )));

        assert!(matches!(gallery.content(), GalleryContent::Empty));
    }

    #[test]
    fn failed_fetch_degrades_to_empty_gallery() {
        let backend = StubBackend::failing(503);
        let projects = tokio_test::block_on(load_projects(&backend, &CategoryFilter::default()));

        assert!(projects.is_empty());
        assert!(matches!(Gallery::Ready(projects).content(), GalleryContent::Empty));
    }

    #[test]
    fn filter_is_forwarded_to_backend() {
        let backend = StubBackend::with_projects(vec![]);

        tokio_test::block_on(load_projects(&backend, &CategoryFilter::from_chip("Visuals")));
        tokio_test::block_on(load_projects(&backend, &CategoryFilter::from_chip("All")));

        assert_eq!(
            backend.requested_categories(),
            vec![Some("Visuals".to_string()), None]
        );
    }

    #[test]
    fn all_chip_is_active_without_filter() {
        let all = CategoryFilter::default();
        assert!(all.is_active("All"));
        assert!(!all.is_active("Product"));

        let product = CategoryFilter::from_chip("Product");
        assert!(product.is_active("Product"));
        assert!(!product.is_active("All"));
    }

    #[test]
    fn initial_state_is_loading() {
        assert!(matches!(Gallery::Loading.content(), GalleryContent::Loading));
    }
}
