use serde::{Deserialize, Deserializer, Serialize};

const MAX_CARD_TAGS: usize = 3;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Project {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(default)]
    pub video_url: Option<String>,
}

// Backends hand out both numeric and string ids.
fn id_as_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(id) => id,
        other => other.to_string(),
    })
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Project {
    /// Where the card leads: the video when there is one, the thumbnail otherwise.
    pub fn link(&self) -> &str {
        self.video_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(&self.thumbnail_url)
    }

    pub fn badge_tags(&self) -> &[String] {
        &self.tags[..self.tags.len().min(MAX_CARD_TAGS)]
    }
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
    pub budget: String,
    pub service: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Company,
    Message,
    Budget,
    Service,
}

impl ContactField {
    pub const REQUIRED: [ContactField; 3] =
        [ContactField::Name, ContactField::Email, ContactField::Message];
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Company => &self.company,
            ContactField::Message => &self.message,
            ContactField::Budget => &self.budget,
            ContactField::Service => &self.service,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Company => &mut self.company,
            ContactField::Message => &mut self.message,
            ContactField::Budget => &mut self.budget,
            ContactField::Service => &mut self.service,
        };
        *slot = value;
    }

    pub fn missing_required(&self) -> Vec<ContactField> {
        ContactField::REQUIRED
            .into_iter()
            .filter(|field| self.get(*field).trim().is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn project_without_tags_or_video_still_parses() {
        let project: Project = serde_json::from_value(json!({
            "id": "p1",
            "title": "Neon Drive",
            "category": "AI Ad",
            "thumbnail_url": "https://cdn.example/neon.jpg"
        }))
        .unwrap();

        assert!(project.tags.is_empty());
        assert_eq!(project.id, "p1");
        assert_eq!(project.link(), "https://cdn.example/neon.jpg");
    }

    #[test]
    fn numeric_ids_become_strings() {
        let project: Project = serde_json::from_value(json!({
            "id": 17,
            "title": "Studio Loop",
            "category": "Product",
            "tags": ["loop"],
            "thumbnail_url": "loop.jpg",
            "video_url": null
        }))
        .unwrap();

        assert_eq!(project.id, "17");
    }

    #[test]
    fn one_sparse_record_does_not_sink_the_list() {
        let projects: Vec<Project> = serde_json::from_str(
            r#"[
                {"id": 1, "title": "Neon Drive", "category": "AI Ad", "tags": null, "thumbnail_url": "neon.jpg"},
                {"id": 2, "title": "Glass Bottle", "category": "Product", "tags": ["launch"]},
                {"id": 3, "title": "Chrome Hearts", "category": "Music Video", "tags": ["synth"], "thumbnail_url": "chrome.jpg"}
            ]"#,
        )
        .unwrap();

        assert_eq!(projects.len(), 3);
        assert!(projects[0].tags.is_empty());
        assert_eq!(projects[1].thumbnail_url, "");
        assert_eq!(projects[1].badge_tags(), ["launch"]);
        assert_eq!(projects[2].link(), "chrome.jpg");
    }

    #[test]
    fn card_links_to_video_and_shows_three_tags() {
        let project = Project {
            id: "p2".into(),
            title: "Chrome Hearts".into(),
            category: "Music Video".into(),
            tags: vec!["synth".into(), "retro".into(), "vfx".into(), "night".into()],
            thumbnail_url: "thumb.jpg".into(),
            video_url: Some("https://vimeo.example/42".into()),
        };

        assert_eq!(project.link(), "https://vimeo.example/42");
        assert_eq!(project.badge_tags(), ["synth", "retro", "vfx"]);
    }

    #[test]
    fn contact_body_carries_all_six_keys() {
        let form = ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "A launch film".into(),
            ..Default::default()
        };
        let body = serde_json::to_value(&form).unwrap();

        assert_eq!(
            body,
            json!({
                "name": "Ada",
                "email": "ada@example.com",
                "company": "",
                "message": "A launch film",
                "budget": "",
                "service": ""
            })
        );
    }

    #[test]
    fn blank_required_fields_are_reported() {
        let mut form = ContactForm::default();
        form.set(ContactField::Email, "ada@example.com".into());
        form.set(ContactField::Message, "   ".into());

        assert_eq!(
            form.missing_required(),
            vec![ContactField::Name, ContactField::Message]
        );
    }
}
