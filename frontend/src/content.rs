//! Static page copy, embedded at build time from `data/content.json`.

use serde::Deserialize;
use thiserror::Error;

const CONTENT_JSON: &str = include_str!("../data/content.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content file is not valid: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("content table `{0}` is empty")]
    Empty(&'static str),
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct NavItem {
    pub name: String,
    pub link: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GridItem {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub class_name: String,
    #[serde(default)]
    pub img: Option<String>,
    #[serde(default)]
    pub spare_img: Option<String>,
}

impl GridItem {
    /// The grid item that renders the copy-email contact card.
    pub const CONTACT_ID: u32 = 6;

    pub fn is_contact(&self) -> bool {
        self.id == Self::CONTACT_ID
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Offering {
    pub title: String,
    pub icon: String,
    pub badge: String,
    pub description: String,
    pub price: String,
    pub price_caption: String,
    pub timeline: String,
    pub highlights: Vec<String>,
    pub cta_label: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProcessSlide {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub stage_label: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub des: String,
    pub img: String,
    pub icon_lists: Vec<String>,
    pub link: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub quote: String,
    pub name: String,
    pub title: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: u32,
    pub name: String,
    pub img: String,
    pub name_img: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SocialLink {
    pub id: u32,
    pub img: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub nav_items: Vec<NavItem>,
    pub grid_items: Vec<GridItem>,
    pub offerings: Vec<Offering>,
    pub add_ons: Vec<String>,
    pub microcopy: Vec<String>,
    pub process_slides: Vec<ProcessSlide>,
    pub projects: Vec<Project>,
    pub testimonials: Vec<Testimonial>,
    pub companies: Vec<Company>,
    pub social_media: Vec<SocialLink>,
}

impl SiteContent {
    pub fn parse(json: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(json)?;
        // The widgets index into these, so they must not be empty.
        if content.process_slides.is_empty() {
            return Err(ContentError::Empty("processSlides"));
        }
        if content.microcopy.is_empty() {
            return Err(ContentError::Empty("microcopy"));
        }
        if content.offerings.is_empty() {
            return Err(ContentError::Empty("offerings"));
        }
        Ok(content)
    }
}

pub fn load() -> Result<SiteContent, ContentError> {
    SiteContent::parse(CONTENT_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_parses() {
        let content = load().expect("embedded content should parse");
        assert_eq!(content.process_slides.len(), 3);
        assert_eq!(content.offerings.len(), 4);
        assert!(content.grid_items.iter().any(GridItem::is_contact));
        assert!(content.nav_items.iter().all(|item| item.link.starts_with('#')));
    }

    #[test]
    fn test_malformed_content_is_an_error() {
        assert!(matches!(SiteContent::parse("{"), Err(ContentError::Malformed(_))));
    }

    #[test]
    fn test_empty_slides_are_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(CONTENT_JSON).unwrap();
        value["processSlides"] = serde_json::json!([]);
        let result = SiteContent::parse(&value.to_string());
        assert!(matches!(result, Err(ContentError::Empty("processSlides"))));
    }
}
