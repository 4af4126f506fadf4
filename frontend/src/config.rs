use crate::interaction::{CopyFeedbackConfig, EvasiveConfig, SlideshowConfig, SpotlightConfig};

#[cfg(debug_assertions)]
pub fn get_site_url() -> &'static str {
    "http://localhost:8080"  // trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_site_url() -> &'static str {
    "https://codecompas.com"
}

pub const CONTACT_EMAIL: &str = "ask@codecompas.com";

/// The sticky CTA only exists on narrow screens.
pub const STICKY_CTA_MEDIA_QUERY: &str = "(max-width: 768px)";
/// Device-orientation tilt only runs on touch devices.
pub const COARSE_POINTER_QUERY: &str = "(pointer: coarse)";

pub const MICROCOPY_ROTATE_MS: u32 = 6000;

/// `mailto:` link to the studio inbox with a prefilled subject.
pub fn contact_mailto(subject: &str) -> String {
    format!("mailto:{}?subject={}", CONTACT_EMAIL, urlencoding::encode(subject))
}

/// Tuning for every interactive widget on the page. The numbers are feel,
/// not contract.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionConfig {
    pub evasive: EvasiveConfig,
    pub slideshow: SlideshowConfig,
    pub copy_feedback: CopyFeedbackConfig,
    pub card_spotlight: SpotlightConfig,
    pub section_spotlight: SpotlightConfig,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            evasive: EvasiveConfig::default(),
            slideshow: SlideshowConfig::default(),
            copy_feedback: CopyFeedbackConfig::default(),
            card_spotlight: SpotlightConfig::card(),
            section_spotlight: SpotlightConfig::section(),
        }
    }
}

pub fn interaction() -> InteractionConfig {
    InteractionConfig::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_mailto_encodes_subject() {
        assert_eq!(
            contact_mailto("Quote: app & site"),
            "mailto:ask@codecompas.com?subject=Quote%3A%20app%20%26%20site"
        );
    }
}
