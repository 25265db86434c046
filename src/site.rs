use chrono::{DateTime, Utc};

pub const OWNER_NAME: &str = "Oskar Kuder";
pub const CURRENT_PARTNER: &str = "Parakeet AI";
// Placeholder until the real inbox is known
pub const CONTACT_EMAIL: &str = "hello@example.com";

/// Served from `public/`. The photo isn't checked in, so until it is dropped
/// there the hero shows the inline fallback.
pub const PROFILE_IMAGE_PATH: &str = "assets/profile.jpeg";
pub const HERO_BACKDROP_URL: &str =
    "https://images.unsplash.com/photo-1531306728370-e2ebd9d7bb91?q=80&w=3456&auto=format&fit=crop";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialNetwork {
    Instagram,
    TikTok,
}

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub network: SocialNetwork,
    pub href: &'static str,
    pub label: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        network: SocialNetwork::Instagram,
        href: "https://instagram.com/oskarkuder2",
        label: "Visit Oskar Kuder's Instagram",
    },
    SocialLink {
        network: SocialNetwork::TikTok,
        href: "https://tiktok.com/oskarkuder2",
        label: "Visit Oskar Kuder's TikTok",
    },
];

pub fn mailto() -> String {
    format!("mailto:{CONTACT_EMAIL}")
}

/// Month and year the bundle was built, e.g. "October 2026".
///
/// Falls back to `None` if `BUILD_TIME` was not valid RFC 3339.
pub fn build_stamp() -> Option<String> {
    format_build_stamp(env!("BUILD_TIME"))
}

fn format_build_stamp(raw: &str) -> Option<String> {
    let built_at = DateTime::parse_from_rfc3339(raw).ok()?.with_timezone(&Utc);
    Some(built_at.format("%B %Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_stamp_formats_month_and_year() {
        assert_eq!(
            format_build_stamp("2026-10-19T15:28:00+00:00"),
            Some("October 2026".to_string())
        );
        assert_eq!(format_build_stamp("yesterday"), None);
        assert!(build_stamp().is_some());
    }

    #[test]
    fn test_social_links_open_external_profiles() {
        assert_eq!(SOCIAL_LINKS.len(), 2);
        assert!(SOCIAL_LINKS
            .iter()
            .all(|l| l.href.starts_with("https://") && l.href.ends_with("oskarkuder2")));
        assert_eq!(mailto(), "mailto:hello@example.com");
    }
}
