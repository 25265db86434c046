use crate::site::PROFILE_IMAGE_PATH;

/// Inline avatar shown when the profile picture can't be loaded. Being a
/// `data:` URI it never goes over the network.
pub const FALLBACK_PROFILE_IMAGE: &str = "data:image/svg+xml;base64,PHN2ZyB4bWxucz0iaHR0cDovL3d3dy53My5vcmcvMjAwMC9zdmciIHZpZXdCb3g9IjAgMCAxNjAgMTYwIj48cmVjdCB3aWR0aD0iMTYwIiBoZWlnaHQ9IjE2MCIgZmlsbD0iIzM3NDE1MSIvPjxjaXJjbGUgY3g9IjgwIiBjeT0iNjIiIHI9IjMwIiBmaWxsPSIjOWNhM2FmIi8+PHBhdGggZD0iTTI0IDE2MGM0LTM0IDI4LTUyIDU2LTUyczUyIDE4IDU2IDUyeiIgZmlsbD0iIzljYTNhZiIvPjwvc3ZnPg==";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Source {
    #[default]
    Primary,
    Fallback,
}

/// Source of the hero profile picture.
///
/// Moves from the primary asset to [`FALLBACK_PROFILE_IMAGE`] at most once and
/// never moves back. A broken fallback is left broken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProfileImage {
    source: Source,
}

impl ProfileImage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn src(&self) -> &'static str {
        match self.source {
            Source::Primary => PROFILE_IMAGE_PATH,
            Source::Fallback => FALLBACK_PROFILE_IMAGE,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == Source::Fallback
    }

    /// Handles an `error` event from the `<img>`. Returns `true` only for the
    /// call that performed the swap.
    pub fn on_load_error(&mut self) -> bool {
        match self.source {
            Source::Primary => {
                self.source = Source::Fallback;
                true
            }
            Source::Fallback => false,
        }
    }
}

/// Whether an `<img>` already finished loading and got nothing.
///
/// Used after hydration, when the `error` event may have fired before any
/// handler was attached.
pub fn load_already_failed(complete: bool, natural_width: u32) -> bool {
    complete && natural_width == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_primary_path() {
        let img = ProfileImage::new();
        assert_eq!(img.src(), "assets/profile.jpeg");
        assert!(!img.is_fallback());
    }

    #[test]
    fn test_first_error_swaps_to_fallback() {
        let mut img = ProfileImage::new();
        assert!(img.on_load_error());
        assert_eq!(img.src(), FALLBACK_PROFILE_IMAGE);
        assert!(img.is_fallback());
    }

    #[test]
    fn test_repeated_errors_are_noops() {
        let mut img = ProfileImage::new();
        img.on_load_error();
        for _ in 0..5 {
            assert!(!img.on_load_error());
            assert_eq!(img.src(), FALLBACK_PROFILE_IMAGE);
        }
    }

    #[test]
    fn test_fallback_is_inline() {
        assert!(FALLBACK_PROFILE_IMAGE.starts_with("data:image/"));
    }

    #[test]
    fn test_load_already_failed() {
        assert!(load_already_failed(true, 0));
        assert!(!load_already_failed(true, 320));
        // still loading
        assert!(!load_already_failed(false, 0));
    }
}
