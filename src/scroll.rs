/// Measured size of a horizontally scrolling container, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollDimensions {
    /// Full width of the content (`scrollWidth`).
    pub scroll_width: i32,
    /// Width of the visible area (`clientWidth`).
    pub client_width: i32,
}

/// `scrollLeft` that puts the middle of the content in the middle of the
/// viewport. Zero or negative when everything already fits.
pub fn initial_scroll_offset(dims: ScrollDimensions) -> i32 {
    (dims.scroll_width - dims.client_width) / 2
}

/// Runs the centering at most once per mount so later renders never fight
/// the user's own scrolling.
#[derive(Debug, Default)]
pub struct ScrollCentering {
    done: bool,
}

impl ScrollCentering {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offset to apply, or `None` if centering already ran or there is
    /// nothing to scroll.
    pub fn initialize(&mut self, dims: ScrollDimensions) -> Option<i32> {
        if self.done {
            return None;
        }
        self.done = true;
        let offset = initial_scroll_offset(dims);
        (offset > 0).then_some(offset)
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(scroll_width: i32, client_width: i32) -> ScrollDimensions {
        ScrollDimensions {
            scroll_width,
            client_width,
        }
    }

    #[test]
    fn test_offset_is_half_the_overflow() {
        assert_eq!(initial_scroll_offset(dims(1600, 1000)), 300);
        assert_eq!(initial_scroll_offset(dims(1200, 400)), 400);
    }

    #[test]
    fn test_offset_zero_when_content_fits() {
        assert_eq!(initial_scroll_offset(dims(800, 800)), 0);
        assert!(initial_scroll_offset(dims(600, 800)) < 0);
    }

    #[test]
    fn test_odd_overflow_truncates() {
        assert_eq!(initial_scroll_offset(dims(1001, 1000)), 0);
        assert_eq!(initial_scroll_offset(dims(1003, 1000)), 1);
    }

    #[test]
    fn test_centering_runs_once() {
        let mut centering = ScrollCentering::new();
        assert!(!centering.is_done());
        assert_eq!(centering.initialize(dims(1600, 1000)), Some(300));
        assert!(centering.is_done());
        // a later layout pass must not re-center
        assert_eq!(centering.initialize(dims(2000, 1000)), None);
    }

    #[test]
    fn test_centering_skips_when_nothing_to_scroll() {
        let mut centering = ScrollCentering::new();
        assert_eq!(centering.initialize(dims(800, 800)), None);
        assert!(centering.is_done());
        assert_eq!(centering.initialize(dims(1600, 1000)), None);
    }
}
