//! Swipe and keyboard input classification.
//!
//! Touch and key input arrive as raw values (a horizontal displacement in
//! pixels, a DOM key name). This module turns them into navigation intents
//! for the view controller.

use core::str::FromStr;

use thiserror::Error;

/// Minimum horizontal displacement, in pixels, for a swipe to navigate.
///
/// The comparison is strict: a displacement of exactly 40 px is ignored.
pub const SWIPE_THRESHOLD_PX: f64 = 40.0;

/// Navigation direction within a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Prev,
    Next,
}

/// Classify a horizontal swipe by its net displacement.
///
/// Rightward motion (positive `dx`) reveals the previous item, leftward
/// motion the next. Sub-threshold and non-finite displacements are ignored.
#[must_use]
pub fn classify_swipe(dx: f64) -> Option<Direction> {
    if !dx.is_finite() || dx.abs() <= SWIPE_THRESHOLD_PX {
        return None;
    }
    if dx > 0.0 {
        Some(Direction::Prev)
    } else {
        Some(Direction::Next)
    }
}

/// Keys the product modal responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
}

impl Key {
    /// Look up a key by its DOM `KeyboardEvent.key` name.
    ///
    /// Returns `None` for keys the modal does not handle.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" | "Left" => Some(Self::ArrowLeft),
            "ArrowRight" | "Right" => Some(Self::ArrowRight),
            "Escape" | "Esc" => Some(Self::Escape),
            _ => None,
        }
    }
}

/// Which carousel an input targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarouselTarget {
    /// The product carousel inside the category modal.
    Modal,
    /// The collections image strip.
    Collections,
}

/// Error returned when a carousel name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown carousel: {0}")]
pub struct UnknownCarousel(pub String);

impl FromStr for CarouselTarget {
    type Err = UnknownCarousel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "modal" => Ok(Self::Modal),
            "collections" => Ok(Self::Collections),
            other => Err(UnknownCarousel(other.to_string())),
        }
    }
}

impl CarouselTarget {
    /// Name used in URLs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Modal => "modal",
            Self::Collections => "collections",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_swipe_at_or_below_threshold_is_ignored() {
        assert_eq!(classify_swipe(0.0), None);
        assert_eq!(classify_swipe(39.9), None);
        assert_eq!(classify_swipe(40.0), None);
        assert_eq!(classify_swipe(-40.0), None);
    }

    #[test]
    fn test_rightward_swipe_goes_back() {
        assert_eq!(classify_swipe(40.5), Some(Direction::Prev));
        assert_eq!(classify_swipe(300.0), Some(Direction::Prev));
    }

    #[test]
    fn test_leftward_swipe_goes_forward() {
        assert_eq!(classify_swipe(-41.0), Some(Direction::Next));
    }

    #[test]
    fn test_non_finite_swipe_is_ignored() {
        assert_eq!(classify_swipe(f64::NAN), None);
        assert_eq!(classify_swipe(f64::INFINITY), None);
    }

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_name("ArrowLeft"), Some(Key::ArrowLeft));
        assert_eq!(Key::from_name("ArrowRight"), Some(Key::ArrowRight));
        assert_eq!(Key::from_name("Escape"), Some(Key::Escape));
        assert_eq!(Key::from_name("Esc"), Some(Key::Escape));
        assert_eq!(Key::from_name("Enter"), None);
        assert_eq!(Key::from_name("arrowleft"), None);
    }

    #[test]
    fn test_carousel_target_round_trip() {
        for target in [CarouselTarget::Modal, CarouselTarget::Collections] {
            assert_eq!(target.as_str().parse::<CarouselTarget>().unwrap(), target);
        }
        let err = "hero".parse::<CarouselTarget>().unwrap_err();
        assert_eq!(err.to_string(), "unknown carousel: hero");
    }
}
