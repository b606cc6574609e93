//! Order quantity.

use core::fmt;
use core::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// A positive item quantity.
///
/// Every constructor clamps, so a `Quantity` is never below one.
///
/// ```
/// use likha_core::Quantity;
///
/// assert_eq!(Quantity::from_input("3").get(), 3);
/// assert_eq!(Quantity::from_input("0").get(), 1);
/// assert_eq!(Quantity::from_input("-4").get(), 1);
/// assert_eq!(Quantity::from_input("abc").get(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(NonZeroU32);

impl Quantity {
    /// The minimum (and default) quantity.
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// Create a quantity, raising zero to one.
    #[must_use]
    pub fn new(value: u32) -> Self {
        NonZeroU32::new(value).map_or(Self::ONE, Self)
    }

    /// Create a quantity from a signed value, clamping into `1..=u32::MAX`.
    #[must_use]
    pub fn clamped(value: i64) -> Self {
        Self::new(u32::try_from(value.max(1)).unwrap_or(u32::MAX))
    }

    /// Create a quantity from raw form input.
    ///
    /// Input is read as a number the way a numeric form field would be:
    /// surrounding whitespace is ignored, fractions are truncated, and
    /// empty, non-numeric, zero or negative input yields one.
    #[must_use]
    pub fn from_input(raw: &str) -> Self {
        let Ok(value) = raw.trim().parse::<f64>() else {
            return Self::ONE;
        };
        if !value.is_finite() || value < 1.0 {
            return Self::ONE;
        }
        if value >= f64::from(u32::MAX) {
            return Self::new(u32::MAX);
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // range checked above
        Self::new(value.trunc() as u32)
    }

    /// The quantity as a plain integer.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
