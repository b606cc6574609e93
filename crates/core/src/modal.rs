//! Product modal lifecycle.
//!
//! ```text
//! Closed --open(category)--> Open { category, index: 0, quantity: 1 }
//! Open   --close-----------> Closed
//! ```
//!
//! Opening always starts from a fresh carousel and quantity. Nothing survives
//! a close/reopen cycle.

use crate::carousel::Carousel;
use crate::types::Quantity;

/// What caused the modal to close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CloseTrigger {
    /// The explicit close control.
    Button,
    /// A click on the backdrop around the dialog.
    Backdrop,
    /// The Escape key.
    Escape,
}

/// State of an open modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenModal {
    category: String,
    carousel: Carousel,
    quantity: Quantity,
}

impl OpenModal {
    /// Slug of the category being browsed.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub const fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub const fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.carousel
    }

    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub const fn set_quantity(&mut self, quantity: Quantity) {
        self.quantity = quantity;
    }
}

/// The product modal: closed, or open on one category.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    Closed,
    Open(OpenModal),
}

impl Modal {
    /// Open on `category`, which has `len` products.
    #[must_use]
    pub fn open(category: impl Into<String>, len: usize) -> Self {
        Self::Open(OpenModal {
            category: category.into(),
            carousel: Carousel::new(len),
            quantity: Quantity::ONE,
        })
    }

    /// Rebuild an open modal at a given position and quantity.
    ///
    /// The position is wrapped into range like [`Carousel::at`].
    #[must_use]
    pub fn restore(category: impl Into<String>, len: usize, index: i64, quantity: Quantity) -> Self {
        Self::Open(OpenModal {
            category: category.into(),
            carousel: Carousel::at(len, index),
            quantity,
        })
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    #[must_use]
    pub const fn as_open(&self) -> Option<&OpenModal> {
        match self {
            Self::Open(open) => Some(open),
            Self::Closed => None,
        }
    }

    pub const fn as_open_mut(&mut self) -> Option<&mut OpenModal> {
        match self {
            Self::Open(open) => Some(open),
            Self::Closed => None,
        }
    }

    /// Close the modal. Returns `false` if it was already closed.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        *self = Self::Closed;
        was_open
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_open_starts_fresh() {
        let modal = Modal::open("pouches", 3);
        let open = modal.as_open().unwrap();
        assert_eq!(open.category(), "pouches");
        assert_eq!(open.carousel().index(), 0);
        assert_eq!(open.quantity(), Quantity::ONE);
    }

    #[test]
    fn test_reopen_discards_previous_session() {
        let mut modal = Modal::restore("pouches", 3, 2, Quantity::new(5));
        modal.close();
        let modal = Modal::open("pouches", 3);
        let open = modal.as_open().unwrap();
        assert_eq!(open.carousel().index(), 0);
        assert_eq!(open.quantity().get(), 1);
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let mut modal = Modal::Closed;
        assert!(!modal.close());
        assert_eq!(modal, Modal::Closed);
    }

    #[test]
    fn test_close_when_open() {
        let mut modal = Modal::open("tote-bags", 3);
        assert!(modal.close());
        assert!(!modal.is_open());
    }

    #[test]
    fn test_restore_wraps_index() {
        let modal = Modal::restore("coin-purses", 3, 7, Quantity::ONE);
        assert_eq!(modal.as_open().unwrap().carousel().index(), 1);
    }
}
