//! The view controller.
//!
//! [`ViewController`] owns all UI state of the page: the product modal and the
//! collections carousel. Every input channel (clicks, swipes, key presses,
//! the quantity field) is expressed as an [`Event`] and fed through
//! [`ViewController::apply`], the only place state changes.
//!
//! State round-trips through [`ViewState`], the flat snapshot carried in page
//! URLs.

use serde::{Deserialize, Serialize};

use crate::carousel::Carousel;
use crate::catalog::{Catalog, Product};
use crate::gesture::{CarouselTarget, Direction, Key, classify_swipe};
use crate::modal::{CloseTrigger, Modal, OpenModal};
use crate::types::Quantity;

/// Flat snapshot of the view state, as carried in a query string.
///
/// A missing `category` means the modal is closed; `item` and `qty` are only
/// meaningful while it is open. Out-of-range values are normalised on
/// [`ViewController::restore`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qty: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slide: Option<i64>,
    /// Seed for the decorative background.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// A single input to the view controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Open the modal on a category (by slug).
    Open { category: String },
    /// Close the modal.
    Close(CloseTrigger),
    /// Step a carousel one item.
    Step {
        target: CarouselTarget,
        direction: Direction,
    },
    /// Jump a carousel to an item.
    GoTo { target: CarouselTarget, index: usize },
    /// A horizontal swipe with net displacement `dx` pixels.
    Swipe { target: CarouselTarget, dx: f64 },
    /// A key press.
    Key(Key),
    /// Raw input from the quantity field.
    SetQuantity(String),
}

/// UI state for one page view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewController<'a> {
    catalog: &'a Catalog,
    modal: Modal,
    collections: Carousel,
}

impl<'a> ViewController<'a> {
    /// Initial page state: modal closed, collections at the first slide.
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            modal: Modal::Closed,
            collections: Carousel::new(catalog.collection_images().len()),
        }
    }

    /// Rebuild the controller from a URL snapshot.
    #[must_use]
    pub fn restore(catalog: &'a Catalog, state: &ViewState) -> Self {
        let modal = state.category.as_deref().map_or(Modal::Closed, |slug| {
            Modal::restore(
                slug,
                catalog.products(slug).len(),
                state.item.unwrap_or(0),
                state.qty.map_or(Quantity::ONE, Quantity::clamped),
            )
        });
        let collections = Carousel::at(
            catalog.collection_images().len(),
            state.slide.unwrap_or(0),
        );

        Self {
            catalog,
            modal,
            collections,
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    #[must_use]
    pub const fn modal(&self) -> &Modal {
        &self.modal
    }

    #[must_use]
    pub const fn collections(&self) -> &Carousel {
        &self.collections
    }

    /// Products of the open category; empty when closed or unknown.
    #[must_use]
    pub fn modal_products(&self) -> &'a [Product] {
        self.modal
            .as_open()
            .map(|open| self.catalog.products(open.category()))
            .unwrap_or_default()
    }

    /// The product currently shown in the modal.
    #[must_use]
    pub fn current_product(&self) -> Option<&'a Product> {
        let open = self.modal.as_open()?;
        self.catalog
            .products(open.category())
            .get(open.carousel().index())
    }

    /// The collection image currently shown.
    #[must_use]
    pub fn current_collection_image(&self) -> Option<&'a str> {
        self.catalog
            .collection_images()
            .get(self.collections.index())
            .map(String::as_str)
    }

    /// Apply one event. Returns whether the state changed.
    pub fn apply(&mut self, event: Event) -> bool {
        let before = (self.modal.clone(), self.collections);

        match event {
            Event::Open { category } => {
                let len = self.catalog.products(&category).len();
                self.modal = Modal::open(category, len);
            }
            Event::Close(_) => {
                self.modal.close();
            }
            Event::Step { target, direction } => {
                if let Some(carousel) = self.carousel_mut(target) {
                    carousel.step(direction);
                }
            }
            Event::GoTo { target, index } => {
                if let Some(carousel) = self.carousel_mut(target) {
                    carousel.go_to(index);
                }
            }
            Event::Swipe { target, dx } => {
                if let (Some(direction), Some(carousel)) =
                    (classify_swipe(dx), self.carousel_mut(target))
                {
                    carousel.step(direction);
                }
            }
            Event::Key(key) => self.apply_key(key),
            Event::SetQuantity(raw) => {
                if let Some(open) = self.modal.as_open_mut() {
                    open.set_quantity(Quantity::from_input(&raw));
                }
            }
        }

        before != (self.modal.clone(), self.collections)
    }

    /// Keys only act while the modal is open.
    fn apply_key(&mut self, key: Key) {
        if !self.modal.is_open() {
            return;
        }
        let direction = match key {
            Key::Escape => {
                self.modal.close();
                return;
            }
            Key::ArrowLeft => Direction::Prev,
            Key::ArrowRight => Direction::Next,
        };
        if let Some(carousel) = self.carousel_mut(CarouselTarget::Modal) {
            carousel.step(direction);
        }
    }

    /// The carousel an event targets, if it is currently interactive.
    fn carousel_mut(&mut self, target: CarouselTarget) -> Option<&mut Carousel> {
        match target {
            CarouselTarget::Modal => self.modal.as_open_mut().map(OpenModal::carousel_mut),
            CarouselTarget::Collections => Some(&mut self.collections),
        }
    }

    /// Canonical snapshot of the current state.
    #[must_use]
    pub fn snapshot(&self, seed: Option<u64>) -> ViewState {
        let (category, item, qty) = self.modal.as_open().map_or((None, None, None), |open| {
            (
                Some(open.category().to_string()),
                i64::try_from(open.carousel().index()).ok(),
                Some(i64::from(open.quantity().get())),
            )
        });

        ViewState {
            category,
            item,
            qty,
            slide: i64::try_from(self.collections.index()).ok(),
            seed,
        }
    }
}
