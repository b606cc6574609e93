//! Likha Core - page state for the Likha storefront.
//!
//! This crate holds everything the storefront page knows, with no I/O:
//!
//! - [`catalog`] - Static categories, products and collection images
//! - [`types`] - Price and quantity value types
//! - [`carousel`] - Wrapping index controller shared by both carousels
//! - [`gesture`] - Swipe threshold and key classification
//! - [`modal`] - Product modal lifecycle
//! - [`controller`] - The view controller that applies input events
//! - [`background`] - Seeded generator for the decorative background
//!
//! # Example
//!
//! ```
//! use likha_core::{Catalog, CarouselTarget, Direction, Event, ViewController};
//!
//! let catalog = Catalog::builtin();
//! let mut view = ViewController::new(&catalog);
//!
//! view.apply(Event::Open { category: "pouches".to_string() });
//! for _ in 0..3 {
//!     view.apply(Event::Step { target: CarouselTarget::Modal, direction: Direction::Next });
//! }
//! assert_eq!(view.current_product().map(|p| p.name.as_str()), Some("Mini Pouch A"));
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod background;
pub mod carousel;
pub mod catalog;
pub mod controller;
pub mod gesture;
pub mod modal;
pub mod types;

pub use background::Bubble;
pub use carousel::Carousel;
pub use catalog::{Catalog, Category, Product};
pub use controller::{Event, ViewController, ViewState};
pub use gesture::{CarouselTarget, Direction, Key, SWIPE_THRESHOLD_PX, classify_swipe};
pub use modal::{CloseTrigger, Modal, OpenModal};
pub use types::*;
