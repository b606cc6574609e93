//! Event endpoint.
//!
//! `GET /events?<view state>&action=...` applies one [`Event`] to the restored
//! [`ViewController`] and redirects to the canonical page URL for the
//! resulting state. Links, the quantity form and the swipe/keyboard script
//! all land here, so every input channel goes through the same mutation.

use axum::extract::{Query, State};
use axum::response::Redirect;
use likha_core::{CarouselTarget, CloseTrigger, Direction, Event, Key, ViewController, ViewState};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::links::page_href;
use crate::state::AppState;

/// Query string of an event request: the view state plus the action.
///
/// The state fields are repeated here rather than flattened in, since
/// `serde_urlencoded` cannot deserialize numbers through `#[serde(flatten)]`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventQuery {
    pub category: Option<String>,
    pub item: Option<i64>,
    pub qty: Option<i64>,
    pub slide: Option<i64>,
    pub seed: Option<u64>,

    pub action: String,
    /// Which carousel a step, jump or swipe targets.
    pub carousel: Option<String>,
    /// Category slug for `open`.
    pub target: Option<String>,
    /// Zero-based slide for `goto`.
    pub to: Option<usize>,
    /// Net horizontal swipe displacement in pixels.
    pub dx: Option<f64>,
    /// Key name for `key`.
    pub key: Option<String>,
    /// Raw quantity input for `quantity`.
    pub value: Option<String>,
}

impl EventQuery {
    /// The view state the event applies to.
    #[must_use]
    pub fn state(&self) -> ViewState {
        ViewState {
            category: self.category.clone(),
            item: self.item,
            qty: self.qty,
            slide: self.slide,
            seed: self.seed,
        }
    }

    /// Decode the action into an event.
    ///
    /// Returns `Ok(None)` for input that is well-formed but means nothing,
    /// such as a key the page does not bind.
    ///
    /// # Errors
    ///
    /// Returns `AppError::BadRequest` for an unknown action or carousel, or a
    /// missing parameter.
    pub fn event(&self) -> Result<Option<Event>> {
        let event = match self.action.as_str() {
            "open" => Event::Open {
                category: require(self.target.clone(), "target")?,
            },
            "close" => Event::Close(CloseTrigger::Button),
            "backdrop" => Event::Close(CloseTrigger::Backdrop),
            "next" => Event::Step {
                target: self.carousel()?,
                direction: Direction::Next,
            },
            "prev" => Event::Step {
                target: self.carousel()?,
                direction: Direction::Prev,
            },
            "goto" => Event::GoTo {
                target: self.carousel()?,
                index: require(self.to, "to")?,
            },
            "swipe" => Event::Swipe {
                target: self.carousel()?,
                dx: require(self.dx, "dx")?,
            },
            "key" => match self.key.as_deref().and_then(Key::from_name) {
                Some(key) => Event::Key(key),
                None => return Ok(None),
            },
            "quantity" => Event::SetQuantity(self.value.clone().unwrap_or_default()),
            other => return Err(AppError::BadRequest(format!("unknown action: {other}"))),
        };
        Ok(Some(event))
    }

    fn carousel(&self) -> Result<CarouselTarget> {
        Ok(require(self.carousel.as_deref(), "carousel")?.parse()?)
    }
}

fn require<T>(value: Option<T>, name: &str) -> Result<T> {
    value.ok_or_else(|| AppError::BadRequest(format!("missing parameter: {name}")))
}

/// Where the browser should land after an event.
///
/// Collections events keep the strip in view; closing the modal returns to
/// the shop section it was opened from.
fn anchor_for(event: &Event, was_open: bool, is_open: bool) -> Option<&'static str> {
    match event {
        Event::Step {
            target: CarouselTarget::Collections,
            ..
        }
        | Event::GoTo {
            target: CarouselTarget::Collections,
            ..
        }
        | Event::Swipe {
            target: CarouselTarget::Collections,
            ..
        } => Some("collections"),
        _ if was_open && !is_open => Some("shop"),
        _ => None,
    }
}

/// Apply one event and redirect to the resulting page.
///
/// # Errors
///
/// Returns `AppError::BadRequest` when the action cannot be decoded.
#[instrument(skip(state, query), fields(action = %query.action))]
pub async fn apply_event(
    State(state): State<AppState>,
    Query(query): Query<EventQuery>,
) -> Result<Redirect> {
    let mut view = ViewController::restore(state.catalog(), &query.state());

    let Some(event) = query.event()? else {
        tracing::debug!("Ignoring unbound event");
        return Ok(Redirect::to(&page_href(&view.snapshot(query.seed), None)));
    };

    let was_open = view.modal().is_open();
    let changed = view.apply(event.clone());
    let anchor = anchor_for(&event, was_open, view.modal().is_open());

    tracing::debug!(?event, changed, "Applied view event");
    add_breadcrumb(
        "view",
        &query.action,
        Some(&[("changed", if changed { "true" } else { "false" })]),
    );

    Ok(Redirect::to(&page_href(&view.snapshot(query.seed), anchor)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn query(action: &str) -> EventQuery {
        EventQuery {
            action: action.to_string(),
            ..EventQuery::default()
        }
    }

    #[test]
    fn test_decodes_open() {
        let q = EventQuery {
            target: Some("pouches".to_string()),
            ..query("open")
        };
        assert_eq!(
            q.event().unwrap(),
            Some(Event::Open {
                category: "pouches".to_string()
            })
        );
    }

    #[test]
    fn test_decodes_carousel_actions() {
        let q = EventQuery {
            carousel: Some("collections".to_string()),
            to: Some(5),
            ..query("goto")
        };
        assert_eq!(
            q.event().unwrap(),
            Some(Event::GoTo {
                target: CarouselTarget::Collections,
                index: 5
            })
        );

        let q = EventQuery {
            carousel: Some("modal".to_string()),
            dx: Some(-72.5),
            ..query("swipe")
        };
        assert_eq!(
            q.event().unwrap(),
            Some(Event::Swipe {
                target: CarouselTarget::Modal,
                dx: -72.5
            })
        );
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(query("dance").event(), Err(AppError::BadRequest(_))));
        assert!(matches!(query("next").event(), Err(AppError::BadRequest(_))));
        assert!(matches!(query("open").event(), Err(AppError::BadRequest(_))));

        let q = EventQuery {
            carousel: Some("sidebar".to_string()),
            ..query("prev")
        };
        assert!(matches!(q.event(), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let q = EventQuery {
            key: Some("Enter".to_string()),
            ..query("key")
        };
        assert_eq!(q.event().unwrap(), None);
        assert_eq!(query("key").event().unwrap(), None);
    }

    #[test]
    fn test_missing_quantity_value_is_empty_input() {
        assert_eq!(
            query("quantity").event().unwrap(),
            Some(Event::SetQuantity(String::new()))
        );
    }

    #[test]
    fn test_anchor_for_events() {
        let swipe = Event::Swipe {
            target: CarouselTarget::Collections,
            dx: 50.0,
        };
        assert_eq!(anchor_for(&swipe, false, false), Some("collections"));

        let close = Event::Close(CloseTrigger::Backdrop);
        assert_eq!(anchor_for(&close, true, false), Some("shop"));
        assert_eq!(anchor_for(&Event::Key(Key::Escape), true, false), Some("shop"));

        let step = Event::Step {
            target: CarouselTarget::Modal,
            direction: Direction::Next,
        };
        assert_eq!(anchor_for(&step, true, true), None);
    }
}
