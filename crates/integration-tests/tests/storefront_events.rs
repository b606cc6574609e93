//! Integration tests for `/events`: every interaction is one redirect.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use likha_core::SWIPE_THRESHOLD_PX;
use likha_integration_tests::{follow, get, location};

/// Redirect target for an event request.
async fn redirect(uri: &str) -> String {
    let response = get(uri).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER, "{uri}");
    location(&response).to_string()
}

const POUCHES: &str = "category=pouches&qty=1&slide=0&seed=1";

fn modal_event(item: usize, action: &str) -> String {
    format!("/events?{POUCHES}&item={item}&action={action}")
}

// =============================================================================
// Modal
// =============================================================================

#[tokio::test]
async fn test_open_category() {
    assert_eq!(
        redirect("/events?slide=0&seed=1&action=open&target=pouches").await,
        "/?category=pouches&item=0&qty=1&slide=0&seed=1"
    );
}

#[tokio::test]
async fn test_open_then_render() {
    let (target, html) = follow("/events?seed=1&action=open&target=coin-purses").await;
    assert_eq!(target, "/?category=coin-purses&item=0&qty=1&slide=0&seed=1");
    assert!(html.contains("Coin Purse A"));
    assert!(html.contains("₱299"));
}

#[tokio::test]
async fn test_reopen_resets_item_and_quantity() {
    assert_eq!(
        redirect("/events?category=pouches&item=2&qty=4&slide=3&seed=1&action=open&target=tote-bags")
            .await,
        "/?category=tote-bags&item=0&qty=1&slide=3&seed=1"
    );
}

#[tokio::test]
async fn test_modal_next_wraps() {
    let uri = format!("{}&carousel=modal", modal_event(2, "next"));
    assert_eq!(
        redirect(&uri).await,
        "/?category=pouches&item=0&qty=1&slide=0&seed=1"
    );
}

#[tokio::test]
async fn test_modal_prev_wraps() {
    let uri = format!("{}&carousel=modal", modal_event(0, "prev"));
    assert_eq!(
        redirect(&uri).await,
        "/?category=pouches&item=2&qty=1&slide=0&seed=1"
    );
}

#[tokio::test]
async fn test_close_returns_to_shop() {
    for action in ["close", "backdrop"] {
        assert_eq!(
            redirect(&modal_event(1, action)).await,
            "/?slide=0&seed=1#shop",
            "{action}"
        );
    }
}

#[tokio::test]
async fn test_close_when_closed_is_noop() {
    assert_eq!(
        redirect("/events?slide=2&seed=1&action=close").await,
        "/?slide=2&seed=1"
    );
}

// =============================================================================
// Swipes
// =============================================================================

#[tokio::test]
async fn test_swipe_threshold() {
    let swipe = |dx: f64| format!("{}&carousel=modal&dx={dx}", modal_event(0, "swipe"));
    let past = SWIPE_THRESHOLD_PX + 1.0;

    // Exactly the threshold is not enough
    assert_eq!(
        redirect(&swipe(SWIPE_THRESHOLD_PX)).await,
        "/?category=pouches&item=0&qty=1&slide=0&seed=1"
    );
    assert_eq!(
        redirect(&swipe(-SWIPE_THRESHOLD_PX)).await,
        "/?category=pouches&item=0&qty=1&slide=0&seed=1"
    );
    // Rightward swipe goes back, leftward goes forward
    assert_eq!(
        redirect(&swipe(past)).await,
        "/?category=pouches&item=2&qty=1&slide=0&seed=1"
    );
    assert_eq!(
        redirect(&swipe(-past)).await,
        "/?category=pouches&item=1&qty=1&slide=0&seed=1"
    );
}

#[tokio::test]
async fn test_collections_swipe() {
    assert_eq!(
        redirect("/events?slide=0&seed=1&action=swipe&carousel=collections&dx=-120").await,
        "/?slide=1&seed=1#collections"
    );
    assert_eq!(
        redirect("/events?slide=0&seed=1&action=swipe&carousel=collections&dx=120").await,
        "/?slide=7&seed=1#collections"
    );
}

#[tokio::test]
async fn test_modal_swipe_when_closed_is_noop() {
    assert_eq!(
        redirect("/events?slide=4&seed=1&action=swipe&carousel=modal&dx=-200").await,
        "/?slide=4&seed=1"
    );
}

// =============================================================================
// Keyboard
// =============================================================================

#[tokio::test]
async fn test_arrow_keys_step_modal() {
    assert_eq!(
        redirect(&format!("{}&key=ArrowRight", modal_event(0, "key"))).await,
        "/?category=pouches&item=1&qty=1&slide=0&seed=1"
    );
    assert_eq!(
        redirect(&format!("{}&key=ArrowLeft", modal_event(0, "key"))).await,
        "/?category=pouches&item=2&qty=1&slide=0&seed=1"
    );
}

#[tokio::test]
async fn test_escape_closes_modal() {
    assert_eq!(
        redirect(&format!("{}&key=Escape", modal_event(2, "key"))).await,
        "/?slide=0&seed=1#shop"
    );
}

#[tokio::test]
async fn test_escape_closes_after_quantity_edit() {
    let (target, html) = follow(&format!("{}&value=4", modal_event(1, "quantity"))).await;
    assert_eq!(target, "/?category=pouches&item=1&qty=4&slide=0&seed=1");
    assert!(html.contains("data-key-href"));

    assert_eq!(
        redirect("/events?category=pouches&item=1&qty=4&slide=0&seed=1&action=key&key=Escape")
            .await,
        "/?slide=0&seed=1#shop"
    );
}

#[tokio::test]
async fn test_keys_ignored_when_closed() {
    assert_eq!(
        redirect("/events?slide=5&seed=1&action=key&key=ArrowRight").await,
        "/?slide=5&seed=1"
    );
    assert_eq!(
        redirect(&format!("{}&key=Enter", modal_event(1, "key"))).await,
        "/?category=pouches&item=1&qty=1&slide=0&seed=1"
    );
}

// =============================================================================
// Collections
// =============================================================================

#[tokio::test]
async fn test_collections_step_and_goto() {
    assert_eq!(
        redirect("/events?slide=7&seed=1&action=next&carousel=collections").await,
        "/?slide=0&seed=1#collections"
    );
    assert_eq!(
        redirect("/events?slide=0&seed=1&action=goto&carousel=collections&to=5").await,
        "/?slide=5&seed=1#collections"
    );
}

#[tokio::test]
async fn test_collections_independent_of_modal() {
    assert_eq!(
        redirect("/events?category=pouches&item=1&qty=2&slide=3&seed=1&action=prev&carousel=collections")
            .await,
        "/?category=pouches&item=1&qty=2&slide=2&seed=1#collections"
    );
}

// =============================================================================
// Quantity
// =============================================================================

#[tokio::test]
async fn test_quantity_is_clamped() {
    for (value, qty) in [("5", 5), ("0", 1), ("-4", 1), ("2.7", 2), ("abc", 1), ("", 1)] {
        let uri = format!("{}&value={value}", modal_event(0, "quantity"));
        assert_eq!(
            redirect(&uri).await,
            format!("/?category=pouches&item=0&qty={qty}&slide=0&seed=1"),
            "value {value:?}"
        );
    }
}

#[tokio::test]
async fn test_quantity_survives_navigation() {
    let uri = "/events?category=pouches&item=0&qty=3&slide=0&seed=1&action=next&carousel=modal";
    assert_eq!(
        redirect(uri).await,
        "/?category=pouches&item=1&qty=3&slide=0&seed=1"
    );
}

// =============================================================================
// Errors
// =============================================================================

#[tokio::test]
async fn test_bad_events_are_rejected() {
    for uri in [
        "/events?seed=1&action=dance",
        "/events?seed=1",
        "/events?seed=1&action=next",
        "/events?seed=1&action=next&carousel=sidebar",
        "/events?seed=1&action=open",
        "/events?seed=1&action=goto&carousel=collections&to=-1",
    ] {
        let response = get(uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
    }
}
