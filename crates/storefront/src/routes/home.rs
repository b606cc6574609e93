//! Home page route handler.
//!
//! The whole storefront is this one page. The handler restores the
//! [`ViewController`] from the query string and turns it into template views:
//! every control becomes a precomputed `/events` link for the current state.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use likha_core::background::{self, Bubble};
use likha_core::{CarouselTarget, SWIPE_THRESHOLD_PX, ViewController, ViewState};
use tracing::instrument;

use crate::filters;
use crate::links::{event_href, state_params};
use crate::middleware::CspNonce;
use crate::state::AppState;

/// Shown in the modal when a category has no products.
pub const EMPTY_CATEGORY_MESSAGE: &str = "No items yet. Add images to the folder.";

// =============================================================================
// View Models
// =============================================================================

/// A card in the category grid.
#[derive(Clone, Debug)]
pub struct CategoryCardView {
    pub name: String,
    pub image: Option<String>,
    pub item_count: usize,
    /// Opens the modal on this category.
    pub open_href: String,
}

/// A "go to slide" dot under the collections strip.
#[derive(Clone, Debug)]
pub struct DotView {
    pub href: String,
    pub label: String,
    pub active: bool,
}

/// The collections carousel.
#[derive(Clone, Debug)]
pub struct CollectionsView {
    pub image: Option<String>,
    pub alt: String,
    pub prev_href: String,
    pub next_href: String,
    /// Base URL the swipe script appends `&dx=` to.
    pub swipe_href: String,
    pub dots: Vec<DotView>,
}

/// The product on display in the modal.
#[derive(Clone, Debug)]
pub struct ProductView {
    pub name: String,
    pub price: String,
    pub image: String,
}

/// A hidden form field carrying view state.
#[derive(Clone, Debug)]
pub struct HiddenField {
    pub name: &'static str,
    pub value: String,
}

/// The open product modal.
#[derive(Clone, Debug)]
pub struct ModalView {
    pub title: String,
    pub product: Option<ProductView>,
    pub position: usize,
    pub item_count: usize,
    pub quantity: u32,
    pub close_href: String,
    pub backdrop_href: String,
    pub prev_href: String,
    pub next_href: String,
    pub swipe_href: String,
    /// Base URL the keyboard script appends `&key=` to.
    pub key_href: String,
    /// State fields for the quantity form.
    pub state_fields: Vec<HiddenField>,
    pub empty_message: &'static str,
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Nonce for the inline bubble `<style>` block.
    pub nonce: String,
    pub order_form_url: String,
    pub bubbles: Vec<Bubble>,
    /// Swipe distance the touch script must exceed before reporting.
    pub swipe_min_px: f64,
    pub categories: Vec<CategoryCardView>,
    pub collections: CollectionsView,
    pub modal: Option<ModalView>,
}

// =============================================================================
// View Construction
// =============================================================================

fn category_cards(view: &ViewController<'_>, state: &ViewState) -> Vec<CategoryCardView> {
    view.catalog()
        .categories()
        .iter()
        .map(|category| CategoryCardView {
            name: category.name.clone(),
            image: category.cover_image().map(String::from),
            item_count: category.products.len(),
            open_href: event_href(state, "open", &[("target", category.slug.as_str())]),
        })
        .collect()
}

fn collections_view(view: &ViewController<'_>, state: &ViewState) -> CollectionsView {
    let carousel = view.collections();
    let target = CarouselTarget::Collections.as_str();

    let dots = (0..carousel.len())
        .map(|i| {
            let to = i.to_string();
            DotView {
                href: event_href(state, "goto", &[("carousel", target), ("to", to.as_str())]),
                label: format!("Go to slide {}", i + 1),
                active: i == carousel.index(),
            }
        })
        .collect();

    CollectionsView {
        image: view.current_collection_image().map(String::from),
        alt: format!("Collection {}", carousel.position()),
        prev_href: event_href(state, "prev", &[("carousel", target)]),
        next_href: event_href(state, "next", &[("carousel", target)]),
        swipe_href: event_href(state, "swipe", &[("carousel", target)]),
        dots,
    }
}

fn modal_view(view: &ViewController<'_>, state: &ViewState) -> Option<ModalView> {
    let open = view.modal().as_open()?;
    let target = CarouselTarget::Modal.as_str();

    let title = view
        .catalog()
        .category(open.category())
        .map_or_else(|| open.category().to_string(), |c| c.name.clone());

    let product = view.current_product().map(|p| ProductView {
        name: p.name.clone(),
        price: p.price.to_string(),
        image: p.image.clone(),
    });

    let state_fields = state_params(state)
        .into_iter()
        .map(|(name, value)| HiddenField { name, value })
        .collect();

    Some(ModalView {
        title,
        product,
        position: open.carousel().position(),
        item_count: open.carousel().len(),
        quantity: open.quantity().get(),
        close_href: event_href(state, "close", &[]),
        backdrop_href: event_href(state, "backdrop", &[]),
        prev_href: event_href(state, "prev", &[("carousel", target)]),
        next_href: event_href(state, "next", &[("carousel", target)]),
        swipe_href: event_href(state, "swipe", &[("carousel", target)]),
        key_href: event_href(state, "key", &[]),
        state_fields,
        empty_message: EMPTY_CATEGORY_MESSAGE,
    })
}

/// Build the page for a controller state and background seed.
#[must_use]
pub fn render_page(
    view: &ViewController<'_>,
    seed: u64,
    nonce: &CspNonce,
    order_form_url: &str,
) -> HomeTemplate {
    let state = view.snapshot(Some(seed));

    HomeTemplate {
        nonce: nonce.value().to_string(),
        order_form_url: order_form_url.to_string(),
        bubbles: background::generate(seed),
        swipe_min_px: SWIPE_THRESHOLD_PX,
        categories: category_cards(view, &state),
        collections: collections_view(view, &state),
        modal: modal_view(view, &state),
    }
}

// =============================================================================
// Handler
// =============================================================================

/// Display the home page.
///
/// A first visit (no `seed` in the query) picks a fresh background seed;
/// every link on the page carries it from then on.
#[instrument(skip(state, nonce))]
pub async fn home(
    State(state): State<AppState>,
    nonce: CspNonce,
    Query(query): Query<ViewState>,
) -> HomeTemplate {
    let seed = query.seed.unwrap_or_else(background::fresh_seed);
    let view = ViewController::restore(state.catalog(), &query);

    tracing::debug!(
        modal_open = view.modal().is_open(),
        slide = view.collections().index(),
        "Rendering home page"
    );

    render_page(
        &view,
        seed,
        &nonce,
        state.config().order_form_url.as_str(),
    )
}
