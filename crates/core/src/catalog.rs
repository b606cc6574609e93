//! Static product catalog.
//!
//! The catalog is fixed at build time: categories in display order, each with
//! an ordered list of products, plus the images shown in the collections strip.

use serde::{Deserialize, Serialize};

use crate::types::Price;

/// A single product shown in the category modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: Price,
    /// Image path under the static asset root.
    pub image: String,
}

impl Product {
    fn new(name: &str, price: u32, image: &str) -> Self {
        Self {
            name: name.to_string(),
            price: Price::pesos(price),
            image: image.to_string(),
        }
    }
}

/// A named grouping of products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Display name, e.g. "Tote Bags".
    pub name: String,
    /// URL key, e.g. "tote-bags".
    pub slug: String,
    pub products: Vec<Product>,
}

impl Category {
    /// Image used for the category card (the first product's photo).
    #[must_use]
    pub fn cover_image(&self) -> Option<&str> {
        self.products.first().map(|p| p.image.as_str())
    }
}

/// All categories and collection images.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    categories: Vec<Category>,
    collection_images: Vec<String>,
}

impl Catalog {
    /// Create a catalog from explicit data.
    #[must_use]
    pub const fn new(categories: Vec<Category>, collection_images: Vec<String>) -> Self {
        Self {
            categories,
            collection_images,
        }
    }

    /// The shop's built-in catalog.
    #[must_use]
    pub fn builtin() -> Self {
        let categories = vec![
            Category {
                name: "Tote Bags".to_string(),
                slug: "tote-bags".to_string(),
                products: vec![
                    Product::new("Patchwork Tote A", 1299, "/static/images/products/tote-bags/sample-1.jpg"),
                    Product::new("Patchwork Tote B", 1399, "/static/images/products/tote-bags/sample-2.jpg"),
                    Product::new("Patchwork Tote C", 1499, "/static/images/products/tote-bags/sample-3.jpg"),
                ],
            },
            Category {
                name: "Pouches".to_string(),
                slug: "pouches".to_string(),
                products: vec![
                    Product::new("Mini Pouch A", 399, "/static/images/products/pouches/sample-1.jpg"),
                    Product::new("Mini Pouch B", 449, "/static/images/products/pouches/sample-2.jpg"),
                    Product::new("Mini Pouch C", 499, "/static/images/products/pouches/sample-3.jpg"),
                ],
            },
            Category {
                name: "Coin Purses".to_string(),
                slug: "coin-purses".to_string(),
                products: vec![
                    Product::new("Coin Purse A", 299, "/static/images/products/coin-purses/sample-1.jpg"),
                    Product::new("Coin Purse B", 329, "/static/images/products/coin-purses/sample-2.jpg"),
                    Product::new("Coin Purse C", 349, "/static/images/products/coin-purses/sample-3.jpg"),
                ],
            },
        ];

        let collection_images = (1..=8)
            .map(|i| format!("/static/images/products/caro{i}.jpg"))
            .collect();

        Self::new(categories, collection_images)
    }

    /// Categories in display order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a category by slug.
    #[must_use]
    pub fn category(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.slug == slug)
    }

    /// Products for a category, or an empty slice when the category is unknown.
    #[must_use]
    pub fn products(&self, slug: &str) -> &[Product] {
        self.category(slug)
            .map(|c| c.products.as_slice())
            .unwrap_or_default()
    }

    /// Images shown in the collections strip.
    #[must_use]
    pub fn collection_images(&self) -> &[String] {
        &self.collection_images
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
