use crate::error::{CatalogError, ProductError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const DEFAULT_CATALOG: &str = include_str!("../../config/catalog.json");

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    pub id: u32,       // Identifier sent to the cart
    pub color: String, // Swatch color, any CSS color
    pub image: String, // Image path served from the site root
    pub quantity: u32, // Units available
}

/// Static description of the product shown on the card.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProductCatalog {
    pub brand: String,
    pub product: String,
    #[serde(default)]
    pub details: Vec<String>,
    pub variants: Vec<Variant>,
}

impl ProductCatalog {
    /// Parses and checks a catalog document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: ProductCatalog = serde_json::from_str(json)?;
        if catalog.variants.is_empty() {
            return Err(CatalogError::NoVariants);
        }
        let mut seen = HashSet::new();
        for variant in &catalog.variants {
            if !seen.insert(variant.id) {
                return Err(CatalogError::DuplicateVariant(variant.id));
            }
        }
        Ok(catalog)
    }

    /// The catalog bundled with the app from `config/catalog.json`.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(DEFAULT_CATALOG)
    }

    pub fn title(&self) -> String {
        format!("{} {}", self.brand, self.product)
    }
}

/// A catalog plus the variant the shopper is looking at.
///
/// Always points at a valid variant: the catalog is non-empty and
/// `select_variant` rejects out-of-range indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSelection {
    catalog: ProductCatalog,
    selected: usize,
}

impl ProductSelection {
    pub fn new(catalog: ProductCatalog) -> Result<Self, CatalogError> {
        if catalog.variants.is_empty() {
            return Err(CatalogError::NoVariants);
        }
        Ok(Self {
            catalog,
            selected: 0,
        })
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn select_variant(&mut self, index: usize) -> Result<(), ProductError> {
        let len = self.catalog.variants.len();
        if index >= len {
            return Err(ProductError::VariantOutOfRange { index, len });
        }
        self.selected = index;
        Ok(())
    }

    pub fn selected_variant(&self) -> &Variant {
        &self.catalog.variants[self.selected]
    }

    pub fn title(&self) -> String {
        self.catalog.title()
    }

    pub fn image(&self) -> &str {
        &self.selected_variant().image
    }

    pub fn in_stock(&self) -> bool {
        self.selected_variant().quantity > 0
    }

    /// The id to add to the cart, or `None` while the selected variant is sold out.
    pub fn add_to_cart_request(&self) -> Option<u32> {
        self.in_stock().then(|| self.selected_variant().id)
    }

    pub fn remove_from_cart_request(&self) -> u32 {
        self.selected_variant().id
    }
}
