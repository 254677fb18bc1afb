//! Errors raised by the widget's state models.
use std::fmt;
use thiserror::Error;

/// A single failed check on a draft review.
///
/// The `Display` strings are shown to the user verbatim.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name required")]
    NameRequired,
    #[error("Rating required")]
    RatingRequired,
    #[error("Review required")]
    ReviewRequired,
    #[error("Would recommend required")]
    RecommendRequired,
}

/// Every check that failed on a submission, in name, rating, review, recommend order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }

    pub fn contains(&self, error: ValidationError) -> bool {
        self.0.contains(&error)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages().join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RatingError {
    #[error("rating {0} is outside 1-5")]
    OutOfRange(u8),
    #[error("rating {0:?} is not a number")]
    NotANumber(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProductError {
    #[error("variant index {index} is out of range ({len} variants)")]
    VariantOutOfRange { index: usize, len: usize },
}

/// Problems found while loading the product catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog has no variants")]
    NoVariants,
    #[error("variant id {0} appears more than once")]
    DuplicateVariant(u32),
}
