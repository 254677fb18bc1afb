// src/models/review.rs
use crate::error::{RatingError, ValidationError, ValidationErrors};
use crate::relay::{EventRelay, RelayEvent};
use leptos::logging::log;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Star rating between 1 and 5.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// All ratings, highest first, in the order the form offers them.
    pub fn choices() -> impl Iterator<Item = Rating> {
        (Self::MIN..=Self::MAX).rev().map(Rating)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Rating(value))
        } else {
            Err(RatingError::OutOfRange(value))
        }
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> u8 {
        rating.0
    }
}

impl FromStr for Rating {
    type Err = RatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u8>()
            .map_err(|_| RatingError::NotANumber(s.to_string()))?;
        Rating::try_from(value)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A submitted review. Only ever built by [`DraftReview::submit`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub name: String,          // Reviewer name
    pub body: String,          // Review text
    pub rating: Rating,        // 1-5 stars
    pub would_recommend: bool, // Whether the reviewer recommends the product
}

/// Form state for a review that has not been submitted yet.
///
/// Empty strings count as missing, `None` as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftReview {
    pub name: String,
    pub body: String,
    pub rating: Option<Rating>,
    pub would_recommend: Option<bool>,
}

impl DraftReview {
    /// Runs every check and returns the failures in display order.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if self.name.is_empty() {
            errors.push(ValidationError::NameRequired);
        }
        if self.rating.is_none() {
            errors.push(ValidationError::RatingRequired);
        }
        if self.body.is_empty() {
            errors.push(ValidationError::ReviewRequired);
        }
        if self.would_recommend.is_none() {
            errors.push(ValidationError::RecommendRequired);
        }
        errors
    }

    /// Validates the draft and, if it passes, publishes the review on `relay`.
    ///
    /// On success the name, body and rating are cleared; the recommend answer is kept.
    /// On failure nothing is published and the draft is left as it was.
    pub fn submit(&mut self, relay: &EventRelay) -> Result<Review, ValidationErrors> {
        let review = match (self.rating, self.would_recommend) {
            (Some(rating), Some(would_recommend))
                if !self.name.is_empty() && !self.body.is_empty() =>
            {
                Review {
                    name: self.name.clone(),
                    body: self.body.clone(),
                    rating,
                    would_recommend,
                }
            }
            _ => {
                let errors = ValidationErrors(self.validate());
                log!("[REVIEW] Submission rejected: {}", errors);
                return Err(errors);
            }
        };

        relay.publish(RelayEvent::ReviewSubmitted(review.clone()));
        log!("[REVIEW] Published review from {}", review.name);

        self.name.clear();
        self.body.clear();
        self.rating = None;
        Ok(review)
    }
}

/// Reviews received over the relay, in arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewLog {
    reviews: Vec<Review>,
}

impl ReviewLog {
    pub fn receive(&mut self, review: Review) {
        self.reviews.push(review);
    }

    pub fn has_reviews(&self) -> bool {
        !self.reviews.is_empty()
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }
}
