use serde::{Deserialize, Serialize};

/// Variant ids added to the cart, in the order they were added.
/// Duplicates stand for quantity.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<u32>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, variant_id: u32) {
        self.items.push(variant_id);
    }

    /// Removes the first occurrence of `variant_id`. Returns `false` if it was not in the cart.
    pub fn remove(&mut self, variant_id: u32) -> bool {
        match self.items.iter().position(|&id| id == variant_id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[u32] {
        &self.items
    }

    pub fn count_of(&self, variant_id: u32) -> usize {
        self.items.iter().filter(|&&id| id == variant_id).count()
    }
}
