use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// An item which can be put into the knapsack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// A value of the item.
    pub value: u32,
    /// A weight of the item, always positive.
    pub weight: u32,
}

impl Item {
    /// Creates a new instance of `Item`.
    pub fn new(value: u32, weight: u32) -> Self {
        Self { value, weight }
    }

    /// Returns value per weight unit.
    pub fn ratio(&self) -> f64 {
        self.value as f64 / self.weight as f64
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.value, self.weight)
    }
}

/// Represents a knapsack problem: a fixed list of items and a weight limit.
/// It is read-only once created and can be shared between the driver and the updater.
#[derive(Clone, Debug, PartialEq)]
pub struct KnapsackProblem {
    /// Items to select from. A chromosome has exactly one gen per item.
    pub items: Vec<Item>,
    /// A maximum total weight of selected items.
    pub weight_limit: u64,
}

impl KnapsackProblem {
    /// Creates a new instance of `KnapsackProblem`.
    pub fn new(items: Vec<Item>, weight_limit: u64) -> Self {
        Self { items, weight_limit }
    }

    /// Returns amount of items.
    pub fn size(&self) -> usize {
        self.items.len()
    }
}
