//! Contains the data model of the knapsack problem and its genetic encoding.

mod chromosome;
pub use self::chromosome::*;

mod population;
pub use self::population::*;

mod problem;
pub use self::problem::*;
