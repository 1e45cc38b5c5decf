pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod solver;

pub use error::{MaxWeightError, Result};
pub use models::{sum_foods, FoodItem, Totals};
