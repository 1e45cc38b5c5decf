pub mod food;
pub mod totals;

pub use food::FoodItem;
pub use totals::{sum_foods, Totals};
