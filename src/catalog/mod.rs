mod filter;
mod loader;

pub use filter::filter_by_weight;
pub use loader::{load_catalog, read_catalog};
