pub mod dynamic;
pub mod exhaustive;

pub use dynamic::solve_dynamic;
pub use exhaustive::solve_exhaustive;
