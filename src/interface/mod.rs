pub mod render;

pub use render::{
    display_comparison, display_food_list, display_report, CompareReport, SolveReport,
};
