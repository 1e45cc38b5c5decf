use crate::models::FoodItem;

/// Select, in source order, the first `max_count` items whose weight falls
/// within the inclusive `[min_weight, max_weight]` range.
///
/// Out-of-range items are skipped, never an error, and scanning stops as
/// soon as `max_count` matches are collected. The main use is capping the
/// input size for the exhaustive solver, which requires fewer than 64 items.
pub fn filter_by_weight(
    foods: &[FoodItem],
    min_weight: f64,
    max_weight: f64,
    max_count: usize,
) -> Vec<&FoodItem> {
    let mut result = Vec::new();

    for food in foods {
        if result.len() == max_count {
            break;
        }
        if food.weight() >= min_weight && food.weight() <= max_weight {
            result.push(food);
        }
    }

    result
}
