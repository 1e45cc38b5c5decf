use std::borrow::Borrow;

use crate::models::FoodItem;

/// Pick the heaviest feasible selection by enumerating every subset.
///
/// The baseline the dynamic solver is measured against: O(n * 2^n) time,
/// intentionally exponential, for small catalogs only. Subsets are walked
/// via a 64-bit mask, so the catalog must hold fewer than 64 items; callers
/// are expected to guard the bound, e.g. with
/// [`filter_by_weight`](crate::catalog::filter_by_weight).
///
/// The budget is compared as-is (no rounding). Ties on total weight keep the
/// first subset seen, and the empty subset is always a candidate, so a
/// negative budget or an unfittable catalog yields an empty selection.
///
/// # Panics
///
/// Panics if the catalog holds 64 or more items.
pub fn solve_exhaustive<'a, T: Borrow<FoodItem>>(foods: &'a [T], budget: f64) -> Vec<&'a FoodItem> {
    assert!(
        foods.len() < 64,
        "exhaustive search is limited to 63 items, got {}",
        foods.len()
    );

    let mut best_mask = 0_u64;
    let mut best_weight = 0.0_f64;

    for mask in 0..(1_u64 << foods.len()) {
        let mut calories = 0.0;
        let mut weight = 0.0;

        for (j, food) in foods.iter().enumerate() {
            if mask & (1 << j) != 0 {
                let food = food.borrow();
                calories += food.calories();
                weight += food.weight();
            }
        }

        if calories <= budget && weight > best_weight {
            best_weight = weight;
            best_mask = mask;
        }
    }

    foods
        .iter()
        .enumerate()
        .filter(|(j, _)| best_mask & (1 << j) != 0)
        .map(|(_, food)| food.borrow())
        .collect()
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;

    use super::*;
    use crate::models::sum_foods;

    fn item(name: &str, calories: f64, weight: f64) -> FoodItem {
        FoodItem::new(name, calories, weight).unwrap()
    }

    fn names(selection: &[&FoodItem]) -> Vec<String> {
        selection.iter().map(|f| f.description().to_string()).collect()
    }

    #[test]
    fn test_worked_example_prefers_bar() {
        let catalog = vec![
            item("apple", 95.0, 4.0),
            item("cookie", 50.0, 1.5),
            item("bar", 150.0, 6.0),
        ];
        let selection = solve_exhaustive(&catalog, 150.0);
        assert_eq!(names(&selection), ["bar"]);
        assert_float_absolute_eq!(sum_foods(&selection).weight, 6.0);
    }

    #[test]
    fn test_result_in_original_index_order() {
        let catalog = vec![
            item("cookie", 50.0, 1.5),
            item("brick", 500.0, 99.0),
            item("apple", 95.0, 4.0),
        ];
        assert_eq!(names(&solve_exhaustive(&catalog, 150.0)), ["cookie", "apple"]);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog: Vec<FoodItem> = Vec::new();
        assert!(solve_exhaustive(&catalog, 100.0).is_empty());
    }

    #[test]
    fn test_zero_budget() {
        let catalog = vec![item("apple", 95.0, 4.0)];
        assert!(solve_exhaustive(&catalog, 0.0).is_empty());
    }

    #[test]
    fn test_negative_budget() {
        // Even the empty subset is not strictly better than the default
        // empty best, so the result stays empty.
        let catalog = vec![item("apple", 95.0, 4.0)];
        assert!(solve_exhaustive(&catalog, -1.0).is_empty());
    }

    #[test]
    fn test_budget_not_rounded() {
        let catalog = vec![item("apple", 95.0, 4.0)];
        assert!(solve_exhaustive(&catalog, 94.9).is_empty());
        assert_eq!(names(&solve_exhaustive(&catalog, 95.0)), ["apple"]);
    }

    #[test]
    fn test_first_seen_wins_ties() {
        // Identical weights: the lower-index subset is kept.
        let catalog = vec![item("first", 10.0, 2.0), item("second", 10.0, 2.0)];
        assert_eq!(names(&solve_exhaustive(&catalog, 15.0)), ["first"]);
    }

    #[test]
    fn test_zero_weight_items_never_improve() {
        let catalog = vec![item("water", 1.0, 0.0)];
        assert!(solve_exhaustive(&catalog, 10.0).is_empty());
    }

    #[test]
    #[should_panic(expected = "limited to 63 items")]
    fn test_too_many_items_panics() {
        let catalog: Vec<FoodItem> = (0..64)
            .map(|i| item(&format!("food{i}"), 1.0, 1.0))
            .collect();
        let _ = solve_exhaustive(&catalog, 10.0);
    }

    #[test]
    fn test_accepts_borrowed_catalog() {
        let catalog = vec![item("apple", 95.0, 4.0), item("bar", 150.0, 6.0)];
        let borrowed: Vec<&FoodItem> = catalog.iter().collect();
        assert_eq!(names(&solve_exhaustive(&borrowed, 150.0)), ["bar"]);
    }
}
