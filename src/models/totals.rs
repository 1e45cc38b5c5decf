use std::borrow::Borrow;

use serde::Serialize;

use crate::models::FoodItem;

/// Aggregate calories and weight of a food collection.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Totals {
    pub calories: f64,
    pub weight: f64,
}

/// Sum calories and weight over any collection of foods.
///
/// Works on an owned catalog (`&[FoodItem]`) and on a borrowed selection
/// (`&[&FoodItem]`) alike. Empty input yields (0, 0).
pub fn sum_foods<T: Borrow<FoodItem>>(foods: &[T]) -> Totals {
    let mut totals = Totals::default();
    for food in foods {
        let food = food.borrow();
        totals.calories += food.calories();
        totals.weight += food.weight();
    }
    totals
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;

    use super::*;

    fn sample_catalog() -> Vec<FoodItem> {
        vec![
            FoodItem::new("apple", 95.0, 4.0).unwrap(),
            FoodItem::new("cookie", 50.0, 1.5).unwrap(),
        ]
    }

    #[test]
    fn test_empty_sums_to_zero() {
        let totals = sum_foods::<FoodItem>(&[]);
        assert_eq!(totals.calories, 0.0);
        assert_eq!(totals.weight, 0.0);
    }

    #[test]
    fn test_owned_slice() {
        let catalog = sample_catalog();
        let totals = sum_foods(&catalog);
        assert_float_absolute_eq!(totals.calories, 145.0);
        assert_float_absolute_eq!(totals.weight, 5.5);
    }

    #[test]
    fn test_borrowed_selection() {
        let catalog = sample_catalog();
        let selection: Vec<&FoodItem> = vec![&catalog[1]];
        let totals = sum_foods(&selection);
        assert_float_absolute_eq!(totals.calories, 50.0);
        assert_float_absolute_eq!(totals.weight, 1.5);
    }
}
