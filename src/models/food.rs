use serde::Serialize;

use crate::error::{MaxWeightError, Result};

/// One food item available for selection.
///
/// Immutable after construction; the catalog owns every item and solver
/// results borrow from it.
#[derive(Debug, Clone, Serialize)]
pub struct FoodItem {
    description: String,
    calories: f64,
    weight: f64,
}

impl FoodItem {
    /// Create a validated food item.
    ///
    /// Rejects an empty description, non-positive or non-finite calories,
    /// and negative or non-finite weight.
    pub fn new(description: impl Into<String>, calories: f64, weight: f64) -> Result<Self> {
        let description = description.into();

        if description.is_empty() {
            return Err(MaxWeightError::InvalidFood(
                "description must be non-empty".to_string(),
            ));
        }
        if !calories.is_finite() || calories <= 0.0 {
            return Err(MaxWeightError::InvalidFood(format!(
                "{}: calories must be positive, got {}",
                description, calories
            )));
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(MaxWeightError::InvalidFood(format!(
                "{}: weight must be non-negative, got {}",
                description, weight
            )));
        }

        Ok(Self {
            description,
            calories,
            weight,
        })
    }

    /// Human-readable description, e.g. "spicy chicken breast".
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Caloric cost of the item. Always positive.
    #[inline]
    pub fn calories(&self) -> f64 {
        self.calories
    }

    /// Weight of the item, in arbitrary mass units. Always non-negative.
    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Calorie cost as the dynamic solver sees it: fractional part dropped.
    #[inline]
    pub fn calorie_cost(&self) -> usize {
        self.calories.trunc() as usize
    }
}
