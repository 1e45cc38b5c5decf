use std::borrow::Borrow;

use serde::Serialize;

use crate::models::{sum_foods, FoodItem, Totals};

/// Display a food list with per-item lines and grand totals.
pub fn display_food_list<T: Borrow<FoodItem>>(foods: &[T], title: &str) {
    println!();
    println!("=== {} ===", title);

    if foods.is_empty() {
        println!("[empty food list]");
        println!();
        return;
    }

    let max_name_len = foods
        .iter()
        .map(|f| f.borrow().description().len())
        .max()
        .unwrap_or(10);

    for food in foods {
        let food = food.borrow();
        println!(
            "  {:<width$} - {:>7.1} cal | {:>7.2} weight",
            food.description(),
            food.calories(),
            food.weight(),
            width = max_name_len
        );
    }

    let totals = sum_foods(foods);
    println!();
    println!("Total items: {}", foods.len());
    println!("Total calories: {:.1}", totals.calories);
    println!("Total weight: {:.2}", totals.weight);
    println!();
}

/// A solver run packaged for rendering or JSON output.
#[derive(Debug, Serialize)]
pub struct SolveReport<'a> {
    pub algorithm: &'a str,
    pub budget: f64,
    pub items: Vec<&'a FoodItem>,
    pub totals: Totals,
}

impl<'a> SolveReport<'a> {
    pub fn new(algorithm: &'a str, budget: f64, items: Vec<&'a FoodItem>) -> Self {
        let totals = sum_foods(&items);
        Self {
            algorithm,
            budget,
            items,
            totals,
        }
    }
}

/// Display one solver's result.
pub fn display_report(report: &SolveReport<'_>) {
    let title = format!(
        "{} selection (budget {:.1} cal)",
        report.algorithm, report.budget
    );
    display_food_list(&report.items, &title);
}

/// Both solvers' results on the same input, plus whether their best total
/// weights agree (the correctness check the exhaustive baseline exists for).
#[derive(Debug, Serialize)]
pub struct CompareReport<'a> {
    pub dynamic: SolveReport<'a>,
    pub exhaustive: SolveReport<'a>,
    pub weights_agree: bool,
}

impl<'a> CompareReport<'a> {
    pub fn new(dynamic: SolveReport<'a>, exhaustive: SolveReport<'a>) -> Self {
        let weights_agree = (dynamic.totals.weight - exhaustive.totals.weight).abs() < 1e-6;
        Self {
            dynamic,
            exhaustive,
            weights_agree,
        }
    }
}

/// Display both solvers' results and the agreement verdict.
pub fn display_comparison(report: &CompareReport<'_>) {
    display_report(&report.dynamic);
    display_report(&report.exhaustive);

    if report.weights_agree {
        println!("Solvers agree on the best total weight.");
    } else {
        println!(
            "Solvers DISAGREE: dynamic {:.2} vs exhaustive {:.2}",
            report.dynamic.totals.weight, report.exhaustive.totals.weight
        );
    }
    println!();
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;

    use super::*;

    #[test]
    fn test_report_totals() {
        let apple = FoodItem::new("apple", 95.0, 4.0).unwrap();
        let cookie = FoodItem::new("cookie", 50.0, 1.5).unwrap();
        let report = SolveReport::new("dynamic", 150.0, vec![&apple, &cookie]);
        assert_float_absolute_eq!(report.totals.calories, 145.0);
        assert_float_absolute_eq!(report.totals.weight, 5.5);
    }

    #[test]
    fn test_report_serializes() {
        let apple = FoodItem::new("apple", 95.0, 4.0).unwrap();
        let report = SolveReport::new("exhaustive", 100.0, vec![&apple]);
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"algorithm\":\"exhaustive\""));
        assert!(json.contains("\"apple\""));
    }
}
