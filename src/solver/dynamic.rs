use std::borrow::Borrow;

use crate::models::FoodItem;

/// Pick the heaviest feasible selection by 0/1-knapsack dynamic programming
/// over integer calorie capacity.
///
/// The budget is discretized round-half-up (`floor(budget + 0.5)`) and each
/// item's calorie cost is truncated to an integer; both are load-bearing
/// numeric contracts, so fractional calories lose their fractional part
/// while weights stay real-valued. Runs in O(n*C) time and space, which
/// makes very large budgets the caller's concern.
///
/// Never fails: a non-positive budget, an empty catalog, or a catalog where
/// nothing fits all yield an empty selection.
pub fn solve_dynamic<'a, T: Borrow<FoodItem>>(foods: &'a [T], budget: f64) -> Vec<&'a FoodItem> {
    let capacity = (budget + 0.5).floor();
    if capacity < 1.0 || foods.is_empty() {
        return Vec::new();
    }
    let capacity = capacity as usize;

    // best[j]: greatest total weight achievable with integer calorie
    // capacity j, over the items processed so far.
    // take[i][j]: processing item i improved capacity j.
    let mut best = vec![0.0_f64; capacity + 1];
    let mut take = vec![vec![false; capacity + 1]; foods.len()];

    for (i, food) in foods.iter().enumerate() {
        let food = food.borrow();
        let cost = food.calorie_cost();
        if cost > capacity {
            continue;
        }

        // Descending capacities so the item is counted at most once.
        for j in (cost..=capacity).rev() {
            let candidate = best[j - cost] + food.weight();
            if candidate > best[j] {
                best[j] = candidate;
                take[i][j] = true;
            }
        }
    }

    // Walk items last-to-first from the full capacity, deducting each taken
    // item's cost; the last item added in the forward pass comes out first.
    let mut selection = Vec::new();
    let mut remaining = capacity;
    for (i, food) in foods.iter().enumerate().rev() {
        if take[i][remaining] {
            let food = food.borrow();
            selection.push(food);
            remaining -= food.calorie_cost();
        }
    }

    selection
}
