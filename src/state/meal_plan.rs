use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::error::{Result, StoreError};
use crate::models::{DayPlan, Goal, NutritionTotals, Product};
use crate::planner::{self, DEFAULT_TRIP_LENGTH, MAX_TRIP_LENGTH, MIN_TRIP_LENGTH};
use crate::state::CartStore;

/// Multi-day meal planning session.
///
/// Holds per-day selections keyed by 1-based day number. `current_day` always
/// lies in `1..=trip_length`. Shrinking the trip keeps selections for the
/// dropped days; they are excluded from totals and from `commit_to_cart`
/// until the trip is lengthened again.
#[derive(Debug, Clone)]
pub struct MealPlanner<'a> {
    catalog: &'a Catalog,
    trip_length: u8,
    goal: Goal,
    current_day: u8,
    days: BTreeMap<u8, DayPlan>,
}

impl<'a> MealPlanner<'a> {
    /// Fresh session: 3-day trip, balanced goal, day 1, nothing planned.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            trip_length: DEFAULT_TRIP_LENGTH,
            goal: Goal::default(),
            current_day: 1,
            days: BTreeMap::new(),
        }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn trip_length(&self) -> u8 {
        self.trip_length
    }

    pub fn goal(&self) -> Goal {
        self.goal
    }

    pub fn current_day(&self) -> u8 {
        self.current_day
    }

    /// Set the trip length, clamping the current day down if needed.
    pub fn set_trip_length(&mut self, days: u8) -> Result<()> {
        if !(MIN_TRIP_LENGTH..=MAX_TRIP_LENGTH).contains(&days) {
            return Err(StoreError::InvalidTripLength(days));
        }

        self.trip_length = days;
        if self.current_day > days {
            self.current_day = days;
        }
        debug!(
            trip_length = days,
            current_day = self.current_day,
            "trip length set"
        );
        Ok(())
    }

    /// Change the recommendation goal. Existing selections are untouched.
    pub fn set_goal(&mut self, goal: Goal) {
        debug!(goal = %goal, "goal set");
        self.goal = goal;
    }

    /// Jump to a day within the trip.
    pub fn select_day(&mut self, day: u8) -> Result<()> {
        if day < 1 || day > self.trip_length {
            return Err(StoreError::InvalidDay {
                day,
                trip_length: self.trip_length,
            });
        }
        self.current_day = day;
        Ok(())
    }

    /// Advance one day, stopping at the last day.
    pub fn next_day(&mut self) -> u8 {
        self.current_day = (self.current_day + 1).min(self.trip_length);
        self.current_day
    }

    /// Go back one day, stopping at day 1.
    pub fn previous_day(&mut self) -> u8 {
        self.current_day = self.current_day.saturating_sub(1).max(1);
        self.current_day
    }

    /// Add one pouch of `product_id` to the current day.
    pub fn add_to_day(&mut self, product_id: &str) -> Result<()> {
        if !self.catalog.contains(product_id) {
            return Err(StoreError::ProductNotFound(product_id.to_string()));
        }

        let qty = self
            .days
            .entry(self.current_day)
            .or_default()
            .entry(product_id.to_string())
            .or_insert(0);
        *qty += 1;

        debug!(day = self.current_day, product_id, quantity = *qty, "added to day");
        Ok(())
    }

    /// Remove one pouch of `product_id` from the current day.
    ///
    /// The entry is deleted at zero and an emptied day is dropped entirely.
    /// Returns false if the product was not planned for the day.
    pub fn remove_from_day(&mut self, product_id: &str) -> bool {
        let day = self.current_day;
        let Some(plan) = self.days.get_mut(&day) else {
            return false;
        };
        let Some(qty) = plan.get_mut(product_id) else {
            return false;
        };

        if *qty > 1 {
            *qty -= 1;
            debug!(day, product_id, quantity = *qty, "removed from day");
        } else {
            plan.remove(product_id);
            debug!(day, product_id, "product dropped from day");
        }

        if plan.is_empty() {
            self.days.remove(&day);
        }
        true
    }

    /// Drop every selection for the current day.
    pub fn clear_day(&mut self) {
        debug!(day = self.current_day, "day cleared");
        self.days.remove(&self.current_day);
    }

    /// Selections for a day, if any. Days past the trip length may still
    /// hold retained selections.
    pub fn day_plan(&self, day: u8) -> Option<&DayPlan> {
        self.days.get(&day)
    }

    pub fn current_day_plan(&self) -> Option<&DayPlan> {
        self.day_plan(self.current_day)
    }

    pub fn has_selections(&self, day: u8) -> bool {
        self.days.get(&day).is_some_and(|plan| !plan.is_empty())
    }

    /// Products offered for the current goal.
    pub fn recommended_products(&self) -> Vec<&'a Product> {
        planner::recommended_products(self.catalog, self.goal)
    }

    pub fn day_totals(&self, day: u8) -> NutritionTotals {
        self.days
            .get(&day)
            .map(|plan| planner::day_totals(self.catalog, plan))
            .unwrap_or_default()
    }

    /// Totals across days `1..=trip_length`.
    pub fn trip_totals(&self) -> NutritionTotals {
        planner::trip_totals(self.catalog, &self.days, self.trip_length)
    }

    /// Copy every planned pouch within the trip into the cart, one unit at a time.
    ///
    /// Returns the number of units added. The plan itself is left as is.
    pub fn commit_to_cart(&self, cart: &mut CartStore) -> u32 {
        let mut added = 0;
        for (day, plan) in self.days.range(1..=self.trip_length) {
            for (id, &qty) in plan {
                let Some(product) = self.catalog.get(id) else {
                    continue;
                };
                for _ in 0..qty {
                    cart.add_item(product.line_item());
                    added += 1;
                }
                debug!(day, product_id = %id, quantity = qty, "committed to cart");
            }
        }

        info!(units = added, trip_length = self.trip_length, "meal plan added to cart");
        added
    }
}
