//! # Weekly meal plan — the 7×4 day/slot grid
//!
//! A [`MealPlan`] associates each `(day, meal slot)` cell of a week with a
//! recipe id. The grid is sparse: only populated slots are stored, and the
//! value serializes as a nested `day → slot → recipe id` JSON object so it
//! round-trips unchanged through the `meal_plans.plan` JSONB column.
//!
//! Assigning a recipe to a slot replaces any prior assignment; there is no
//! conflict detection and no undo. The UI never mutates a shared plan in
//! place — it clones the current value, edits the clone, and stores the new
//! value through its signal, so every edit is a wholesale replacement.
//!
//! Recipe ids are not validated here. An id can dangle if the recipe is
//! deleted server-side; [`crate::shopping::consolidate`] skips ids it cannot
//! resolve.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Day of the week, in grid order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Three-letter abbreviation for narrow grid headers.
    pub fn short_label(&self) -> &'static str {
        &self.label()[..3]
    }

    /// The wire string used as the JSON map key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }

    pub fn parse(s: &str) -> Option<Weekday> {
        Self::ALL.iter().copied().find(|d| d.as_str() == s)
    }
}

/// One of the four meal slots within a day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snack,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
            MealSlot::Snack => "Snack",
        }
    }

    /// The wire string used as the JSON map key.
    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
            MealSlot::Snack => "snack",
        }
    }

    pub fn parse(s: &str) -> Option<MealSlot> {
        Self::ALL.iter().copied().find(|m| m.as_str() == s)
    }
}

/// A week of meal assignments: `day → slot → recipe id`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MealPlan {
    days: BTreeMap<Weekday, BTreeMap<MealSlot, String>>,
}

impl MealPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a recipe to a slot, replacing any prior assignment.
    pub fn assign(&mut self, day: Weekday, slot: MealSlot, recipe_id: impl Into<String>) {
        self.days
            .entry(day)
            .or_default()
            .insert(slot, recipe_id.into());
    }

    /// Empty a slot. Clearing an already-empty slot is a no-op.
    pub fn clear(&mut self, day: Weekday, slot: MealSlot) {
        if let Some(slots) = self.days.get_mut(&day) {
            slots.remove(&slot);
            if slots.is_empty() {
                self.days.remove(&day);
            }
        }
    }

    /// Read the recipe id assigned to a slot, if any.
    pub fn slot(&self, day: Weekday, slot: MealSlot) -> Option<&str> {
        self.days.get(&day)?.get(&slot).map(String::as_str)
    }

    /// Whether any slot of the week is populated.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Number of populated slots.
    pub fn len(&self) -> usize {
        self.days.values().map(BTreeMap::len).sum()
    }

    /// Every assigned recipe id in grid order (Monday breakfast first).
    /// Ids referenced by several slots appear once per slot.
    pub fn assigned_ids(&self) -> Vec<&str> {
        self.days
            .values()
            .flat_map(|slots| slots.values().map(String::as_str))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_then_read_back() {
        let mut plan = MealPlan::new();
        assert!(plan.is_empty());
        assert_eq!(plan.slot(Weekday::Monday, MealSlot::Lunch), None);

        plan.assign(Weekday::Monday, MealSlot::Lunch, "r-1");
        assert_eq!(plan.slot(Weekday::Monday, MealSlot::Lunch), Some("r-1"));
        assert_eq!(plan.len(), 1);
        assert!(!plan.is_empty());
    }

    #[test]
    fn assign_twice_keeps_latest() {
        let mut plan = MealPlan::new();
        plan.assign(Weekday::Friday, MealSlot::Dinner, "r-1");
        plan.assign(Weekday::Friday, MealSlot::Dinner, "r-2");

        assert_eq!(plan.slot(Weekday::Friday, MealSlot::Dinner), Some("r-2"));
        assert_eq!(plan.len(), 1);
    }

    #[test]
    fn clear_empties_slot() {
        let mut plan = MealPlan::new();
        plan.assign(Weekday::Tuesday, MealSlot::Breakfast, "r-1");
        plan.clear(Weekday::Tuesday, MealSlot::Breakfast);

        assert_eq!(plan.slot(Weekday::Tuesday, MealSlot::Breakfast), None);
        assert!(plan.is_empty());

        // Clearing again is a no-op.
        plan.clear(Weekday::Tuesday, MealSlot::Breakfast);
        assert!(plan.is_empty());
    }

    #[test]
    fn assigned_ids_in_grid_order() {
        let mut plan = MealPlan::new();
        plan.assign(Weekday::Sunday, MealSlot::Snack, "r-3");
        plan.assign(Weekday::Monday, MealSlot::Breakfast, "r-1");
        plan.assign(Weekday::Monday, MealSlot::Dinner, "r-2");

        assert_eq!(plan.assigned_ids(), vec!["r-1", "r-2", "r-3"]);
    }

    #[test]
    fn serializes_as_nested_map() {
        let mut plan = MealPlan::new();
        plan.assign(Weekday::Monday, MealSlot::Breakfast, "r-1");
        plan.assign(Weekday::Wednesday, MealSlot::Snack, "r-2");

        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["monday"]["breakfast"], "r-1");
        assert_eq!(json["wednesday"]["snack"], "r-2");

        let back: MealPlan = serde_json::from_value(json).unwrap();
        assert_eq!(back, plan);
    }

    #[test]
    fn empty_plan_serializes_as_empty_object() {
        let json = serde_json::to_string(&MealPlan::new()).unwrap();
        assert_eq!(json, "{}");
        let back: MealPlan = serde_json::from_str("{}").unwrap();
        assert!(back.is_empty());
    }
}
