//! Time-of-day quick-add suggestions.
//!
//! A static lookup, not a recommender: five fixed tables of four entries each,
//! keyed only by the hour. The client renders them as one-tap shortcuts;
//! recording the tap as a transaction is the caller's job.

use serde::Serialize;

/// One quick-add shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WidgetSuggestion {
    pub icon: &'static str,
    pub label: &'static str,
    pub amount: u32,
    pub category: &'static str,
}

const fn widget(
    icon: &'static str,
    label: &'static str,
    amount: u32,
    category: &'static str,
) -> WidgetSuggestion {
    WidgetSuggestion {
        icon,
        label,
        amount,
        category,
    }
}

const MORNING: [WidgetSuggestion; 4] = [
    widget("☕", "Coffee", 60, "Food"),
    widget("🚇", "Metro", 45, "Transport"),
    widget("🥐", "Pastry", 35, "Food"),
    widget("🏪", "Convenience store", 50, "Food"),
];

const LUNCH: [WidgetSuggestion; 4] = [
    widget("🍱", "Lunch box", 60, "Food"),
    widget("🍜", "Noodles", 50, "Food"),
    widget("🧋", "Bubble tea", 55, "Food"),
    widget("🥤", "Juice", 35, "Food"),
];

const AFTERNOON: [WidgetSuggestion; 4] = [
    widget("🧋", "Bubble tea", 55, "Food"),
    widget("🍩", "Snack", 45, "Food"),
    widget("☕", "Afternoon coffee", 60, "Food"),
    widget("🚇", "Metro", 45, "Transport"),
];

const EVENING: [WidgetSuggestion; 4] = [
    widget("🍲", "Dinner", 80, "Food"),
    widget("🚇", "Metro home", 45, "Transport"),
    widget("🛒", "Groceries", 200, "Shopping"),
    widget("🍺", "Drinks", 300, "Entertainment"),
];

const NIGHT: [WidgetSuggestion; 4] = [
    widget("🌙", "Late-night snack", 60, "Food"),
    widget("🚕", "Taxi", 100, "Transport"),
    widget("🎬", "Netflix", 0, "Entertainment"),
    widget("🛒", "Online shopping", 300, "Shopping"),
];

/// Pick the suggestion table for an hour of day (0-23).
///
/// Ranges: [6,10) morning, [10,14) lunch, [14,17) afternoon, [17,21) evening,
/// and the wraparound night range [21,24) ∪ [0,6). Total over all 24 hours;
/// out-of-range input is treated modulo 24.
pub fn widgets_for_hour(hour: u32) -> &'static [WidgetSuggestion; 4] {
    match hour % 24 {
        6..=9 => &MORNING,
        10..=13 => &LUNCH,
        14..=16 => &AFTERNOON,
        17..=20 => &EVENING,
        _ => &NIGHT,
    }
}
