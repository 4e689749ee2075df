//! Financial health score (0-100) from budget usage plus login streak.

use serde::{Deserialize, Serialize};

/// Display tier derived from the score. Tags, thresholds, and colors are a
/// fixed contract the client relies on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Good,
    Warning,
    Critical,
}

impl HealthStatus {
    pub fn color(&self) -> &'static str {
        match self {
            HealthStatus::Good => "#22c55e",
            HealthStatus::Warning => "#f59e0b",
            HealthStatus::Critical => "#ef4444",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HealthStatus::Good => "Healthy",
            HealthStatus::Warning => "Watch out",
            HealthStatus::Critical => "Critical",
        }
    }
}

/// Score a month: base from the expense/budget ratio, plus +1 per streak day
/// capped at +10, saturating at 100.
///
/// No budget set means a max score; the ratio is never computed against zero.
pub fn health_score(total_expense: f64, total_budget: f64, streak_count: u32) -> u8 {
    if total_budget == 0.0 {
        return 100;
    }

    let usage_ratio = total_expense / total_budget;
    let base_score: u32 = if usage_ratio <= 0.5 {
        100
    } else if usage_ratio <= 0.75 {
        85
    } else if usage_ratio <= 0.9 {
        70
    } else if usage_ratio <= 1.0 {
        55
    } else if usage_ratio <= 1.2 {
        35
    } else {
        15
    };

    let streak_bonus = streak_count.min(10);
    (base_score + streak_bonus).min(100) as u8
}

/// Classify a score into its display tier.
pub fn status_for(score: u8) -> HealthStatus {
    if score >= 70 {
        HealthStatus::Good
    } else if score >= 40 {
        HealthStatus::Warning
    } else {
        HealthStatus::Critical
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_budget_maxes_out() {
        assert_eq!(health_score(0.0, 0.0, 0), 100);
        assert_eq!(health_score(5000.0, 0.0, 0), 100);
    }

    #[test]
    fn test_half_usage_is_boundary_inclusive() {
        // ratio exactly 0.5 falls in the <=0.50 bracket
        assert_eq!(health_score(500.0, 1000.0, 0), 100);
        assert_eq!(health_score(501.0, 1000.0, 0), 85);
    }

    #[test]
    fn test_bracket_ladder() {
        assert_eq!(health_score(750.0, 1000.0, 0), 85);
        assert_eq!(health_score(900.0, 1000.0, 0), 70);
        assert_eq!(health_score(1000.0, 1000.0, 0), 55);
        assert_eq!(health_score(1200.0, 1000.0, 0), 35);
        assert_eq!(health_score(2000.0, 1000.0, 0), 15);
    }

    #[test]
    fn test_streak_bonus_capped_at_ten() {
        // base 55 at ratio 1.0, bonus capped: 55 + 10 = 65
        assert_eq!(health_score(1000.0, 1000.0, 15), 65);
        assert_eq!(health_score(1000.0, 1000.0, 10), 65);
        assert_eq!(health_score(1000.0, 1000.0, 3), 58);
    }

    #[test]
    fn test_score_saturates_at_hundred() {
        assert_eq!(health_score(100.0, 1000.0, 10), 100);
    }

    #[test]
    fn test_status_thresholds() {
        assert_eq!(status_for(70), HealthStatus::Good);
        assert_eq!(status_for(69), HealthStatus::Warning);
        assert_eq!(status_for(40), HealthStatus::Warning);
        assert_eq!(status_for(39), HealthStatus::Critical);
        assert_eq!(status_for(0), HealthStatus::Critical);
        assert_eq!(status_for(100), HealthStatus::Good);
    }

    #[test]
    fn test_status_display_constants() {
        assert_eq!(HealthStatus::Good.color(), "#22c55e");
        assert_eq!(HealthStatus::Warning.color(), "#f59e0b");
        assert_eq!(HealthStatus::Critical.color(), "#ef4444");
        assert_eq!(serde_json::to_string(&HealthStatus::Good).unwrap(), "\"good\"");
    }
}
