//! finsight-core: pure summarization, health-scoring, and gamification engine
//! for the FinSight expense tracker.
//!
//! Everything here is a stateless transform: callers fetch the data, these
//! functions fold it. No I/O, no clocks, no shared state.

pub mod aggregate;
pub mod health;
pub mod period;
pub mod quickadd;
pub mod streak;
pub mod summary;
pub mod transaction;
pub mod widgets;

pub use aggregate::{aggregate, CategorySlice, Totals};
pub use health::{health_score, status_for, HealthStatus};
pub use period::MonthPeriod;
pub use quickadd::{parse_quick_add, QuickEntry};
pub use streak::{advance as advance_streak, LoginDay};
pub use summary::{build_summary, Budget, Summary};
pub use transaction::{
    default_categories, Category, Transaction, TxKind, DEFAULT_ICON, UNCATEGORIZED,
};
pub use widgets::{widgets_for_hour, WidgetSuggestion};
