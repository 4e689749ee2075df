//! Single-file JSON ledger: load, query, mutate, save.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use finsight_core::{
    advance_streak, default_categories, Budget, Category, LoginDay, MonthPeriod, Transaction,
};

pub fn finsight_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".finsight"))
}

pub fn ensure_finsight_home() -> Result<PathBuf> {
    let dir = finsight_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

pub fn ledger_path() -> Result<PathBuf> {
    Ok(ensure_finsight_home()?.join("ledger.json"))
}

/// The user record. Streak and persona fields are caches written by the
/// login and insight flows; the score itself is always recomputed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub streak_count: u32,
    pub last_login_date: Option<NaiveDate>,
    pub persona: String,
    pub persona_emoji: String,
    pub health_score: u8,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "there".to_string(),
            streak_count: 0,
            last_login_date: None,
            persona: "Newcomer".to_string(),
            persona_emoji: "🌱".to_string(),
            health_score: 100,
        }
    }
}

/// Everything FinSight persists, in one serde-friendly bundle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    pub profile: Profile,
    pub categories: Vec<Category>,
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<Budget>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            categories: default_categories(),
            transactions: Vec::new(),
            budgets: Vec::new(),
        }
    }
}

impl Ledger {
    /// Read a ledger from disk, seeding a fresh one when the file is absent.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        serde_json::from_str(&s).with_context(|| format!("parse {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
        Ok(())
    }

    pub fn category_by_name(&self, name: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Sequential transaction ids: tx-0001, tx-0002, ...
    pub fn next_tx_id(&self) -> String {
        format!("tx-{:04}", self.transactions.len() + 1)
    }

    pub fn add_transaction(&mut self, tx: Transaction) {
        self.transactions.push(tx);
    }

    /// Transactions inside one calendar month, in the given timezone.
    pub fn transactions_in(&self, period: &MonthPeriod, tz: &str) -> Result<Vec<Transaction>> {
        let mut out = Vec::new();
        for tx in &self.transactions {
            if period.contains(tx.created_at, tz)? {
                out.push(tx.clone());
            }
        }
        Ok(out)
    }

    /// Newest-first slice of history for the dashboard.
    pub fn recent_transactions(&self, limit: usize) -> Vec<Transaction> {
        let mut txns = self.transactions.clone();
        txns.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        txns.truncate(limit);
        txns
    }

    pub fn budgets_for(&self, month: u32, year: i32) -> Vec<Budget> {
        self.budgets
            .iter()
            .filter(|b| b.month == month && b.year == year)
            .cloned()
            .collect()
    }

    /// Insert or replace the budget for (category, month, year).
    pub fn upsert_budget(&mut self, budget: Budget) {
        if let Some(existing) = self.budgets.iter_mut().find(|b| {
            b.category_id == budget.category_id && b.month == budget.month && b.year == budget.year
        }) {
            *existing = budget;
        } else {
            self.budgets.push(budget);
        }
    }

    /// Advance the login streak for `today` and store the result.
    pub fn record_login(&mut self, today: NaiveDate) -> (u32, LoginDay) {
        let (streak, outcome) =
            advance_streak(self.profile.streak_count, self.profile.last_login_date, today);
        self.profile.streak_count = streak;
        self.profile.last_login_date = Some(today);
        (streak, outcome)
    }

    pub fn set_persona(&mut self, persona: impl Into<String>, emoji: impl Into<String>) {
        self.profile.persona = persona.into();
        self.profile.persona_emoji = emoji.into();
    }

    pub fn set_health_score(&mut self, score: u8) {
        self.profile.health_score = score;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use finsight_core::TxKind;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("finsight-store-test-{name}-{}", std::process::id()))
    }

    fn tx_on(id: &str, year: i32, month: u32, day: u32) -> Transaction {
        let at = Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap();
        Transaction::new(id, 50.0, TxKind::Expense, id, at)
    }

    #[test]
    fn test_fresh_ledger_is_seeded() {
        let ledger = Ledger::load(Path::new("/nonexistent/ledger.json")).unwrap();
        assert_eq!(ledger.categories.len(), 8);
        assert!(ledger.transactions.is_empty());
        assert_eq!(ledger.profile.streak_count, 0);
        assert!(ledger.category_by_name("food").is_some());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let path = scratch_path("roundtrip").join("ledger.json");
        let mut ledger = Ledger::default();
        ledger.add_transaction(tx_on("tx-0001", 2026, 8, 5));
        ledger.upsert_budget(Budget {
            category_id: None,
            month: 8,
            year: 2026,
            amount: 2000.0,
        });
        ledger.save(&path).unwrap();

        let loaded = Ledger::load(&path).unwrap();
        assert_eq!(loaded.transactions.len(), 1);
        assert_eq!(loaded.budgets_for(8, 2026).len(), 1);
        fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_transactions_scoped_to_month() {
        let mut ledger = Ledger::default();
        ledger.add_transaction(tx_on("aug", 2026, 8, 15));
        ledger.add_transaction(tx_on("jul", 2026, 7, 31));
        ledger.add_transaction(tx_on("sep", 2026, 9, 1));

        let period = MonthPeriod::new(2026, 8).unwrap();
        let scoped = ledger.transactions_in(&period, "UTC").unwrap();
        assert_eq!(scoped.len(), 1);
        assert_eq!(scoped[0].id, "aug");
    }

    #[test]
    fn test_recent_is_newest_first() {
        let mut ledger = Ledger::default();
        ledger.add_transaction(tx_on("old", 2026, 8, 1));
        ledger.add_transaction(tx_on("new", 2026, 8, 20));
        ledger.add_transaction(tx_on("mid", 2026, 8, 10));

        let recent = ledger.recent_transactions(2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].id, "new");
        assert_eq!(recent[1].id, "mid");
    }

    #[test]
    fn test_upsert_budget_replaces_same_slot() {
        let mut ledger = Ledger::default();
        let slot = |amount| Budget {
            category_id: Some("cat-food".to_string()),
            month: 8,
            year: 2026,
            amount,
        };
        ledger.upsert_budget(slot(1000.0));
        ledger.upsert_budget(slot(1500.0));
        let budgets = ledger.budgets_for(8, 2026);
        assert_eq!(budgets.len(), 1);
        assert_eq!(budgets[0].amount, 1500.0);
    }

    #[test]
    fn test_record_login_transitions() {
        let mut ledger = Ledger::default();
        let d1 = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();

        let (streak, outcome) = ledger.record_login(d1);
        assert_eq!((streak, outcome), (1, LoginDay::First));

        let (streak, outcome) = ledger.record_login(d2);
        assert_eq!((streak, outcome), (2, LoginDay::Consecutive));

        let (streak, outcome) = ledger.record_login(d2);
        assert_eq!((streak, outcome), (2, LoginDay::SameDay));
        assert_eq!(ledger.profile.last_login_date, Some(d2));
    }

    #[test]
    fn test_next_tx_id_is_sequential() {
        let mut ledger = Ledger::default();
        assert_eq!(ledger.next_tx_id(), "tx-0001");
        ledger.add_transaction(tx_on("tx-0001", 2026, 8, 1));
        assert_eq!(ledger.next_tx_id(), "tx-0002");
    }
}
