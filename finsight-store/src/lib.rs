//! finsight-store: JSON ledger persistence under `~/.finsight`.
//!
//! One file holds the whole single-user ledger: profile, seeded categories,
//! transactions, and budgets. The core crate never sees this layer; the CLI
//! loads a ledger, scopes it, and hands slices to the pure functions.

pub mod ledger;

pub use ledger::{ensure_finsight_home, finsight_home, ledger_path, Ledger, Profile};
