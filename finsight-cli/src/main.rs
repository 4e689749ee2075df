use anyhow::{bail, Context, Result};
use chrono::{Timelike, Utc};
use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use finsight_core::{
    build_summary, health_score, parse_quick_add, status_for, widgets_for_hour, Budget,
    MonthPeriod, Summary, Transaction, TxKind,
};
use finsight_insight::{parse_transaction, whisper_insight, WhisperInsight};
use finsight_store::{ledger_path, Ledger};

mod config;
mod export;

#[derive(Parser, Debug)]
#[command(name = "finsight", version, about = "FinSight expense tracker CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show this month's summary, health score, and recent activity
    Dashboard,

    /// Show time-of-day quick-add suggestions
    Widgets {
        /// Hour of day 0-23 (default: now)
        #[arg(long)]
        hour: Option<u32>,
    },

    /// Record a transaction
    Add {
        description: String,
        amount: f64,

        /// Record as income instead of expense
        #[arg(long)]
        income: bool,

        /// Category name (e.g. Food, Transport)
        #[arg(long)]
        category: Option<String>,
    },

    /// Parse a free-text line into a transaction ("coffee 60")
    Quick { text: String },

    /// Generate the whisper insight for this month
    Insight,

    /// Set a monthly budget
    Budget {
        amount: f64,

        /// Category name; omit for the overall budget
        #[arg(long)]
        category: Option<String>,

        /// Month 1-12 (default: current)
        #[arg(long)]
        month: Option<u32>,

        /// Year (default: current)
        #[arg(long)]
        year: Option<i32>,
    },

    /// Record today's login and advance the streak
    Login,

    /// Export this month's transactions as CSV
    Export {
        /// Output path (default: finsight-<year>-<month>.csv)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Write a default config.toml
    ConfigInit,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config()?;
    let tz: Tz = cfg
        .timezone
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid timezone in config: {}", cfg.timezone))?;

    match cli.command {
        Command::Dashboard => dashboard(&cfg)?,
        Command::Widgets { hour } => {
            let hour = hour.unwrap_or_else(|| Utc::now().with_timezone(&tz).hour());
            if hour > 23 {
                bail!("hour must be 0-23, got {hour}");
            }
            println!("Quick-add suggestions for {hour:02}:00\n");
            for w in widgets_for_hour(hour) {
                println!("{} {} — {} ({})", w.icon, w.label, w.amount, w.category);
            }
        }
        Command::Add {
            description,
            amount,
            income,
            category,
        } => {
            let kind = if income { TxKind::Income } else { TxKind::Expense };
            add_transaction(&description, amount, kind, category.as_deref(), false)?;
        }
        Command::Quick { text } => quick(&cfg, &text).await?,
        Command::Insight => insight(&cfg).await?,
        Command::Budget {
            amount,
            category,
            month,
            year,
        } => set_budget(&cfg, amount, category.as_deref(), month, year)?,
        Command::Login => login(&cfg)?,
        Command::Export { out } => export_month(&cfg, out)?,
        Command::ConfigInit => config::init_config()?,
    }

    Ok(())
}

/// Load this month's slice and assemble the summary.
fn month_summary(ledger: &Ledger, cfg: &config::Config) -> Result<(MonthPeriod, Summary)> {
    let period = MonthPeriod::current(&cfg.timezone, Utc::now())?;
    let txns = ledger.transactions_in(&period, &cfg.timezone)?;
    let budgets = ledger.budgets_for(period.month, period.year);
    Ok((period, build_summary(&txns, &budgets)))
}

fn dashboard(cfg: &config::Config) -> Result<()> {
    let path = ledger_path()?;
    let mut ledger = Ledger::load(&path)?;
    let (period, summary) = month_summary(&ledger, cfg)?;

    let score = health_score(summary.total_expense, summary.total_budget, ledger.profile.streak_count);
    let status = status_for(score);
    ledger.set_health_score(score);
    ledger.save(&path)?;

    println!(
        "# {}/{} — hi {}, {} {}\n",
        period.month, period.year, ledger.profile.name, ledger.profile.persona_emoji, ledger.profile.persona
    );
    println!("Income:   {:>12.2}", summary.total_income);
    println!("Expense:  {:>12.2}", summary.total_expense);
    println!("Balance:  {:>12.2}", summary.balance);
    if summary.total_budget > 0.0 {
        println!(
            "Budget:   {:>12.2} ({:.1}% used)",
            summary.total_budget, summary.budget_usage
        );
    } else {
        println!("Budget:   (none set — `finsight budget <amount>`)");
    }
    println!(
        "Health:   {score}/100 {} ({}, streak {} days)\n",
        status.label(),
        status.color(),
        ledger.profile.streak_count
    );

    if !summary.category_breakdown.is_empty() {
        println!("## By category\n");
        for (name, slice) in &summary.category_breakdown {
            println!("{} {:<16} {:>10.2}", slice.icon, name, slice.amount);
        }
        println!();
    }

    let recent = ledger.recent_transactions(5);
    if !recent.is_empty() {
        println!("## Recent\n");
        for tx in &recent {
            let sign = if tx.is_income() { "+" } else { "-" };
            println!(
                "{} {}{:.2} | {} | {}",
                tx.created_at.format("%m-%d"),
                sign,
                tx.amount,
                tx.category_name(),
                tx.description
            );
        }
    }

    Ok(())
}

fn add_transaction(
    description: &str,
    amount: f64,
    kind: TxKind,
    category: Option<&str>,
    from_widget: bool,
) -> Result<()> {
    if amount < 0.0 {
        bail!("amount must be non-negative, got {amount}");
    }

    let path = ledger_path()?;
    let mut ledger = Ledger::load(&path)?;

    let mut tx = Transaction::new(ledger.next_tx_id(), amount, kind, description, Utc::now());
    tx.is_widget = from_widget;
    if let Some(name) = category {
        let cat = ledger
            .category_by_name(name)
            .with_context(|| format!("unknown category: {name} (see `finsight dashboard`)"))?;
        tx.category = Some(cat.clone());
    }

    let label = tx.category_name().to_string();
    ledger.add_transaction(tx);
    ledger.save(&path)?;

    let kind_word = match kind {
        TxKind::Income => "income",
        TxKind::Expense => "expense",
    };
    println!("Recorded {kind_word}: {description} {amount:.2} ({label})");
    Ok(())
}

async fn quick(cfg: &config::Config, text: &str) -> Result<()> {
    // Remote parse when a key is configured; deterministic fallback otherwise.
    let entry = match config::insight_config(cfg) {
        Some(insight_cfg) => {
            let parsed = parse_transaction(&insight_cfg, text).await;
            if parsed.is_valid() {
                let category = parsed.normalized_category();
                add_transaction(
                    &parsed.item,
                    parsed.amount,
                    parsed.kind,
                    Some(category.as_str()),
                    true,
                )?;
                return Ok(());
            }
            parse_quick_add(text)
        }
        None => parse_quick_add(text),
    };

    let Some(entry) = entry else {
        bail!("couldn't find an amount in '{text}' (try: \"coffee 60\")");
    };
    add_transaction(
        &entry.description,
        entry.amount,
        entry.kind,
        Some(entry.category.as_str()),
        true,
    )
}

async fn insight(cfg: &config::Config) -> Result<()> {
    let path = ledger_path()?;
    let mut ledger = Ledger::load(&path)?;
    let (_, summary) = month_summary(&ledger, cfg)?;

    let payload = serde_json::json!({
        "summary": summary,
        "streakCount": ledger.profile.streak_count,
    })
    .to_string();

    let whisper = match config::insight_config(cfg) {
        Some(insight_cfg) => whisper_insight(&insight_cfg, &payload).await,
        None => WhisperInsight::fallback(),
    };

    ledger.set_persona(whisper.persona_name.as_str(), whisper.persona_emoji.as_str());
    let score = health_score(summary.total_expense, summary.total_budget, ledger.profile.streak_count);
    ledger.set_health_score(score);
    ledger.save(&path)?;

    println!("{} {}", whisper.persona_emoji, whisper.persona_name);
    println!("\n{}", whisper.whisper_message);
    println!("\nLeak: {}", whisper.leak_insight);
    println!(
        "\nStatus: {} {}",
        whisper.health_status.label(),
        whisper.health_status.color()
    );
    Ok(())
}

fn set_budget(
    cfg: &config::Config,
    amount: f64,
    category: Option<&str>,
    month: Option<u32>,
    year: Option<i32>,
) -> Result<()> {
    if amount < 0.0 {
        bail!("budget amount must be non-negative, got {amount}");
    }

    let path = ledger_path()?;
    let mut ledger = Ledger::load(&path)?;
    let current = MonthPeriod::current(&cfg.timezone, Utc::now())?;
    let period = MonthPeriod::new(year.unwrap_or(current.year), month.unwrap_or(current.month))?;

    let category_id = match category {
        Some(name) => Some(
            ledger
                .category_by_name(name)
                .with_context(|| format!("unknown category: {name}"))?
                .id
                .clone(),
        ),
        None => None,
    };

    ledger.upsert_budget(Budget {
        category_id,
        month: period.month,
        year: period.year,
        amount,
    });
    ledger.save(&path)?;

    let scope = category.unwrap_or("overall");
    println!(
        "Budget set: {amount:.2} for {scope} ({}/{})",
        period.month, period.year
    );
    Ok(())
}

fn login(cfg: &config::Config) -> Result<()> {
    let path = ledger_path()?;
    let mut ledger = Ledger::load(&path)?;

    let tz: Tz = cfg
        .timezone
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid timezone in config: {}", cfg.timezone))?;
    let today = Utc::now().with_timezone(&tz).date_naive();

    let (streak, outcome) = ledger.record_login(today);
    let (_, summary) = month_summary(&ledger, cfg)?;
    let score = health_score(summary.total_expense, summary.total_budget, streak);
    ledger.set_health_score(score);
    ledger.save(&path)?;

    use finsight_core::LoginDay;
    match outcome {
        LoginDay::First => println!("Welcome! Streak started: day 1"),
        LoginDay::SameDay => println!("Already checked in today. Streak: {streak} days"),
        LoginDay::Consecutive => println!("Streak extended: {streak} days 🔥"),
        LoginDay::Gap => println!("Streak reset. Back to day 1 — keep it going this time"),
    }
    println!("Health score: {score}/100");
    Ok(())
}

fn export_month(cfg: &config::Config, out: Option<PathBuf>) -> Result<()> {
    let path = ledger_path()?;
    let ledger = Ledger::load(&path)?;
    let period = MonthPeriod::current(&cfg.timezone, Utc::now())?;
    let txns = ledger.transactions_in(&period, &cfg.timezone)?;

    let out = out.unwrap_or_else(|| {
        PathBuf::from(format!("finsight-{}-{:02}.csv", period.year, period.month))
    });
    export::export_csv(&out, &txns)?;
    println!("Exported {} transactions to {}", txns.len(), out.display());
    Ok(())
}
