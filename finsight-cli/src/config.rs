use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use finsight_insight::{InsightConfig, Provider};
use finsight_store::ensure_finsight_home;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// IANA timezone the user's calendar months are resolved in.
    pub timezone: String,
    pub llm: LlmSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSection {
    /// "gemini" or "openai"; the API key always comes from the environment.
    pub provider: String,
    pub model: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: "Asia/Bangkok".to_string(),
            llm: LlmSection {
                provider: "gemini".to_string(),
                model: "gemini-2.0-flash".to_string(),
            },
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_finsight_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).context("parse config.toml")
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    let s = toml::to_string_pretty(&Config::default()).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    println!("Wrote {}", p.display());
    Ok(())
}

/// Resolve the remote-model config, or None when no API key is available.
pub fn insight_config(cfg: &Config) -> Option<InsightConfig> {
    match cfg.llm.provider.as_str() {
        "openai" => std::env::var("OPENAI_API_KEY").ok().map(|key| InsightConfig {
            provider: Provider::OpenAI,
            model: cfg.llm.model.clone(),
            api_key: key,
        }),
        _ => std::env::var("GEMINI_API_KEY").ok().map(|key| InsightConfig {
            provider: Provider::Gemini,
            model: cfg.llm.model.clone(),
            api_key: key,
        }),
    }
}
