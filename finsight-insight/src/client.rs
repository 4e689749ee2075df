//! Remote-model client: Gemini or OpenAI behind one config.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::types::{parse_model_json, ParsedTransaction, WhisperInsight};

const PARSE_SYSTEM_PROMPT: &str = "You are the backend API of an expense tracking app. \
The user sends a short free-text line about money they spent or received. Extract the data and \
reply with strict JSON only. No explanations, no markdown formatting.\n\n\
Required JSON shape:\n\
{\n\
  \"item\": \"name of the item (string)\",\n\
  \"amount\": number,\n\
  \"type\": \"expense\" or \"income\",\n\
  \"category\": \"one of: Food, Transport, Shopping, Entertainment, Bills, Health, Income, Other\"\n\
}\n\n\
If the message is not about money at all, return: {\"item\": \"\", \"amount\": 0, \
\"type\": \"expense\", \"category\": \"Other\", \"error\": \"Invalid input\"}";

const WHISPER_SYSTEM_PROMPT: &str = "You are 'FinSight', a playful personal finance sidekick who \
talks like a close friend. You receive one user's monthly spending summary (totals, top \
categories, logging streak). Analyze it and reply with strict JSON only.\n\n\
Required JSON shape:\n\
{\n\
  \"persona_name\": \"short nickname reflecting their spending, e.g. 'Boba Baron', 'Paycheck Houdini', 'Savings Ninja'\",\n\
  \"persona_emoji\": \"exactly one emoji matching the nickname\",\n\
  \"whisper_message\": \"1-2 sentences of friendly praise, warning, or advice in casual language\",\n\
  \"health_status\": \"good\" or \"warning\" or \"critical\",\n\
  \"leak_insight\": \"one sentence comparing a discretionary expense to what it could have bought\"\n\
}\n\n\
Send nothing except the JSON.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Gemini,
    OpenAI,
}

#[derive(Debug, Clone)]
pub struct InsightConfig {
    pub provider: Provider,
    pub model: String,
    pub api_key: String,
}

impl InsightConfig {
    /// Pick a provider from the environment, Gemini first.
    pub fn from_env() -> Option<Self> {
        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            return Some(Self {
                provider: Provider::Gemini,
                model: "gemini-2.0-flash".to_string(),
                api_key: key,
            });
        }
        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            return Some(Self {
                provider: Provider::OpenAI,
                model: "gpt-4o-mini".to_string(),
                api_key: key,
            });
        }
        None
    }
}

/// Parse a free-text entry. Any failure collapses into the fixed fallback.
pub async fn parse_transaction(config: &InsightConfig, user_input: &str) -> ParsedTransaction {
    match complete(config, PARSE_SYSTEM_PROMPT, user_input).await {
        Ok(text) => parse_model_json(&text).unwrap_or_else(|_| ParsedTransaction::fallback()),
        Err(_) => ParsedTransaction::fallback(),
    }
}

/// Generate the whisper insight from a serialized month summary. Any failure
/// collapses into the fixed fallback.
pub async fn whisper_insight(config: &InsightConfig, summary_json: &str) -> WhisperInsight {
    match complete(config, WHISPER_SYSTEM_PROMPT, summary_json).await {
        Ok(text) => parse_model_json(&text).unwrap_or_else(|_| WhisperInsight::fallback()),
        Err(_) => WhisperInsight::fallback(),
    }
}

async fn complete(config: &InsightConfig, system: &str, user: &str) -> Result<String> {
    match config.provider {
        Provider::Gemini => gemini_complete(&config.model, &config.api_key, system, user).await,
        Provider::OpenAI => openai_complete(&config.model, &config.api_key, system, user).await,
    }
}

async fn gemini_complete(model: &str, key: &str, system: &str, user: &str) -> Result<String> {
    #[derive(Serialize)]
    struct Part {
        text: String,
    }

    #[derive(Serialize)]
    struct Content {
        parts: Vec<Part>,
    }

    #[derive(Serialize)]
    struct Req {
        system_instruction: Content,
        contents: Vec<Content>,
    }

    #[derive(Deserialize)]
    struct Resp {
        candidates: Vec<Candidate>,
    }

    #[derive(Deserialize)]
    struct Candidate {
        content: RespContent,
    }

    #[derive(Deserialize)]
    struct RespContent {
        parts: Vec<RespPart>,
    }

    #[derive(Deserialize)]
    struct RespPart {
        text: Option<String>,
    }

    let body = Req {
        system_instruction: Content {
            parts: vec![Part {
                text: system.to_string(),
            }],
        },
        contents: vec![Content {
            parts: vec![Part {
                text: user.to_string(),
            }],
        }],
    };

    let url = format!(
        "https://generativelanguage.googleapis.com/v1beta/models/{model}:generateContent"
    );

    let client = reqwest::Client::new();
    let resp = client
        .post(&url)
        .header("x-goog-api-key", key)
        .json(&body)
        .send()
        .await
        .context("gemini request")?;

    let status = resp.status();
    if !status.is_success() {
        let txt = resp.text().await.unwrap_or_default();
        bail!("gemini error: {status} {txt}");
    }

    let out: Resp = resp.json().await.context("parse gemini response")?;
    let text = out
        .candidates
        .first()
        .and_then(|c| c.content.parts.first())
        .and_then(|p| p.text.clone())
        .unwrap_or_default();

    Ok(text.trim().to_string())
}

async fn openai_complete(model: &str, key: &str, system: &str, user: &str) -> Result<String> {
    #[derive(Serialize)]
    struct Msg {
        role: String,
        content: String,
    }

    #[derive(Serialize)]
    struct Req {
        model: String,
        messages: Vec<Msg>,
        temperature: f32,
    }

    #[derive(Deserialize)]
    struct Resp {
        choices: Vec<Choice>,
    }

    #[derive(Deserialize)]
    struct Choice {
        message: MsgOut,
    }

    #[derive(Deserialize)]
    struct MsgOut {
        content: Option<String>,
    }

    let body = Req {
        model: model.to_string(),
        messages: vec![
            Msg {
                role: "system".to_string(),
                content: system.to_string(),
            },
            Msg {
                role: "user".to_string(),
                content: user.to_string(),
            },
        ],
        temperature: 0.4,
    };

    let client = reqwest::Client::new();
    let resp = client
        .post("https://api.openai.com/v1/chat/completions")
        .header(reqwest::header::AUTHORIZATION, format!("Bearer {key}"))
        .json(&body)
        .send()
        .await
        .context("openai request")?;

    let status = resp.status();
    if !status.is_success() {
        let txt = resp.text().await.unwrap_or_default();
        bail!("openai error: {status} {txt}");
    }

    let out: Resp = resp.json().await.context("parse openai response")?;
    let content = out
        .choices
        .first()
        .and_then(|c| c.message.content.clone())
        .unwrap_or_default();

    Ok(content.trim().to_string())
}
