use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use crate::matching::extractor::SkillMatcherKind;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub catalog_path: PathBuf,
    pub port: u16,
    pub rust_log: String,
    pub skill_matcher: SkillMatcherKind,
    pub default_recommend_limit: usize,
    pub default_top_roles: usize,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            catalog_path: std::env::var("CATALOG_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/skills.json")),
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            skill_matcher: match std::env::var("SKILL_MATCHER") {
                Ok(raw) => raw
                    .parse::<SkillMatcherKind>()
                    .map_err(|e: String| anyhow!(e))
                    .context("SKILL_MATCHER is invalid")?,
                Err(_) => SkillMatcherKind::default(),
            },
            default_recommend_limit: parse_env("DEFAULT_RECOMMEND_LIMIT", 8)?,
            default_top_roles: parse_env("DEFAULT_TOP_ROLES", 3)?,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", 5 * 1024 * 1024)?,
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
