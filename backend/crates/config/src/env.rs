use scamintel_common::error::{ScamIntelError, ScamIntelResult};
use serde::Deserialize;
use std::env;

/// Upper bound for `SCORE_PRECISION`; f64 scores carry no meaningful digits beyond this.
const MAX_SCORE_PRECISION: u32 = 6;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub log_level: String,
    pub score_precision: u32,
}

impl AppConfig {
    /// Load configuration from environment variables.
    /// Loads `.env` file if present; every variable has a default.
    pub fn from_env() -> ScamIntelResult<Self> {
        // Best-effort .env load; ignore if missing
        let _ = dotenvy::dotenv();

        let score_precision: u32 = get_var_or("SCORE_PRECISION", "3")
            .parse()
            .map_err(|e| ScamIntelError::Config(format!("invalid SCORE_PRECISION: {e}")))?;
        if score_precision > MAX_SCORE_PRECISION {
            return Err(ScamIntelError::Config(format!(
                "SCORE_PRECISION must be at most {MAX_SCORE_PRECISION}, got {score_precision}"
            )));
        }

        Ok(Self {
            log_level: get_var_or("LOG_LEVEL", "warn"),
            score_precision,
        })
    }

    /// Round a score to the configured number of decimal places.
    pub fn round_score(&self, score: f64) -> f64 {
        let factor = 10f64.powi(self.score_precision as i32);
        (score * factor).round() / factor
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_owned(),
            score_precision: 3,
        }
    }
}

fn get_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn config_from_env_uses_defaults() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");

        env::remove_var("SCORE_PRECISION");
        env::remove_var("LOG_LEVEL");

        let cfg = AppConfig::from_env().expect("should parse config");
        assert_eq!(cfg.score_precision, 3);
        assert_eq!(cfg.log_level, "warn");
    }

    #[test]
    fn config_from_env_reads_overrides() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");

        env::set_var("SCORE_PRECISION", "2");
        env::set_var("LOG_LEVEL", "debug");

        let cfg = AppConfig::from_env().expect("should parse config");
        assert_eq!(cfg.score_precision, 2);
        assert_eq!(cfg.log_level, "debug");

        env::remove_var("SCORE_PRECISION");
        env::remove_var("LOG_LEVEL");
    }

    #[test]
    fn config_from_env_rejects_garbage_precision() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");

        env::set_var("SCORE_PRECISION", "three");
        let result = AppConfig::from_env();
        env::remove_var("SCORE_PRECISION");

        assert!(matches!(result, Err(ScamIntelError::Config(_))));
    }

    #[test]
    fn config_from_env_rejects_excessive_precision() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");

        env::set_var("SCORE_PRECISION", "12");
        let result = AppConfig::from_env();
        env::remove_var("SCORE_PRECISION");

        assert!(result.is_err());
    }

    #[test]
    fn round_score_respects_precision() {
        let cfg = AppConfig {
            log_level: "warn".to_owned(),
            score_precision: 3,
        };
        assert_eq!(cfg.round_score(0.518_499_9), 0.518);
        assert_eq!(cfg.round_score(0.0), 0.0);

        let coarse = AppConfig {
            score_precision: 1,
            ..cfg
        };
        assert_eq!(coarse.round_score(0.46), 0.5);
    }
}
