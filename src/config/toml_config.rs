use crate::core::keywords::PreferenceKeywordTable;
use crate::domain::model::TraitDefinition;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{HomieError, Result};
use crate::utils::validation::{validate_path, validate_range, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;

const MAX_DELAY_MS: u64 = 60_000;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub extractor: ExtractorConfig,
    pub fixtures: Option<FixturesConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    pub login_delay_ms: Option<u64>,
    pub signup_delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractorConfig {
    #[serde(default)]
    pub traits: Vec<TraitDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixturesConfig {
    pub path: String,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"))
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        tracing::debug!("Loaded config from {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| HomieError::TomlParseError {
            message: e.to_string(),
        })
    }

    /// 替換環境變數 (例如 ${FIXTURES_PATH})，找不到的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}

impl ConfigProvider for AppConfig {
    fn login_delay(&self) -> Duration {
        self.auth
            .login_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(crate::adapters::session_store::DEFAULT_LOGIN_DELAY)
    }

    fn signup_delay(&self) -> Duration {
        self.auth
            .signup_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(crate::adapters::session_store::DEFAULT_SIGNUP_DELAY)
    }

    fn fixtures_path(&self) -> Option<&str> {
        self.fixtures.as_ref().map(|f| f.path.as_str())
    }

    fn custom_traits(&self) -> &[TraitDefinition] {
        &self.extractor.traits
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        if let Some(ms) = self.auth.login_delay_ms {
            validate_range("auth.login_delay_ms", ms, 0, MAX_DELAY_MS)?;
        }
        if let Some(ms) = self.auth.signup_delay_ms {
            validate_range("auth.signup_delay_ms", ms, 0, MAX_DELAY_MS)?;
        }
        if let Some(fixtures) = &self.fixtures {
            validate_path("fixtures.path", &fixtures.path)?;
        }
        PreferenceKeywordTable::from_config(self)?;
        Ok(())
    }
}
