use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub ai: AiConfig,
    #[serde(default)]
    pub prompt: PromptConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AiConfig {
    pub provider: AiProvider,
    pub model: String,
    pub max_tokens: u32,
    pub anthropic_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    #[serde(skip)]
    pub api_url: Option<String>,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: AiProvider::Anthropic,
            model: "claude-3-5-haiku-latest".to_string(),
            max_tokens: 1024,
            anthropic_api_key: None,
            openai_api_key: None,
            api_url: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub enum AiProvider {
    Anthropic,
    OpenAi,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct PromptConfig {
    /// Replaces the default base prompt when non-empty. The OS context line
    /// is appended either way.
    #[serde(default)]
    pub system_prompt: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DisplayConfig {
    #[serde(default = "default_color_output")]
    pub color_output: bool,
}

fn default_color_output() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color_output: true }
    }
}

impl Config {
    pub fn create_default(path: &Path) -> Result<()> {
        let config = Config::default();

        let content = toml::to_string_pretty(&config)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    /// Loads the config file, filling in API keys from the environment when
    /// the file leaves them unset.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;

        if config.ai.anthropic_api_key.is_none() {
            config.ai.anthropic_api_key = env::var("ANTHROPIC_API_KEY").ok();
        }
        if config.ai.openai_api_key.is_none() {
            config.ai.openai_api_key = env::var("OPENAI_API_KEY").ok();
        }

        Ok(config)
    }
}

pub fn get_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("sh", "whim", "whim")
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

    Ok(proj_dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_round_trips_through_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        Config::create_default(&path).unwrap();
        let config = Config::load(&path).unwrap();

        assert!(matches!(config.ai.provider, AiProvider::Anthropic));
        assert!(config.display.color_output);
        assert_eq!(config.prompt.system_prompt, "");
    }

    #[test]
    fn partial_config_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[ai]\nprovider = \"OpenAi\"\nmodel = \"gpt-4o-mini\"\nmax_tokens = 512\n",
        )
        .unwrap();

        let config = Config::load(&path).unwrap();

        assert!(matches!(config.ai.provider, AiProvider::OpenAi));
        assert_eq!(config.ai.model, "gpt-4o-mini");
        assert!(config.display.color_output);
    }
}
