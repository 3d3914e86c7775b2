use chrono::NaiveDate;
use contracts::usecases::u508_generate_sales_data::request::{
    GenerateRequest, DEFAULT_OUTPUT_DIR, DEFAULT_RECORDS, DEFAULT_SEED,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub data: DataConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    /// Directory holding `sales_data.csv` and `monthly_targets.csv`
    pub dir: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GeneratorConfig {
    pub records: usize,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let request = GenerateRequest::default();
        Self {
            records: request.records,
            start: request.start,
            end: request.end,
            seed: request.seed,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 3000 }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[data]
dir = "data"

[generator]
records = 8000
start = "2023-01-01"
end = "2024-12-31"
seed = 42

[server]
port = 3000
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (copied there by build.rs)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Data directory; relative paths resolve against the working directory
pub fn get_data_dir(config: &Config) -> anyhow::Result<PathBuf> {
    let dir = Path::new(&config.data.dir);
    if dir.is_absolute() {
        return Ok(dir.to_path_buf());
    }
    Ok(std::env::current_dir()?.join(dir))
}

impl GeneratorConfig {
    /// Generation request from configured defaults; CLI flags override the fields afterwards
    pub fn to_request(&self, data: &DataConfig) -> GenerateRequest {
        GenerateRequest {
            records: self.records,
            start: self.start,
            end: self.end,
            output_dir: data.dir.clone(),
            seed: self.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.data.dir, DEFAULT_OUTPUT_DIR);
        assert_eq!(config.generator.records, DEFAULT_RECORDS);
        assert_eq!(config.generator.seed, DEFAULT_SEED);
        assert_eq!(config.generator.start, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        assert_eq!(config.generator.end, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("[data]\ndir = \"/tmp/sales\"\n").unwrap();
        assert_eq!(config.generator.records, DEFAULT_RECORDS);
        assert_eq!(config.server.port, 3000);
        assert_eq!(get_data_dir(&config).unwrap(), PathBuf::from("/tmp/sales"));
    }

    #[test]
    fn test_generator_config_to_request() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        let request = config.generator.to_request(&config.data);
        assert_eq!(request, GenerateRequest::default());
    }
}
