use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub demo: DemoConfig,
    pub logging: LoggingConfig,
}

/// Inputs for the scripted catalog walkthrough
#[derive(Debug, Deserialize, Clone)]
pub struct DemoConfig {
    pub remove_name: String,
    pub search_query: String,
    pub best_match_query: String,
    #[serde(default)]
    pub print_json: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub filter: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            remove_name: "Bread".to_string(),
            search_query: "bread".to_string(),
            best_match_query: "bread".to_string(),
            print_json: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn,shopfront_demo=info".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let demo = DemoConfig::default();

        let s = config::Config::builder()
            .set_default("demo.remove_name", demo.remove_name)?
            .set_default("demo.search_query", demo.search_query)?
            .set_default("demo.best_match_query", demo.best_match_query)?
            .set_default("demo.print_json", demo.print_json)?
            .set_default("logging.filter", LoggingConfig::default().filter)?
            // Every file layer is optional so the binary runs from any directory
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `SHOPFRONT_DEMO__SEARCH_QUERY=milk`
            .add_source(config::Environment::with_prefix("SHOPFRONT").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
