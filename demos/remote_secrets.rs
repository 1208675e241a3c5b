//! Remote secret example
//!
//! Uses an in-memory store; with the `aws` feature enabled, pass
//! `envloader::AwsSecretsManager::new()` instead.

use envloader::{BoxError, EnvLoad, Loader};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default, EnvLoad)]
struct Config {
    #[env = "api_key"]
    pub api_key: String,

    #[env = "db_password"]
    pub db_password: String,

    #[env = "db_host,default=localhost"]
    pub db_host: String,
}

fn fetch(secret_name: &str, region: &str) -> Result<String, BoxError> {
    println!("Fetching '{}' in '{}'", secret_name, region);
    Ok(r#"{"api_key":"from-secret","db_password":"hunter2"}"#.to_string())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("envloader=trace"))
        .init();

    std::env::set_var("SECRET_NAME", "prod/billing");
    std::env::set_var("REGION", "sa-east-1");
    // The secret wins over the environment
    std::env::set_var("api_key", "from-env");

    let mut config = Config::default();
    Loader::new().secret_store(fetch).load(&mut config)?;

    println!("API key: {}", config.api_key);
    println!("DB host: {}", config.db_host);

    Ok(())
}
