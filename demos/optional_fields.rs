//! Optional fields example

use envloader::{EnvError, EnvLoad};

#[derive(Debug, Default, EnvLoad)]
struct Config {
    #[env = "SERVICE_NAME"]
    pub service_name: String,

    // Left at zero values when unset
    #[env = "SENTRY_DSN,optional"]
    pub sentry_dsn: String,

    #[env = "WORKERS,optional"]
    pub workers: i32,
}

fn main() -> anyhow::Result<()> {
    // Missing required field
    match Config::from_env() {
        Err(EnvError::Missing { key, field }) => {
            println!("Missing required field '{}' (env '{}')", field, key);
        }
        other => println!("Unexpected result: {:?}", other),
    }

    std::env::set_var("SERVICE_NAME", "billing");
    let config = Config::from_env()?;
    println!("{:#?}", config);

    Ok(())
}
