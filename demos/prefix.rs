//! Prefix example

use envloader::EnvLoad;

#[derive(Debug, Default, EnvLoad)]
#[env(prefix = "APP_")]
struct Config {
    // Reads APP_DATABASE_URL
    #[env = "DATABASE_URL"]
    pub database_url: String,

    // Reads APP_PORT
    #[env = "PORT,default=8080"]
    pub port: i32,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("APP_DATABASE_URL", "postgres://localhost/db");

    let config = Config::from_env()?;
    println!("Database URL: {}", config.database_url);
    println!("Port: {}", config.port);

    Ok(())
}
