//! Basic usage example

use envloader::EnvLoad;

#[derive(Debug, Default, EnvLoad)]
struct Config {
    // Required field: loaded from DATABASE_URL
    #[env = "DATABASE_URL"]
    pub database_url: String,

    // With default value
    #[env = "SERVER_ADDR,default=127.0.0.1:8080"]
    pub server_addr: String,

    // Numeric type
    #[env = "MAX_CONNECTIONS,default=10"]
    pub max_connections: i32,
}

fn main() -> anyhow::Result<()> {
    // Set environment variables for demonstration
    std::env::set_var("DATABASE_URL", "postgres://localhost/mydb");
    std::env::set_var("SERVER_ADDR", "0.0.0.0:3000");

    // Load configuration
    let config = Config::from_env()?;

    println!("Configuration loaded:");
    println!("  Database URL: {}", config.database_url);
    println!("  Server Address: {}", config.server_addr);
    println!("  Max Connections: {}", config.max_connections);

    Ok(())
}
