//! Default values example

use envloader::EnvLoad;

#[derive(Debug, Default, EnvLoad)]
struct Config {
    #[env = "LOG_LEVEL,default=info"]
    pub log_level: String,

    // Literals may contain '='
    #[env = "DSN,default=host=localhost port=5432"]
    pub dsn: String,

    #[env = "TIMEOUT_SECS,default=2.5"]
    pub timeout_secs: f64,

    // Empty default: the field is optional and stays empty
    #[env = "BANNER,optional,default="]
    pub banner: String,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("TIMEOUT_SECS", "30");

    let config = Config::from_env()?;
    println!("{:#?}", config);

    Ok(())
}
