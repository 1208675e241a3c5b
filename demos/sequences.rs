//! Sequence fields example

use envloader::EnvLoad;

#[derive(Debug, Default, EnvLoad)]
struct Config {
    // Split on single spaces
    #[env = "ALLOWED_HOSTS"]
    pub allowed_hosts: Vec<String>,

    #[env = "PORTS"]
    pub ports: Vec<i32>,

    #[env = "WEIGHTS,default=0.5 0.25 0.25"]
    pub weights: Vec<f32>,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("ALLOWED_HOSTS", "api.example.com admin.example.com");
    std::env::set_var("PORTS", "80 443 8443");

    let config = Config::from_env()?;
    println!("{:#?}", config);

    Ok(())
}
