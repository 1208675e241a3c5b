// Struct-level prefix and raw identifiers

use envloader::EnvLoad;

#[derive(Debug, Default, EnvLoad)]
#[env(prefix = "UI_")]
struct Config {
    #[env = "TYPE,default=worker"]
    pub r#type: String,
    pub r#loop: Vec<i32>,
}

fn main() {
    std::env::set_var("UI_loop", "1 2");
    let config = Config::from_env().unwrap();
    assert_eq!(config.r#type, "worker");
    assert_eq!(config.r#loop, vec![1, 2]);
}
