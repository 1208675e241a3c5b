// Every supported field kind, with and without directives

use envloader::EnvLoad;

#[derive(Debug, Default, EnvLoad)]
struct Config {
    pub name: String,
    #[env = "I8,optional"]
    pub small: i8,
    #[env = "I16,optional"]
    pub short: i16,
    #[env = "I32,optional"]
    pub int: i32,
    #[env = "I64,optional"]
    pub long: i64,
    #[env = "ISIZE,optional"]
    pub word: isize,
    #[env = "F32,optional"]
    pub single: f32,
    #[env = "F64,optional"]
    pub double: f64,
    #[env = "STRINGS,optional"]
    pub strings: Vec<String>,
    #[env = "I8S,optional"]
    pub smalls: Vec<i8>,
    #[env = "I64S,optional"]
    pub longs: Vec<i64>,
    #[env = "F32S,optional"]
    pub singles: Vec<f32>,
    #[env = "F64S,optional"]
    pub doubles: Vec<f64>,
}

fn main() {
    std::env::set_var("name", "ui");
    let config = Config::from_env().unwrap();
    assert_eq!(config.name, "ui");
}
