// Generic field types are bound through the generated where clause

use envloader::EnvLoad;

#[derive(Debug, Default, EnvLoad)]
struct Config<T, U> {
    #[env = "GENERIC_ONE"]
    pub one: T,
    #[env = "GENERIC_MANY,optional"]
    pub many: Vec<U>,
}

fn main() {
    std::env::set_var("GENERIC_ONE", "7");
    std::env::set_var("GENERIC_MANY", "0.5 1.5");
    let config = Config::<i16, f64>::from_env().unwrap();
    assert_eq!(config.one, 7);
    assert_eq!(config.many, vec![0.5, 1.5]);
}
