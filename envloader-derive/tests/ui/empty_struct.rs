// A struct without fields always loads

use envloader::EnvLoad;

#[derive(Debug, Default, EnvLoad)]
struct Nothing {}

fn main() {
    Nothing::from_env().unwrap();
}
