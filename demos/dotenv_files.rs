//! Dotenv seeding example

use envloader::{EnvLoad, Loader};
use std::io::Write;
use tempfile::NamedTempFile;

#[derive(Debug, Default, EnvLoad)]
struct Person {
    #[env = "first_name"]
    pub first_name: String,

    #[env = "last_name,optional,default=Bavarian"]
    pub last_name: String,
}

fn main() -> anyhow::Result<()> {
    let mut env_file = NamedTempFile::new()?;
    writeln!(env_file, "first_name=Bava")?;

    // Variables already in the process environment win over the file
    let mut person = Person::default();
    Loader::new().file(env_file.path()).load(&mut person)?;

    println!("Loaded {} {}", person.first_name, person.last_name);

    Ok(())
}
