//! Bind environment variables into typed configuration structs
//!
//! `envloader` fills a struct from the process environment, optionally seeded
//! from dotenv files and overlaid with one remote JSON secret. It is meant
//! for process startup: read once, check required fields, fail fast.
//!
//! # Features
//!
//! - **Declarative**: `#[derive(EnvLoad)]` with one `#[env = "..."]` directive per field
//! - **Remote secrets**: one JSON object fetched through a [`SecretStore`]
//! - **Dotenv seeding**: `KEY=VALUE` files fill unset variables before binding
//! - **Type-safe**: unsupported field types are rejected at compile time
//!
//! # Directives
//!
//! `#[env = "<key>[,optional][,default=<literal>]"]`
//!
//! - `key`: lookup name in the environment and the secret. Defaults to the field name.
//! - `optional`: the field may stay empty.
//! - `default=<literal>`: used when neither the secret nor the environment has a
//!   non-empty value. Everything after the first `=` is the literal.
//!
//! # Precedence
//!
//! 1. Secret value, if non-empty
//! 2. Environment variable, if non-empty
//! 3. Declared default
//!
//! A `String` field the caller already filled is left alone.
//!
//! # Value Parsing
//!
//! - `String`: assigned as is
//! - `i8`, `i16`, `i32`, `i64`, `isize`, `f32`, `f64`: base-10 literal of that width
//! - `Vec<_>` of the above: split on single spaces, each token parsed as its element type
//!
//! # Example
//!
//! ```rust
//! use envloader::EnvLoad;
//!
//! #[derive(Debug, Default, EnvLoad)]
//! struct Config {
//!     #[env = "first_name"]
//!     pub first_name: String,
//!
//!     #[env = "last_name,optional,default=Bavarian"]
//!     pub last_name: String,
//!
//!     #[env = "PORTS,default=80 443"]
//!     pub ports: Vec<i32>,
//! }
//!
//! # fn main() -> Result<(), envloader::EnvError> {
//! #     std::env::set_var("first_name", "Bava");
//! let config = Config::from_env()?;
//! assert_eq!(config.first_name, "Bava");
//! assert_eq!(config.last_name, "Bavarian");
//! assert_eq!(config.ports, vec![80, 443]);
//! #     Ok(())
//! # }
//! ```
//!
//! # Remote secrets
//!
//! When a [`SecretStore`] is configured and `SECRET_NAME` is non-empty, the
//! secret is fetched once per load (with `REGION` passed along) and parsed as
//! a JSON object of strings. Enable the `aws` feature for
//! `AwsSecretsManager`.
//!
//! ```rust
//! use envloader::{BoxError, EnvLoad, Loader};
//!
//! #[derive(Debug, Default, EnvLoad)]
//! struct Config {
//!     #[env = "api_key"]
//!     pub api_key: String,
//! }
//!
//! # fn main() -> Result<(), envloader::EnvError> {
//! #     std::env::set_var("SECRET_NAME", "prod/app");
//! let store = |_name: &str, _region: &str| -> Result<String, BoxError> {
//!     Ok(r#"{"api_key":"s3cr3t"}"#.to_string())
//! };
//!
//! let mut config = Config::default();
//! Loader::new().secret_store(store).load(&mut config)?;
//! assert_eq!(config.api_key, "s3cr3t");
//! #     std::env::remove_var("SECRET_NAME");
//! #     Ok(())
//! # }
//! ```

#[cfg(feature = "aws")]
mod aws;
mod bind;
mod coerce;
mod error;
mod loader;
mod resolve;
mod secrets;
mod tag;

#[cfg(feature = "aws")]
pub use aws::AwsSecretsManager;
pub use bind::{Binder, EnvLoad, FieldDecl};
pub use coerce::{split_sequence, FieldValue, Scalar, ScalarError};
pub use envloader_derive::EnvLoad;
pub use error::{BoxError, EnvError};
pub use loader::{load, Loader};
pub use resolve::{choose, resolve, Resolved, Source};
pub use secrets::{SecretStore, Secrets, REGION_VAR, SECRET_NAME_VAR};
pub use tag::BindingSpec;
