//! Entry points tying file seeding, secret fetching and binding together.

use crate::bind::{Binder, EnvLoad};
use crate::error::EnvError;
use crate::secrets::{fetch_secrets, SecretStore};
use std::fmt;
use std::path::{Path, PathBuf};

/// Load options: dotenv files to seed and an optional secret store.
///
/// ```rust
/// use envloader::{EnvLoad, Loader};
///
/// #[derive(Debug, Default, EnvLoad)]
/// struct Config {
///     #[env = "LOADER_DOC_HOST,default=localhost"]
///     host: String,
/// }
///
/// # fn main() -> Result<(), envloader::EnvError> {
/// let mut config = Config::default();
/// Loader::new().file(".env").load(&mut config)?;
/// # std::env::remove_var("LOADER_DOC_HOST");
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct Loader {
    files: Vec<PathBuf>,
    secret_store: Option<Box<dyn SecretStore>>,
}

impl fmt::Debug for Loader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Loader")
            .field("files", &self.files)
            .field("secret_store", &self.secret_store.is_some())
            .finish()
    }
}

impl Loader {
    /// No files, no secret store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the environment from a dotenv file before binding.
    pub fn file(mut self, path: impl AsRef<Path>) -> Self {
        self.files.push(path.as_ref().to_path_buf());
        self
    }

    /// Seed the environment from several dotenv files, in order.
    pub fn files<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.files
            .extend(paths.into_iter().map(|p| p.as_ref().to_path_buf()));
        self
    }

    /// Fetch the secret named by `SECRET_NAME` from `store` before binding.
    pub fn secret_store(mut self, store: impl SecretStore + 'static) -> Self {
        self.secret_store = Some(Box::new(store));
        self
    }

    /// Load `target` in place.
    ///
    /// Seeds the process environment from the configured files, fetches the
    /// secret if a store is configured and `SECRET_NAME` is set, then binds
    /// every field. Seeding writes to the process-wide environment, so loads
    /// with different file sets must not run concurrently.
    ///
    /// # Errors
    ///
    /// - The secret cannot be fetched or is not a flat JSON object of strings
    /// - A value cannot be parsed into its field's type
    /// - A required field resolves to nothing
    ///
    /// Fields bound before the failing one keep their new values.
    pub fn load<T>(&self, target: &mut T) -> Result<(), EnvError>
    where
        T: EnvLoad + ?Sized,
    {
        seed_env(&self.files);

        let secrets = match &self.secret_store {
            Some(store) => fetch_secrets(store.as_ref())?,
            None => None,
        };

        let mut binder = Binder::new(secrets.as_ref());
        target.bind_fields(&mut binder)
    }
}

/// Load `target` from the environment alone: no files, no secret store.
pub fn load<T>(target: &mut T) -> Result<(), EnvError>
where
    T: EnvLoad + ?Sized,
{
    Loader::new().load(target)
}

/// Existing variables win over file entries. Unreadable files are skipped.
fn seed_env(files: &[PathBuf]) {
    for path in files {
        match dotenvy::from_path(path) {
            Ok(()) => tracing::debug!(path = %path.display(), "seeded environment"),
            Err(e) => tracing::debug!(path = %path.display(), error = %e, "skipping env file"),
        }
    }
}
