//! Precedence between secret, environment and default values.

use crate::secrets::Secrets;
use crate::tag::BindingSpec;
use std::env;
use std::fmt;

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Non-empty value from the secrets mapping.
    Secret,
    /// Non-empty environment variable.
    Env,
    /// Declared `default=` literal, possibly empty.
    Default,
    /// Nothing matched; the value is empty.
    Unset,
}

impl Source {
    /// Lowercase name used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Secret => "secret",
            Source::Env => "env",
            Source::Default => "default",
            Source::Unset => "unset",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw value chosen for one field, before coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// Raw string to coerce.
    pub value: String,
    /// Which source won.
    pub source: Source,
}

impl Resolved {
    /// Whether the chosen raw string is empty.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Pick the winning value: a non-empty secret, then a non-empty environment
/// value, then the declared default (even if empty), then nothing.
pub fn choose(secret: Option<&str>, env: Option<&str>, default: Option<&str>) -> Resolved {
    let (value, source) = match (secret, env, default) {
        (Some(s), _, _) if !s.is_empty() => (s, Source::Secret),
        (_, Some(e), _) if !e.is_empty() => (e, Source::Env),
        (_, _, Some(d)) => (d, Source::Default),
        _ => ("", Source::Unset),
    };
    Resolved {
        value: value.to_string(),
        source,
    }
}

/// Resolve one field against the process environment and the secrets mapping.
pub fn resolve(spec: &BindingSpec, secrets: Option<&Secrets>) -> Resolved {
    let env_value = match env::var(&spec.key) {
        Ok(value) => Some(value),
        Err(env::VarError::NotPresent) => None,
        Err(env::VarError::NotUnicode(_)) => {
            tracing::warn!(key = %spec.key, "ignoring non-unicode environment value");
            None
        }
    };
    let secret_value = secrets.and_then(|s| s.get(&spec.key));

    choose(secret_value, env_value.as_deref(), spec.default.as_deref())
}
