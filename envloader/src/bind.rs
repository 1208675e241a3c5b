//! Field-by-field binding of a record.

use crate::coerce::FieldValue;
use crate::error::EnvError;
use crate::resolve::{resolve, Source};
use crate::secrets::Secrets;
use crate::tag::BindingSpec;

/// Static description of one struct field, emitted by `#[derive(EnvLoad)]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDecl {
    /// Field name as declared in the struct.
    pub name: &'static str,
    /// Contents of the field's `#[env = "..."]` attribute.
    pub tag: Option<&'static str>,
    /// Struct-level `#[env(prefix = "...")]`, or `""`.
    pub prefix: &'static str,
}

impl FieldDecl {
    /// Describe a field bound under its own name.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            tag: None,
            prefix: "",
        }
    }

    /// Attach the field's directive string.
    pub const fn tag(mut self, tag: &'static str) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Attach the struct-level key prefix.
    pub const fn prefix(mut self, prefix: &'static str) -> Self {
        self.prefix = prefix;
        self
    }
}

/// A record whose fields can be bound from the environment.
///
/// Implement with `#[derive(EnvLoad)]`.
pub trait EnvLoad {
    /// Bind every field, in declaration order, through `binder`.
    ///
    /// Stops at the first failing field.
    fn bind_fields(&mut self, binder: &mut Binder<'_>) -> Result<(), EnvError>;

    /// Build a record from its `Default` and load it without dotenv files or
    /// a secret store.
    fn from_env() -> Result<Self, EnvError>
    where
        Self: Default + Sized,
    {
        let mut config = Self::default();
        crate::load(&mut config)?;
        Ok(config)
    }
}

/// Drives tag parsing, resolution and coercion for each field of a record.
#[derive(Debug, Default)]
pub struct Binder<'a> {
    secrets: Option<&'a Secrets>,
}

impl<'a> Binder<'a> {
    /// Bind against the environment and, if given, a secrets mapping.
    pub fn new(secrets: Option<&'a Secrets>) -> Self {
        Self { secrets }
    }

    /// Bind one field.
    ///
    /// A pre-populated string is left as is. Otherwise the resolved value is
    /// coerced into `slot` when it is non-empty or is the declared default;
    /// an unresolved field leaves `slot` untouched. An empty default is still
    /// coerced, so it yields `[""]` for `Vec<String>` and a format error for
    /// numbers. A required field fails when the resolved value is empty and
    /// `slot` is still empty.
    pub fn bind<T>(&mut self, decl: FieldDecl, slot: &mut T) -> Result<(), EnvError>
    where
        T: FieldValue + ?Sized,
    {
        let spec = BindingSpec::parse(decl.tag, decl.name).with_prefix(decl.prefix);

        let (source, resolved_empty) = if slot.is_prepopulated() {
            ("prepopulated", false)
        } else {
            let resolved = resolve(&spec, self.secrets);
            if !resolved.is_empty() || resolved.source == Source::Default {
                slot.coerce(&resolved.value, &spec.key, decl.name)?;
            }
            (resolved.source.as_str(), resolved.is_empty())
        };

        tracing::trace!(key = %spec.key, field = decl.name, source, "bound field");

        if !spec.optional && resolved_empty && slot.is_empty() {
            return Err(EnvError::missing(spec.key, decl.name));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn bind<T: FieldValue>(decl: FieldDecl, slot: &mut T) -> Result<(), EnvError> {
        Binder::new(None).bind(decl, slot)
    }

    #[test]
    #[serial]
    fn test_required_string_missing() {
        env::remove_var("BIND_MISSING");
        let mut value = String::new();
        let result = bind(FieldDecl::new("name").tag("BIND_MISSING"), &mut value);
        match result {
            Err(EnvError::Missing { key, field }) => {
                assert_eq!(key, "BIND_MISSING");
                assert_eq!(field, "name");
            }
            other => panic!("Expected Missing error, got {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_optional_string_missing_stays_empty() {
        env::remove_var("BIND_OPT");
        let mut value = String::new();
        bind(FieldDecl::new("name").tag("BIND_OPT,optional"), &mut value).unwrap();
        assert_eq!(value, "");
    }

    #[test]
    #[serial]
    fn test_prepopulated_string_is_not_overwritten() {
        env::set_var("BIND_PREPOP", "from_env");
        let mut value = "from_caller".to_string();
        bind(FieldDecl::new("name").tag("BIND_PREPOP"), &mut value).unwrap();
        assert_eq!(value, "from_caller");
        env::remove_var("BIND_PREPOP");
    }

    #[test]
    #[serial]
    fn test_numbers_are_always_resolved() {
        env::set_var("BIND_NUM", "42");
        let mut value = 7i32;
        bind(FieldDecl::new("num").tag("BIND_NUM"), &mut value).unwrap();
        assert_eq!(value, 42);
        env::remove_var("BIND_NUM");
    }

    #[test]
    #[serial]
    fn test_unresolved_number_keeps_caller_value() {
        env::remove_var("BIND_NUM_KEEP");
        let mut value = 7i32;
        bind(FieldDecl::new("num").tag("BIND_NUM_KEEP"), &mut value).unwrap();
        assert_eq!(value, 7);

        let mut zero = 0i32;
        let result = bind(FieldDecl::new("num").tag("BIND_NUM_KEEP"), &mut zero);
        assert!(matches!(result, Err(EnvError::Missing { .. })));
    }

    #[test]
    #[serial]
    fn test_explicit_zero_satisfies_required() {
        env::set_var("BIND_ZERO", "0");
        let mut value = 0i64;
        bind(FieldDecl::new("num").tag("BIND_ZERO"), &mut value).unwrap();
        assert_eq!(value, 0);
        env::remove_var("BIND_ZERO");
    }

    #[test]
    #[serial]
    fn test_empty_default_does_not_satisfy_required() {
        env::remove_var("BIND_EMPTY_DEFAULT");
        let mut value = String::new();
        let result = bind(
            FieldDecl::new("name").tag("BIND_EMPTY_DEFAULT,default="),
            &mut value,
        );
        assert!(matches!(result, Err(EnvError::Missing { .. })));
    }

    #[test]
    #[serial]
    fn test_zero_default_satisfies_required() {
        env::remove_var("BIND_ZERO_DEFAULT");
        let mut value = 3i32;
        bind(FieldDecl::new("num").tag("BIND_ZERO_DEFAULT,default=0"), &mut value).unwrap();
        assert_eq!(value, 0);
    }

    #[test]
    #[serial]
    fn test_empty_default_splits_to_one_empty_string() {
        env::remove_var("BIND_EMPTY_SEQ");
        let mut value: Vec<String> = Vec::new();
        bind(FieldDecl::new("tags").tag("BIND_EMPTY_SEQ,optional,default="), &mut value).unwrap();
        assert_eq!(value, vec![String::new()]);
    }

    #[test]
    #[serial]
    fn test_empty_default_on_number_is_format_error() {
        env::remove_var("BIND_EMPTY_NUM");
        let mut value = 0i32;
        let result = bind(FieldDecl::new("num").tag("BIND_EMPTY_NUM,optional,default="), &mut value);
        assert!(matches!(result, Err(EnvError::Format { .. })));
    }

    #[test]
    #[serial]
    fn test_optional_sequence_missing_stays_empty() {
        env::remove_var("BIND_SEQ");
        let mut value: Vec<String> = Vec::new();
        bind(FieldDecl::new("seq").tag("BIND_SEQ,optional"), &mut value).unwrap();
        assert!(value.is_empty());
    }

    #[test]
    #[serial]
    fn test_field_name_is_default_key() {
        env::set_var("bind_field_key", "value");
        let mut value = String::new();
        bind(FieldDecl::new("bind_field_key"), &mut value).unwrap();
        assert_eq!(value, "value");
        env::remove_var("bind_field_key");
    }

    #[test]
    #[serial]
    fn test_prefix_applies_to_key() {
        env::set_var("APP_BIND_PORT", "8080");
        let mut value = 0i32;
        bind(FieldDecl::new("port").tag("BIND_PORT").prefix("APP_"), &mut value).unwrap();
        assert_eq!(value, 8080);
        env::remove_var("APP_BIND_PORT");
    }

    #[test]
    #[serial]
    fn test_secret_overrides_environment() {
        env::set_var("BIND_SECRET", "env");
        let secrets: Secrets = [("BIND_SECRET", "secret")].into_iter().collect();
        let mut value = String::new();
        Binder::new(Some(&secrets))
            .bind(FieldDecl::new("s").tag("BIND_SECRET"), &mut value)
            .unwrap();
        assert_eq!(value, "secret");
        env::remove_var("BIND_SECRET");
    }

    #[test]
    #[serial]
    fn test_coercion_error_names_key_and_field() {
        env::set_var("BIND_BAD", "abc");
        let mut value = 0i16;
        match bind(FieldDecl::new("bad").tag("BIND_BAD"), &mut value) {
            Err(EnvError::Format { key, field, .. }) => {
                assert_eq!(key, "BIND_BAD");
                assert_eq!(field, "bad");
            }
            other => panic!("Expected Format error, got {:?}", other),
        }
        env::remove_var("BIND_BAD");
    }
}
