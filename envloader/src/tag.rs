//! Parsing of per-field `#[env = "..."]` directives.

const OPTIONAL: &str = "optional";
const DEFAULT_PREFIX: &str = "default=";

/// Resolved binding of one field: where to look and what to fall back to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingSpec {
    /// Lookup key used for both the environment and the secrets mapping.
    pub key: String,
    /// Whether the field may stay empty.
    pub optional: bool,
    /// Literal used when neither the secret nor the environment has a value.
    pub default: Option<String>,
}

impl BindingSpec {
    /// Parse a directive string of the form `<key>[,optional][,default=<literal>]`.
    ///
    /// A missing tag or an empty first token makes the key fall back to
    /// `field_name`. Unknown directives are ignored. Only the first `=` of a
    /// `default=` directive is significant, so the literal may contain `=`.
    /// The literal may not contain `,`, which always separates directives.
    pub fn parse(tag: Option<&str>, field_name: &str) -> Self {
        let mut tokens = tag.unwrap_or_default().split(',');

        let key = match tokens.next() {
            Some(key) if !key.is_empty() => key.to_string(),
            _ => field_name.to_string(),
        };

        let mut optional = false;
        let mut default = None;
        for token in tokens {
            if token == OPTIONAL {
                optional = true;
            } else if let Some(literal) = token.strip_prefix(DEFAULT_PREFIX) {
                default = Some(literal.to_string());
            }
        }

        Self {
            key,
            optional,
            default,
        }
    }

    /// Prepend a struct-level prefix to the lookup key.
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        if !prefix.is_empty() {
            self.key.insert_str(0, prefix);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_tag_uses_field_name() {
        let spec = BindingSpec::parse(None, "FirstName");
        assert_eq!(
            spec,
            BindingSpec {
                key: "FirstName".to_string(),
                optional: false,
                default: None,
            }
        );
    }

    #[test]
    fn test_key_only() {
        let spec = BindingSpec::parse(Some("first_name"), "FirstName");
        assert_eq!(spec.key, "first_name");
        assert!(!spec.optional);
        assert_eq!(spec.default, None);
    }

    #[test]
    fn test_optional_and_default() {
        let spec = BindingSpec::parse(Some("last_name,optional,default=Bavarian"), "LastName");
        assert_eq!(spec.key, "last_name");
        assert!(spec.optional);
        assert_eq!(spec.default.as_deref(), Some("Bavarian"));
    }

    #[test]
    fn test_directive_order_is_insignificant() {
        let a = BindingSpec::parse(Some("K,default=1,optional"), "f");
        let b = BindingSpec::parse(Some("K,optional,default=1"), "f");
        assert_eq!(a, b);
    }

    #[test]
    fn test_default_keeps_everything_after_first_equals() {
        let spec = BindingSpec::parse(Some("DSN,default=host=db;user=app"), "dsn");
        assert_eq!(spec.default.as_deref(), Some("host=db;user=app"));
    }

    #[test]
    fn test_empty_default_literal() {
        let spec = BindingSpec::parse(Some("K,default="), "f");
        assert_eq!(spec.default.as_deref(), Some(""));
    }

    #[test]
    fn test_unknown_directives_are_ignored() {
        let spec = BindingSpec::parse(Some("K,secret,required,default"), "f");
        assert_eq!(spec.key, "K");
        assert!(!spec.optional);
        assert_eq!(spec.default, None);
    }

    #[test]
    fn test_empty_key_falls_back_to_field_name() {
        let spec = BindingSpec::parse(Some(",optional"), "timeout");
        assert_eq!(spec.key, "timeout");
        assert!(spec.optional);

        let spec = BindingSpec::parse(Some(""), "timeout");
        assert_eq!(spec.key, "timeout");
    }

    #[test]
    fn test_with_prefix() {
        let spec = BindingSpec::parse(Some("PORT"), "port").with_prefix("APP_");
        assert_eq!(spec.key, "APP_PORT");

        let spec = BindingSpec::parse(Some("PORT"), "port").with_prefix("");
        assert_eq!(spec.key, "PORT");
    }
}
