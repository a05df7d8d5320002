use crate::domain::model::Dog;
use crate::utils::error::{KennelError, Result};
use crate::utils::validation::{validate_non_empty_list, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

/// A list of dogs loaded from a TOML file:
///
/// ```toml
/// [[dogs]]
/// name = "Fido"
/// color = "brown"
///
/// [[dogs]]
/// name = "Rex"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub dogs: Vec<Dog>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"))
}

impl RosterConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| KennelError::RosterReadError {
                path: path.display().to_string(),
                source,
            })?;
        tracing::debug!("Read roster from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Parses the roster, then expands `${VAR}` inside string values only.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut value = toml::Value::Table(content.parse::<toml::Table>()?);
        Self::substitute_env_vars(&mut value);
        Ok(value.try_into::<Self>()?)
    }

    /// Replaces `${VAR}` with the environment value. Unset variables are left as written.
    fn substitute_env_vars(value: &mut toml::Value) {
        match value {
            toml::Value::String(text) => {
                let expanded = env_var_pattern()
                    .replace_all(text, |caps: &Captures| {
                        std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
                    })
                    .into_owned();
                *text = expanded;
            }
            toml::Value::Array(items) => items.iter_mut().for_each(Self::substitute_env_vars),
            toml::Value::Table(table) => table.iter_mut().for_each(|(_, v)| Self::substitute_env_vars(v)),
            _ => {}
        }
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_list("dogs", &self.dogs)
    }

    pub fn into_dogs(self) -> Vec<Dog> {
        self.dogs
    }
}

impl Validate for RosterConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roster() {
        let roster = RosterConfig::from_toml_str(
            r#"
[[dogs]]
name = "Fido"
color = "brown"

[[dogs]]
name = "Rex"
"#,
        )
        .unwrap();

        assert!(roster.validate().is_ok());
        let dogs = roster.into_dogs();
        assert_eq!(dogs.len(), 2);
        assert_eq!(dogs[0], Dog::with_color("Fido", "brown"));
        assert_eq!(dogs[1].get_color(), None);
    }

    #[test]
    fn test_empty_roster_fails_validation() {
        let roster = RosterConfig::from_toml_str("").unwrap();
        assert!(matches!(
            roster.validate(),
            Err(KennelError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_missing_name_is_parse_error() {
        let err = RosterConfig::from_toml_str("[[dogs]]\ncolor = \"black\"\n").unwrap_err();
        assert!(matches!(err, KennelError::RosterParseError(_)));
    }

    #[test]
    fn test_unset_env_var_is_left_intact() {
        let roster = RosterConfig::from_toml_str(
            "[[dogs]]\nname = \"${KENNEL_TEST_SURELY_UNSET_VAR}\"\n",
        )
        .unwrap();
        assert_eq!(
            roster.dogs[0].get_name(),
            "Dog ${KENNEL_TEST_SURELY_UNSET_VAR}"
        );
    }

    #[test]
    fn test_misspelled_key_is_rejected() {
        let err = RosterConfig::from_toml_str("[[dogs]]\nname = \"Rex\"\ncolour = \"brown\"\n")
            .unwrap_err();
        assert!(matches!(err, KennelError::RosterParseError(_)));
    }

}
