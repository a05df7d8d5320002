use serde::{Deserialize, Serialize};
use std::fmt;

const PREFIX: &str = "Dog ";
const BARK: &str = ": woof~";

/// A named dog with an optional color.
///
/// Fields are fixed at construction; the accessors are the only way to read
/// them back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Dog {
    name: String,
    #[serde(default)]
    color: Option<String>,
}

impl Dog {
    /// Creates a dog with no color.
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_parts(name, None)
    }

    pub fn with_color(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self::from_parts(name, Some(color.into()))
    }

    /// Stores `color` exactly as given. `Some("")` stays distinct from `None`.
    pub fn from_parts(name: impl Into<String>, color: Option<String>) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }

    pub fn get_name(&self) -> String {
        format!("{}{}", PREFIX, self.name)
    }

    pub fn get_color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn shout(&self) -> String {
        format!("{}{}{}", PREFIX, self.name, BARK)
    }
}

impl fmt::Display for Dog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", PREFIX, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dog_without_color() {
        let dog = Dog::new("Rex");
        assert_eq!(dog.get_name(), "Dog Rex");
        assert_eq!(dog.shout(), "Dog Rex: woof~");
        assert_eq!(dog.get_color(), None);
    }

    #[test]
    fn test_dog_with_color() {
        let dog = Dog::with_color("Fido", "brown");
        assert_eq!(dog.get_name(), "Dog Fido");
        assert_eq!(dog.get_color(), Some("brown"));
        assert_eq!(dog.shout(), "Dog Fido: woof~");
    }

    #[test]
    fn test_empty_name_is_accepted() {
        let dog = Dog::with_color("", "white");
        assert_eq!(dog.get_name(), "Dog ");
        assert_eq!(dog.shout(), "Dog : woof~");
        assert_eq!(dog.get_color(), Some("white"));
    }

    #[test]
    fn test_empty_color_is_not_absent() {
        let dog = Dog::from_parts("Rex", Some(String::new()));
        assert_eq!(dog.get_color(), Some(""));
        assert_ne!(dog, Dog::new("Rex"));
    }

    #[test]
    fn test_display_matches_get_name() {
        let dog = Dog::with_color("Laika", "grey");
        assert_eq!(dog.to_string(), dog.get_name());
    }

    #[test]
    fn test_deserialize_missing_color() {
        let dog: Dog = serde_json::from_str(r#"{"name":"Rex"}"#).unwrap();
        assert_eq!(dog, Dog::new("Rex"));
    }

    #[test]
    fn test_deserialize_rejects_unknown_field() {
        let result: serde_json::Result<Dog> =
            serde_json::from_str(r#"{"name":"Rex","colour":"brown"}"#);
        assert!(result.is_err());
    }
}
