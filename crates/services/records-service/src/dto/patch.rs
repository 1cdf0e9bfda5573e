//! Optional field in a partial update.

use serde::{Deserialize, Deserializer};

/// A field of a partial update: leave it alone, or replace it.
///
/// An absent key and an explicit JSON `null` both mean [`Patch::Keep`];
/// no field can be cleared through a patch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Patch<T> {
    #[default]
    Keep,
    Set(T),
}

impl<T> Patch<T> {
    pub fn is_set(&self) -> bool {
        matches!(self, Patch::Set(_))
    }

    pub fn as_ref(&self) -> Patch<&T> {
        match self {
            Patch::Keep => Patch::Keep,
            Patch::Set(value) => Patch::Set(value),
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Patch::Keep => None,
            Patch::Set(value) => Some(value),
        }
    }

    /// Apply `f` to a set value, keeping errors.
    pub fn try_map<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<Patch<U>, E> {
        match self {
            Patch::Keep => Ok(Patch::Keep),
            Patch::Set(value) => f(value).map(Patch::Set),
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Patch::Set(value),
            None => Patch::Keep,
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Patch::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Body {
        #[serde(default)]
        name: Patch<String>,
    }

    #[test]
    fn test_absent_and_null_keep() {
        let absent: Body = serde_json::from_str("{}").unwrap();
        let null: Body = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert_eq!(absent.name, Patch::Keep);
        assert_eq!(null.name, Patch::Keep);
    }

    #[test]
    fn test_value_sets() {
        let body: Body = serde_json::from_str(r#"{"name": "Ana"}"#).unwrap();
        assert_eq!(body.name, Patch::Set("Ana".to_string()));
        assert!(body.name.is_set());
    }

    #[test]
    fn test_try_map_propagates_error() {
        let result: Result<Patch<u8>, &str> = Patch::Set("x").try_map(|_| Err("bad"));
        assert_eq!(result, Err("bad"));
        let kept: Result<Patch<u8>, &str> = Patch::<&str>::Keep.try_map(|_| Err("bad"));
        assert_eq!(kept, Ok(Patch::Keep));
    }
}
