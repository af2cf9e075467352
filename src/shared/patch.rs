use serde::{Deserialize, Serialize};

// Explicit PATCH semantics for request bodies:
// - omitted field => Unset (needs #[serde(default)] on the field)
// - null          => Null
// - value         => Value(value)

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn as_value(&self) -> Option<&T> {
        match self {
            PatchField::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Resolve against the stored value of a nullable column
    pub fn apply_to(self, current: Option<T>) -> Option<T> {
        match self {
            PatchField::Unset => current,
            PatchField::Null => None,
            PatchField::Value(v) => Some(v),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> PatchField<U> {
        match self {
            PatchField::Unset => PatchField::Unset,
            PatchField::Null => PatchField::Null,
            PatchField::Value(v) => PatchField::Value(f(v)),
        }
    }
}
