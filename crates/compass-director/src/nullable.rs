//! Nullable TEXT column representation.

/// A TEXT column value that keeps SQL `NULL` apart from the empty string.
///
/// `valid == false` means `NULL`; `value` is then always empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NullableString {
    pub value: String,
    pub valid: bool,
}

impl NullableString {
    #[must_use]
    pub const fn null() -> Self {
        Self {
            value: String::new(),
            valid: false,
        }
    }

    /// `None` becomes `NULL`; `Some("")` stays a valid empty string.
    #[must_use]
    pub fn new(value: Option<&str>) -> Self {
        value.map_or_else(Self::null, |v| Self {
            value: v.to_string(),
            valid: true,
        })
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        !self.valid
    }

    /// Borrow as an optional string, suitable as a query parameter.
    #[must_use]
    pub fn as_deref(&self) -> Option<&str> {
        self.valid.then_some(self.value.as_str())
    }

    #[must_use]
    pub fn to_option(&self) -> Option<String> {
        self.as_deref().map(String::from)
    }
}

impl From<Option<String>> for NullableString {
    fn from(value: Option<String>) -> Self {
        value.map_or_else(Self::null, |value| Self { value, valid: true })
    }
}

impl From<NullableString> for Option<String> {
    fn from(value: NullableString) -> Self {
        value.valid.then_some(value.value)
    }
}
