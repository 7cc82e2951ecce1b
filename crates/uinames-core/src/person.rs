//! Read-only views over identities returned by the service.
//!
//! The payload shape depends on whether extended fields were requested, so
//! nothing is checked when a [`Person`] is built. A field only fails when it
//! is read and turns out to be absent.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A field was read that the payload does not carry.
///
/// Usually means the extended field set was not requested.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("property `{field}` is not available in this identity")]
pub struct PropertyUnavailable {
    pub field: String,
}

/// Failure of a typed field accessor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error(transparent)]
    Unavailable(#[from] PropertyUnavailable),

    #[error("property `{field}` is present but is not a {expected}")]
    UnexpectedType {
        field: String,
        expected: &'static str,
    },
}

impl FieldError {
    /// Whether the field was missing rather than mistyped.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(self, FieldError::Unavailable(_))
    }
}

/// The payload could not be wrapped at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WrapError {
    #[error("expected a JSON object for an identity, found {found}")]
    NotAnObject { found: &'static str },

    #[error("expected a JSON array of identities, found {found}")]
    NotAnArray { found: &'static str },

    #[error("identity at index {index} is not a JSON object, found {found}")]
    ElementNotAnObject { index: usize, found: &'static str },
}

/// Nested `birthday` structure of an extended identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Birthday {
    /// Day/month/year, e.g. "24/01/1985"
    pub dmy: String,
    /// Month/day/year, e.g. "01/24/1985"
    pub mdy: String,
    /// Unix timestamp in seconds
    pub raw: i64,
}

/// Nested `credit_card` structure of an extended identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditCard {
    pub expiration: String,
    pub number: String,
    pub pin: u32,
    pub security: u32,
}

/// One generated identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Person {
    fields: Map<String, Value>,
}

impl Person {
    /// Wrap a single JSON object.
    pub fn wrap_single(value: Value) -> Result<Self, WrapError> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(WrapError::NotAnObject {
                found: json_kind(&other),
            }),
        }
    }

    /// Wrap an already decoded mapping.
    #[must_use]
    pub fn from_map(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Look up a field by name.
    ///
    /// A field present with a `null` value is returned as `Value::Null`;
    /// only a missing key is an error.
    pub fn get(&self, field: &str) -> Result<&Value, PropertyUnavailable> {
        self.fields.get(field).ok_or_else(|| PropertyUnavailable {
            field: field.to_string(),
        })
    }

    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Names of all fields carried by this identity.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.fields
    }

    pub fn name(&self) -> Result<&str, FieldError> {
        self.str_field("name")
    }

    pub fn surname(&self) -> Result<&str, FieldError> {
        self.str_field("surname")
    }

    pub fn gender(&self) -> Result<&str, FieldError> {
        self.str_field("gender")
    }

    pub fn region(&self) -> Result<&str, FieldError> {
        self.str_field("region")
    }

    // Extended fields

    pub fn title(&self) -> Result<&str, FieldError> {
        self.str_field("title")
    }

    pub fn age(&self) -> Result<u64, FieldError> {
        let value = self.get("age")?;
        value.as_u64().ok_or_else(|| unexpected("age", "non-negative integer"))
    }

    pub fn phone(&self) -> Result<&str, FieldError> {
        self.str_field("phone")
    }

    pub fn birthday(&self) -> Result<Birthday, FieldError> {
        self.nested_field("birthday", "birthday object")
    }

    pub fn email(&self) -> Result<&str, FieldError> {
        self.str_field("email")
    }

    pub fn password(&self) -> Result<&str, FieldError> {
        self.str_field("password")
    }

    pub fn credit_card(&self) -> Result<CreditCard, FieldError> {
        self.nested_field("credit_card", "credit card object")
    }

    /// URL of the portrait photo.
    pub fn photo(&self) -> Result<&str, FieldError> {
        self.str_field("photo")
    }

    fn str_field(&self, field: &str) -> Result<&str, FieldError> {
        let value = self.get(field)?;
        value.as_str().ok_or_else(|| unexpected(field, "string"))
    }

    fn nested_field<T>(&self, field: &str, expected: &'static str) -> Result<T, FieldError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let value = self.get(field)?;
        T::deserialize(value).map_err(|_| unexpected(field, expected))
    }
}

fn unexpected(field: &str, expected: &'static str) -> FieldError {
    FieldError::UnexpectedType {
        field: field.to_string(),
        expected,
    }
}

/// Ordered identities from one multi-identity response.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct People {
    data: Vec<Person>,
}

impl People {
    /// Wrap a JSON array, one [`Person`] per element in source order.
    ///
    /// A bare object is accepted as a one-element collection, since the
    /// service answers `amount=1` without an enclosing array.
    pub fn wrap_many(value: Value) -> Result<Self, WrapError> {
        let elements = match value {
            Value::Array(elements) => elements,
            Value::Object(fields) => return Ok(Self::from(vec![Person::from_map(fields)])),
            other => {
                return Err(WrapError::NotAnArray {
                    found: json_kind(&other),
                })
            }
        };

        let data = elements
            .into_iter()
            .enumerate()
            .map(|(index, element)| match element {
                Value::Object(fields) => Ok(Person::from_map(fields)),
                other => Err(WrapError::ElementNotAnObject {
                    index,
                    found: json_kind(&other),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { data })
    }

    #[must_use]
    pub fn data(&self) -> &[Person] {
        &self.data
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&Person> {
        self.data.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Person> {
        self.data.iter()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Person> {
        self.data
    }
}

impl From<Vec<Person>> for People {
    fn from(data: Vec<Person>) -> Self {
        Self { data }
    }
}

impl IntoIterator for People {
    type Item = Person;
    type IntoIter = std::vec::IntoIter<Person>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a> IntoIterator for &'a People {
    type Item = &'a Person;
    type IntoIter = std::slice::Iter<'a, Person>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'de> Deserialize<'de> for People {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::wrap_many(value).map_err(serde::de::Error::custom)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
