//! Validated contact field value types.
//!
//! # Responsibility
//! - Reject malformed names, phones, emails, addresses and tags at the edge.
//! - Keep validation rules in one place for constructors and deserialization.
//!
//! # Invariants
//! - A constructed value always satisfies its `is_valid_*` predicate.
//! - Deserialization goes through the same constructors (`try_from`).

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("valid name regex"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3,}$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9]+([+_.-][A-Za-z0-9]+)*@([A-Za-z0-9]+(-[A-Za-z0-9]+)*\.)*[A-Za-z0-9]{2,}(-[A-Za-z0-9]+)*$",
    )
    .expect("valid email regex")
});
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("valid tag regex"));

/// Field validation failure, carrying the rejected raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonValidationError {
    InvalidName(String),
    InvalidPhone(String),
    InvalidEmail(String),
    InvalidAddress(String),
    InvalidTag(String),
}

impl Display for PersonValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(value) => write!(
                f,
                "invalid name `{value}`: names should only contain alphanumeric characters and spaces, and it should not be blank"
            ),
            Self::InvalidPhone(value) => write!(
                f,
                "invalid phone `{value}`: phone numbers should only contain digits, and be at least 3 digits long"
            ),
            Self::InvalidEmail(value) => write!(
                f,
                "invalid email `{value}`: emails should be of the format local-part@domain"
            ),
            Self::InvalidAddress(value) => {
                write!(f, "invalid address `{value}`: addresses can take any value, and should not be blank")
            }
            Self::InvalidTag(value) => write!(f, "invalid tag `{value}`: tags should be alphanumeric"),
        }
    }
}

impl Error for PersonValidationError {}

pub fn is_valid_name(value: &str) -> bool {
    NAME_RE.is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

/// Accepts `local-part@domain`.
///
/// The local part is alphanumeric with `+_.-` separators (never leading,
/// trailing or doubled). The domain is period-separated labels with inner
/// hyphens, and the last label has at least two characters.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn is_valid_address(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn is_valid_tag(value: &str) -> bool {
    TAG_RE.is_match(value)
}

/// Full display name of a person.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> Result<Self, PersonValidationError> {
        let value = value.into();
        if !is_valid_name(&value) {
            return Err(PersonValidationError::InvalidName(value));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Contact phone number, digits only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new(value: impl Into<String>) -> Result<Self, PersonValidationError> {
        let value = value.into();
        if !is_valid_phone(&value) {
            return Err(PersonValidationError::InvalidPhone(value));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn new(value: impl Into<String>) -> Result<Self, PersonValidationError> {
        let value = value.into();
        if !is_valid_email(&value) {
            return Err(PersonValidationError::InvalidEmail(value));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    pub fn new(value: impl Into<String>) -> Result<Self, PersonValidationError> {
        let value = value.into();
        if !is_valid_address(&value) {
            return Err(PersonValidationError::InvalidAddress(value));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Single-word label, e.g. `diabetic` or `cardiology`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    pub fn new(value: impl Into<String>) -> Result<Self, PersonValidationError> {
        let value = value.into();
        if !is_valid_tag(&value) {
            return Err(PersonValidationError::InvalidTag(value));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Display for Phone {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Display for Email {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

impl TryFrom<String> for Name {
    type Error = PersonValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Phone {
    type Error = PersonValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Email {
    type Error = PersonValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Address {
    type Error = PersonValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Tag {
    type Error = PersonValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Name> for String {
    fn from(value: Name) -> Self {
        value.0
    }
}

impl From<Phone> for String {
    fn from(value: Phone) -> Self {
        value.0
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

impl From<Address> for String {
    fn from(value: Address) -> Self {
        value.0
    }
}

impl From<Tag> for String {
    fn from(value: Tag) -> Self {
        value.0
    }
}
