//! Validated field value types shared by clients, projects and issues.
//!
//! # Responsibility
//! - Own the accepted format of every user-supplied entity field.
//! - Expose `is_valid_*` predicates and `MESSAGE_CONSTRAINTS` texts so
//!   persistence can report the same constraint messages as construction.
//!
//! # Invariants
//! - A field value that exists has passed its validator.
//! - Values are stored verbatim; no trimming or case folding.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("valid name regex"));
static REPOSITORY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_.-]+/[A-Za-z0-9_.-]+$").expect("valid repository regex")
});
static DEADLINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid deadline regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{3,}$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9]+([+_.-][A-Za-z0-9]+)*@([A-Za-z0-9]+(-[A-Za-z0-9]+)*\.)*[A-Za-z0-9]{2,}(-[A-Za-z0-9]+)*$",
    )
    .expect("valid email regex")
});

const DEADLINE_FORMAT: &str = "%Y-%m-%d";

/// Construction-time failure for a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// A required value was not supplied.
    Missing { field: &'static str },
    /// A value was supplied but violates the field format.
    Invalid {
        field: &'static str,
        constraints: &'static str,
    },
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{field} is required"),
            Self::Invalid { constraints, .. } => write!(f, "{constraints}"),
        }
    }
}

impl Error for FieldError {}

fn required<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str, FieldError> {
    value.ok_or(FieldError::Missing { field })
}

/// Display name of a client or a project.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Names should only contain alphanumeric characters and spaces, and it should not be blank";

    pub fn is_valid_name(value: &str) -> bool {
        NAME_RE.is_match(value)
    }

    pub fn new(value: impl Into<String>) -> Result<Self, FieldError> {
        let value = value.into();
        if !Self::is_valid_name(&value) {
            return Err(FieldError::Invalid {
                field: "Name",
                constraints: Self::MESSAGE_CONSTRAINTS,
            });
        }
        Ok(Self(value))
    }

    /// Builds a name from an optional input, treating `None` as missing.
    pub fn from_optional(value: Option<&str>) -> Result<Self, FieldError> {
        Self::new(required(value, "Name")?)
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

/// Source repository identifier in `owner/repo` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Repository(String);

impl Repository {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Repository should be of the format OWNER/REPO, each part containing only letters, digits, '-', '_' or '.'";

    pub fn is_valid_repository(value: &str) -> bool {
        REPOSITORY_RE.is_match(value)
    }

    pub fn new(value: impl Into<String>) -> Result<Self, FieldError> {
        let value = value.into();
        if !Self::is_valid_repository(&value) {
            return Err(FieldError::Invalid {
                field: "Repository",
                constraints: Self::MESSAGE_CONSTRAINTS,
            });
        }
        Ok(Self(value))
    }

    pub fn from_optional(value: Option<&str>) -> Result<Self, FieldError> {
        Self::new(required(value, "Repository")?)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Repository {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Calendar date in `yyyy-MM-dd` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Deadline(NaiveDate);

impl Deadline {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Deadlines should be valid calendar dates of the format yyyy-MM-dd";

    pub fn is_valid_deadline(value: &str) -> bool {
        DEADLINE_RE.is_match(value) && NaiveDate::parse_from_str(value, DEADLINE_FORMAT).is_ok()
    }

    pub fn new(value: &str) -> Result<Self, FieldError> {
        if !DEADLINE_RE.is_match(value) {
            return Err(Self::invalid());
        }
        NaiveDate::parse_from_str(value, DEADLINE_FORMAT)
            .map(Self)
            .map_err(|_| Self::invalid())
    }

    pub fn from_optional(value: Option<&str>) -> Result<Self, FieldError> {
        Self::new(required(value, "Deadline")?)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    fn invalid() -> FieldError {
        FieldError::Invalid {
            field: "Deadline",
            constraints: Self::MESSAGE_CONSTRAINTS,
        }
    }
}

impl Display for Deadline {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(DEADLINE_FORMAT))
    }
}

/// Client phone number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Phone numbers should only contain numbers, and it should be at least 3 digits long";

    pub fn is_valid_phone(value: &str) -> bool {
        PHONE_RE.is_match(value)
    }

    pub fn new(value: impl Into<String>) -> Result<Self, FieldError> {
        let value = value.into();
        if !Self::is_valid_phone(&value) {
            return Err(FieldError::Invalid {
                field: "Phone",
                constraints: Self::MESSAGE_CONSTRAINTS,
            });
        }
        Ok(Self(value))
    }

    pub fn from_optional(value: Option<&str>) -> Result<Self, FieldError> {
        Self::new(required(value, "Phone")?)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Phone {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Client email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Emails should be of the format local-part@domain. The local-part contains only \
alphanumeric characters and +_.- and may not start or end with a special character. \
The domain is made of labels separated by periods, and the last label is at least 2 characters long";

    pub fn is_valid_email(value: &str) -> bool {
        EMAIL_RE.is_match(value)
    }

    pub fn new(value: impl Into<String>) -> Result<Self, FieldError> {
        let value = value.into();
        if !Self::is_valid_email(&value) {
            return Err(FieldError::Invalid {
                field: "Email",
                constraints: Self::MESSAGE_CONSTRAINTS,
            });
        }
        Ok(Self(value))
    }

    pub fn from_optional(value: Option<&str>) -> Result<Self, FieldError> {
        Self::new(required(value, "Email")?)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Email {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Free-form issue description.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Description(String);

impl Description {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Descriptions should not be blank";

    pub fn is_valid_description(value: &str) -> bool {
        !value.trim().is_empty()
    }

    pub fn new(value: impl Into<String>) -> Result<Self, FieldError> {
        let value = value.into();
        if !Self::is_valid_description(&value) {
            return Err(FieldError::Invalid {
                field: "Description",
                constraints: Self::MESSAGE_CONSTRAINTS,
            });
        }
        Ok(Self(value))
    }

    pub fn from_optional(value: Option<&str>) -> Result<Self, FieldError> {
        Self::new(required(value, "Description")?)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Description {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Issue urgency, written as `0`, `1` or `2` on input and on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Priority should be one of 0, 1 or 2";

    pub fn is_valid_priority(value: &str) -> bool {
        Self::from_code(value).is_some()
    }

    pub fn new(value: &str) -> Result<Self, FieldError> {
        Self::from_code(value).ok_or(FieldError::Invalid {
            field: "Priority",
            constraints: Self::MESSAGE_CONSTRAINTS,
        })
    }

    pub fn from_optional(value: Option<&str>) -> Result<Self, FieldError> {
        Self::new(required(value, "Priority")?)
    }

    /// Returns the numeric code used in commands and the data file.
    pub fn code(self) -> &'static str {
        match self {
            Self::Low => "0",
            Self::Medium => "1",
            Self::High => "2",
        }
    }

    fn from_code(value: &str) -> Option<Self> {
        match value {
            "0" => Some(Self::Low),
            "1" => Some(Self::Medium),
            "2" => Some(Self::High),
            _ => None,
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        };
        f.write_str(label)
    }
}
