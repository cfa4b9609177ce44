//! Client domain model.
//!
//! # Invariants
//! - Two clients are the same client when name, phone and email all match.
//! - A client in the model is attached to exactly one project.

use crate::model::fields::{Email, FieldError, Name, Phone};
use std::fmt::{Display, Formatter};

/// Contact person for a project.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Client {
    name: Name,
    phone: Phone,
    email: Email,
}

impl Client {
    pub fn new(name: Name, phone: Phone, email: Email) -> Self {
        Self { name, phone, email }
    }

    /// Builds a client from raw optional inputs.
    ///
    /// # Errors
    /// - `FieldError::Missing` for the first absent field.
    /// - `FieldError::Invalid` for the first field violating its format.
    pub fn try_from_fields(
        name: Option<&str>,
        phone: Option<&str>,
        email: Option<&str>,
    ) -> Result<Self, FieldError> {
        Ok(Self::new(
            Name::from_optional(name)?,
            Phone::from_optional(phone)?,
            Email::from_optional(email)?,
        ))
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }
}

impl Display for Client {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}",
            self.name, self.phone, self.email
        )
    }
}
