use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Gender recorded on a profile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Female,
    Male,
    Other,
}

impl Gender {
    /// Return the canonical string representation, also used as the
    /// translation-key segment for localized display.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Female => "female",
            Self::Male => "male",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "female" => Ok(Self::Female),
            "male" => Ok(Self::Male),
            "other" => Ok(Self::Other),
            _ => Err("unknown gender"),
        }
    }
}

/// A person to reach when the user needs urgent help.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmergencyContact {
    /// Contact's display name.
    pub name: String,

    /// Phone number, stored as entered.
    pub number: String,
}

/// The authenticated profile record shown and edited by the app.
///
/// Optional fields are omitted from the profile screen entirely when unset;
/// they are never rendered blank.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Unique identifier for the user.
    pub id: uuid::Uuid,

    /// The user's display name.
    pub name: String,

    /// The user's email address.
    pub email: String,

    /// Age in years.
    pub age: Option<u8>,

    /// Recorded gender.
    pub gender: Option<Gender>,

    /// Postal address, free-form.
    pub address: Option<String>,

    /// URL of the profile picture.
    pub profile_image: Option<String>,

    /// Health-condition tag, resolved through the translation table for
    /// display; the raw tag is shown when no mapping exists.
    pub health_condition: Option<String>,

    /// Free-form description of the current medical status.
    pub current_medical_status: Option<String>,

    /// Link to an uploaded medical certificate.
    pub medical_certificate: Option<String>,

    /// Emergency contacts in the order the user added them.
    pub emergency_contacts: Vec<EmergencyContact>,
}

impl User {
    /// Create a fresh profile carrying only the identity fields.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            age: None,
            gender: None,
            address: None,
            profile_image: None,
            health_condition: None,
            current_medical_status: None,
            medical_certificate: None,
            emergency_contacts: Vec::new(),
        }
    }
}
