//! Patient snapshot as handed over by the patient collaborator.
//!
//! The engine treats patients as read-only. Age is never stored; it is derived from the date
//! of birth against an explicit reference date so callers control the evaluation instant.

use chrono::NaiveDate;
use dra_types::{NonEmptyText, PatientId};
use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

/// Administrative gender used by the risk rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Single-letter symbol used on the wire.
    pub fn symbol(self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }

    /// Parse either the symbol (`M`/`F`) or the full name (`MALE`/`FEMALE`), ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidInput`] for any other value.
    pub fn parse(input: &str) -> CoreResult<Self> {
        match input.trim().to_ascii_uppercase().as_str() {
            "M" | "MALE" => Ok(Gender::Male),
            "F" | "FEMALE" => Ok(Gender::Female),
            other => Err(CoreError::InvalidInput(format!(
                "invalid gender symbol: {other}"
            ))),
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl std::str::FromStr for Gender {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for Gender {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.symbol())
    }
}

impl<'de> serde::Deserialize<'de> for Gender {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Gender::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Patient demographics relevant to risk assessment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: PatientId,
    pub first_name: NonEmptyText,
    pub last_name: NonEmptyText,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Patient {
    /// Create a patient with the fields the engine needs.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Text`] if either name is blank.
    pub fn new(
        id: PatientId,
        first_name: &str,
        last_name: &str,
        date_of_birth: NaiveDate,
        gender: Gender,
    ) -> CoreResult<Self> {
        Ok(Self {
            id,
            first_name: NonEmptyText::new(first_name)?,
            last_name: NonEmptyText::new(last_name)?,
            date_of_birth,
            gender,
            address: None,
            phone: None,
        })
    }

    /// Whole years elapsed between the date of birth and `on`.
    ///
    /// A date of birth after `on` yields zero.
    pub fn age_at(&self, on: NaiveDate) -> u32 {
        on.years_since(self.date_of_birth).unwrap_or(0)
    }
}
