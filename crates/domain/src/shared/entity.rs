use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;
use uuid::Uuid;

pub trait Entity {
    fn id(&self) -> &ID;
}

/// Identifier of a domain entity. Seed data and external callers use
/// free-form string ids, so this wraps a `String` rather than a `Uuid`.
/// `ID::new` still generates uuid-v4 based ids for records created by
/// the application itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ID(String);

impl ID {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ID {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for ID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Error, Debug)]
pub enum InvalidIDError {
    #[error("ID cannot be empty")]
    Empty,
}

impl FromStr for ID {
    type Err = InvalidIDError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(InvalidIDError::Empty);
        }
        Ok(Self(s.to_string()))
    }
}

impl From<&str> for ID {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rejects_empty_ids() {
        assert!("".parse::<ID>().is_err());
        assert!("  ".parse::<ID>().is_err());
        assert!("r1".parse::<ID>().is_ok());
    }

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(ID::new(), ID::new());
    }
}
