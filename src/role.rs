// src/role.rs
//! The closed set of roles a prank can target.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    Employee,
    Manager,
    Developer,
    CorporatePlayer,
    Hr,
    Uxui,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 6] = [
        Role::Employee,
        Role::Manager,
        Role::Developer,
        Role::CorporatePlayer,
        Role::Hr,
        Role::Uxui,
    ];

    /// Pick a role uniformly at random using the thread-local RNG.
    pub fn random() -> Self {
        Self::random_with(&mut rand::thread_rng())
    }

    /// Pick a role uniformly at random from the given RNG.
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        // ALL is non-empty, so choose always yields a value.
        *Self::ALL.choose(rng).unwrap_or(&Role::Employee)
    }

    /// Tag shared by `Display`, `FromStr` and serde.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employee => "employee",
            Role::Manager => "manager",
            Role::Developer => "developer",
            Role::CorporatePlayer => "corporatePlayer",
            Role::Hr => "hr",
            Role::Uxui => "uxui",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .iter()
            .copied()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| Error::UnknownRole(s.to_string()))
    }
}
