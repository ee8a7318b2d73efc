//! API entities.

use serde::{Deserialize, Serialize};

/// A hero as returned by `/api/heros/all`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub id: String,
    pub name: String,
    pub description: String,
    pub photo: String,
    pub favorite: bool,
}

/// A transformation of a hero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transformation {
    pub id: String,
    pub name: String,
    pub description: String,
    pub photo: String,
    pub hero: HeroId,
}

/// Reference to a hero by id, as embedded in [`Transformation`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroId {
    pub id: String,
}

/// Login credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}
