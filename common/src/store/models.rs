use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::games::snake::BoardMode;
use crate::{EntryId, UserId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub high_score: u32,
    pub created_at: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    /// Only read by signup.
    pub username: Option<String>,
}

impl Credentials {
    pub fn login(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            username: None,
        }
    }

    pub fn signup(
        email: impl Into<String>,
        password: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            username: Some(username.into()),
            ..Self::login(email, password)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: EntryId,
    pub username: String,
    pub score: u32,
    pub mode: BoardMode,
    pub date: NaiveDate,
}
