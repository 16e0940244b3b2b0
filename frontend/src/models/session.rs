use serde::{Deserialize, Serialize};

use crate::error::SessionError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    Employee,
    Admin,
}

/// Identity of the signed-in user, as persisted under the `user` key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "type")]
    pub user_type: UserType,
    #[serde(default)]
    pub email: String,
}

impl Session {
    #[cfg(test)]
    pub fn employee(email: impl Into<String>) -> Self {
        Self {
            user_type: UserType::Employee,
            email: email.into(),
        }
    }

    pub fn parse(raw: &str) -> Result<Self, SessionError> {
        Ok(serde_json::from_str(raw)?)
    }
}
