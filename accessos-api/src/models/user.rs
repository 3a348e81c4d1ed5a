use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::Id;

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Online,
    #[default]
    Off,
}

impl Display for UserStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            UserStatus::Online => write!(f, "online"),
            UserStatus::Off => write!(f, "off"),
        }
    }
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User identifier
    pub id: Id,
    /// Full name
    pub name: String,
    /// Role label, e.g. Administrator or Operator
    pub role: String,
    /// Presence
    pub status: UserStatus,
    /// Number of areas the user may operate
    pub areas: u32,
}

impl User {
    pub fn is_online(&self) -> bool {
        self.status == UserStatus::Online
    }
}
