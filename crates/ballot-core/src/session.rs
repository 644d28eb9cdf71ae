//! Signed-in identity handed to the caller after a successful login.
//!
//! The sign-in surface stops here: whoever receives a [`Session`] owns what
//! happens next (routing, dashboards, sign-out).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::api::VoterRecord;
use crate::auth::AdminAccount;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Voter,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Voter => "voter",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Voter fields projected from the roster record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoterProfile {
    pub id: String,
    pub name: String,
    pub place: String,
    pub email: String,
    pub age: String,
}

impl From<&VoterRecord> for VoterProfile {
    fn from(record: &VoterRecord) -> Self {
        Self {
            id: record.original_id.clone(),
            name: record.name.clone(),
            place: record.place.clone(),
            email: record.email.clone(),
            age: record.age.clone(),
        }
    }
}

/// Admin identity. The password never leaves the verifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminProfile {
    pub username: String,
    pub name: String,
}

impl From<&AdminAccount> for AdminProfile {
    fn from(account: &AdminAccount) -> Self {
        Self {
            username: account.username.clone(),
            name: account.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SessionUser {
    Voter(VoterProfile),
    Admin(AdminProfile),
}

impl SessionUser {
    /// Voter id or admin username.
    pub fn id(&self) -> &str {
        match self {
            SessionUser::Voter(voter) => &voter.id,
            SessionUser::Admin(admin) => &admin.username,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            SessionUser::Voter(voter) => &voter.name,
            SessionUser::Admin(admin) => &admin.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: SessionUser,
    pub role: Role,
}

impl Session {
    pub fn voter(record: &VoterRecord) -> Self {
        Self {
            user: SessionUser::Voter(VoterProfile::from(record)),
            role: Role::Voter,
        }
    }

    pub fn admin(account: &AdminAccount) -> Self {
        Self {
            user: SessionUser::Admin(AdminProfile::from(account)),
            role: Role::Admin,
        }
    }
}
