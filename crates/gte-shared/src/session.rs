use crate::{
    token::AuthToken,
    uac::{PermissionRecord, UserRecord},
};

/// The user record combined with the permission record that applies to it
///
/// Serializes as the user record with an extra `permission` field (left out
/// when there is none), this is the shape stored under the user key
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
pub struct SessionUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission: Option<PermissionRecord>,
    #[serde(flatten)]
    pub user: UserRecord,
}

/// The signed in user and the token that proves it
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user: SessionUser,
    pub token: AuthToken,
}

impl SessionUser {
    pub fn new(user: UserRecord, permission: Option<PermissionRecord>) -> Self {
        Self { permission, user }
    }

    pub fn role(&self) -> Option<&str> {
        self.permission.as_ref().and_then(PermissionRecord::role)
    }
}

impl Session {
    pub fn new(user: SessionUser, token: AuthToken) -> Self {
        Self { user, token }
    }
}
