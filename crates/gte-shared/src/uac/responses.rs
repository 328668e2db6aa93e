use serde_aux::field_attributes::deserialize_default_from_null;

use crate::{
    catalog::{Category, Dish, Order, Restaurant},
    token::AuthToken,
};

use super::{PermissionRecord, UserRecord};

/// Body of a successful `POST /user/login`
///
/// Collections that are missing or `null` are treated as empty, their
/// entries are kept as received
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub current_user: UserRecord,
    #[serde(default, deserialize_with = "deserialize_default_from_null")]
    pub permissions: Vec<PermissionRecord>,
    #[serde(default, deserialize_with = "deserialize_default_from_null")]
    pub dishes: Vec<Dish>,
    #[serde(default, deserialize_with = "deserialize_default_from_null")]
    pub restaurants: Vec<Restaurant>,
    #[serde(default, deserialize_with = "deserialize_default_from_null")]
    pub categories: Vec<Category>,
    #[serde(default, deserialize_with = "deserialize_default_from_null")]
    pub orders: Vec<Order>,
    pub token_data: TokenData,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct TokenData {
    pub token: AuthToken,
}

/// Body of a successful `PATCH /user/avatar/{id}`
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct AvatarResponse {
    pub avatar: String,
}

/// Shape of the body the backend sends along with an error status
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct ServerErrorBody {
    pub message: String,
}
