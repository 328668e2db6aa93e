use serde_json::{Map, Value};

use crate::{errors::ConversionError, id::UserId};

const FIELD_ID: &str = "id";
const FIELD_NAME: &str = "name";
const FIELD_EMAIL: &str = "email";
const FIELD_AVATAR: &str = "avatar";
const FIELD_FAVORITE_DISHES: &str = "userFavoriteDishes";
const FIELD_DISH_ID: &str = "dishId";

/// The user record as returned by the backend under `currentUser`
///
/// Every field is kept as received so the persisted copy mirrors the
/// response (nulls included). Only `id` is required, the other fields the
/// client uses are read through accessors
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct UserRecord {
    id: UserId,
    fields: Map<String, Value>,
}

impl TryFrom<Map<String, Value>> for UserRecord {
    type Error = ConversionError;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        let id = match fields.get(FIELD_ID) {
            Some(Value::String(id)) => UserId::try_from(id.as_str())?,
            Some(Value::Number(id)) => UserId::try_from(id.to_string())?,
            None | Some(Value::Null) => return Err(ConversionError::MissingField(FIELD_ID)),
            Some(_) => return Err(ConversionError::InvalidField(FIELD_ID)),
        };
        Ok(Self { id, fields })
    }
}

impl From<UserRecord> for Map<String, Value> {
    fn from(value: UserRecord) -> Self {
        value.fields
    }
}

impl UserRecord {
    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.str_field(FIELD_NAME)
    }

    pub fn email(&self) -> Option<&str> {
        self.str_field(FIELD_EMAIL)
    }

    pub fn avatar(&self) -> Option<&str> {
        self.str_field(FIELD_AVATAR)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Dish ids of the favorite links in link order
    ///
    /// Links without a `dishId` (or with `null`) are skipped, as is a
    /// missing or `null` list
    pub fn favorite_dish_ids(&self) -> Vec<&Value> {
        self.fields
            .get(FIELD_FAVORITE_DISHES)
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(|link| link.get(FIELD_DISH_ID))
            .filter(|dish_id| !dish_id.is_null())
            .collect()
    }

    pub fn set_avatar(&mut self, avatar: String) {
        self.fields.insert(FIELD_AVATAR.into(), avatar.into());
    }

    /// Overlays the locally mirrored profile fields
    ///
    /// Only `name` and `email` are mirrored, other profile fields are left
    /// for the server to report back on the next login
    pub fn apply_profile_overlay(&mut self, name: Option<&str>, email: Option<&str>) {
        if let Some(name) = name.filter(|x| !x.is_empty()) {
            self.fields.insert(FIELD_NAME.into(), name.into());
        }
        if let Some(email) = email.filter(|x| !x.is_empty()) {
            self.fields.insert(FIELD_EMAIL.into(), email.into());
        }
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }
}
