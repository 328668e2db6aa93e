//! Names of the entries kept in the session store
//!
//! Other parts of the application read these same keys so the strings must
//! not change

use std::fmt::Display;

pub const STORE_KEY_NAMESPACE: &str = "@gte-platform-backend:";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, strum::IntoStaticStr)]
pub enum StoreKey {
    #[strum(serialize = "@gte-platform-backend:categories")]
    Categories,
    #[strum(serialize = "@gte-platform-backend:restaurants")]
    Restaurants,
    #[strum(serialize = "@gte-platform-backend:dishes")]
    Dishes,
    #[strum(serialize = "@gte-platform-backend:orders")]
    Orders,
    #[strum(serialize = "@gte-platform-backend:favorites")]
    Favorites,
    #[strum(serialize = "@gte-platform-backend:user")]
    User,
    #[strum(serialize = "@gte-platform-backend:token")]
    Token,

    // Written by UI collaborators, only cleared here
    #[strum(serialize = "@gte-platform-backend:openOrder")]
    OpenOrder,
    #[strum(serialize = "@gte-platform-backend:editingDish")]
    EditingDish,
    #[strum(serialize = "@gte-platform-backend:visualizedDish")]
    VisualizedDish,
    #[strum(serialize = "@gte-platform-backend:restaurant")]
    CurrentRestaurant,
    #[strum(serialize = "@gte-platform-backend:permissions")]
    Permissions,
    #[strum(serialize = "@gte-platform-backend:users")]
    Users,
}

impl StoreKey {
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

impl Display for StoreKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
