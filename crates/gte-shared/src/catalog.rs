//! Catalog records sent by the backend on login
//!
//! Records are kept exactly as received so the persisted copy is the same
//! JSON the backend sent. Only the `id` is ever looked at

use serde_json::Value;

/// One entry of a catalog, stored as received
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
#[serde(transparent)]
pub struct CatalogRecord(Value);

pub type Category = CatalogRecord;
pub type Restaurant = CatalogRecord;
pub type Dish = CatalogRecord;
pub type Order = CatalogRecord;

impl CatalogRecord {
    /// The `id` as sent, may be a string or a number
    pub fn id(&self) -> Option<&Value> {
        self.0.get("id").filter(|x| !x.is_null())
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for CatalogRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Resolves favorite dish ids to the full dish records from the catalog
///
/// Ids must match exactly (`"1"` does not match `1`). Ids without a dish in
/// the catalog are dropped, order of the ids is kept
pub fn resolve_favorites(dish_ids: &[&Value], catalog: &[Dish]) -> Vec<Dish> {
    dish_ids
        .iter()
        .filter_map(|dish_id| catalog.iter().find(|dish| dish.id() == Some(*dish_id)))
        .cloned()
        .collect()
}
