use serde_json::Value;
use tracing::debug;

/// One entry of the `permissions` list sent on login, kept as received
///
/// The backend has sent both a bare group (`{id, role}`) and a join record
/// wrapping it (`{permissionGroup: {id, role}}`)
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
#[serde(transparent)]
pub struct PermissionRecord(Value);

impl PermissionRecord {
    pub fn role(&self) -> Option<&str> {
        self.0
            .get("role")
            .or_else(|| {
                self.0
                    .get("permissionGroup")
                    .and_then(|group| group.get("role"))
            })
            .and_then(Value::as_str)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for PermissionRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Picks the permission record that applies to the session
///
/// The backend may list several records but only the first one is used,
/// an empty list (or a `null` first entry) means no permission
pub fn resolve_permission(records: Vec<PermissionRecord>) -> Option<PermissionRecord> {
    if records.len() > 1 {
        debug!(
            ignored = records.len() - 1,
            "more than one permission record received, using the first"
        );
    }
    records.into_iter().next().filter(|x| !x.0.is_null())
}
