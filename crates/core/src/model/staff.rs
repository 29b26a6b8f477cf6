//! Staff member record.

use serde::{Serialize, Serializer};

use crate::model::{Address, Store};
use crate::types::DbId;

/// A staff member, with address and employing store resolved.
///
/// The password hash and picture bytes are kept for completeness but never
/// serialized; JSON output exposes `has_picture` instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Staff {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub address: Address,
    pub email: Option<String>,
    pub store: Store,
    pub is_active: bool,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: Option<String>,
    #[serde(rename = "has_picture", serialize_with = "serialize_is_some")]
    pub picture: Option<Vec<u8>>,
}

impl Staff {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn has_picture(&self) -> bool {
        self.picture.is_some()
    }
}

fn serialize_is_some<S: Serializer>(value: &Option<Vec<u8>>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_bool(value.is_some())
}
