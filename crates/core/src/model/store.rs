use serde::Serialize;

use crate::model::Address;
use crate::types::DbId;

/// A rental store and its address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Store {
    pub id: DbId,
    pub address: Address,
}
