use chrono::NaiveDate;
use serde::Serialize;

use crate::model::{Address, Store};
use crate::types::DbId;

/// A customer, with home store and address resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    pub id: DbId,
    pub store: Store,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub address: Address,
    pub is_active: bool,
    pub create_date: NaiveDate,
}

impl Customer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Pagila stores customer activity as a nullable integer; only `1` counts
    /// as active.
    pub fn is_active_flag(active: Option<i32>) -> bool {
        active == Some(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_is_active() {
        assert!(Customer::is_active_flag(Some(1)));
        assert!(!Customer::is_active_flag(Some(0)));
        assert!(!Customer::is_active_flag(Some(2)));
        assert!(!Customer::is_active_flag(None));
    }
}
