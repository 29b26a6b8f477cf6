//! Address and city records.

use serde::Serialize;

use crate::types::DbId;

/// A city together with the name of its country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct City {
    pub id: DbId,
    pub name: String,
    pub country: String,
}

/// A postal address, with its city (and country) resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Address {
    pub id: DbId,
    pub address: String,
    pub address2: Option<String>,
    pub district: String,
    pub city: City,
    pub postal_code: Option<String>,
    pub phone: String,
}

impl Address {
    /// Single-line rendering used by the HTML views, e.g.
    /// `"47 MySakila Drive, Alberta, Lethbridge, Canada"`.
    pub fn one_line(&self) -> String {
        let mut parts: Vec<&str> = vec![self.address.as_str()];
        if let Some(address2) = self.address2.as_deref().filter(|s| !s.trim().is_empty()) {
            parts.push(address2);
        }
        if !self.district.trim().is_empty() {
            parts.push(self.district.as_str());
        }
        parts.push(self.city.name.as_str());
        parts.push(self.city.country.as_str());
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lethbridge() -> Address {
        Address {
            id: 1,
            address: "47 MySakila Drive".to_string(),
            address2: None,
            district: "Alberta".to_string(),
            city: City {
                id: 300,
                name: "Lethbridge".to_string(),
                country: "Canada".to_string(),
            },
            postal_code: None,
            phone: String::new(),
        }
    }

    #[test]
    fn one_line_skips_missing_parts() {
        assert_eq!(
            lethbridge().one_line(),
            "47 MySakila Drive, Alberta, Lethbridge, Canada"
        );
    }

    #[test]
    fn one_line_skips_blank_address2() {
        let mut address = lethbridge();
        address.address2 = Some("  ".to_string());
        assert_eq!(
            address.one_line(),
            "47 MySakila Drive, Alberta, Lethbridge, Canada"
        );

        address.address2 = Some("Unit 4".to_string());
        assert_eq!(
            address.one_line(),
            "47 MySakila Drive, Unit 4, Alberta, Lethbridge, Canada"
        );
    }
}
