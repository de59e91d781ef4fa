use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Closed set of item categories. The serialized literals are part of the
/// stored-data contract and must round-trip exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Clothing,
    Food,
    Other,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Electronics,
        Category::Clothing,
        Category::Food,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Food => "Food",
            Category::Other => "Other",
        }
    }

    /// Parse one of the four literal names. Anything else is `None`;
    /// the validation layer reports it as an invalid enum value.
    pub fn from_name(name: &str) -> Option<Self> {
        Category::ALL.iter().copied().find(|c| c.as_str() == name)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One inventory record. Stored as a JSON object with camelCase field
/// names matching the persisted-data contract.
///
/// `id` is an optional stable identifier carried for compatibility with
/// seed data; nothing in the core addresses items by it. Mutations
/// address items by their position in the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    pub category: Category,
    /// Units in stock, always >= 1 once committed.
    pub quantity: i64,
    /// Price per unit in the smallest currency unit, always >= 100 once
    /// committed. Kept integral so totals never touch floating point.
    pub unit_price: i64,
    pub date_received: NaiveDate,
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        category: Category,
        quantity: i64,
        unit_price: i64,
        date_received: NaiveDate,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            category,
            quantity,
            unit_price,
            date_received,
        }
    }

    /// Total value of this line: `quantity * unit_price`, exact integer
    /// arithmetic. Every display and export of a total goes through here.
    pub fn total(&self) -> i64 {
        self.quantity * self.unit_price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn category_literals_round_trip() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
            let parsed: Category = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn category_from_name_rejects_unknown() {
        assert_eq!(Category::from_name("Electronics"), Some(Category::Electronics));
        assert_eq!(Category::from_name("electronics"), None);
        assert_eq!(Category::from_name("Furniture"), None);
    }

    #[test]
    fn item_serializes_with_camel_case_fields() {
        let item = Item::new("Kabel USB", Category::Electronics, 3, 15000, date(2024, 3, 5));
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"unitPrice\":15000"));
        assert!(json.contains("\"dateReceived\":\"2024-03-05\""));
        // No id was assigned, so the key is absent entirely.
        assert!(!json.contains("\"id\""));
    }

    #[test]
    fn item_round_trips_field_for_field() {
        let mut item = Item::new("Sweater", Category::Clothing, 2, 250, date(2023, 11, 30));
        item.id = Some(7);
        let json = serde_json::to_string(&item).unwrap();
        let parsed: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, item);
    }

    #[test]
    fn total_is_exact_integer_product() {
        let item = Item::new("Kabel USB", Category::Electronics, 3, 15000, date(2024, 3, 5));
        assert_eq!(item.total(), 45000);
    }
}
