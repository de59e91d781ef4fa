//! Field-level validation for item candidates.
//!
//! Validation is pure and synchronous: every rule is evaluated against
//! the candidate independently of the other fields' outcomes, so a form
//! can show feedback for all failing fields at once. The engine produces
//! typed reasons, not message strings; turning a [`Reason`] into user
//! copy is a presentation concern.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::model::{Category, Item};

pub const MIN_QUANTITY: i64 = 1;
pub const MIN_UNIT_PRICE: i64 = 100;

/// The fields a candidate can fail on. `Display` yields the persisted
/// field name so feedback maps directly onto the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Category,
    Quantity,
    UnitPrice,
    DateReceived,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Field::Name => "name",
            Field::Category => "category",
            Field::Quantity => "quantity",
            Field::UnitPrice => "unitPrice",
            Field::DateReceived => "dateReceived",
        };
        f.write_str(name)
    }
}

/// Why a field failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    Required,
    InvalidEnum,
    BelowMinimum,
    FutureDate,
}

/// Outcome of validating a candidate: empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Verdict {
    pub field_errors: BTreeMap<Field, Reason>,
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        self.field_errors.is_empty()
    }

    fn fail(&mut self, field: Field, reason: Reason) {
        self.field_errors.insert(field, reason);
    }
}

/// The pre-commit form of an [`Item`].
///
/// Fields are optional (and `category` is raw text) so the engine can
/// tell "absent" from "present but out of range" and report unknown
/// category values. A candidate becomes an `Item` only by passing
/// through [`Candidate::into_item`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidate {
    pub id: Option<u64>,
    pub name: String,
    pub category: String,
    pub quantity: Option<i64>,
    pub unit_price: Option<i64>,
    pub date_received: Option<NaiveDate>,
}

impl Candidate {
    /// Pre-filled form values for editing an existing item.
    pub fn from_item(item: &Item) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            category: item.category.as_str().to_string(),
            quantity: Some(item.quantity),
            unit_price: Some(item.unit_price),
            date_received: Some(item.date_received),
        }
    }

    /// Validate against `today` and convert into a committed item.
    ///
    /// Returns the verdict on failure; the caller decides whether that is
    /// a recoverable form state or an error.
    pub fn into_item(self, today: NaiveDate) -> std::result::Result<Item, Verdict> {
        let verdict = validate(&self, today);
        if !verdict.is_valid() {
            return Err(verdict);
        }
        match (
            Category::from_name(&self.category),
            self.quantity,
            self.unit_price,
            self.date_received,
        ) {
            (Some(category), Some(quantity), Some(unit_price), Some(date_received)) => Ok(Item {
                id: self.id,
                name: self.name,
                category,
                quantity,
                unit_price,
                date_received,
            }),
            // Unreachable once the verdict is clean, but stated rather
            // than unwrapped.
            _ => Err(verdict),
        }
    }
}

/// Evaluate every field rule against `candidate`.
///
/// `today` is the current date at time of entry, passed explicitly so
/// the engine stays deterministic under test.
pub fn validate(candidate: &Candidate, today: NaiveDate) -> Verdict {
    let mut verdict = Verdict::default();

    if candidate.name.trim().is_empty() {
        verdict.fail(Field::Name, Reason::Required);
    }

    if Category::from_name(&candidate.category).is_none() {
        verdict.fail(Field::Category, Reason::InvalidEnum);
    }

    match candidate.quantity {
        None => verdict.fail(Field::Quantity, Reason::Required),
        Some(q) if q < MIN_QUANTITY => verdict.fail(Field::Quantity, Reason::BelowMinimum),
        Some(_) => {}
    }

    match candidate.unit_price {
        None => verdict.fail(Field::UnitPrice, Reason::Required),
        Some(p) if p < MIN_UNIT_PRICE => verdict.fail(Field::UnitPrice, Reason::BelowMinimum),
        Some(_) => {}
    }

    match candidate.date_received {
        None => verdict.fail(Field::DateReceived, Reason::Required),
        Some(d) if d > today => verdict.fail(Field::DateReceived, Reason::FutureDate),
        Some(_) => {}
    }

    verdict
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2024, 6, 1)
    }

    fn good_candidate() -> Candidate {
        Candidate {
            id: None,
            name: "Kabel USB".to_string(),
            category: "Electronics".to_string(),
            quantity: Some(3),
            unit_price: Some(15000),
            date_received: Some(date(2024, 5, 20)),
        }
    }

    #[test]
    fn accepts_a_complete_candidate() {
        let verdict = validate(&good_candidate(), today());
        assert!(verdict.is_valid());
    }

    #[test]
    fn blank_name_is_required() {
        let mut candidate = good_candidate();
        candidate.name = "   ".to_string();
        let verdict = validate(&candidate, today());
        assert_eq!(verdict.field_errors.get(&Field::Name), Some(&Reason::Required));
    }

    #[test]
    fn unknown_category_is_invalid_enum() {
        let mut candidate = good_candidate();
        candidate.category = "Furniture".to_string();
        let verdict = validate(&candidate, today());
        assert_eq!(
            verdict.field_errors.get(&Field::Category),
            Some(&Reason::InvalidEnum)
        );
    }

    #[test]
    fn quantity_rules() {
        let mut candidate = good_candidate();
        candidate.quantity = None;
        let verdict = validate(&candidate, today());
        assert_eq!(verdict.field_errors.get(&Field::Quantity), Some(&Reason::Required));

        candidate.quantity = Some(0);
        let verdict = validate(&candidate, today());
        assert_eq!(
            verdict.field_errors.get(&Field::Quantity),
            Some(&Reason::BelowMinimum)
        );

        candidate.quantity = Some(1);
        assert!(validate(&candidate, today()).is_valid());
    }

    #[test]
    fn unit_price_rules() {
        let mut candidate = good_candidate();
        candidate.unit_price = Some(99);
        let verdict = validate(&candidate, today());
        assert_eq!(
            verdict.field_errors.get(&Field::UnitPrice),
            Some(&Reason::BelowMinimum)
        );

        candidate.unit_price = Some(100);
        assert!(validate(&candidate, today()).is_valid());
    }

    #[test]
    fn date_received_must_not_be_in_the_future() {
        let mut candidate = good_candidate();
        candidate.date_received = Some(date(2024, 6, 2));
        let verdict = validate(&candidate, today());
        assert_eq!(
            verdict.field_errors.get(&Field::DateReceived),
            Some(&Reason::FutureDate)
        );

        // Today itself is fine; only strictly-future dates fail.
        candidate.date_received = Some(today());
        assert!(validate(&candidate, today()).is_valid());
    }

    #[test]
    fn rules_are_independent() {
        let candidate = Candidate {
            id: None,
            name: "".to_string(),
            category: "Nope".to_string(),
            quantity: Some(0),
            unit_price: None,
            date_received: Some(date(2030, 1, 1)),
        };
        let verdict = validate(&candidate, today());
        assert_eq!(verdict.field_errors.len(), 5);
        assert_eq!(
            verdict.field_errors.get(&Field::DateReceived),
            Some(&Reason::FutureDate)
        );
    }

    #[test]
    fn into_item_carries_every_field() {
        let item = good_candidate().into_item(today()).unwrap();
        assert_eq!(item.name, "Kabel USB");
        assert_eq!(item.category, crate::model::Category::Electronics);
        assert_eq!(item.quantity, 3);
        assert_eq!(item.unit_price, 15000);
        assert_eq!(item.date_received, date(2024, 5, 20));
    }

    #[test]
    fn into_item_refuses_invalid_candidates() {
        let mut candidate = good_candidate();
        candidate.unit_price = Some(50);
        let err = candidate.into_item(today()).unwrap_err();
        assert!(!err.is_valid());
    }

    #[test]
    fn from_item_round_trips_through_into_item() {
        let original = good_candidate().into_item(today()).unwrap();
        let rebuilt = Candidate::from_item(&original).into_item(today()).unwrap();
        assert_eq!(rebuilt, original);
    }
}
