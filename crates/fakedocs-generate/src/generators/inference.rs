//! Name-based inference for caller-defined fields.
//!
//! A field name is lower-cased and matched against [`RULES`] in order; the
//! first rule with a trigger contained in the name decides the value shape.
//! Triggers overlap on purpose (`"dateCount"` holds both `date` and `count`),
//! so the order of the table is part of the contract.

use std::fmt;
use std::sync::Arc;

use fakedocs_core::FieldValue;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::generators::primitives::{
    AGE_RANGE, QUANTITY_RANGE, SCORE_RANGE, SUFFIX_LEN, random_date, random_email,
    random_full_name, random_int, random_price, random_suffix, random_uuid,
};
use crate::pools::ReferencePools;

/// Semantic category inferred from a field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Date,
    Currency,
    Count,
    Rating,
    Age,
    Location,
    Category,
    Status,
    Department,
    Email,
    PersonName,
    Identifier,
    Placeholder,
}

impl FieldKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Date => "date",
            FieldKind::Currency => "currency",
            FieldKind::Count => "count",
            FieldKind::Rating => "rating",
            FieldKind::Age => "age",
            FieldKind::Location => "location",
            FieldKind::Category => "category",
            FieldKind::Status => "status",
            FieldKind::Department => "department",
            FieldKind::Email => "email",
            FieldKind::PersonName => "person_name",
            FieldKind::Identifier => "identifier",
            FieldKind::Placeholder => "placeholder",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered `(kind, triggers)` table; first match wins.
pub const RULES: &[(FieldKind, &[&str])] = &[
    (FieldKind::Date, &["date", "at", "time"]),
    (FieldKind::Currency, &["price", "cost", "amount"]),
    (FieldKind::Count, &["count", "qty", "quantity", "num"]),
    (FieldKind::Rating, &["score", "rating", "rank"]),
    (FieldKind::Age, &["age"]),
    (FieldKind::Location, &["city", "location"]),
    (FieldKind::Category, &["category", "type"]),
    (FieldKind::Status, &["status", "state"]),
    (FieldKind::Department, &["department", "dept", "team"]),
    (FieldKind::Email, &["email", "mail"]),
    (FieldKind::PersonName, &["name"]),
    (FieldKind::Identifier, &["id"]),
];

/// Classifies a field name. Never fails; unmatched names are placeholders.
pub fn classify(field_name: &str) -> FieldKind {
    let name = field_name.to_lowercase();
    RULES
        .iter()
        .find(|(_, triggers)| triggers.iter().any(|trigger| name.contains(trigger)))
        .map(|(kind, _)| *kind)
        .unwrap_or(FieldKind::Placeholder)
}

/// Produces plausible values for arbitrary field names.
#[derive(Debug, Clone)]
pub struct InferenceEngine {
    pools: Arc<ReferencePools>,
}

impl InferenceEngine {
    pub fn new(pools: Arc<ReferencePools>) -> Self {
        Self { pools }
    }

    pub fn classify_and_generate<R: Rng + ?Sized>(
        &self,
        field_name: &str,
        rng: &mut R,
    ) -> FieldValue {
        let kind = classify(field_name);
        debug!(field = %field_name, kind = %kind, "field kind inferred");
        self.generate(kind, field_name, rng)
    }

    /// Samples a value of the given kind. `field_name` only feeds placeholders.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        kind: FieldKind,
        field_name: &str,
        rng: &mut R,
    ) -> FieldValue {
        let pools = self.pools.as_ref();
        match kind {
            FieldKind::Date => FieldValue::Text(random_date(rng)),
            FieldKind::Currency => FieldValue::Float(random_price(rng)),
            FieldKind::Count => FieldValue::Int(random_int(rng, QUANTITY_RANGE)),
            FieldKind::Rating => FieldValue::Int(random_int(rng, SCORE_RANGE)),
            FieldKind::Age => FieldValue::Int(random_int(rng, AGE_RANGE)),
            FieldKind::Location => FieldValue::from(pools.cities.pick(rng)),
            FieldKind::Category => FieldValue::from(pools.categories.pick(rng)),
            FieldKind::Status => FieldValue::from(pools.statuses.pick(rng)),
            FieldKind::Department => FieldValue::from(pools.departments.pick(rng)),
            FieldKind::Email => FieldValue::Text(random_email(rng, pools)),
            FieldKind::PersonName => FieldValue::Text(random_full_name(rng, pools)),
            FieldKind::Identifier => FieldValue::Text(random_uuid(rng)),
            FieldKind::Placeholder => {
                FieldValue::Text(format!("{field_name}_{}", random_suffix(rng, SUFFIX_LEN)))
            }
        }
    }
}
