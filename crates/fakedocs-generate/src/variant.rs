//! Schema profiles a reader can produce.

use std::fmt;
use std::str::FromStr;

use fakedocs_core::Record;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::generators::primitives::{
    AGE_RANGE, QUANTITY_RANGE, SCORE_RANGE, document_id, email_for, format_date, random_date,
    random_int, random_price,
};
use crate::pools::ReferencePools;

pub const COUNT_KEY: &str = "count";
pub const DOCUMENT_COUNT_KEY: &str = "documentCount";
pub const REQUIRED_FIELD_KEY: &str = "requiredField";
pub const SEED_KEY: &str = "seed";

/// Fields every catalog-style record carries, in build order.
pub const STANDARD_FIELDS: &[&str] = &[
    "id",
    "firstName",
    "lastName",
    "email",
    "city",
    "age",
    "category",
    "status",
    "department",
    "price",
    "quantity",
    "score",
    "createdAt",
];

pub const STAFF_FIELDS: &[&str] = &[
    "id",
    "firstName",
    "lastName",
    "fullName",
    "email",
    "age",
    "department",
    "salary",
    "city",
    "status",
    "employeeId",
    "startDate",
    "isRemote",
    "skills",
    "performanceRating",
];

const STAFF_AGE_RANGE: (i64, i64) = (22, 61);
const SALARY_RANGE: (i64, i64) = (30_000, 129_999);
const EMPLOYEE_NUMBER_RANGE: (i64, i64) = (0, 99_999);
const SKILLS_RANGE: (i64, i64) = (1, 5);
/// Performance rating bounds in tenths.
const RATING_TENTHS_RANGE: (i64, i64) = (10, 50);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Fixed product-catalog schema.
    #[default]
    Catalog,
    /// Catalog schema plus one caller-named, inferred field.
    Extensible,
    /// Employee directory schema.
    Staff,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Catalog, Variant::Extensible, Variant::Staff];

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Catalog => "catalog",
            Variant::Extensible => "extensible",
            Variant::Staff => "staff",
        }
    }

    /// Configuration key holding the record count.
    pub fn count_key(self) -> &'static str {
        match self {
            Variant::Catalog | Variant::Extensible => COUNT_KEY,
            Variant::Staff => DOCUMENT_COUNT_KEY,
        }
    }

    pub fn default_count(self) -> usize {
        match self {
            Variant::Catalog => 16,
            Variant::Extensible => 33,
            Variant::Staff => 10,
        }
    }

    pub fn standard_fields(self) -> &'static [&'static str] {
        match self {
            Variant::Catalog | Variant::Extensible => STANDARD_FIELDS,
            Variant::Staff => STAFF_FIELDS,
        }
    }

    pub fn is_standard_field(self, name: &str) -> bool {
        self.standard_fields().iter().any(|field| *field == name)
    }

    pub fn accepts_extra_field(self) -> bool {
        matches!(self, Variant::Extensible)
    }

    pub fn default_pools(self) -> ReferencePools {
        match self {
            Variant::Catalog | Variant::Extensible => ReferencePools::catalog(),
            Variant::Staff => ReferencePools::staff(),
        }
    }

    /// Builds the standard fields of the record at 0-based `index`.
    pub fn build_record<R: Rng + ?Sized>(
        self,
        index: usize,
        pools: &ReferencePools,
        rng: &mut R,
    ) -> Record {
        match self {
            Variant::Catalog | Variant::Extensible => catalog_record(index, pools, rng),
            Variant::Staff => staff_record(index, pools, rng),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = fakedocs_core::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_lowercase();
        Variant::ALL
            .into_iter()
            .find(|variant| variant.as_str() == normalized)
            .ok_or_else(|| fakedocs_core::Error::UnknownVariant(value.to_string()))
    }
}

fn catalog_record<R: Rng + ?Sized>(index: usize, pools: &ReferencePools, rng: &mut R) -> Record {
    let first_name = pools.first_names.pick(rng).to_string();
    let last_name = pools.last_names.pick(rng).to_string();
    let email = email_for(&first_name, &last_name);

    let mut record = Record::with_capacity(STANDARD_FIELDS.len() + 1);
    record.insert("id", document_id(rng, index));
    record.insert("firstName", first_name);
    record.insert("lastName", last_name);
    record.insert("email", email);
    record.insert("city", pools.cities.pick(rng));
    record.insert("age", random_int(rng, AGE_RANGE));
    record.insert("category", pools.categories.pick(rng));
    record.insert("status", pools.statuses.pick(rng));
    record.insert("department", pools.departments.pick(rng));
    record.insert("price", random_price(rng));
    record.insert("quantity", random_int(rng, QUANTITY_RANGE));
    record.insert("score", random_int(rng, SCORE_RANGE));
    record.insert("createdAt", random_date(rng));
    record
}

fn staff_record<R: Rng + ?Sized>(index: usize, pools: &ReferencePools, rng: &mut R) -> Record {
    let first_name = pools.first_names.pick(rng).to_string();
    let last_name = pools.last_names.pick(rng).to_string();
    let full_name = format!("{first_name} {last_name}");
    let email = email_for(&first_name, &last_name);
    let employee_number = random_int(rng, EMPLOYEE_NUMBER_RANGE);
    let start_day = rng.random_range(1..=28);
    let rating = random_int(rng, RATING_TENTHS_RANGE) as f64 / 10.0;

    let mut record = Record::with_capacity(STAFF_FIELDS.len());
    record.insert("id", format!("doc-{:06}", index + 1));
    record.insert("firstName", first_name);
    record.insert("lastName", last_name);
    record.insert("fullName", full_name);
    record.insert("email", email);
    record.insert("age", random_int(rng, STAFF_AGE_RANGE));
    record.insert("department", pools.departments.pick(rng));
    record.insert("salary", random_int(rng, SALARY_RANGE));
    record.insert("city", pools.cities.pick(rng));
    record.insert("status", pools.statuses.pick(rng));
    record.insert("employeeId", format!("EMP{employee_number:05}"));
    record.insert("startDate", format_date(2020, 1, start_day));
    record.insert("isRemote", rng.random_bool(0.5));
    record.insert("skills", random_int(rng, SKILLS_RANGE));
    record.insert("performanceRating", rating);
    record
}
