//! Curated reference pools for categorical fields.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use rand::Rng;
use tracing::debug;

use crate::errors::GenerationError;

/// Immutable, non-empty list of candidate values for one categorical field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    name: String,
    values: Arc<[String]>,
}

impl Pool {
    /// Builds a pool, rejecting an empty value list.
    pub fn new(name: &str, values: Vec<String>) -> Result<Self, fakedocs_core::Error> {
        if values.is_empty() {
            return Err(fakedocs_core::Error::EmptyPool(name.to_string()));
        }
        Ok(Self {
            name: name.to_string(),
            values: values.into(),
        })
    }

    fn builtin(name: &str, values: &[&str]) -> Self {
        debug_assert!(!values.is_empty(), "built-in pool {name} is empty");
        Self {
            name: name.to_string(),
            values: values.iter().map(|value| value.to_string()).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|candidate| candidate == value)
    }

    /// Uniformly samples one value.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        let idx = rng.random_range(0..self.values.len());
        self.values.get(idx).map(String::as_str).unwrap_or_default()
    }
}

/// The full set of pools a reader samples from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferencePools {
    pub first_names: Pool,
    pub last_names: Pool,
    pub cities: Pool,
    pub categories: Pool,
    pub statuses: Pool,
    pub departments: Pool,
}

impl ReferencePools {
    /// Pools for the product-catalog style documents.
    pub fn catalog() -> Self {
        Self {
            first_names: Pool::builtin("first_names", CATALOG_FIRST_NAMES),
            last_names: Pool::builtin("last_names", CATALOG_LAST_NAMES),
            cities: Pool::builtin("cities", CATALOG_CITIES),
            categories: Pool::builtin("categories", CATEGORIES),
            statuses: Pool::builtin("statuses", CATALOG_STATUSES),
            departments: Pool::builtin("departments", CATALOG_DEPARTMENTS),
        }
    }

    /// Pools for the employee directory documents.
    pub fn staff() -> Self {
        Self {
            first_names: Pool::builtin("first_names", STAFF_FIRST_NAMES),
            last_names: Pool::builtin("last_names", STAFF_LAST_NAMES),
            cities: Pool::builtin("cities", STAFF_CITIES),
            categories: Pool::builtin("categories", CATEGORIES),
            statuses: Pool::builtin("statuses", STAFF_STATUSES),
            departments: Pool::builtin("departments", STAFF_DEPARTMENTS),
        }
    }

    /// Replaces pools with the files found in `dir`.
    ///
    /// Each pool is looked up as `<name>.txt` (one value per line, `#`
    /// comments allowed) and then `<name>.json` (array of strings). Missing
    /// or empty files keep the current pool.
    pub fn with_overrides(mut self, dir: &Path) -> Result<Self, GenerationError> {
        for pool in [
            &mut self.first_names,
            &mut self.last_names,
            &mut self.cities,
            &mut self.categories,
            &mut self.statuses,
            &mut self.departments,
        ] {
            if let Some(values) = load_pool_values(dir, pool.name())? {
                debug!(pool = %pool.name(), values = values.len(), "pool override loaded");
                *pool = Pool::new(pool.name(), values)?;
            }
        }
        Ok(self)
    }
}

fn load_pool_values(dir: &Path, name: &str) -> Result<Option<Vec<String>>, GenerationError> {
    if let Some(contents) = read_optional(&dir.join(format!("{name}.txt")))? {
        let values: Vec<String> = contents
            .lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|line| line.to_string())
            .collect();
        if !values.is_empty() {
            return Ok(Some(values));
        }
    }

    let json_path = dir.join(format!("{name}.json"));
    if let Some(contents) = read_optional(&json_path)? {
        let values: Vec<String> = serde_json::from_str(&contents).map_err(|err| {
            GenerationError::Pool(format!("invalid json pool {}: {}", json_path.display(), err))
        })?;
        if !values.is_empty() {
            return Ok(Some(values));
        }
    }

    Ok(None)
}

fn read_optional(path: &Path) -> Result<Option<String>, GenerationError> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(GenerationError::Io(err)),
    }
}

const CATALOG_FIRST_NAMES: &[&str] = &[
    "Alice", "Bob", "Charlie", "Diana", "Edward", "Fiona", "George", "Hannah", "Ivan", "Julia",
    "Kevin", "Laura", "Michael", "Nina", "Oscar",
];

const CATALOG_LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Wilson",
    "Taylor", "Anderson", "Thomas", "Jackson", "White", "Harris",
];

const CATALOG_CITIES: &[&str] = &[
    "Berlin",
    "Hamburg",
    "Munich",
    "Cologne",
    "Frankfurt",
    "Stuttgart",
    "Duesseldorf",
    "Leipzig",
    "Dortmund",
    "Essen",
    "Bremen",
    "Dresden",
    "Hanover",
    "Nuremberg",
    "Bochum",
];

const CATEGORIES: &[&str] = &[
    "electronics",
    "clothing",
    "food",
    "furniture",
    "sports",
    "books",
    "toys",
    "beauty",
    "tools",
    "garden",
];

const CATALOG_STATUSES: &[&str] = &["active", "inactive", "pending", "archived"];

const CATALOG_DEPARTMENTS: &[&str] = &[
    "Engineering",
    "Marketing",
    "Sales",
    "Finance",
    "HR",
    "Operations",
    "Legal",
    "Support",
];

const STAFF_FIRST_NAMES: &[&str] = &[
    "John", "Jane", "Michael", "Sarah", "David", "Lisa", "Robert", "Emily", "James", "Ashley",
];

const STAFF_LAST_NAMES: &[&str] = &[
    "Smith",
    "Johnson",
    "Williams",
    "Brown",
    "Jones",
    "Garcia",
    "Miller",
    "Davis",
    "Rodriguez",
    "Martinez",
];

const STAFF_CITIES: &[&str] = &[
    "New York",
    "Los Angeles",
    "Chicago",
    "Houston",
    "Phoenix",
    "Philadelphia",
    "San Antonio",
    "San Diego",
    "Dallas",
    "San Jose",
];

const STAFF_STATUSES: &[&str] = &["active", "inactive", "pending", "archived", "suspended"];

const STAFF_DEPARTMENTS: &[&str] = &[
    "Engineering",
    "Marketing",
    "Sales",
    "HR",
    "Finance",
    "Operations",
    "Research",
    "Support",
    "Legal",
    "IT",
];

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn empty_pool_is_rejected() {
        let err = Pool::new("cities", Vec::new()).expect_err("empty pool must fail");
        assert!(matches!(err, fakedocs_core::Error::EmptyPool(name) if name == "cities"));
    }

    #[test]
    fn pick_stays_inside_pool() {
        let pools = ReferencePools::catalog();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let city = pools.cities.pick(&mut rng);
            assert!(pools.cities.contains(city), "unexpected city {city}");
        }
    }

    #[test]
    fn presets_differ_where_expected() {
        let catalog = ReferencePools::catalog();
        let staff = ReferencePools::staff();
        assert_eq!(catalog.statuses.len(), 4);
        assert!(staff.statuses.contains("suspended"));
        assert!(staff.cities.contains("San Jose"));
        assert_eq!(catalog.categories, staff.categories);
    }
}
