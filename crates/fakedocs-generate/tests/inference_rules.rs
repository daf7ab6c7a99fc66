use std::sync::Arc;

use fakedocs_core::FieldValue;
use fakedocs_generate::generators::inference::RULES;
use fakedocs_generate::{FieldKind, InferenceEngine, ReferencePools, classify};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn rule_table_keeps_documented_order() {
    let kinds: Vec<FieldKind> = RULES.iter().map(|(kind, _)| *kind).collect();
    assert_eq!(
        kinds,
        [
            FieldKind::Date,
            FieldKind::Currency,
            FieldKind::Count,
            FieldKind::Rating,
            FieldKind::Age,
            FieldKind::Location,
            FieldKind::Category,
            FieldKind::Status,
            FieldKind::Department,
            FieldKind::Email,
            FieldKind::PersonName,
            FieldKind::Identifier,
        ]
    );
}

#[test]
fn classifies_by_first_matching_trigger() {
    let cases = [
        ("updatedAt", FieldKind::Date),
        ("dateCount", FieldKind::Date),
        ("TIMESTAMP", FieldKind::Date),
        ("unitPrice", FieldKind::Currency),
        ("totalCost", FieldKind::Currency),
        ("itemCount", FieldKind::Count),
        ("orderQty", FieldKind::Count),
        ("userScore123", FieldKind::Rating),
        ("rank", FieldKind::Rating),
        ("customerAge", FieldKind::Age),
        ("homeCity", FieldKind::Location),
        ("productType", FieldKind::Category),
        ("dept", FieldKind::Department),
        ("teamLead", FieldKind::Department),
        ("contactEmail", FieldKind::Email),
        ("mailbox", FieldKind::Email),
        ("ownerName", FieldKind::PersonName),
        ("userId", FieldKind::Identifier),
        ("zzz", FieldKind::Placeholder),
    ];
    for (name, expected) in cases {
        assert_eq!(classify(name), expected, "field {name}");
    }
}

#[test]
fn broad_date_trigger_shadows_later_rules() {
    // "at" appears inside these names, so the date rule claims them first.
    assert_eq!(classify("status"), FieldKind::Date);
    assert_eq!(classify("category"), FieldKind::Date);
    assert_eq!(classify("rating"), FieldKind::Date);
    assert_eq!(classify("location"), FieldKind::Date);
    assert_eq!(classify("emailAmount"), FieldKind::Currency);
}

#[test]
fn generated_values_match_their_kind() {
    let pools = Arc::new(ReferencePools::catalog());
    let engine = InferenceEngine::new(Arc::clone(&pools));
    let mut rng = ChaCha8Rng::seed_from_u64(9);

    for _ in 0..50 {
        let value = engine.classify_and_generate("shippingCost", &mut rng);
        let price = value.as_f64().expect("currency is numeric");
        assert!((1.0..=100.0).contains(&price));

        let count = engine.classify_and_generate("numItems", &mut rng);
        assert!(matches!(count, FieldValue::Int(1..=100)));

        let age = engine.classify_and_generate("driverAge", &mut rng);
        assert!(matches!(age, FieldValue::Int(18..=75)));

        let city = engine.classify_and_generate("homeCity", &mut rng);
        assert!(pools.cities.contains(city.as_str().expect("city text")));

        let dept = engine.classify_and_generate("department", &mut rng);
        assert!(pools.departments.contains(dept.as_str().expect("department text")));

        let email = engine.classify_and_generate("email", &mut rng);
        let email = email.as_str().expect("email text").to_string();
        assert!(email.ends_with("@example.com"));
        assert_eq!(email, email.to_lowercase());

        let name = engine.classify_and_generate("name", &mut rng);
        let name = name.as_str().expect("name text");
        let (first, last) = name.split_once(' ').expect("first and last name");
        assert!(pools.first_names.contains(first));
        assert!(pools.last_names.contains(last));

        let id = engine.classify_and_generate("externalId", &mut rng);
        assert!(uuid_like(id.as_str().expect("id text")));
    }
}

#[test]
fn unmatched_names_get_placeholder_with_suffix() {
    let engine = InferenceEngine::new(Arc::new(ReferencePools::catalog()));
    let mut rng = ChaCha8Rng::seed_from_u64(21);

    let first = engine.classify_and_generate("zzz", &mut rng);
    let second = engine.classify_and_generate("zzz", &mut rng);
    let first = first.as_str().expect("placeholder text");
    let second = second.as_str().expect("placeholder text");

    let suffix = first.strip_prefix("zzz_").expect("placeholder keeps field name");
    assert_eq!(suffix.len(), 6);
    assert!(suffix.chars().all(|ch| ch.is_ascii_digit() || ch.is_ascii_lowercase()));
    assert_ne!(first, second);
}

fn uuid_like(value: &str) -> bool {
    let groups: Vec<usize> = value.split('-').map(str::len).collect();
    groups == [8, 4, 4, 4, 12]
}
