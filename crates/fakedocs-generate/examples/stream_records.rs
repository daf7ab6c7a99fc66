use std::collections::BTreeMap;

use fakedocs_generate::{DocumentReader, Variant};

fn main() {
    let mut config = BTreeMap::new();
    config.insert("count".to_string(), "5".to_string());
    config.insert("requiredField".to_string(), "orderTotalAmount".to_string());

    let mut reader = DocumentReader::from_config(Variant::Extensible, &config);
    let mut journal = |produced: u64| eprintln!("generated {produced} records");
    reader.open(&mut journal);

    for record in reader.records() {
        match serde_json::to_string(record) {
            Ok(line) => println!("{line}"),
            Err(err) => eprintln!("failed to encode record: {err}"),
        }
    }

    reader.close();
}
