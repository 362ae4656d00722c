//! Essay-level confirmation-bias labels.
use std::collections::HashMap;
use std::path::Path;

use log::info;

use crate::error::Error;

/// Read the bias label file: TSV with one header row, rows of
/// `essay-id<TAB>label`.
///
/// The flag is true when the label mentions "positive" (any casing).
pub fn read_bias(path: &Path) -> Result<HashMap<String, bool>, Error> {
    info!("reading bias labels from {:?}", path);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .quoting(false)
        .from_path(path)?;

    let mut essays = HashMap::new();
    for record in reader.records() {
        let record = record?;
        let (key, label) = match (record.get(0), record.get(1)) {
            (Some(key), Some(label)) => (key, label),
            _ => {
                return Err(Error::Custom(format!(
                    "short row in bias file: {:?}",
                    record
                )))
            }
        };

        essays.insert(key.to_string(), label.to_lowercase().contains("positive"));
    }

    Ok(essays)
}
