//! Sample-based corpus consistency checking.
//!
//! The datasets ship a hand-assembled sample record; comparing the
//! built corpus against it catches silent reader or merge regressions.
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::info;
use serde_json::Value;

use crate::error::Error;
use crate::pipelines::unified::EssayRecord;

/// Compare built records against the last record of a sample JSON array.
///
/// The sample's id selects the record to compare with; only keys
/// present in the sample are checked.
pub fn check_sample(records: &[EssayRecord], sample_path: &Path) -> Result<(), Error> {
    let file = File::open(sample_path)?;
    let mut samples: Vec<Value> = serde_json::from_reader(BufReader::new(file))?;
    let sample = samples
        .pop()
        .ok_or_else(|| Error::Custom("empty sample file".to_string()))?;

    let id = sample
        .get("id")
        .and_then(Value::as_u64)
        .ok_or_else(|| Error::Custom("sample record has no integer id".to_string()))?
        as usize;

    let record = records
        .iter()
        .find(|record| record.id() == id)
        .ok_or_else(|| Error::Custom(format!("no built record with id {}", id)))?;
    let record = serde_json::to_value(record)?;

    let sample = sample
        .as_object()
        .ok_or_else(|| Error::Custom("sample record is not an object".to_string()))?;
    for (key, expected) in sample {
        if record.get(key) != Some(expected) {
            return Err(Error::SampleMismatch {
                id,
                key: key.clone(),
            });
        }
    }

    info!("sample check passed for essay {}", id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use crate::annotation::EssayAnnotations;
    use crate::error::Error;
    use crate::pipelines::unified::EssayRecord;
    use crate::sources::Paragraph;

    use super::check_sample;

    fn gen_records() -> Vec<EssayRecord> {
        vec![
            EssayRecord::new(
                1,
                "first essay".to_string(),
                EssayAnnotations::default(),
                false,
                Vec::new(),
            ),
            EssayRecord::new(
                2,
                "second essay".to_string(),
                EssayAnnotations::default(),
                true,
                vec![Paragraph::new("second essay".to_string(), true)],
            ),
        ]
    }

    fn sample_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn matching_sample_passes() {
        let file = sample_file(
            r#"[{"id": 2, "text": "second essay", "confirmation_bias": true}]"#,
        );

        assert!(check_sample(&gen_records(), file.path()).is_ok());
    }

    #[test]
    fn last_sample_record_is_used() {
        let file = sample_file(
            r#"[{"id": 2, "text": "wrong"}, {"id": 1, "text": "first essay"}]"#,
        );

        assert!(check_sample(&gen_records(), file.path()).is_ok());
    }

    #[test]
    fn discrepancy_names_the_key() {
        let file = sample_file(r#"[{"id": 1, "confirmation_bias": true}]"#);

        let err = check_sample(&gen_records(), file.path()).unwrap_err();
        match err {
            Error::SampleMismatch { id, key } => {
                assert_eq!(id, 1);
                assert_eq!(key, "confirmation_bias");
            }
            other => panic!("expected SampleMismatch, got {:?}", other),
        }
    }

    #[test]
    fn empty_sample_is_error() {
        let file = sample_file("[]");
        assert!(check_sample(&gen_records(), file.path()).is_err());
    }
}
