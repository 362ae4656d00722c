//! Paragraph-level sufficiency labels.
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One paragraph with its sufficiency judgement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    text: String,
    sufficient: bool,
}

impl Paragraph {
    pub fn new(text: String, sufficient: bool) -> Self {
        Self { text, sufficient }
    }

    /// Get a reference to the paragraph's text.
    pub fn text(&self) -> &str {
        self.text.as_ref()
    }

    pub fn sufficient(&self) -> bool {
        self.sufficient
    }
}

/// Read the sufficiency file: Latin-1 TSV with one header row, rows of
/// `essay-nr<TAB>paragraph-nr<TAB>text<TAB>annotation`.
///
/// Keys are zero-padded to match the stems used by the other datasets
/// (`1` becomes `essay001`). Paragraphs accumulate in file order.
/// A paragraph is sufficient unless its annotation says "insufficient".
pub fn read_sufficiency(path: &Path) -> Result<HashMap<String, Vec<Paragraph>>, Error> {
    info!("reading sufficiency labels from {:?}", path);

    // the distributed file is Latin-1; decode it before tab-splitting
    let bytes = fs::read(path)?;
    let decoded: String = bytes.iter().map(|&b| b as char).collect();

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .quoting(false)
        .from_reader(decoded.as_bytes());

    let mut essays: HashMap<String, Vec<Paragraph>> = HashMap::new();
    for record in reader.records() {
        let record = record?;
        let (essay, text, annotation) = match (record.get(0), record.get(2), record.get(3)) {
            (Some(essay), Some(text), Some(annotation)) => (essay, text, annotation),
            _ => {
                return Err(Error::Custom(format!(
                    "short row in sufficiency file: {:?}",
                    record
                )))
            }
        };

        let key = format!("essay{:0>3}", essay);
        let sufficient = !annotation.to_lowercase().contains("insufficient");
        essays
            .entry(key)
            .or_default()
            .push(Paragraph::new(text.to_string(), sufficient));
    }

    Ok(essays)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::read_sufficiency;

    #[test]
    fn paragraphs_accumulate_in_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "essay\tpar\ttext\tannotation\n\
             1\t1\tfirst paragraph\tsufficient\n\
             1\t2\tsecond paragraph\tINSUFFICIENT\n\
             12\t1\tother essay\tsufficient\n"
        )
        .unwrap();

        let sufficiency = read_sufficiency(file.path()).unwrap();
        assert_eq!(sufficiency.len(), 2);

        let paragraphs = &sufficiency["essay001"];
        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs[0].text(), "first paragraph");
        assert!(paragraphs[0].sufficient());
        assert!(!paragraphs[1].sufficient());

        assert_eq!(sufficiency["essay012"].len(), 1);
    }

    #[test]
    fn latin1_content_decoded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"essay\tpar\ttext\tannotation\n").unwrap();
        // 0xE9 is 'e' acute in Latin-1, invalid on its own in UTF-8
        file.write_all(b"3\t1\tr\xE9sum\xE9 writing\tsufficient\n")
            .unwrap();

        let sufficiency = read_sufficiency(file.path()).unwrap();
        assert_eq!(sufficiency["essay003"][0].text(), "résumé writing");
    }
}
