//! Per-category frequency tables.
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::annotation::Category;
use crate::error::Error;

/// word → occurrence count.
pub type FrequencyTable = HashMap<String, u64>;

/// The three per-category frequency tables.
#[derive(Debug, Default, Deserialize)]
pub struct CategoryTables {
    pub major_claim: FrequencyTable,
    pub claims: FrequencyTable,
    pub premises: FrequencyTable,
}

impl CategoryTables {
    /// Load tables from a JSON object keyed `major_claim`/`claims`/`premises`.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let tables = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(tables))?)
    }

    /// Get a reference to a category's table.
    pub fn get(&self, category: Category) -> &FrequencyTable {
        match category {
            Category::MajorClaim => &self.major_claim,
            Category::Claim => &self.claims,
            Category::Premise => &self.premises,
        }
    }
}
