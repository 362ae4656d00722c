//! Raw essay text reading.
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::error::Error;

/// Recursively read `essay*.txt` files under `src`, keyed by file stem.
///
/// The datasets ship the same essay in several folders; a duplicate stem
/// is accepted only when its content is byte-identical.
pub fn read_essays(src: &Path) -> Result<HashMap<String, String>, Error> {
    info!("reading essays from {:?}", src);

    let mut essays: HashMap<String, String> = HashMap::new();
    for path in super::essay_files(src, "txt")? {
        let content = fs::read_to_string(&path)?;
        let name = super::stem(&path)?;

        match essays.entry(name) {
            Entry::Occupied(entry) => {
                if entry.get() != &content {
                    return Err(Error::Custom(format!(
                        "essay {} is non-identical across folders",
                        entry.key()
                    )));
                }
                debug!("{}: identical duplicate, skipping", entry.key());
            }
            Entry::Vacant(entry) => {
                entry.insert(content);
            }
        }
    }

    info!("{} essays read", essays.len());
    Ok(essays)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::read_essays;

    #[test]
    fn recursive_discovery() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("brat-project-final");
        fs::create_dir(&nested).unwrap();

        fs::write(dir.path().join("essay001.txt"), "first essay").unwrap();
        fs::write(nested.join("essay002.txt"), "second essay").unwrap();
        // no essay prefix, wrong extension
        fs::write(nested.join("README.txt"), "not an essay").unwrap();
        fs::write(nested.join("essay002.ann"), "T1\tClaim 0 5\tfirst").unwrap();

        let essays = read_essays(dir.path()).unwrap();
        assert_eq!(essays.len(), 2);
        assert_eq!(essays["essay001"], "first essay");
        assert_eq!(essays["essay002"], "second essay");
    }

    #[test]
    fn identical_duplicates_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let other = dir.path().join("train");
        fs::create_dir(&other).unwrap();

        fs::write(dir.path().join("essay001.txt"), "same text").unwrap();
        fs::write(other.join("essay001.txt"), "same text").unwrap();

        let essays = read_essays(dir.path()).unwrap();
        assert_eq!(essays.len(), 1);
    }

    #[test]
    fn diverging_duplicates_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let other = dir.path().join("train");
        fs::create_dir(&other).unwrap();

        fs::write(dir.path().join("essay001.txt"), "one text").unwrap();
        fs::write(other.join("essay001.txt"), "another text").unwrap();

        assert!(read_essays(dir.path()).is_err());
    }
}
