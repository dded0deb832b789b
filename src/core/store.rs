use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::io::{read_name_pairs, NamePairs};
use super::name::NameRecord;

/// The in-memory list of names, loaded once and never modified afterwards.
#[derive(Debug, Default)]
pub struct NameStore {
    names: Vec<NameRecord>,
    skipped: usize,
}

impl NameStore {
    /// Load names from a CSV file. A file that cannot be opened is logged and
    /// yields an empty store so the service can still start.
    pub fn load<P: AsRef<Path>>(file_path: P) -> Self {
        let file_path = file_path.as_ref();
        match File::open(file_path) {
            Ok(file) => Self::from_reader(file, &file_path.display().to_string()),
            Err(e) => {
                tracing::error!("error reading {}: {}", file_path.display(), e);
                Self::default()
            }
        }
    }

    pub fn from_reader<R: Read>(reader: R, source: &str) -> Self {
        let NamePairs { records, skipped } = read_name_pairs(reader, source);

        if skipped > 0 {
            tracing::warn!("skipped {} malformed lines in {}", skipped, source);
        }
        if records.is_empty() {
            tracing::warn!("no names found in {}", source);
        } else {
            tracing::info!("loaded {} names from {}", records.len(), source);
        }

        NameStore {
            names: records,
            skipped,
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Number of data lines dropped during loading.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Zero-based lookup.
    pub fn get(&self, idx: usize) -> Option<&NameRecord> {
        self.names.get(idx)
    }

    pub fn as_slice(&self) -> &[NameRecord] {
        &self.names
    }
}

impl From<Vec<NameRecord>> for NameStore {
    fn from(names: Vec<NameRecord>) -> Self {
        NameStore { names, skipped: 0 }
    }
}
