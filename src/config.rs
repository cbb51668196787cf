//! Data file locations

use std::path::{Path, PathBuf};

/// Default directory for `pos1.txt` .. `pos5.txt` and the word list
pub const DEFAULT_DATA_DIR: &str = "data";

/// Word list file name inside the data directory
pub const DEFAULT_WORDS_FILE: &str = "words.txt";

/// Where the solver reads its data from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    pub frequency_dir: PathBuf,
    pub words_file: PathBuf,
}

impl SolverConfig {
    /// Resolve paths; the word list defaults to `<data_dir>/words.txt`
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>, words_file: Option<PathBuf>) -> Self {
        let frequency_dir = data_dir.into();
        let words_file = words_file.unwrap_or_else(|| frequency_dir.join(DEFAULT_WORDS_FILE));
        Self {
            frequency_dir,
            words_file,
        }
    }

    #[must_use]
    pub fn frequency_dir(&self) -> &Path {
        &self.frequency_dir
    }

    #[must_use]
    pub fn words_file(&self) -> &Path {
        &self.words_file
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR, None)
    }
}
