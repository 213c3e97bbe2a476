use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
}

// Configuration abstracts config options for the inventory manager
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub(crate) struct Configuration {
    pub storage_path: PathBuf,
}

pub(crate) const DEFAULT_STORAGE_PATH: &str = "catalog.json";

impl Configuration {
    pub fn new(storage_path: Option<&str>) -> Self {
        Configuration {
            storage_path: PathBuf::from(storage_path.unwrap_or(DEFAULT_STORAGE_PATH)),
        }
    }

    pub fn storage_path(&self) -> &Path {
        self.storage_path.as_path()
    }
}
