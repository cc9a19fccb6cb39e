use std::path::PathBuf;

use clap::Parser;

use crate::io::storage::{FileKeyValueStore, StorageError};
use crate::state::i18n::Language;

#[derive(Clone, Debug, PartialEq, Eq, Parser)]
#[command(name = "seriesgrid", about = "Racing series schedule grid viewer")]
pub struct AppConfig {
    /// Backend serving /get_series_list, /get_series_table and /get_all_cars.
    #[arg(long, env = "SERIESGRID_BASE_URL", default_value = "http://127.0.0.1:5000")]
    pub base_url: String,

    /// Where the selection is persisted. Defaults to the user config dir.
    #[arg(long, env = "SERIESGRID_STORAGE_FILE")]
    pub storage_file: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Language::En)]
    pub language: Language,
}

impl AppConfig {
    pub fn open_storage(&self) -> Result<FileKeyValueStore, StorageError> {
        match &self.storage_file {
            Some(path) => Ok(FileKeyValueStore::open(path.clone())),
            None => FileKeyValueStore::open_default(),
        }
    }
}
