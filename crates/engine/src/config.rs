use crate::header::{LICENSE_HEADER, TARGET_EXTENSION};
use derive_builder::Builder;
use std::path::PathBuf;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// Directory the walk starts from.
    #[builder(default = "Config::default().root")]
    pub root: PathBuf,
    /// File-name suffix of the files to process.
    #[builder(default = "Config::default().extension")]
    pub extension: String,
    #[builder(default = "Config::default().header")]
    pub header: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extension: TARGET_EXTENSION.to_string(),
            header: LICENSE_HEADER.to_string(),
        }
    }
}
