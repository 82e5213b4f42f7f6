use castpath_core::CastIndex;
use std::{error::Error, path::PathBuf};

use crate::dataset;

pub const DATA_PATH_VAR: &str = "CASTPATH_DATA";
pub const DEFAULT_DATA_PATH: &str = "data/nextBechdel_castGender.txt";

pub struct CastPathApp {
    pub dataset_path: PathBuf,
}

impl CastPathApp {
    /// Picks the dataset from `--data`, then `$CASTPATH_DATA`, then the
    /// default location.
    pub fn new(data_path: Option<PathBuf>) -> Result<Self, Box<dyn Error>> {
        let dataset_path = data_path
            .or_else(|| std::env::var_os(DATA_PATH_VAR).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

        if !dataset_path.exists() {
            return Err(format!("Dataset not found: {:?}", dataset_path).into());
        }

        Ok(Self { dataset_path })
    }

    pub fn load_index(&self) -> Result<CastIndex, Box<dyn Error>> {
        Ok(dataset::load_index(&self.dataset_path)?)
    }
}
