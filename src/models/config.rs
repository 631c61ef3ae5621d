use crate::constants::{CAPACITY_ENV_VAR, DATA_DIR_ENV_VAR, TABLE_FILE_EXTENSION};
use crate::Error;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct TickerTableConfig {
    /// Number of slots in each of the two arrays. Fixed for the lifetime of a table.
    pub capacity: usize,
    /// Number of most recent CSV rows kept by `IMPORT`.
    pub history_window: usize,
    /// Column of the closing price used by `PLOT`.
    pub close_column: usize,
    /// Directory `SAVE` and `LOAD` resolve file names against. `None` means the current
    /// working directory.
    pub data_dir: Option<PathBuf>,
}

impl TickerTableConfig {
    /// Applies the `TICKER_TABLE_CAPACITY` and `TICKER_TABLE_DATA_DIR` overrides, if set, on
    /// top of `self`.
    ///
    /// # Errors
    /// Returns `Error::InvalidArgument` if the capacity override is not a positive integer.
    pub fn with_env_overrides(mut self) -> Result<Self, Error> {
        if let Ok(raw_capacity) = env::var(CAPACITY_ENV_VAR) {
            self.capacity = match raw_capacity.trim().parse::<usize>() {
                Ok(capacity) if capacity > 0 => capacity,
                _ => {
                    return Err(Error::InvalidArgument(format!(
                        "{} must be a positive integer, got '{}'",
                        CAPACITY_ENV_VAR, raw_capacity
                    )))
                }
            };
        }

        if let Ok(data_dir) = env::var(DATA_DIR_ENV_VAR) {
            if !data_dir.is_empty() {
                self.data_dir = Some(PathBuf::from(data_dir));
            }
        }

        Ok(self)
    }

    /// Resolves a bare file name given to `SAVE`/`LOAD` to `<data_dir>/<file_name>.json`.
    pub fn table_file_path(&self, file_name: &str) -> PathBuf {
        let file_name = format!("{}.{}", file_name, TABLE_FILE_EXTENSION);

        match &self.data_dir {
            Some(data_dir) => data_dir.join(file_name),
            None => PathBuf::from(file_name),
        }
    }
}
