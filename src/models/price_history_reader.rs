use crate::types::{PriceHistory, PriceRow};
use crate::Error;
use csv::ReaderBuilder;
use flate2::read::GzDecoder;
use log::info;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

pub struct PriceHistoryReader {}

impl PriceHistoryReader {
    /// Reads the price history CSV at `path` and keeps only its last `window` data rows.
    ///
    /// The first line is treated as a header and dropped. Files ending in `.gz` are
    /// decompressed on the fly.
    ///
    /// # Errors
    /// Returns `Error::IoError` if the file cannot be opened and `Error::ParserError` if it is
    /// not valid CSV.
    pub fn read_from_path(path: &Path, window: usize) -> Result<PriceHistory, Error> {
        let file = BufReader::new(File::open(path)?);

        let is_gzipped = path
            .extension()
            .map_or(false, |extension| extension.eq_ignore_ascii_case("gz"));

        let history = if is_gzipped {
            Self::read_from_reader(GzDecoder::new(file), window)?
        } else {
            Self::read_from_reader(file, window)?
        };

        info!("Read {} price rows from {:?}", history.len(), path);

        Ok(history)
    }

    pub fn read_from_string(csv: &str, window: usize) -> Result<PriceHistory, Error> {
        Self::read_from_reader(csv.as_bytes(), window)
    }

    pub fn read_from_reader<R: Read>(reader: R, window: usize) -> Result<PriceHistory, Error> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mut rows = PriceHistory::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect::<PriceRow>());
        }

        Ok(Self::keep_last(rows, window))
    }

    fn keep_last(mut rows: PriceHistory, window: usize) -> PriceHistory {
        if rows.len() > window {
            rows.drain(..rows.len() - window);
        }
        rows
    }
}
