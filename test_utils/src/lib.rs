pub mod constants;

use constants::PRICE_CSV_HEADER;
use csv::Writer;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::error::Error;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates an empty directory under the system temp dir. It is removed when the returned
/// `TempDir` is dropped, so tests keep it alive for as long as they use the path.
pub fn scratch_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create scratch directory")
}

/// Builds `day_count` price rows. Row `n` (1-based) is dated `day-<n>` and closes at `n`.
pub fn price_rows(day_count: usize) -> Vec<Vec<String>> {
    (1..=day_count)
        .map(|day| {
            let close = format!("{}.00", day);
            vec![
                format!("day-{}", day),
                close.clone(),
                close.clone(),
                close.clone(),
                close.clone(),
                close,
                "1000".to_string(),
            ]
        })
        .collect()
}

fn write_price_csv_to<W: Write>(writer: W, day_count: usize) -> Result<(), Box<dyn Error>> {
    let mut writer = Writer::from_writer(writer);
    writer.write_record(PRICE_CSV_HEADER)?;
    for row in price_rows(day_count) {
        writer.write_record(&row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes a price history CSV with a header and `day_count` rows to `dir/file_name`.
pub fn write_price_csv(dir: &Path, file_name: &str, day_count: usize) -> PathBuf {
    let path = dir.join(file_name);
    let file = File::create(&path).expect("Failed to create price CSV");
    write_price_csv_to(file, day_count).expect("Failed to write price CSV");
    path
}

/// Same as `write_price_csv`, gzip-compressed.
pub fn write_gzipped_price_csv(dir: &Path, file_name: &str, day_count: usize) -> PathBuf {
    let path = dir.join(file_name);
    let file = File::create(&path).expect("Failed to create gzipped price CSV");

    let mut encoder = GzEncoder::new(file, Compression::default());
    write_price_csv_to(&mut encoder, day_count).expect("Failed to write gzipped price CSV");
    encoder.finish().expect("Failed to finalize compression");

    path
}
