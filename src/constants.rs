/// Number of slots in each of the table's arrays when no capacity is configured. Prime, which
/// keeps quadratic probing from cycling over a small subset of the slots.
pub const DEFAULT_TABLE_CAPACITY: usize = 2003;

/// Multiplier of the polynomial string hash.
pub const HASH_MULTIPLIER: u32 = 31;

/// Number of most recent price rows kept when importing a CSV file.
pub const DEFAULT_HISTORY_WINDOW: usize = 30;

/// Zero-based column of the closing price in an imported price row
/// (`Date,Open,High,Low,Close,Adj Close,Volume`).
pub const DEFAULT_CLOSE_COLUMN: usize = 4;

/// Number of rows a bar may grow above its baseline in the ASCII chart.
pub const CHART_HEIGHT: usize = 10;

/// Total width of the centred chart header.
pub const CHART_HEADER_WIDTH: usize = 30;

/// Extension appended to file names given to `SAVE` and `LOAD`.
pub const TABLE_FILE_EXTENSION: &str = "json";

/// Environment variable overriding the table capacity of the CLI.
pub const CAPACITY_ENV_VAR: &str = "TICKER_TABLE_CAPACITY";

/// Environment variable overriding the directory `SAVE` and `LOAD` resolve file names against.
pub const DATA_DIR_ENV_VAR: &str = "TICKER_TABLE_DATA_DIR";
