use crate::constants::{DEFAULT_CLOSE_COLUMN, DEFAULT_HISTORY_WINDOW, DEFAULT_TABLE_CAPACITY};
use crate::models::TickerTableConfig;

pub const DEFAULT_TICKER_TABLE_CONFIG: TickerTableConfig = TickerTableConfig {
    capacity: DEFAULT_TABLE_CAPACITY,
    history_window: DEFAULT_HISTORY_WINDOW,
    close_column: DEFAULT_CLOSE_COLUMN,
    data_dir: None,
};
