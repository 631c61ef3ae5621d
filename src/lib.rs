mod config;
pub use config::DEFAULT_TICKER_TABLE_CONFIG;
pub mod constants;
pub mod models;
pub use models::{
    Command, Error, Interpreter, Outcome, PriceHistoryReader, ProbeSequence, Removal, Side,
    SlotPair, Stock, StockMatch, StockTable, TableDocument, TickerTableConfig,
};
pub mod types;
mod utils;
pub use types::{
    CompanyName, PriceHistory, PriceRow, SlotIndex, StockHandle, TickerSymbol, Wkn,
};
pub use utils::{home_slot, render_chart, string_hash};
