pub mod command;
pub use command::Command;

pub mod command_interpreter;
pub use command_interpreter::{Interpreter, Outcome, MENU};

pub mod config;
pub use config::TickerTableConfig;

pub mod error;
pub use error::Error;

pub mod price_history_reader;
pub use price_history_reader::PriceHistoryReader;

pub mod probe_sequence;
pub use probe_sequence::ProbeSequence;

pub mod stock;
pub use stock::Stock;

pub mod stock_table;
pub use stock_table::{Removal, Side, SlotPair, StockMatch, StockTable};

pub mod table_document;
pub use table_document::{SlotCollection, TableDocument};
