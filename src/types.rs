use crate::models::Stock;
use std::cell::RefCell;
use std::rc::Rc;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a ticker symbol (e.g., stock ticker) as an owned `String`.
pub type TickerSymbol = String;

/// Represents the display name of a company as an owned `String`.
pub type CompanyName = String;

/// German securities identification number (Wertpapierkennnummer). Stored verbatim; the
/// table never interprets it.
pub type Wkn = String;

/// One row of an imported price history (date, open, high, low, close, ...). The fields are
/// kept exactly as read from the CSV source.
pub type PriceRow = Vec<String>;

/// An ordered price history, oldest row first.
pub type PriceHistory = Vec<PriceRow>;

/// The position of a cell within one of the table's slot arrays.
pub type SlotIndex = usize;

/// A shared handle to a stock record. Both slot arrays hold clones of the same handle, so a
/// mutation made through one lookup path is visible through the other.
pub type StockHandle = Rc<RefCell<Stock>>;
