#![allow(unused)] // Ignore due to all constants not being utilized across all test targets

/// Header of the Yahoo-style price history files used as import fixtures.
pub const PRICE_CSV_HEADER: [&str; 7] = [
    "Date",
    "Open",
    "High",
    "Low",
    "Close",
    "Adj Close",
    "Volume",
];

/// (name, wkn, symbol) triples used across tests.
pub const SAMPLE_STOCKS: &[(&str, &str, &str)] = &[
    ("Apple Inc", "US0378331005", "AAPL"),
    ("Banana Co", "US2", "BKO"),
    ("Microsoft Corporation", "US5949181045", "MSFT"),
    ("Alphabet Inc", "US02079K3059", "GOOGL"),
    ("Amazon.com Inc", "US0231351067", "AMZN"),
];
