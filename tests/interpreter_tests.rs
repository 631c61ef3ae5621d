use std::path::{Path, PathBuf};
use test_utils::{scratch_dir, write_gzipped_price_csv, write_price_csv};
use ticker_table::{
    Command, Error, Interpreter, Outcome, TickerTableConfig, DEFAULT_TICKER_TABLE_CONFIG,
};

#[cfg(test)]
mod command_parse_tests {
    use super::*;

    #[test]
    fn test_add_joins_name_tokens() {
        assert_eq!(
            Command::parse("ADD Apple Inc US0378331005 AAPL").unwrap(),
            Command::Add {
                name: "Apple Inc".to_string(),
                wkn: "US0378331005".to_string(),
                symbol: "AAPL".to_string(),
            }
        );
    }

    #[test]
    fn test_verbs_are_case_insensitive() {
        assert_eq!(
            Command::parse("del AAPL").unwrap(),
            Command::Delete {
                symbol: "AAPL".to_string()
            }
        );
        assert_eq!(Command::parse("  Quit ").unwrap(), Command::Quit);
        assert_eq!(
            Command::parse("search Apple   Inc").unwrap(),
            Command::Search {
                key: "Apple Inc".to_string()
            }
        );
        assert_eq!(
            Command::parse("Import data/aapl.csv AAPL").unwrap(),
            Command::Import {
                path: PathBuf::from("data/aapl.csv"),
                symbol: "AAPL".to_string()
            }
        );
    }

    #[test]
    fn test_missing_arguments_are_rejected() {
        for line in [
            "ADD Apple AAPL",
            "DEL",
            "IMPORT data/aapl.csv",
            "SEARCH",
            "PLOT",
            "SAVE",
            "LOAD",
            "",
        ] {
            assert!(
                matches!(Command::parse(line), Err(Error::InvalidArgument(_))),
                "expected '{}' to be rejected",
                line
            );
        }
    }

    #[test]
    fn test_unknown_verb() {
        assert!(matches!(
            Command::parse("BUY AAPL"),
            Err(Error::InvalidArgument(msg)) if msg.contains("Unknown command")
        ));
    }
}

#[cfg(test)]
mod interpreter_tests {
    use super::*;

    fn interpreter(dir: &Path) -> Interpreter {
        let config = TickerTableConfig {
            capacity: 7,
            data_dir: Some(dir.to_path_buf()),
            ..DEFAULT_TICKER_TABLE_CONFIG
        };
        Interpreter::new(config).expect("Failed to create interpreter")
    }

    fn message(outcome: Outcome) -> String {
        match outcome {
            Outcome::Message(message) => message,
            Outcome::Quit => panic!("unexpected quit"),
        }
    }

    #[test]
    fn test_add_search_delete() {
        let dir = scratch_dir();
        let mut interpreter = interpreter(dir.path());

        let added = message(interpreter.handle_line("ADD Apple Inc US1 AAPL"));
        assert!(added.contains("symbol_table index 3"));
        assert!(added.contains("name_table index 0"));

        assert_eq!(
            message(interpreter.handle_line("SEARCH Apple Inc")),
            "Found Apple Inc in name_table at index 0"
        );
        assert_eq!(
            message(interpreter.handle_line("SEARCH AAPL")),
            "Found AAPL in symbol_table at index 3"
        );

        let deleted = message(interpreter.handle_line("DEL AAPL"));
        assert!(deleted.contains("symbol_table index 3"));
        assert!(deleted.contains("name_table index 0"));

        assert_eq!(
            message(interpreter.handle_line("SEARCH AAPL")),
            "INFO: AAPL not found"
        );
        assert!(interpreter.table().is_empty());
    }

    #[test]
    fn test_errors_become_messages() {
        let dir = scratch_dir();
        let mut interpreter = interpreter(dir.path());

        assert!(message(interpreter.handle_line("DEL")).starts_with("INFO: "));
        assert_eq!(
            message(interpreter.handle_line("DEL ZZZ")),
            "INFO: ZZZ not found"
        );
        assert!(message(interpreter.handle_line("FROB")).starts_with("INFO: Unknown command"));
        assert!(message(interpreter.handle_line("LOAD absent")).starts_with("ERROR: IO Error"));
    }

    #[test]
    fn test_table_full_is_reported() {
        let config = TickerTableConfig {
            capacity: 1,
            ..DEFAULT_TICKER_TABLE_CONFIG
        };
        let mut interpreter = Interpreter::new(config).unwrap();

        message(interpreter.handle_line("ADD Apple Inc US1 AAPL"));
        assert!(message(interpreter.handle_line("ADD Banana Co US2 BKO"))
            .starts_with("ERROR: Hash table is full"));
    }

    #[test]
    fn test_import_keeps_last_thirty_rows() {
        let dir = scratch_dir();
        let csv_path = write_price_csv(dir.path(), "bko.csv", 40);
        let mut interpreter = interpreter(dir.path());

        message(interpreter.handle_line("ADD Banana Co US2 BKO"));
        let imported = message(
            interpreter.handle_line(&format!("IMPORT {} BKO", csv_path.display())),
        );
        assert!(imported.contains("30 rows"));

        let found = interpreter.table().find("BKO").unwrap();
        let stock = found.stock.borrow();
        assert_eq!(stock.history.len(), 30);
        assert_eq!(stock.history[0][0], "day-11");
        drop(stock);

        let searched = message(interpreter.handle_line("SEARCH Banana Co"));
        assert!(searched.contains("Newest data for Banana Co: [day-40, 40.00"));
    }

    #[test]
    fn test_import_gzipped_csv() {
        let dir = scratch_dir();
        let plain_path = write_price_csv(dir.path(), "plain.csv", 12);
        let gz_path = write_gzipped_price_csv(dir.path(), "packed.csv.gz", 12);
        let mut interpreter = interpreter(dir.path());

        message(interpreter.handle_line("ADD Apple Inc US1 AAPL"));
        message(interpreter.handle_line("ADD Banana Co US2 BKO"));
        message(interpreter.handle_line(&format!("IMPORT {} AAPL", plain_path.display())));
        message(interpreter.handle_line(&format!("IMPORT {} BKO", gz_path.display())));

        let apple = interpreter.table().find("AAPL").unwrap();
        let banana = interpreter.table().find("BKO").unwrap();
        assert_eq!(banana.stock.borrow().history.len(), 12);
        assert_eq!(apple.stock.borrow().history, banana.stock.borrow().history);
    }

    #[test]
    fn test_import_into_unknown_symbol() {
        let dir = scratch_dir();
        let csv_path = write_price_csv(dir.path(), "zzz.csv", 3);
        let mut interpreter = interpreter(dir.path());

        assert_eq!(
            message(interpreter.handle_line(&format!("IMPORT {} ZZZ", csv_path.display()))),
            "INFO: ZZZ not found"
        );
    }

    #[test]
    fn test_plot() {
        let dir = scratch_dir();
        let csv_path = write_price_csv(dir.path(), "aapl.csv", 30);
        let mut interpreter = interpreter(dir.path());

        message(interpreter.handle_line("ADD Apple Inc US1 AAPL"));
        assert_eq!(
            message(interpreter.handle_line("PLOT AAPL")),
            "INFO: No price data imported for AAPL"
        );

        message(interpreter.handle_line(&format!("IMPORT {} AAPL", csv_path.display())));
        let chart = message(interpreter.handle_line("PLOT AAPL"));
        assert!(chart.starts_with("========| PLOT DATA |========="));
        assert!(chart.contains("Apple Inc [AAPL]"));
        assert!(chart.ends_with("1.00\n"));
    }

    #[test]
    fn test_save_and_load_commands() {
        let dir = scratch_dir();
        let mut interpreter = interpreter(dir.path());

        message(interpreter.handle_line("ADD Apple Inc US1 AAPL"));
        message(interpreter.handle_line("ADD Banana Co US2 BKO"));
        message(interpreter.handle_line("SAVE portfolio"));
        assert!(dir.path().join("portfolio.json").is_file());

        message(interpreter.handle_line("DEL AAPL"));
        assert!(interpreter.table().find("AAPL").is_none());

        let loaded = message(interpreter.handle_line("LOAD portfolio"));
        assert!(loaded.starts_with("Loaded table"));
        assert_eq!(
            interpreter.table().locate("AAPL").map(|slots| slots.symbol_index),
            Some(3)
        );
        assert!(interpreter.table().find("Banana Co").is_some());
    }

    #[test]
    fn test_print_lists_both_sides() {
        let dir = scratch_dir();
        let mut interpreter = interpreter(dir.path());
        message(interpreter.handle_line("ADD Apple Inc US1 AAPL"));

        let printed = message(interpreter.handle_line("PRINT"));
        assert_eq!(
            printed,
            "========| Hashtable |=========\nsymbol_table:\n3 AAPL\nname_table:\n0 Apple Inc\n"
        );
    }

    #[test]
    fn test_quit() {
        let dir = scratch_dir();
        let mut interpreter = interpreter(dir.path());
        assert_eq!(interpreter.handle_line("quit"), Outcome::Quit);
    }
}
