use log::error;
use std::io::{self, BufRead, Write};
use ticker_table::models::MENU;
use ticker_table::{Interpreter, Outcome, DEFAULT_TICKER_TABLE_CONFIG};

fn main() {
    // Initialize the logger
    env_logger::init();

    let config = match DEFAULT_TICKER_TABLE_CONFIG.with_env_overrides() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let mut interpreter = match Interpreter::new(config) {
        Ok(interpreter) => interpreter,
        Err(e) => {
            error!("Failed to create table: {}", e);
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!();
        println!("{}", interpreter.render_table());
        println!("{}", MENU);
        print!(">> ");
        if let Err(e) = io::stdout().flush() {
            error!("Failed to write to stdout: {}", e);
            std::process::exit(1);
        }

        // End of input behaves like QUIT
        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                error!("Failed to read from stdin: {}", e);
                std::process::exit(1);
            }
            None => break,
        };

        match interpreter.handle_line(&line) {
            Outcome::Message(message) => {
                if !message.is_empty() {
                    println!("{}", message);
                }
            }
            Outcome::Quit => break,
        }
    }
}
