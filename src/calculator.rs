use colored::Colorize;
use env_logger::Env;
use libquiz::arithmetic::{evaluate, parse_operand, render};
use log::debug;
use std::io::{self, Write};
use text_io::try_read;

fn ask(label: &str) -> String {
    print!("{}", label.cyan());
    let _ = io::stdout().flush();
    // Unreadable input (EOF, invalid UTF-8) counts as a blank line.
    let line: String = try_read!("{}\n").unwrap_or_default();
    line.trim_end_matches('\r').to_string()
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("error")).init();

    let first = ask("Enter the first number: ");
    let operator = ask("Enter the operator (+, -, *, /): ");
    let second = ask("Enter the second number: ");

    let (a, b) = (parse_operand(&first), parse_operand(&second));
    debug!("[Calc] {:?} {:?} {:?} -> {} {} {}", first, operator, second, a, operator, b);
    let outcome = evaluate(a, &operator, b);
    debug!("[Calc] outcome: {:?}", outcome);

    println!("Result: {}", render(&outcome));
}
