//! Backtracking parser CLI.

use std::io::{self, IsTerminal};

use bt_diagnostic::emitter::ColorMode;
use bt_parse::ParseConfig;
use btc::commands::{check, explain, parse_check_options, read_input, tokens};

fn main() {
    btc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];
    let is_tty = io::stderr().is_terminal();
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    let result = match command.as_str() {
        "check" => {
            let mut input = None;
            let mut flags = Vec::new();
            for arg in args.iter().skip(2) {
                if (arg == "-" || !arg.starts_with("--")) && input.is_none() {
                    input = Some(arg.as_str());
                } else {
                    flags.push(arg.clone());
                }
            }

            let Some(input) = input else {
                eprintln!("Usage: btc check <input> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --rule=<rule>       Entry rule: stat (default), list, assign");
                eprintln!("  --no-memo           Disable memoization");
                eprintln!("  --max-depth=<n>     Limit list nesting depth");
                eprintln!("  --stats             Print engine counters");
                eprintln!("  --color=<mode>      auto, always, never");
                std::process::exit(1);
            };

            let options = match parse_check_options(&flags, ParseConfig::from_env()) {
                Ok(options) => options,
                Err(message) => {
                    eprintln!("error: {message}");
                    std::process::exit(1);
                }
            };

            read_input(input).and_then(|text| check(&text, &options, is_tty, &mut out, &mut err))
        }
        "tokens" => {
            if args.len() < 3 {
                eprintln!("Usage: btc tokens <input>");
                std::process::exit(1);
            }
            read_input(&args[2])
                .and_then(|text| tokens(&text, ColorMode::Auto, is_tty, &mut out, &mut err))
        }
        "explain" | "--explain" => {
            if args.len() < 3 {
                eprintln!("Usage: btc explain <ERROR_CODE>");
                eprintln!("Example: btc explain E1002");
                std::process::exit(1);
            }
            explain(&args[2], &mut out, &mut err)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            return;
        }
        "version" | "--version" | "-V" => {
            println!("btc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Backtracking list parser");
    println!();
    println!("Usage: btc <command> [options]");
    println!();
    println!("Commands:");
    println!("  check <input>      Parse input (`-` reads stdin) and report the outcome");
    println!("  tokens <input>     Print the token stream");
    println!("  explain <code>     Explain an error code (e.g., E1002)");
    println!("  help               Show this help message");
    println!("  version            Show version information");
    println!();
    println!("Check options:");
    println!("  --rule=<rule>      Entry rule: stat (default), list, assign");
    println!("  --no-memo          Disable memoization");
    println!("  --max-depth=<n>    Limit list nesting depth");
    println!("  --stats            Print engine counters");
    println!("  --color=<mode>     auto, always, never");
    println!();
    println!("Environment:");
    println!("  BT_MEMO=0          Disable memoization");
    println!("  BT_MAX_DEPTH=<n>   Limit list nesting depth");
    println!("  RUST_LOG=<filter>  Enable tracing (e.g., bt_parse=trace)");
}
