use full_name_parser::{FullNameParser, NameOrder, ParserConfig};
use std::env;
use std::io;
use std::io::prelude::*;
use std::io::BufReader;
use std::process;
use tracing_subscriber::EnvFilter;

#[rustfmt::skip]
const USAGE: &str = "
Usage:
    full_name_parser parse [options] <name>...
    full_name_parser parse [options] -

Options:
    --last-first        Read the surname first (e.g. \"Zhang Wei\")
    --preserve-case     Don't normalize capitalization
    --strict            Enable strict mode (currently informational)
    --max-length <n>    Reject names longer than <n> characters [default: 1000]

If `-` is the argument, newline-separated names are read from stdin and each
is printed as a line of JSON (an empty line if it could not be parsed).
Otherwise the arguments are joined and parsed as a single name, printing JSON
and exiting with status 0 on success, or printing the error and exiting with
status 1.

Set RUST_LOG (e.g. RUST_LOG=full_name_parser=trace) to see parser tracing.
";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() > 2 && args[1] == "parse" {
        match parse_options(&args[2..]) {
            Some((config, rest)) if !rest.is_empty() => parse_mode(config, rest),
            _ => usage(),
        }
    } else {
        usage();
    }
}

fn usage() -> ! {
    eprintln!("{}", USAGE);
    process::exit(64);
}

fn parse_options(args: &[String]) -> Option<(ParserConfig, &[String])> {
    let mut config = ParserConfig::default();
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "--last-first" => config = config.with_order(NameOrder::LastFirst),
            "--preserve-case" => config = config.with_preserve_case(true),
            "--strict" => config = config.with_strict_mode(true),
            "--max-length" => {
                i += 1;
                let n = args.get(i)?.parse().ok()?;
                config = config.with_max_length(n);
            }
            "--" => {
                i += 1;
                break;
            }
            _ => break,
        }
        i += 1;
    }

    Some((config, &args[i..]))
}

fn parse_mode(config: ParserConfig, args: &[String]) {
    let parser = FullNameParser::new(config);

    if args.len() == 1 && args[0] == "-" {
        let reader = BufReader::new(io::stdin());
        for line in reader.lines() {
            let input = match line {
                Ok(input) => input,
                Err(_) => break,
            };

            let output = match parser.parse(&input) {
                Ok(name) => name.to_json(),
                Err(err) => {
                    tracing::debug!(%input, %err, "could not parse");
                    String::new()
                }
            };

            if writeln!(&mut io::stdout(), "{}", output).is_err() {
                break;
            }
        }
    } else {
        match parser.parse(&args.join(" ")) {
            Ok(name) => println!("{}", name.to_json()),
            Err(err) => {
                eprintln!("{}", err);
                process::exit(1);
            }
        }
    }
}
