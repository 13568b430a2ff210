// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// A simple example showing options with values, flags and typed access.
use argp::{Count, Parser, Result};

fn main() -> Result<()> {
    let mut parser = Parser::new("simple")
        .description("Argument parser example")
        .enable_help();

    // Support "-a <value>".
    parser
        .add_argument("-a")
        .count(Count::Exactly(1))
        .help("an integer");

    // Support the "--flag" flag.
    parser
        .add_argument("--flag")
        .count(Count::Nothing)
        .help("a flag");

    // Support "-v <value>..".
    parser
        .add_argument("-v")
        .name("--vector")
        .required()
        .help("a vector");

    // Parse the command-line
    if let Err(e) = parser.parse() {
        eprintln!("ERROR: {}", e);
        eprint!("{}", parser.usage());
        std::process::exit(1);
    }

    if parser.is_help() {
        print!("{}", parser.usage());
        return Ok(());
    }

    println!("INFO: a: {}", parser.get::<i32>("a"));
    println!("INFO: flag: {}", parser.get::<bool>("flag"));
    println!("INFO: vector: {:?}", parser.getv::<f64>("v"));
    println!("INFO: free arguments: {:?}", parser.free());

    Ok(())
}
