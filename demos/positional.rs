// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// An example showing how to bind free arguments by position.
use argp::{Count, Parser, Position, Result};

fn main() -> Result<()> {
    let mut parser = Parser::new("positional").enable_help();

    parser
        .add_argument("-c")
        .name("--coords")
        .count(Count::Exactly(2))
        .help("x and y");

    parser
        .add_argument("input")
        .position(Position::Index(0))
        .required()
        .help("file to read");

    parser
        .add_argument("output")
        .position(Position::Last)
        .help("file to write");

    let result = parser.parse();

    if parser.is_help() {
        print!("{}", parser.usage());
        return Ok(());
    }

    // Values bound before any error are still available.
    println!("INFO: coords: {:?}", parser.getv::<i64>("coords"));
    println!("INFO: input: {:?}", parser.get::<String>("input"));

    match parser.try_get::<String>("output")? {
        Some(output) => println!("INFO: output: {:?}", output),
        None => println!("INFO: no output"),
    }

    result
}
