// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

#![deny(missing_docs)]
#![forbid(unsafe_code)]

//! Crate for parsing command-line arguments into typed, queryable values.
//!
//! If you want lots of extra features (sub-commands, environment
//! variables, shell completion), you should consider the excellent
//! [`clap`](https://crates.io/crates/clap) crate instead.
//!
//! ---
//!
//! Table of contents:
//!
//! * [Overview](#overview)
//! * [Quickstart](#quickstart)
//! * [Examples](#examples)
//! * [Details](#details)
//! * [Terminology](#terminology)
//! * [Syntax](#syntax)
//! * [Summary of features and behaviour](#summary-of-features-and-behaviour)
//! * [Limitations](#limitations)
//!
//! ---
//!
//! # Overview
//!
//! Declare the arguments a program accepts, parse the command line, then
//! ask for the values by name, converted to the type you need.
//!
//! # Quickstart
//!
//! > **Note:** If you are not familiar with command-line handling,
//! > see the [terminology](#terminology) section.
//!
//! 1. Create a [Parser] for your program.
//!
//!    ```rust
//!    # use argp::Parser;
//!    #
//!    let mut parser = Parser::new("my app").enable_help();
//!    ```
//!
//! 1. Register each argument you wish to support.
//!
//!    As a minimum, you must specify one name for the argument. By
//!    default, options accept any number of values (see [Count]).
//!
//!    ```rust
//!    # use argp::{Count, Parser, Position};
//!    #
//!    # let mut parser = Parser::new("my app");
//!    #
//!    // Support "-a <value>" and "--all <value>".
//!    parser.add_argument("-a").name("--all").count(Count::Exactly(1));
//!
//!    // Support the "-d" flag.
//!    parser.add_argument("-d").count(Count::Nothing).help("debug mode");
//!
//!    // The last free argument is the output file.
//!    parser.add_argument("output").position(Position::Last).required();
//!    ```
//!
//! 1. Call the `parse()` method. Errors are returned, never printed:
//!
//!    ```rust,no_run
//!    # use argp::{Parser, Result};
//!    #
//!    # fn main() -> Result<()> {
//!    # let mut parser = Parser::new("my app");
//!    #
//!    // Parse the command-line
//!    parser.parse()?;
//!    # Ok(())
//!    # }
//!    ```
//!
//! 1. Query the values.
//!
//!    ```rust
//!    # use argp::{Count, Parser};
//!    #
//!    # let mut parser = Parser::new("my app");
//!    # parser.add_argument("-a").name("--all").count(Count::Exactly(1));
//!    # parser.add_argument("-d").count(Count::Nothing);
//!    # parser.parse_with_args(vec!["--all", "3", "-d"]).unwrap();
//!    #
//!    let all: i32 = parser.get("all");
//!    let debug: bool = parser.get("d");
//!
//!    assert_eq!(all, 3);
//!    assert!(debug);
//!    ```
//!
//! # Examples
//!
//! Below is a full example showing how to write a program that supports
//! a few command line options.
//!
//! ```rust
//! use argp::{Count, Parser, Position, Result};
//!
//! fn main() -> Result<()> {
//!     let mut parser = Parser::new("my app").enable_help();
//!
//!     parser.add_argument("-a").count(Count::Exactly(1));
//!     parser.add_argument("-f").name("--flag").count(Count::Nothing);
//!     parser.add_argument("-v").name("--values");
//!     parser.add_argument("file").position(Position::Last).required();
//!
//!     let cli_args = vec!["-a", "1", "-v", "-3.5", "2", "-f", "out.txt"];
//!
//!     parser.parse_with_args(cli_args)?;
//!
//!     if parser.is_help() {
//!         print!("{}", parser.usage());
//!         return Ok(());
//!     }
//!
//!     assert_eq!(parser.get::<i32>("a"), 1);
//!     assert_eq!(parser.getv::<f64>("values"), vec![-3.5, 2.0]);
//!     assert!(parser.get::<bool>("flag"));
//!     assert_eq!(parser.get::<String>("file"), "out.txt");
//!
//!     Ok(())
//! }
//! ```
//!
//! For further examples, try out the programs in the `demos/` directory:
//!
//! ```bash
//! $ cargo run --example simple -- -a 1 --flag -v 1 2.7 3 -4 9
//! $ cargo run --example positional -- -c 1 2 in.txt out.txt
//! ```
//!
//! # Details
//!
//! ## Terminology
//!
//! - An "argument" is a value passed to a program on the command-line.
//!
//! - An "option" is an argument that starts with a dash (`-`). A "short
//!   option" has a single character name (`-v`), a "long option" has
//!   a longer name and starts with two dashes (`--verbose`). An argument
//!   can be registered with several names ("aliases"); the first one is
//!   used in messages.
//!
//! - The "values" of an option are the arguments that follow it. The
//!   [Count] of an option says how many values it may claim:
//!
//!   - [Count::Nothing]: a "flag". Its presence is its value.
//!   - [Count::Exactly]: claims up to that many values. Values beyond the
//!     count are free arguments.
//!   - [Count::Any]: claims every value up to the next option.
//!
//! - A "free argument" is an argument not claimed by any option. Free
//!   arguments can be bound to registered arguments by [Position].
//!
//! ## Syntax
//!
//! | Syntax            | Meaning |
//! |-------------------|---------|
//! | `-x`              | Short option. |
//! | `-xyz`            | Combined flags, the same as `-x -y -z`. None of them claims values. |
//! | `-x a b`          | Short option with values. |
//! | `-x=a`            | Short option with an inline value. |
//! | `--long`          | Long option. |
//! | `--long=a`        | Long option with an inline value. |
//! | `--long a b`      | Long option with values. |
//! | `-3.5`            | A number is always a value, never an option. |
//! | `-`               | A value. |
//! | `--`              | End of options: all following arguments are free. |
//!
//! # Summary of features and behaviour
//!
//! - Short and long names, with any number of aliases per argument.
//! - Options accepting zero, a fixed number, or any number of values.
//! - Free arguments bound by position, including the last position.
//! - Options can be defined as mandatory.
//! - Negative numbers can be passed as values.
//! - Typed accessors ([Parser::get], [Parser::getv]) that fall back to the
//!   default value when a conversion fails, and strict accessors
//!   ([Parser::try_get]) that report the failure.
//! - Values bound before a parse error remain available.
//! - Optional `-h` / `--help` handling (see [Settings::enable_help]) and
//!   help statement generation ([Parser::usage]).
//! - Unknown options can be configured to be ignored.
//!
//! # Limitations
//!
//! - Names are matched exactly: abbreviations are not expanded.
//! - Options cannot have purely numeric names (`-1` is always a value).
//! - Combined flags cannot take values (`-abc=1` is an error).
//! - Sub-commands, configuration files and environment variables are not
//!   supported.

mod arg;
mod args;
mod error;
mod parser;
mod usage;
mod value;

pub use error::{Error, Result};

pub use arg::{Arg, Count, Position, Values};
pub use args::{ArgHandle, ArgId, Args};
pub use parser::{get_args, Parser, Settings, END_OF_OPTIONS};
pub use value::{is_number, parse_scalar, try_parse_scalar, Value};
