// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::env;
use std::fmt;
use std::io::Write;

use tracing::{debug, trace};

use crate::arg::{strip_name, Arg, Count, OPT_PREFIX};
use crate::args::{ArgHandle, ArgId, Args};
use crate::error::{Error, Result};
use crate::usage;
use crate::value::{is_number, Value};

/// Special argument used to denote the end of all options; all arguments
/// that follow are considered to be free arguments (even if they start
/// with `-`!)
///
/// See: `getopt(3)`.
pub const END_OF_OPTIONS: &str = "--";
const LONG_OPT_PREFIX: &str = END_OF_OPTIONS;

const INLINE_VALUE_SEPARATOR: char = '=';

const HELP_SHORT: &str = "-h";
const HELP_LONG: &str = "--help";
const HELP_TEXT: &str = "show this help statement";

/// Settings used to control the parsers behaviour.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialOrd, Default, PartialEq)]
pub struct Settings {
    /// If set, register `-h` / `--help`. When either is specified,
    /// validation is skipped and the parse succeeds.
    help: bool,

    /// If set, ignore any unknown options; by default an unknown option is
    /// considered an error.
    ignore_unknown_options: bool,
}

impl Settings {
    /// Create a new settings object.
    pub fn new() -> Self {
        Settings::default()
    }

    /// Register the `-h` / `--help` option automatically.
    ///
    /// The caller is responsible for checking [Parser::is_help()] after
    /// parsing and displaying the help statement.
    pub fn enable_help(self) -> Self {
        Settings { help: true, ..self }
    }

    /// Specify that unknown options should be silently ignored
    /// (by default, the first unknown option will generate an error).
    pub fn ignore_unknown_options(self) -> Self {
        Settings {
            ignore_unknown_options: true,
            ..self
        }
    }
}

/// Get a list of all command-line arguments specified to the program with
/// the program name (the first argument) removed.
///
/// # Note
///
/// Used with [Parser::parse_with_args()]. However, this isn't usually
/// required: just call [Parser::parse()].
pub fn get_args() -> Vec<String> {
    env::args().skip(1).collect()
}

/// How a single command line token is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'t> {
    /// Empty token.
    Skip,
    /// `--` on its own.
    EndOfOptions,
    /// A value for the open option, or a free argument.
    Value(&'t str),
    /// `-f`, `-f=value`, `--flag` or `--flag=value`.
    Opt {
        long: bool,
        name: &'t str,
        value: Option<&'t str>,
    },
    /// Combined short flags, for example `-abc`.
    Bundle(&'t str),
}

/// Returns the byte offset of the end of the option name at the start of
/// `s`. Names end at the first punctuation character other than `-` and
/// `_`.
fn name_end(s: &str) -> usize {
    s.char_indices()
        .find(|(_, c)| c.is_ascii_punctuation() && *c != '-' && *c != '_')
        .map_or(s.len(), |(i, _)| i)
}

/// Split the text following the option marker into a name and an optional
/// inline value.
fn split_option<'t>(token: &'t str, rest: &'t str, long: bool) -> Result<Token<'t>> {
    let (name, tail) = rest.split_at(name_end(rest));

    if name.is_empty() {
        return Err(Error::MalformedArgument(token.into()));
    }

    let value = if tail.is_empty() {
        None
    } else if let Some(value) = tail.strip_prefix(INLINE_VALUE_SEPARATOR) {
        Some(value)
    } else {
        return Err(Error::MalformedArgument(token.into()));
    };

    Ok(Token::Opt { long, name, value })
}

fn classify(token: &str) -> Result<Token<'_>> {
    if token.is_empty() {
        return Ok(Token::Skip);
    }

    // Negative numbers are values, never options.
    if is_number(token) {
        return Ok(Token::Value(token));
    }

    if token == END_OF_OPTIONS {
        return Ok(Token::EndOfOptions);
    }

    if let Some(rest) = token.strip_prefix(LONG_OPT_PREFIX) {
        return split_option(token, rest, true);
    }

    if let Some(rest) = token.strip_prefix(OPT_PREFIX) {
        // A lone dash is conventionally a value ("stdin").
        if rest.is_empty() {
            return Ok(Token::Value(token));
        }

        let name = &rest[..name_end(rest)];

        if name.chars().count() > 1 {
            if name.len() != rest.len() {
                // Combined flags cannot carry a value.
                return Err(Error::MalformedArgument(token.into()));
            }

            return Ok(Token::Bundle(name));
        }

        return split_option(token, rest, false);
    }

    Ok(Token::Value(token))
}

/// Scanner state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// No option is open: values are free arguments.
    Scanning,
    /// The option is claiming values.
    Open(ArgId),
    /// `--` was seen: everything else is a free argument.
    EndOfOptions,
}

/// Walks the command line, binding values to the registered arguments.
struct Scanner<'a> {
    args: &'a mut Args,
    free: &'a mut Vec<String>,
    ignore_unknown_options: bool,
    state: State,
}

impl<'a> Scanner<'a> {
    fn new(args: &'a mut Args, free: &'a mut Vec<String>, settings: &Settings) -> Self {
        Scanner {
            args,
            free,
            ignore_unknown_options: settings.ignore_unknown_options,
            state: State::Scanning,
        }
    }

    fn feed(&mut self, cli_arg: &str) -> Result<()> {
        if self.state == State::EndOfOptions {
            self.free.push(cli_arg.into());
            return Ok(());
        }

        let token = classify(cli_arg)?;

        trace!(?token, state = ?self.state, "classified token");

        match token {
            Token::Skip => (),
            Token::EndOfOptions => {
                self.close();
                self.state = State::EndOfOptions;
            }
            Token::Value(value) => self.add_value(value),
            Token::Opt { long, name, value } => {
                self.close();

                let prefix = if long { LONG_OPT_PREFIX } else { "-" };
                self.open(name, &format!("{}{}", prefix, name))?;

                if let Some(value) = value {
                    self.add_value(value);
                }
            }
            Token::Bundle(names) => {
                self.close();

                for c in names.chars() {
                    let name = c.to_string();

                    self.open(&name, &format!("{}{}", OPT_PREFIX, c))?;
                    self.close();
                }
            }
        }

        Ok(())
    }

    /// Record that the option was found and start claiming values for it.
    fn open(&mut self, name: &str, option: &str) -> Result<()> {
        let id = match self.args.resolve(name) {
            Some(id) => id,
            None if self.ignore_unknown_options => {
                debug!(option = %option, "ignoring unknown option");
                return Ok(());
            }
            None => return Err(Error::UnrecognizedOption(option.into())),
        };

        self.args.values_mut(id).found = true;

        if self.args.count(id) != Count::Nothing {
            self.state = State::Open(id);
        }

        Ok(())
    }

    fn close(&mut self) {
        if let State::Open(_) = self.state {
            self.state = State::Scanning;
        }
    }

    fn add_value(&mut self, value: &str) {
        let id = match self.state {
            State::Open(id) => id,
            _ => {
                trace!(value = value, "free argument");
                self.free.push(value.into());
                return;
            }
        };

        let count = self.args.count(id);
        let values = self.args.values_mut(id);

        if count.is_full(values.len()) {
            debug!(value = value, option = id.index(), "option full, value is a free argument");
            self.close();
            self.free.push(value.into());
            return;
        }

        trace!(value = value, option = id.index(), "bound value");
        values.push(value);

        if count.is_full(values.len()) {
            self.close();
        }
    }
}

/// The main object used to represent the program.
///
/// Register the arguments, call one of the parse methods and then query
/// the results by name.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct Parser {
    name: String,
    description: String,
    /// Index 0 of the command line, recorded by [Parser::parse()].
    program: String,
    settings: Settings,
    args: Args,
    free: Vec<String>,
    help: Option<ArgId>,
}

impl Parser {
    /// Create a new parser.
    pub fn new(name: &str) -> Self {
        Parser {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Specify brief explanatory text for the program.
    pub fn description(self, description: &str) -> Self {
        Parser {
            description: description.into(),
            ..self
        }
    }

    /// Specify a set of arguments to parse the command-line with.
    pub fn args(self, args: Args) -> Self {
        let mut parser = Parser {
            args,
            help: None,
            ..self
        };

        parser.ensure_help();
        parser
    }

    /// Specify any settings for the program.
    pub fn settings(self, settings: Settings) -> Self {
        let mut parser = Parser { settings, ..self };

        parser.ensure_help();
        parser
    }

    /// Register `-h` / `--help`.
    ///
    /// # Note
    ///
    /// This is an alternative to calling the `settings()` method.
    pub fn enable_help(self) -> Self {
        let settings = self.settings.enable_help();

        self.settings(settings)
    }

    /// If set, don't error if unknown options are specified - just
    /// ignore them.
    ///
    /// # Note
    ///
    /// This is an alternative to calling the `settings()` method.
    pub fn ignore_unknown_options(self) -> Self {
        Parser {
            settings: self.settings.ignore_unknown_options(),
            ..self
        }
    }

    /// Register a new argument called `name` and return a handle to
    /// configure it.
    pub fn add_argument(&mut self, name: &str) -> ArgHandle<'_> {
        self.args.add_argument(name)
    }

    /// Register a single argument.
    pub fn add(&mut self, arg: Arg) -> ArgId {
        self.args.add(arg)
    }

    /// The registered arguments and the values bound by the last parse.
    pub fn registry(&self) -> &Args {
        &self.args
    }

    /// Name shown in the help statement.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.program
        } else {
            &self.name
        }
    }

    fn ensure_help(&mut self) {
        if self.settings.help && self.help.is_none() {
            let arg = Arg::new(HELP_SHORT)
                .name(HELP_LONG)
                .count(Count::Nothing)
                .help(HELP_TEXT);

            self.help = Some(self.args.add(arg));
        }
    }

    /// Parse a set of command line arguments (without the program name).
    ///
    /// # Arguments
    ///
    /// - `cli_args`: The arguments. Specify your own, or call [get_args()].
    ///
    /// # Notes
    ///
    /// - The `cli_args` must _not_ include the command name (which by
    ///   default is returned as the first element by `env::args()` for
    ///   example. Use [get_args()] as this handles this for you.
    /// - On failure, the values bound before the error remain queryable.
    /// - Parsing again resets all previously bound values.
    pub fn parse_with_args<I, S>(&mut self, cli_args: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args.reset();
        self.free.clear();

        self.args.build_aliases()?;

        let mut scanner = Scanner::new(&mut self.args, &mut self.free, &self.settings);

        let mut token_count = 0usize;

        for cli_arg in cli_args {
            token_count += 1;
            scanner.feed(cli_arg.as_ref())?;
        }

        scanner.close();

        self.args.bind_positionals(&self.free);

        debug!(tokens = token_count, free = self.free.len(), "scanned arguments");

        if self.is_help() {
            debug!("help requested, skipping validation");
            return Ok(());
        }

        self.args.validate()
    }

    /// Simplest interface to the parser.
    pub fn parse(&mut self) -> Result<()> {
        if let Some(program) = env::args().next() {
            self.program = program;
        }

        self.parse_with_args(get_args())
    }

    /// Returns true if `-h` / `--help` was specified.
    ///
    /// Always false unless help was enabled.
    pub fn is_help(&self) -> bool {
        self.help
            .and_then(|id| self.args.values(id))
            .map_or(false, |v| v.found)
    }

    /// Free arguments (those not claimed by any option) in command line
    /// order.
    ///
    /// These are also available using the empty name (`""`).
    pub fn free(&self) -> &[String] {
        &self.free
    }

    fn lookup(&self, name: &str) -> (bool, &[String]) {
        if strip_name(name).is_empty() {
            return (!self.free.is_empty(), self.free.as_slice());
        }

        match self.args.resolve(name).and_then(|id| self.args.values(id)) {
            Some(values) => (values.found, values.values.as_slice()),
            None => (false, &[] as &[String]),
        }
    }

    /// Returns true if the argument was specified (or bound to a free
    /// argument).
    ///
    /// Names may be given with or without their leading dashes, and any
    /// alias of the argument may be used.
    pub fn exists(&self, name: &str) -> bool {
        self.lookup(name).0
    }

    /// The raw values bound to the argument.
    pub fn values(&self, name: &str) -> &[String] {
        self.lookup(name).1
    }

    /// Get the value of an argument converted to `T`.
    ///
    /// If the argument was not found, or the value cannot be converted,
    /// the default for `T` is returned. For a `bool`, this is the same as
    /// [Parser::exists()].
    ///
    /// # Example
    ///
    /// ```rust
    /// use argp::Parser;
    ///
    /// let mut parser = Parser::new("example");
    /// parser.add_argument("-a");
    ///
    /// parser.parse_with_args(vec!["-a", "42"]).unwrap();
    ///
    /// assert_eq!(parser.get::<i32>("a"), 42);
    /// assert_eq!(parser.get::<i32>("missing"), 0);
    /// ```
    pub fn get<T: Value>(&self, name: &str) -> T {
        let (found, values) = self.lookup(name);

        T::from_values(found, values)
    }

    /// Get all values of an argument, each converted to `T`.
    ///
    /// Values that cannot be converted become the default for `T`.
    pub fn getv<T>(&self, name: &str) -> Vec<T>
    where
        T: std::str::FromStr + Default,
        T::Err: fmt::Display,
    {
        self.get::<Vec<T>>(name)
    }

    /// Get the value of an argument converted to `T`, failing if the
    /// conversion fails.
    ///
    /// Returns `Ok(None)` if the argument was not found.
    pub fn try_get<T: Value>(&self, name: &str) -> Result<Option<T>> {
        let (found, values) = self.lookup(name);

        if !found {
            return Ok(None);
        }

        T::try_from_values(found, values).map(Some)
    }

    /// Generate a help statement from the registered [Arg]'s.
    pub fn usage(&self) -> String {
        usage::render(self.display_name(), &self.description, &self.args)
    }

    /// Write the help statement.
    pub fn write_help<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(self.usage().as_bytes())?;

        Ok(())
    }
}
