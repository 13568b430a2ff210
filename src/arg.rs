// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::fmt;

pub(crate) const OPT_PREFIX: char = '-';

/// String to show in usage if an argument is required
const REQUIRED_STR: &str = " (required)";

/// Used to specify how many values an option may claim from the
/// command line.
#[derive(Debug, PartialEq, PartialOrd, Eq, Ord, Clone, Copy)]
pub enum Count {
    /// Option is a flag: it claims no values.
    Nothing,
    /// Option claims up to exactly this many values.
    Exactly(usize),
    /// Option claims every value up to the next option.
    Any,
}

impl Default for Count {
    fn default() -> Self {
        Count::Any
    }
}

impl Count {
    /// Create a new default count for an [Arg].
    pub fn new() -> Self {
        Count::default()
    }

    /// Maximum number of values, or [None] for no limit.
    pub fn capacity(&self) -> Option<usize> {
        match self {
            Count::Nothing => Some(0),
            Count::Exactly(n) => Some(*n),
            Count::Any => None,
        }
    }

    /// Returns true if `len` values fill the option.
    pub fn is_full(&self, len: usize) -> bool {
        self.capacity().map_or(false, |max| len >= max)
    }

    fn normalise(self) -> Self {
        match self {
            Count::Exactly(0) => Count::Nothing,
            count => count,
        }
    }
}

/// Where a free (unclaimed) argument is bound after the scan.
#[derive(Debug, PartialEq, PartialOrd, Eq, Ord, Clone, Copy)]
pub enum Position {
    /// Argument is only set by name.
    None,
    /// Argument takes the free argument at this index (0-based).
    Index(usize),
    /// Argument takes the final free argument.
    Last,
}

impl Default for Position {
    fn default() -> Self {
        Position::None
    }
}

impl Position {
    /// Returns true if the argument is bound positionally.
    pub fn is_positional(&self) -> bool {
        *self != Position::None
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Position::None => Ok(()),
            Position::Index(i) => write!(f, "position {}", i),
            Position::Last => write!(f, "last position"),
        }
    }
}

/// A declared argument: its names and the rules used to bind values to it.
///
/// # Note
///
/// - All members are public for caller convenience.
#[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd)]
pub struct Arg {
    /// Names the argument is recognised by (for example `-f` and
    /// `--flag`). The first name is the canonical one.
    pub names: Vec<String>,
    /// Description of the argument.
    pub help: Option<String>,
    /// Set if the argument must be specified.
    pub required: bool,
    /// Number of values the option claims.
    pub count: Count,
    /// Positional binding rule.
    pub position: Position,
}

impl Arg {
    /// Create a new argument with a single name.
    pub fn new(name: &str) -> Self {
        Arg::default().name(name)
    }

    /// Add an alias for the argument.
    pub fn name(mut self, name: &str) -> Self {
        self.names.push(name.into());
        self
    }

    /// Replace all names of the argument.
    pub fn names<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Arg {
            names: names.into_iter().map(|n| n.as_ref().to_string()).collect(),
            ..self
        }
    }

    /// Specify the help text for the argument.
    pub fn help(self, help: &str) -> Self {
        Arg {
            help: Some(help.into()),
            ..self
        }
    }

    /// Specify that the argument must be provided on the command-line.
    pub fn required(self) -> Self {
        Arg {
            required: true,
            ..self
        }
    }

    /// Specify the number of values the option claims.
    ///
    /// `Count::Exactly(0)` is the same as `Count::Nothing`.
    pub fn count(self, count: Count) -> Self {
        Arg {
            count: count.normalise(),
            ..self
        }
    }

    /// Bind the argument to a free argument position.
    pub fn position(self, position: Position) -> Self {
        Arg { position, ..self }
    }

    /// Lookup keys for this argument (names without leading dashes).
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|n| strip_name(n))
    }

    /// Returns true if `name` (with or without dashes) names this argument.
    pub fn matches(&self, name: &str) -> bool {
        let name = strip_name(name);

        self.keys().any(|k| k == name)
    }

    /// All names joined for messages, for example `-f/--flag`.
    pub fn display_names(&self) -> String {
        self.names.join("/")
    }

    /// Describe the argument for error messages.
    pub(crate) fn describe(&self) -> String {
        if self.position.is_positional() {
            format!("{} ({})", self.display_names(), self.position)
        } else {
            self.display_names()
        }
    }

    fn value_hint(&self) -> String {
        if self.position.is_positional() {
            return "".into();
        }

        match self.count {
            Count::Nothing => "".into(),
            Count::Exactly(n) => " <value>".repeat(n),
            Count::Any => " [<value>..]".into(),
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let required = if self.required { REQUIRED_STR } else { "" };

        let help: String = match &self.help {
            Some(help) => format!(" # {}", help),
            _ => "".into(),
        };

        write!(
            f,
            "{}{}{}{}",
            self.names.join(", "),
            self.value_hint(),
            required,
            help
        )
    }
}

/// The values bound to an [Arg] by the last parse.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Values {
    /// Set if the argument was seen on the command line
    /// (or bound positionally).
    pub found: bool,
    /// Raw values in command line order.
    pub values: Vec<String>,
}

impl Values {
    /// Number of values bound.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no values were bound.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub(crate) fn push(&mut self, value: &str) {
        self.values.push(value.into());
    }

    pub(crate) fn clear(&mut self) {
        self.found = false;
        self.values.clear();
    }
}

/// Strip the leading option markers from a name.
pub(crate) fn strip_name(name: &str) -> &str {
    name.trim_start_matches(OPT_PREFIX)
}
