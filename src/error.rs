// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use thiserror::Error;

/// The error type.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    //------------------------------
    // Declaration errors (programmer error)
    //------------------------------
    /// Two registered arguments share a name.
    #[error("duplicate argument name: {0}")]
    DuplicateAlias(String),

    //------------------------------
    // Runtime errors (user error)
    //------------------------------
    /// User specified an option that has not been registered.
    #[error("unrecognized command line option '{0}'")]
    UnrecognizedOption(String),

    /// User specified an option token that cannot be split into
    /// a name and an optional `=value`.
    #[error("malformed argument: {0}")]
    MalformedArgument(String),

    /// An argument that must be specified was not specified.
    #[error("required argument not found: {0}")]
    MissingRequiredArgument(String),

    /// An option with an exact count was given fewer values.
    #[error("too few values given for {name}: expected {expected}, found {found}")]
    TooFewValues {
        /// Display names of the option.
        name: String,
        /// Number of values the option needs.
        expected: usize,
        /// Number of values actually bound.
        found: usize,
    },

    //------------------------------
    // Extraction errors
    //------------------------------
    /// A stored value could not be converted to the requested type.
    ///
    /// Only returned by the strict accessors.
    #[error("invalid value {value:?}: {reason}")]
    InvalidValue {
        /// The text that failed to convert.
        value: String,
        /// Why the conversion failed.
        reason: String,
    },

    /// Failed to write the help text.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

/// Convenience type that allows a function to be defined as returning a
/// [Result], but which only requires the success type to be specified,
/// defaulting the error type to this crates `Error` type.
pub type Result<T, E = Error> = std::result::Result<T, E>;
