// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

//! Conversion of the raw strings bound to an argument into typed values.
//!
//! Two conversion contracts are provided:
//!
//! - Lenient ([parse_scalar], [Value::from_values]): a value that cannot be
//!   converted becomes the type's default (`0`, `0.0`, `""`, _etc_). This
//!   never fails.
//! - Strict ([try_parse_scalar], [Value::try_from_values]): a value that
//!   cannot be converted is reported as [Error::InvalidValue].

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Convert `text` to `T`, returning `T::default()` if the conversion fails.
///
/// Surrounding whitespace is ignored.
pub fn parse_scalar<T>(text: &str) -> T
where
    T: FromStr + Default,
{
    text.trim().parse().unwrap_or_default()
}

/// Convert `text` to `T`, failing with [Error::InvalidValue] if the
/// conversion fails.
///
/// Surrounding whitespace is ignored.
pub fn try_parse_scalar<T>(text: &str) -> Result<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    text.trim().parse().map_err(|e: T::Err| Error::InvalidValue {
        value: text.into(),
        reason: e.to_string(),
    })
}

/// Returns true if the entire token is a numeric literal (integer or float,
/// optionally signed).
///
/// Such tokens are always values, even when they start with a dash.
pub fn is_number(token: &str) -> bool {
    // Needs a digit to reject "inf" and "nan".
    token.bytes().any(|b| b.is_ascii_digit()) && token.parse::<f64>().is_ok()
}

/// First whitespace separated word of `text`, or `""`.
fn first_word(text: &str) -> &str {
    text.split_whitespace().next().unwrap_or("")
}

/// A type that can be extracted from the values bound to an argument.
///
/// Scalars are extracted from all the values joined by a single space:
/// the lenient form converts the first word of the joined text (so `1 2 3`
/// gives `1`), the strict form requires the whole text to convert.
/// Sequences (`Vec<T>`) convert each value independently. A `bool` is true
/// if the argument was found: its values are ignored.
pub trait Value: Sized {
    /// Extract the value, using defaults for anything that fails to convert.
    fn from_values(found: bool, values: &[String]) -> Self;

    /// Extract the value, failing if anything fails to convert.
    fn try_from_values(found: bool, values: &[String]) -> Result<Self>;
}

macro_rules! scalar_value {
    ($($t:ty),*) => {
        $(
            impl Value for $t {
                fn from_values(_found: bool, values: &[String]) -> Self {
                    parse_scalar(first_word(&values.join(" ")))
                }

                fn try_from_values(_found: bool, values: &[String]) -> Result<Self> {
                    try_parse_scalar(&values.join(" "))
                }
            }
        )*
    };
}

scalar_value!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char
);

impl Value for String {
    fn from_values(_found: bool, values: &[String]) -> Self {
        values.join(" ")
    }

    fn try_from_values(found: bool, values: &[String]) -> Result<Self> {
        Ok(Self::from_values(found, values))
    }
}

impl Value for PathBuf {
    fn from_values(_found: bool, values: &[String]) -> Self {
        PathBuf::from(values.join(" "))
    }

    fn try_from_values(found: bool, values: &[String]) -> Result<Self> {
        Ok(Self::from_values(found, values))
    }
}

impl Value for bool {
    fn from_values(found: bool, _values: &[String]) -> Self {
        found
    }

    fn try_from_values(found: bool, _values: &[String]) -> Result<Self> {
        Ok(found)
    }
}

impl<T> Value for Vec<T>
where
    T: FromStr + Default,
    T::Err: fmt::Display,
{
    fn from_values(_found: bool, values: &[String]) -> Self {
        values.iter().map(|v| parse_scalar(v)).collect()
    }

    fn try_from_values(_found: bool, values: &[String]) -> Result<Self> {
        values.iter().map(|v| try_parse_scalar(v)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_is_number() {
        #[derive(Debug)]
        struct TestData<'a> {
            token: &'a str,
            result: bool,
        }

        let tests = &[
            TestData {
                token: "0",
                result: true,
            },
            TestData {
                token: "42",
                result: true,
            },
            TestData {
                token: "-3",
                result: true,
            },
            TestData {
                token: "-3.5",
                result: true,
            },
            TestData {
                token: "+7",
                result: true,
            },
            TestData {
                token: ".5",
                result: true,
            },
            TestData {
                token: "-1e5",
                result: true,
            },
            TestData {
                token: "",
                result: false,
            },
            TestData {
                token: "-",
                result: false,
            },
            TestData {
                token: "-inf",
                result: false,
            },
            TestData {
                token: "nan",
                result: false,
            },
            TestData {
                token: "-f",
                result: false,
            },
            TestData {
                token: "-3x",
                result: false,
            },
            TestData {
                token: "1 2",
                result: false,
            },
            TestData {
                token: "--5",
                result: false,
            },
        ];

        for (i, d) in tests.iter().enumerate() {
            let msg = format!("test[{}]: {:?}", i, d);

            assert_eq!(is_number(d.token), d.result, "{}", msg);
        }
    }

    #[test]
    fn test_parse_scalar() {
        assert_eq!(parse_scalar::<i32>("42"), 42);
        assert_eq!(parse_scalar::<i32>(" 42 "), 42);
        assert_eq!(parse_scalar::<i32>("-7"), -7);
        assert_eq!(parse_scalar::<i32>("foo"), 0);
        assert_eq!(parse_scalar::<i32>(""), 0);
        assert_eq!(parse_scalar::<u8>("256"), 0);
        assert_eq!(parse_scalar::<u32>("-1"), 0);
        assert_eq!(parse_scalar::<f64>("0.125"), 0.125);
        assert_eq!(parse_scalar::<f64>("bar"), 0.0);
        assert_eq!(parse_scalar::<char>("x"), 'x');
        assert_eq!(parse_scalar::<char>("xy"), '\u{0}');
        assert!(parse_scalar::<bool>("true"));
        assert!(!parse_scalar::<bool>("yes"));
    }

    #[test]
    fn test_try_parse_scalar() {
        assert_eq!(try_parse_scalar::<i32>("42"), Ok(42));
        assert_eq!(try_parse_scalar::<f64>(" -3.5"), Ok(-3.5));

        let err = try_parse_scalar::<i32>("foo").unwrap_err();

        match err {
            Error::InvalidValue { value, reason } => {
                assert_eq!(value, "foo");
                assert!(!reason.is_empty());
            }
            _ => panic!("unexpected error: {:?}", err),
        }

        assert!(try_parse_scalar::<u8>("").is_err());
    }

    #[test]
    fn test_scalar_values() {
        let values = strings(&["42"]);

        assert_eq!(i32::from_values(true, &values), 42);
        assert_eq!(u64::from_values(true, &values), 42);
        assert_eq!(f32::from_values(true, &values), 42.0);
        assert_eq!(String::from_values(true, &values), "42");

        // Multiple values are joined for scalars.
        let values = strings(&["hello", "world"]);
        assert_eq!(String::from_values(true, &values), "hello world");
        assert_eq!(i32::from_values(true, &values), 0);
        assert!(i32::try_from_values(true, &values).is_err());

        // Strings are not trimmed.
        let values = strings(&[" padded "]);
        assert_eq!(String::from_values(true, &values), " padded ");
        assert_eq!(
            PathBuf::from_values(true, &values),
            PathBuf::from(" padded ")
        );

        assert_eq!(i32::from_values(false, &[]), 0);
        assert_eq!(String::from_values(false, &[]), "");
    }

    #[test]
    fn test_scalar_from_several_values() {
        #[derive(Debug)]
        struct TestData<'a> {
            values: Vec<&'a str>,
            int: i32,
            float: f64,
            letter: char,
        }

        let tests = &[
            TestData {
                values: vec!["1", "2", "3"],
                int: 1,
                float: 1.0,
                letter: '1',
            },
            TestData {
                values: vec!["-3.5", "x"],
                int: 0,
                float: -3.5,
                letter: '\u{0}',
            },
            TestData {
                values: vec!["x", "2"],
                int: 0,
                float: 0.0,
                letter: 'x',
            },
            TestData {
                // A single value holding several words.
                values: vec![" 7 8"],
                int: 7,
                float: 7.0,
                letter: '7',
            },
            TestData {
                values: vec!["", "9", "x"],
                int: 9,
                float: 9.0,
                letter: '9',
            },
        ];

        for (i, d) in tests.iter().enumerate() {
            let msg = format!("test[{}]: {:?}", i, d);

            let values = strings(&d.values);

            assert_eq!(i32::from_values(true, &values), d.int, "{}", msg);
            assert_eq!(f64::from_values(true, &values), d.float, "{}", msg);
            assert_eq!(char::from_values(true, &values), d.letter, "{}", msg);

            // Strict conversion needs the whole text.
            assert!(i32::try_from_values(true, &values).is_err(), "{}", msg);
        }
    }

    #[test]
    fn test_bool_values() {
        let values = strings(&["false"]);

        assert!(bool::from_values(true, &values));
        assert!(bool::from_values(true, &[]));
        assert!(!bool::from_values(false, &[]));
        assert_eq!(bool::try_from_values(true, &values), Ok(true));
    }

    #[test]
    fn test_vec_values() {
        let values = strings(&["-3.5", "2", "x"]);

        assert_eq!(
            Vec::<f64>::from_values(true, &values),
            vec![-3.5, 2.0, 0.0]
        );
        assert_eq!(Vec::<i32>::from_values(true, &values), vec![0, 2, 0]);
        assert_eq!(
            Vec::<String>::from_values(true, &values),
            vec!["-3.5", "2", "x"]
        );
        assert!(Vec::<f64>::try_from_values(true, &values).is_err());

        let values = strings(&["1", "2"]);
        assert_eq!(Vec::<u8>::try_from_values(true, &values), Ok(vec![1, 2]));

        assert!(Vec::<i32>::from_values(false, &[]).is_empty());
    }
}
