//! The eighteen keypad buttons and their mapping to engine actions.

use crate::core::{Action, Operator};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while reading keypad input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("Unknown key label '{0}'. Expected one of 0-9, ., +, -, *, /, AC, DEL, =")]
    UnknownLabel(String),

    #[error("Digit {0} is out of range. Expected 0-9")]
    DigitOutOfRange(u8),
}

/// A single decimal digit `0`-`9`.
///
/// Only constructible through [`Digit::new`] or `TryFrom<u8>`, so every
/// value is in range, including deserialized ones.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// The digit as the character typed into the display.
    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = KeyError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(KeyError::DigitOutOfRange(value))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

/// A keypad button.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Key {
    Digit(Digit),
    Decimal,
    Operator(Operator),
    /// `AC`
    Clear,
    /// `DEL`
    Delete,
    /// `=`
    Equals,
}

impl Key {
    /// Every button, in keypad order.
    pub const ALL: [Key; 18] = [
        Key::Clear,
        Key::Delete,
        Key::Operator(Operator::Divide),
        Key::Digit(Digit(1)),
        Key::Digit(Digit(2)),
        Key::Digit(Digit(3)),
        Key::Operator(Operator::Multiply),
        Key::Digit(Digit(4)),
        Key::Digit(Digit(5)),
        Key::Digit(Digit(6)),
        Key::Operator(Operator::Add),
        Key::Digit(Digit(7)),
        Key::Digit(Digit(8)),
        Key::Digit(Digit(9)),
        Key::Operator(Operator::Subtract),
        Key::Decimal,
        Key::Digit(Digit(0)),
        Key::Equals,
    ];

    /// The digit key for `value`, or `None` when `value` is above 9.
    pub fn digit(value: u8) -> Option<Self> {
        Digit::new(value).map(Self::Digit)
    }

    /// The engine action this button triggers.
    ///
    /// # Example
    ///
    /// ```rust
    /// use keypad_calc::core::Action;
    /// use keypad_calc::keypad::Key;
    ///
    /// assert_eq!(Key::digit(7).unwrap().action(), Action::AddDigit('7'));
    /// assert_eq!(Key::Equals.action(), Action::Evaluate);
    /// ```
    pub fn action(self) -> Action {
        match self {
            Self::Digit(d) => Action::AddDigit(d.as_char()),
            Self::Decimal => Action::AddDigit('.'),
            Self::Operator(op) => Action::ChooseOperation(op),
            Self::Clear => Action::Clear,
            Self::Delete => Action::DeleteLastDigit,
            Self::Equals => Action::Evaluate,
        }
    }

    /// Button caption.
    pub fn label(self) -> &'static str {
        const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
        match self {
            Self::Digit(d) => DIGITS[usize::from(d.value())],
            Self::Decimal => ".",
            Self::Operator(op) => op.symbol(),
            Self::Clear => "AC",
            Self::Delete => "DEL",
            Self::Equals => "=",
        }
    }
}

impl FromStr for Key {
    type Err = KeyError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let label = label.trim();
        if let Some(op) = Operator::from_symbol(label) {
            return Ok(Self::Operator(op));
        }

        match label.to_ascii_uppercase().as_str() {
            "." => Ok(Self::Decimal),
            "=" => Ok(Self::Equals),
            "AC" => Ok(Self::Clear),
            "DEL" => Ok(Self::Delete),
            s if s.len() == 1 && s.as_bytes()[0].is_ascii_digit() => {
                Ok(Self::Digit(Digit(s.as_bytes()[0] - b'0')))
            }
            _ => Err(KeyError::UnknownLabel(label.to_string())),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
