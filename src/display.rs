//! Rendering calculator state into the two display lines.

use crate::core::CalculatorState;
use serde::{Deserialize, Serialize};

/// Display settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Inserted between each group of three integer digits.
    pub group_separator: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            group_separator: ",".to_string(),
        }
    }
}

impl DisplayConfig {
    /// Format a value with this config's group separator.
    ///
    /// The integer part is grouped in threes, the fraction is reattached
    /// unformatted after a literal `.`. Integer parts that are not plain digits
    /// (`Infinity`, `NaN`, exponent forms) are left as they are, so grouped
    /// output is only produced for plain digit strings.
    ///
    /// # Example
    ///
    /// ```rust
    /// use keypad_calc::display::DisplayConfig;
    ///
    /// let config = DisplayConfig {
    ///     group_separator: " ".to_string(),
    /// };
    /// assert_eq!(config.format_value("1234567.25"), "1 234 567.25");
    /// ```
    pub fn format_value(&self, value: &str) -> String {
        if value.is_empty() {
            return String::new();
        }

        let (integer, fraction) = match value.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (value, None),
        };

        let mut formatted = self.group_integer(integer);
        if let Some(fraction) = fraction {
            formatted.push('.');
            formatted.push_str(fraction);
        }
        formatted
    }

    fn group_integer(&self, integer: &str) -> String {
        let (sign, digits) = match integer.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", integer),
        };
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return integer.to_string();
        }

        let digits = match digits.trim_start_matches('0') {
            "" => "0",
            trimmed => trimmed,
        };

        let mut grouped = String::with_capacity(sign.len() + digits.len() * 2);
        grouped.push_str(sign);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push_str(&self.group_separator);
            }
            grouped.push(ch);
        }
        grouped
    }
}

/// Format a value with the default `,` separator.
///
/// Only plain digit strings are grouped; `1e+21`, `Infinity` and `NaN` come
/// back unchanged.
///
/// # Example
///
/// ```rust
/// use keypad_calc::display::format_value;
///
/// assert_eq!(format_value("2500"), "2,500");
/// assert_eq!(format_value("2500.5"), "2,500.5");
/// assert_eq!(format_value(""), "");
/// assert_eq!(format_value("1e+21"), "1e+21");
/// ```
pub fn format_value(value: &str) -> String {
    DisplayConfig::default().format_value(value)
}

/// The two rendered display lines.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Display {
    /// Formatted previous value followed by the pending operator.
    pub preview: String,
    /// Formatted current value.
    pub main: String,
}

impl Display {
    pub fn render(state: &CalculatorState, config: &DisplayConfig) -> Self {
        let previous = config.format_value(&state.previous_value);
        let symbol = state.operation_symbol();
        let preview = match (previous.is_empty(), symbol.is_empty()) {
            (false, false) => format!("{previous} {symbol}"),
            (true, _) => symbol.to_string(),
            (false, true) => previous,
        };

        Self {
            preview,
            main: config.format_value(&state.current_value),
        }
    }
}
