//! Numeric label formatting driven by host-supplied format strings.
//!
//! Two pattern families are understood:
//! - standard specifiers: `N`, `F`, `P`, `D`, `G`, optionally followed by a
//!   precision (`N2`, `P0`, `F1`)
//! - custom patterns built from `0`, `#`, `,`, `.` and `%`, with optional
//!   literal text before and after the numeric part (`$#,##0.00`, `0.0 kg`)

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ChartError, ChartResult};

pub const DEFAULT_FORMAT: &str = "0";

/// Parsed number format. Construction never panics; use
/// [`NumberFormat::parse_or_default`] where display must not fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    pattern: String,
    prefix: String,
    suffix: String,
    min_integer_digits: usize,
    min_decimals: usize,
    max_decimals: usize,
    grouping: bool,
    percent: bool,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_FORMAT.to_owned(),
            prefix: String::new(),
            suffix: String::new(),
            min_integer_digits: 1,
            min_decimals: 0,
            max_decimals: 0,
            grouping: false,
            percent: false,
        }
    }
}

impl NumberFormat {
    pub fn parse(pattern: &str) -> ChartResult<Self> {
        let trimmed = pattern.trim();
        if trimmed.is_empty() {
            return Err(ChartError::InvalidConfig(
                "number format must not be empty".to_owned(),
            ));
        }

        if let Some(format) = parse_standard(trimmed) {
            return Ok(Self {
                pattern: pattern.to_owned(),
                ..format
            });
        }
        parse_custom(trimmed).map(|format| Self {
            pattern: pattern.to_owned(),
            ..format
        })
    }

    /// Parses `pattern`, substituting the `"0"` format when it is empty or
    /// malformed.
    #[must_use]
    pub fn parse_or_default(pattern: &str) -> Self {
        match Self::parse(pattern) {
            Ok(format) => format,
            Err(err) => {
                warn!(pattern, error = %err, "falling back to default number format");
                Self::default()
            }
        }
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    #[must_use]
    pub fn is_percent(&self) -> bool {
        self.percent
    }

    #[must_use]
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return if value.is_nan() {
                "NaN".to_owned()
            } else if value > 0.0 {
                "∞".to_owned()
            } else {
                "-∞".to_owned()
            };
        }

        let scaled = if self.percent { value * 100.0 } else { value };
        let digits = render_digits(
            scaled.abs(),
            self.min_integer_digits,
            self.min_decimals,
            self.max_decimals,
            self.grouping,
        );
        let negative = scaled < 0.0 && digits.chars().any(|c| c.is_ascii_digit() && c != '0');
        let sign = if negative { "-" } else { "" };
        let percent = if self.percent { "%" } else { "" };
        format!("{}{sign}{digits}{percent}{}", self.prefix, self.suffix)
    }
}

fn parse_standard(pattern: &str) -> Option<NumberFormat> {
    let mut chars = pattern.chars();
    let specifier = chars.next()?.to_ascii_uppercase();
    let rest = chars.as_str();
    let precision = if rest.is_empty() {
        None
    } else {
        Some(rest.parse::<usize>().ok().filter(|p| *p <= 15)?)
    };

    let base = NumberFormat::default();
    let format = match specifier {
        'N' => {
            let decimals = precision.unwrap_or(2);
            NumberFormat {
                min_decimals: decimals,
                max_decimals: decimals,
                grouping: true,
                ..base
            }
        }
        'F' => {
            let decimals = precision.unwrap_or(2);
            NumberFormat {
                min_decimals: decimals,
                max_decimals: decimals,
                ..base
            }
        }
        'P' => {
            let decimals = precision.unwrap_or(2);
            NumberFormat {
                min_decimals: decimals,
                max_decimals: decimals,
                percent: true,
                ..base
            }
        }
        'D' => NumberFormat {
            min_integer_digits: precision.unwrap_or(1).max(1),
            ..base
        },
        'G' => NumberFormat {
            max_decimals: precision.unwrap_or(10),
            ..base
        },
        _ => return None,
    };
    Some(format)
}

fn parse_custom(pattern: &str) -> ChartResult<NumberFormat> {
    let is_numeric = |c: char| matches!(c, '0' | '#' | ',' | '.');
    let start = pattern
        .find(|c: char| c == '0' || c == '#')
        .ok_or_else(|| {
            ChartError::InvalidConfig(format!("number format `{pattern}` has no digit placeholder"))
        })?;
    let numeric_len = pattern[start..]
        .find(|c: char| !is_numeric(c))
        .unwrap_or(pattern.len() - start);
    let numeric = &pattern[start..start + numeric_len];
    let mut tail = &pattern[start + numeric_len..];

    let mut percent = pattern[..start].contains('%');
    let prefix = pattern[..start].replace('%', "");
    if let Some(stripped) = tail.strip_prefix('%') {
        percent = true;
        tail = stripped;
    }
    if tail.contains(['0', '#']) {
        return Err(ChartError::InvalidConfig(format!(
            "number format `{pattern}` has more than one numeric section"
        )));
    }

    let (integer, fraction) = numeric.split_once('.').unwrap_or((numeric, ""));
    if fraction.contains(['.', ',']) {
        return Err(ChartError::InvalidConfig(format!(
            "number format `{pattern}` has a malformed fraction"
        )));
    }

    let min_decimals = fraction.chars().take_while(|c| *c == '0').count();
    let max_decimals = fraction.len();
    if fraction.chars().skip(min_decimals).any(|c| c == '0') {
        return Err(ChartError::InvalidConfig(format!(
            "number format `{pattern}` places `0` after `#` in the fraction"
        )));
    }

    Ok(NumberFormat {
        pattern: pattern.to_owned(),
        prefix,
        suffix: tail.to_owned(),
        min_integer_digits: integer.chars().filter(|c| *c == '0').count(),
        min_decimals,
        max_decimals,
        grouping: integer.contains(','),
        percent,
    })
}

fn render_digits(
    abs_value: f64,
    min_integer_digits: usize,
    min_decimals: usize,
    max_decimals: usize,
    grouping: bool,
) -> String {
    let fixed = format!("{abs_value:.max_decimals$}");
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut fraction = fraction.to_owned();
    while fraction.len() > min_decimals && fraction.ends_with('0') {
        fraction.pop();
    }

    let mut integer = integer.trim_start_matches('0').to_owned();
    if integer.len() < min_integer_digits {
        integer = format!("{}{integer}", "0".repeat(min_integer_digits - integer.len()));
    }
    if grouping {
        integer = group_thousands(&integer);
    }

    if fraction.is_empty() {
        integer
    } else {
        format!("{integer}.{fraction}")
    }
}

fn group_thousands(integer: &str) -> String {
    let len = integer.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (position, digit) in integer.chars().enumerate() {
        if position > 0 && (len - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
