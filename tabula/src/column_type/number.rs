use std::cmp::Ordering;

use super::{ColumnType, TypeKind, compare_nullable};
use crate::value::CellValue;

/// Numeric column with grouped, fixed-precision display.
///
/// The default shows integers with a `,` thousands separator and no
/// fraction digits, e.g. `1234567.8` → `1,234,568`.
#[derive(Debug, Clone)]
pub struct NumberType {
    /// Whether values below zero are accepted.
    pub negative: bool,
    /// Maximum number of digits after the decimal separator.
    pub fraction_digits: usize,
    /// Pad the fraction with zeros up to `fraction_digits` instead of trimming.
    pub fixed_fraction: bool,
    pub group_separator: Option<char>,
    pub decimal_separator: char,
    pub default_value: CellValue,
}

impl Default for NumberType {
    fn default() -> Self {
        Self {
            negative: true,
            fraction_digits: 0,
            fixed_fraction: false,
            group_separator: Some(','),
            decimal_separator: '.',
            default_value: CellValue::Int(0),
        }
    }
}

impl NumberType {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject values below zero.
    pub fn non_negative(mut self) -> Self {
        self.negative = false;
        self
    }

    pub fn fraction_digits(mut self, digits: usize) -> Self {
        self.fraction_digits = digits;
        self
    }

    /// Always show `fraction_digits` digits, padding with zeros.
    pub fn fixed(mut self) -> Self {
        self.fixed_fraction = true;
        self
    }

    pub fn group_separator(mut self, separator: Option<char>) -> Self {
        self.group_separator = separator;
        self
    }

    pub fn decimal_separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }

    pub fn with_default(mut self, value: impl Into<CellValue>) -> Self {
        self.default_value = value.into();
        self
    }

    /// Numeric view of a value, accepting numbers and numeric text.
    fn numeric(&self, value: &CellValue) -> Option<Number> {
        match value {
            CellValue::Int(v) => Some(Number::Int(*v)),
            CellValue::Float(v) => Some(Number::Float(*v)),
            CellValue::Text(text) => match self.parse(text)? {
                CellValue::Int(v) => Some(Number::Int(v)),
                CellValue::Float(v) => Some(Number::Float(v)),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn format_number(&self, number: f64) -> String {
        if !number.is_finite() {
            return number.to_string();
        }

        let rounded = format!("{:.*}", self.fraction_digits, number.abs());
        let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
        let frac_part = if self.fixed_fraction {
            frac_part
        } else {
            frac_part.trim_end_matches('0')
        };
        let negative = number < 0.0 && rounded.bytes().any(|b| b.is_ascii_digit() && b != b'0');

        self.assemble(negative, int_part, frac_part)
    }

    /// Format an integer exactly, without going through `f64`.
    pub fn format_integer(&self, number: i64) -> String {
        let digits = number.unsigned_abs().to_string();
        let zeros = if self.fixed_fraction {
            "0".repeat(self.fraction_digits)
        } else {
            String::new()
        };

        self.assemble(number < 0, &digits, &zeros)
    }

    fn assemble(&self, negative: bool, int_part: &str, frac_part: &str) -> String {
        let mut out = String::with_capacity(int_part.len() * 2 + frac_part.len());
        if negative {
            out.push('-');
        }

        let len = int_part.len();
        for (i, digit) in int_part.chars().enumerate() {
            if let Some(separator) = self.group_separator
                && i > 0
                && (len - i) % 3 == 0
            {
                out.push(separator);
            }
            out.push(digit);
        }

        if !frac_part.is_empty() {
            out.push(self.decimal_separator);
            out.push_str(frac_part);
        }

        out
    }
}

#[derive(Debug, Clone, Copy)]
enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    fn is_negative(self) -> bool {
        match self {
            Number::Int(v) => v < 0,
            Number::Float(v) => v < 0.0,
        }
    }

    fn compare(self, other: Number) -> Ordering {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a.cmp(&b),
            (a, b) => a.as_f64().total_cmp(&b.as_f64()),
        }
    }

    fn as_f64(self) -> f64 {
        match self {
            Number::Int(v) => v as f64,
            Number::Float(v) => v,
        }
    }
}

impl ColumnType for NumberType {
    fn kind(&self) -> TypeKind {
        TypeKind::Number
    }

    fn default_value(&self) -> CellValue {
        self.default_value.clone()
    }

    fn apply_format(&self, value: &CellValue) -> String {
        match self.numeric(value) {
            Some(Number::Int(number)) => self.format_integer(number),
            Some(Number::Float(number)) => self.format_number(number),
            None => value.to_string(),
        }
    }

    fn is_valid(&self, value: &CellValue) -> bool {
        match self.numeric(value) {
            Some(number) => self.negative || !number.is_negative(),
            None => false,
        }
    }

    fn compare(&self, a: &CellValue, b: &CellValue) -> Ordering {
        compare_nullable(self.numeric(a), self.numeric(b), Number::compare)
    }

    fn parse(&self, input: &str) -> Option<CellValue> {
        let mut normalized = String::with_capacity(input.len());
        let mut has_fraction = false;
        for c in input.trim().chars() {
            if Some(c) == self.group_separator {
                continue;
            }
            if c == self.decimal_separator {
                has_fraction = true;
                normalized.push('.');
            } else {
                normalized.push(c);
            }
        }

        if has_fraction {
            normalized.parse::<f64>().ok().map(CellValue::Float)
        } else {
            normalized.parse::<i64>().ok().map(CellValue::Int)
        }
    }
}
