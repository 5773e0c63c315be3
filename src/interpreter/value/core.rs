use crate::{ast::LiteralValue, util::num::i64_to_f64};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// assignments and conditions. Values are plain data: assigning a list to a
/// second variable copies it.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Float(f64),
    /// A string of characters.
    Str(String),
    /// A boolean value, written `aye` or `nay`.
    Bool(bool),
    /// A list of `Value` elements.
    List(Vec<Self>),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(v)
    }
}

impl Value {
    /// Interprets a line of user input.
    ///
    /// The text is tried as an integer first, then as a decimal number.
    /// Anything else is kept as the raw string.
    ///
    /// # Example
    /// ```
    /// use piratelang::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from_input("42"), Value::Integer(42));
    /// assert_eq!(Value::from_input("2.5"), Value::Float(2.5));
    /// assert_eq!(Value::from_input("Davy Jones"), Value::Str("Davy Jones".to_string()));
    /// ```
    #[must_use]
    pub fn from_input(text: &str) -> Self {
        Self::parse_number(text).unwrap_or_else(|| Self::Str(text.to_string()))
    }

    /// Parses text as an integer or, failing that, as a decimal number.
    ///
    /// Surrounding whitespace is ignored. Only plain decimal notation with an
    /// optional sign counts as a number; `NaN`, `inf` and exponents such as
    /// `1e5` stay text.
    ///
    /// # Example
    /// ```
    /// use piratelang::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::parse_number(" -12 "), Some(Value::Integer(-12)));
    /// assert_eq!(Value::parse_number("+0.5"), Some(Value::Float(0.5)));
    /// assert_eq!(Value::parse_number("NaN"), None);
    /// assert_eq!(Value::parse_number("1e5"), None);
    /// assert_eq!(Value::parse_number("3."), None);
    /// ```
    #[must_use]
    pub fn parse_number(text: &str) -> Option<Self> {
        let trimmed = text.trim();

        if !is_decimal_text(trimmed) {
            return None;
        }
        if let Ok(n) = trimmed.parse::<i64>() {
            return Some(Self::Integer(n));
        }
        trimmed.parse::<f64>().ok().map(Self::Float)
    }

    /// Converts a numeric value to `f64`.
    ///
    /// Integers beyond 2^53 are rounded to the nearest `f64`.
    ///
    /// # Returns
    /// - `Some(f64)`: If the value is a float or an integer.
    /// - `None`: If the value is not numeric.
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(x) => Some(*x),
            Self::Integer(n) => Some(i64_to_f64(*n)),
            _ => None,
        }
    }

    /// Returns `true` if the value is an integer or a float.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(..) | Self::Float(..))
    }

    /// Decides whether the value counts as true in a condition.
    ///
    /// `nay`, zero, the empty string and the empty list are false; everything
    /// else is true.
    ///
    /// # Example
    /// ```
    /// use piratelang::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(3).is_truthy());
    /// assert!(!Value::Str(String::new()).is_truthy());
    /// assert!(!Value::List(vec![]).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Integer(n) => *n != 0,
            Self::Float(x) => *x != 0.0,
            Self::Str(s) => !s.is_empty(),
            Self::Bool(b) => *b,
            Self::List(items) => !items.is_empty(),
        }
    }

    /// The name of the value's kind, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::Bool(_) => "boolean",
            Self::List(_) => "list",
        }
    }

    /// Renders the value the way it appears inside a list: strings are
    /// quoted, everything else matches `Display`.
    fn write_nested(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Str(s) => write!(f, "\"{s}\""),
            _ => write!(f, "{self}"),
        }
    }
}

/// Matches `[+-]?[0-9]+(\.[0-9]+)?`, the only number shapes input may take.
fn is_decimal_text(text: &str) -> bool {
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);

    match unsigned.split_once('.') {
        Some((whole, fraction)) => all_digits(whole) && all_digits(fraction),
        None => all_digits(unsigned),
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            // Whole floats keep a trailing `.0` so `6 / 3` prints `2.0`.
            Self::Float(x) if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e16 => {
                write!(f, "{x:.1}")
            },
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(true) => write!(f, "aye"),
            Self::Bool(false) => write!(f, "nay"),
            Self::List(items) => {
                write!(f, "[")?;

                for (index, value) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    value.write_nested(f)?;
                }

                write!(f, "]")
            },
        }
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Integer(n) => (*n).into(),
            LiteralValue::Float(x) => (*x).into(),
            LiteralValue::Str(s) => s.as_str().into(),
            LiteralValue::Bool(b) => (*b).into(),
        }
    }
}
