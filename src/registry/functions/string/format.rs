//! printf-style directive formatting used by `sprintf`

use thiserror::Error;

use crate::model::Value;
use crate::model::value::parse_numeric;

/// Errors raised while applying a format string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A directive refers to a value that was not supplied
    #[error("{required} values are required by the format string, {supplied} supplied")]
    TooFewArguments {
        /// Values needed
        required: usize,
        /// Values supplied
        supplied: usize,
    },

    /// Argument numbers start at 1
    #[error("argument number must be greater than zero")]
    ZeroArgumentNumber,

    /// Unsupported conversion character
    #[error("unknown format specifier '{0}'")]
    UnknownSpecifier(char),

    /// The format string ends inside a directive
    #[error("missing format specifier at end of string")]
    Unterminated,

    /// An array was passed where a scalar is needed
    #[error("value {0} cannot be formatted")]
    NotScalar(usize),

    /// Width exceeds [`MAX_FIELD_SIZE`]
    #[error("width {0} exceeds the maximum of 65535")]
    WidthOutOfRange(usize),

    /// Precision exceeds [`MAX_FIELD_SIZE`]
    #[error("precision {0} exceeds the maximum of 65535")]
    PrecisionOutOfRange(usize),
}

/// Largest width or precision a directive may request
pub const MAX_FIELD_SIZE: usize = u16::MAX as usize;

#[derive(Debug, Default)]
struct Directive {
    argnum: Option<usize>,
    left_align: bool,
    plus_sign: bool,
    pad: Option<char>,
    width: usize,
    precision: Option<usize>,
    conversion: char,
}

/// Substitute `values` into the directives of `template`
///
/// Supports flags `-`, `+`, `0`, space and `'c` (custom padding), a width, a
/// `.precision`, explicit argument numbers (`%2$s`) and the conversions
/// `b c d e E f F o s u x X`. `%%` yields a literal percent sign.
pub fn format_printf(template: &str, values: &[Value]) -> Result<String, FormatError> {
    let chars: Vec<char> = template.chars().collect();
    let mut out = String::with_capacity(template.len());
    let mut next_arg = 0usize;
    let mut i = 0usize;

    while i < chars.len() {
        let c = chars[i];
        i += 1;
        if c != '%' {
            out.push(c);
            continue;
        }
        if chars.get(i) == Some(&'%') {
            out.push('%');
            i += 1;
            continue;
        }

        let directive = parse_directive(&chars, &mut i)?;
        let index = match directive.argnum {
            Some(0) => return Err(FormatError::ZeroArgumentNumber),
            Some(n) => n - 1,
            None => {
                next_arg += 1;
                next_arg - 1
            }
        };
        let value = values.get(index).ok_or(FormatError::TooFewArguments {
            required: index + 1,
            supplied: values.len(),
        })?;
        out.push_str(&render(&directive, value, index)?);
    }

    Ok(out)
}

fn parse_directive(chars: &[char], i: &mut usize) -> Result<Directive, FormatError> {
    let mut directive = Directive::default();

    // %n$ argument number
    let digits_end = scan_digits(chars, *i);
    if digits_end > *i && chars.get(digits_end) == Some(&'$') {
        directive.argnum = Some(parse_usize(&chars[*i..digits_end]));
        *i = digits_end + 1;
    }

    loop {
        match chars.get(*i) {
            Some('-') => directive.left_align = true,
            Some('+') => directive.plus_sign = true,
            Some('0') => directive.pad = Some('0'),
            Some(' ') => directive.pad = Some(' '),
            Some('\'') => {
                *i += 1;
                directive.pad = Some(*chars.get(*i).ok_or(FormatError::Unterminated)?);
            }
            _ => break,
        }
        *i += 1;
    }

    let width_end = scan_digits(chars, *i);
    if width_end > *i {
        let width = parse_usize(&chars[*i..width_end]);
        if width > MAX_FIELD_SIZE {
            return Err(FormatError::WidthOutOfRange(width));
        }
        directive.width = width;
        *i = width_end;
    }

    if chars.get(*i) == Some(&'.') {
        let precision_end = scan_digits(chars, *i + 1);
        let precision = parse_usize(&chars[*i + 1..precision_end]);
        if precision > MAX_FIELD_SIZE {
            return Err(FormatError::PrecisionOutOfRange(precision));
        }
        directive.precision = Some(precision);
        *i = precision_end;
    }

    directive.conversion = *chars.get(*i).ok_or(FormatError::Unterminated)?;
    *i += 1;
    Ok(directive)
}

fn scan_digits(chars: &[char], start: usize) -> usize {
    let mut end = start;
    while chars.get(end).is_some_and(char::is_ascii_digit) {
        end += 1;
    }
    end
}

fn parse_usize(digits: &[char]) -> usize {
    digits.iter().fold(0usize, |acc, d| {
        acc.saturating_mul(10)
            .saturating_add(d.to_digit(10).unwrap_or(0) as usize)
    })
}

fn render(directive: &Directive, value: &Value, index: usize) -> Result<String, FormatError> {
    if value.is_array() {
        return Err(FormatError::NotScalar(index + 1));
    }

    let (body, numeric) = match directive.conversion {
        's' => {
            let text = value.to_text().unwrap_or_default();
            let text = match directive.precision {
                Some(p) => text.chars().take(p).collect(),
                None => text,
            };
            (text, false)
        }
        'd' => {
            let n = to_integer(value);
            let sign = if directive.plus_sign && n >= 0 { "+" } else { "" };
            (format!("{sign}{n}"), true)
        }
        'u' => (format!("{}", to_integer(value) as u64), true),
        'f' | 'F' => {
            let f = to_float(value);
            let precision = directive.precision.unwrap_or(6);
            let sign = if directive.plus_sign && f >= 0.0 { "+" } else { "" };
            (format!("{sign}{f:.precision$}"), true)
        }
        'e' | 'E' => {
            let f = to_float(value);
            let precision = directive.precision.unwrap_or(6);
            let sign = if directive.plus_sign && f >= 0.0 { "+" } else { "" };
            let formatted = exponent_notation(f, precision);
            let formatted = if directive.conversion == 'E' {
                formatted.to_uppercase()
            } else {
                formatted
            };
            (format!("{sign}{formatted}"), true)
        }
        'x' => (format!("{:x}", to_integer(value) as u64), true),
        'X' => (format!("{:X}", to_integer(value) as u64), true),
        'o' => (format!("{:o}", to_integer(value) as u64), true),
        'b' => (format!("{:b}", to_integer(value) as u64), true),
        'c' => {
            let code = u32::try_from(to_integer(value)).unwrap_or(0);
            (char::from_u32(code).map(String::from).unwrap_or_default(), false)
        }
        other => return Err(FormatError::UnknownSpecifier(other)),
    };

    Ok(pad(directive, body, numeric))
}

/// Exponent with an explicit sign and no zero padding, e.g. `1.5e+3`
fn exponent_notation(f: f64, precision: usize) -> String {
    let formatted = format!("{f:.precision$e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}

fn pad(directive: &Directive, body: String, numeric: bool) -> String {
    let len = body.chars().count();
    if len >= directive.width {
        return body;
    }
    let pad_char = directive.pad.unwrap_or(' ');
    let fill: String = std::iter::repeat_n(pad_char, directive.width - len).collect();

    if directive.left_align {
        return format!("{body}{fill}");
    }
    if numeric && pad_char == '0' {
        if let Some(rest) = body.strip_prefix(['-', '+']) {
            let sign = &body[..1];
            return format!("{sign}{fill}{rest}");
        }
    }
    format!("{fill}{body}")
}

fn to_integer(value: &Value) -> i64 {
    match value {
        Value::Integer(i) => *i,
        Value::Float(f) => *f as i64,
        Value::Boolean(b) => i64::from(*b),
        Value::String(s) => leading_number(s) as i64,
        _ => 0,
    }
}

fn to_float(value: &Value) -> f64 {
    match value {
        Value::Integer(i) => *i as f64,
        Value::Float(f) => *f,
        Value::Boolean(b) => f64::from(u8::from(*b)),
        Value::String(s) => leading_number(s),
        _ => 0.0,
    }
}

/// Numeric prefix of a string ("12abc" -> 12), 0 when there is none
fn leading_number(s: &str) -> f64 {
    let trimmed = s.trim_start();
    if let Some(n) = parse_numeric(trimmed) {
        return n;
    }
    let mut end = 0;
    for (idx, ch) in trimmed.char_indices() {
        let allowed = ch.is_ascii_digit() || ch == '.' || (idx == 0 && (ch == '-' || ch == '+'));
        if !allowed {
            break;
        }
        end = idx + ch.len_utf8();
    }
    trimmed[..end].parse::<f64>().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(template: &str, values: &[&str]) -> Result<String, FormatError> {
        let values: Vec<Value> = values.iter().map(|v| Value::from(*v)).collect();
        format_printf(template, &values)
    }

    #[test]
    fn test_positional_substitution() {
        assert_eq!(fmt("%s is %d", &["x", "5"]).unwrap(), "x is 5");
        assert_eq!(fmt("100%%", &[]).unwrap(), "100%");
        assert_eq!(fmt("%2$s %1$s", &["a", "b"]).unwrap(), "b a");
    }

    #[test]
    fn test_width_precision_and_padding() {
        assert_eq!(fmt("%05d", &["42"]).unwrap(), "00042");
        assert_eq!(fmt("%05d", &["-42"]).unwrap(), "-0042");
        assert_eq!(fmt("%-5s|", &["ab"]).unwrap(), "ab   |");
        assert_eq!(fmt("%'*6s", &["ab"]).unwrap(), "****ab");
        assert_eq!(fmt("%.2f", &["3.14159"]).unwrap(), "3.14");
        assert_eq!(fmt("%.3s", &["abcdef"]).unwrap(), "abc");
        assert_eq!(fmt("%+d", &["7"]).unwrap(), "+7");
    }

    #[test]
    fn test_integer_conversions() {
        assert_eq!(fmt("%x %X %o %b", &["255", "255", "8", "5"]).unwrap(), "ff FF 10 101");
        assert_eq!(fmt("%c", &["65"]).unwrap(), "A");
        assert_eq!(fmt("%d", &["12abc"]).unwrap(), "12");
        assert_eq!(fmt("%d", &["abc"]).unwrap(), "0");
    }

    #[test]
    fn test_exponent() {
        assert_eq!(fmt("%.2e", &["1500"]).unwrap(), "1.50e+3");
        assert_eq!(fmt("%.1E", &["0.05"]).unwrap(), "5.0E-2");
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            fmt("%s %s", &["a"]),
            Err(FormatError::TooFewArguments {
                required: 2,
                supplied: 1
            })
        );
        assert_eq!(fmt("%y", &["a"]), Err(FormatError::UnknownSpecifier('y')));
        assert_eq!(fmt("abc %", &[]), Err(FormatError::Unterminated));
        assert_eq!(fmt("%0$s", &["a"]), Err(FormatError::ZeroArgumentNumber));
    }

    #[test]
    fn test_oversized_width_and_precision() {
        assert_eq!(
            fmt("%.70000f", &["1"]),
            Err(FormatError::PrecisionOutOfRange(70000))
        );
        assert_eq!(
            fmt("%.70000e", &["1"]),
            Err(FormatError::PrecisionOutOfRange(70000))
        );
        assert_eq!(
            fmt("%99999999999999999999s", &["a"]),
            Err(FormatError::WidthOutOfRange(usize::MAX))
        );
        assert_eq!(fmt("%70000d", &["1"]), Err(FormatError::WidthOutOfRange(70000)));

        let widest = fmt("%65535s", &["a"]).unwrap();
        assert_eq!(widest.chars().count(), MAX_FIELD_SIZE);
    }
}
