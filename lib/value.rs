use core::fmt;

const TRUE: &str = "t";

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Value(String);

impl Value {
    pub fn empty() -> Self {
        Value(String::new())
    }

    pub fn from_bool(value: bool) -> Self {
        if value {
            Value(TRUE.to_string())
        } else {
            Value::empty()
        }
    }

    /// Formats a number the way C's `%f` does.
    pub fn from_number(number: f64) -> Self {
        let text = match (number.is_nan(), number.is_infinite(), number.is_sign_negative()) {
            (true, _, true) => "-nan".to_string(),
            (true, _, false) => "nan".to_string(),
            (_, true, true) => "-inf".to_string(),
            (_, true, false) => "inf".to_string(),
            _ => format!("{:.6}", number),
        };
        Value(text)
    }

    pub fn is_truthy(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn to_number(&self) -> f64 {
        parse_leading_f64(&self.0).unwrap_or(0.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value(text)
    }
}

impl AsRef<str> for Value {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn is_c_space(char: char) -> bool {
    matches!(char, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// Parses the longest prefix of `text` that forms a float literal, after
/// skipping leading whitespace. Accepts an optional sign, then decimal or
/// `0x` hex digits with optional fraction and exponent, or `inf`/`nan`.
fn parse_leading_f64(text: &str) -> Option<f64> {
    let text = text.trim_start_matches(is_c_space);
    let bytes = text.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    for word in ["infinity", "inf", "nan"] {
        let candidate = &bytes[end..];
        if candidate.len() >= word.len()
            && candidate[..word.len()].eq_ignore_ascii_case(word.as_bytes())
        {
            return text[..end + word.len()].parse().ok();
        }
    }

    if let Some(number) = parse_hex(&bytes[end..]) {
        return Some(if bytes[0] == b'-' { -number } else { number });
    }

    let int_start = end;
    end = skip_digits(bytes, end);
    let mut mantissa_digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = skip_digits(bytes, end + 1);
        mantissa_digits += frac_end - (end + 1);
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }

    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = skip_digits(bytes, exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    text[..end].parse().ok()
}

// `0x1.8p3` style; `None` without at least one hex digit so "0x" reads as 0
fn parse_hex(bytes: &[u8]) -> Option<f64> {
    if !matches!(bytes, [b'0', b'x' | b'X', ..]) {
        return None;
    }

    let mut position = 2;
    let mut mantissa = 0.0;
    let mut scale: i32 = 0;
    let mut digits = 0;
    let mut fraction = false;
    while let Some(&byte) = bytes.get(position) {
        if byte == b'.' && !fraction {
            fraction = true;
        } else if let Some(digit) = (byte as char).to_digit(16) {
            mantissa = mantissa * 16.0 + f64::from(digit);
            digits += 1;
            if fraction {
                scale = scale.saturating_sub(4);
            }
        } else {
            break;
        }
        position += 1;
    }
    if digits == 0 {
        return None;
    }

    let mut exponent: i32 = 0;
    if matches!(bytes.get(position), Some(b'p' | b'P')) {
        let mut exp = position + 1;
        let negative = bytes.get(exp) == Some(&b'-');
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = skip_digits(bytes, exp);
        for &byte in &bytes[exp..exp_end] {
            exponent = exponent
                .saturating_mul(10)
                .saturating_add(i32::from(byte - b'0'));
        }
        if negative {
            exponent = -exponent;
        }
    }

    Some(mantissa * 2f64.powi(exponent.saturating_add(scale)))
}

fn skip_digits(bytes: &[u8], mut position: usize) -> usize {
    while bytes.get(position).is_some_and(u8::is_ascii_digit) {
        position += 1;
    }
    position
}
