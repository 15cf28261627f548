//! Minimal decimal formatting for coordinates and lengths.
//!
//! Every number the tidier emits goes through [`Precision`], so the whole
//! document ends up with one uniform representation.

/// Decimal precision for emitted numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// No fixed-precision formatting; numeric values are rendered in their
    /// default shortest form.
    Raw,
    /// Round to this many decimal places, then trim non-significant zeros.
    Places(u8),
}

impl Precision {
    /// Build from a CLI-style integer: negative disables formatting.
    pub fn from_arg(places: i32) -> Self {
        if places < 0 {
            Precision::Raw
        } else {
            Precision::Places(places.min(u8::MAX as i32) as u8)
        }
    }

    /// Format a textual value. Input that does not parse as a float is
    /// returned unchanged; formatting is best-effort, not validating.
    pub fn format(&self, value: &str) -> String {
        match value.trim().parse::<f64>() {
            Ok(n) => self.format_f64(n),
            Err(_) => value.to_string(),
        }
    }

    /// Format a float with at most the configured number of decimal places
    /// and no non-significant trailing zeros or dangling decimal point.
    pub fn format_f64(&self, n: f64) -> String {
        match *self {
            Precision::Raw => {
                let mut buf = ryu::Buffer::new();
                buf.format(n).to_string()
            }
            Precision::Places(0) => format!("{}", n.round() as i64),
            Precision::Places(places) => {
                let mut s = format!("{:.prec$}", n, prec = places as usize);
                if s.contains('.') {
                    s.truncate(s.trim_end_matches('0').len());
                    s.truncate(s.trim_end_matches('.').len());
                }
                if s == "-0" {
                    s.truncate(0);
                    s.push('0');
                }
                s
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_places() {
        let p = Precision::Places(1);
        assert_eq!(p.format_f64(3.14159), "3.1");
        assert_eq!(p.format_f64(2.55), "2.5"); // 2.55 is 2.5499... in binary
        assert_eq!(p.format_f64(-1.25), "-1.2");
    }

    #[test]
    fn test_idempotent_on_minimal_input() {
        let p = Precision::Places(1);
        assert_eq!(p.format("3.1"), "3.1");
        assert_eq!(p.format(&p.format("3.14159")), "3.1");
    }

    #[test]
    fn test_trailing_zero_stripping() {
        let p = Precision::Places(3);
        assert_eq!(p.format("2.500"), "2.5");
        assert_eq!(p.format("2.000"), "2");
        assert_eq!(p.format_f64(10.0), "10");
    }

    #[test]
    fn test_zero_places_rounds_to_integer() {
        let p = Precision::Places(0);
        assert_eq!(p.format("2.0"), "2");
        assert_eq!(p.format_f64(2.7), "3");
        assert_eq!(p.format_f64(-2.7), "-3");
    }

    #[test]
    fn test_negative_zero_normalized() {
        assert_eq!(Precision::Places(1).format_f64(-0.04), "0");
    }

    #[test]
    fn test_non_numeric_passes_through() {
        let p = Precision::Places(2);
        assert_eq!(p.format("M10"), "M10");
        assert_eq!(p.format("none"), "none");
        assert_eq!(p.format(""), "");
    }

    #[test]
    fn test_raw_sentinel() {
        assert_eq!(Precision::from_arg(-1), Precision::Raw);
        assert_eq!(Precision::from_arg(2), Precision::Places(2));
        assert_eq!(Precision::Raw.format_f64(2.5), "2.5");
        assert_eq!(Precision::Raw.format("abc"), "abc");
    }
}
