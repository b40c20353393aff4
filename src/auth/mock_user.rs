// Mock user issued by the login endpoint
// There is no user store: every login gets the same profile and the RUT
// parity decides the role.

use chrono::Duration;
use serde_json::Value;

use super::jwt::Claims;
use super::role::Role;

pub const MOCK_FIRST_NAME: &str = "Mario";
pub const MOCK_LAST_NAME: &str = "Cares";

/// A RUT as sent by the client, plus its leading integer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rut {
    raw: String,
    number: i64,
}

impl Rut {
    /// Parses the `rut` field of a login request
    ///
    /// Accepts a string or a number. Empty strings, zero and anything
    /// without a leading integer are rejected. Strings are read up to the
    /// first non-digit, so `"12345678-9"` yields `12345678`.
    pub fn parse(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) if !s.is_empty() => {
                let number = leading_integer(s)?;
                Some(Self {
                    raw: s.clone(),
                    number,
                })
            }
            Value::Number(n) => {
                let number = match n.as_i64() {
                    Some(i) => i,
                    None => {
                        let f = n.as_f64()?.trunc();
                        if !f.is_finite() || f.abs() >= i64::MAX as f64 {
                            return None;
                        }
                        f as i64
                    }
                };
                if n.as_f64() == Some(0.0) {
                    return None;
                }
                Some(Self {
                    raw: n.to_string(),
                    number,
                })
            }
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn number(&self) -> i64 {
        self.number
    }

    pub fn role(&self) -> Role {
        Role::from_rut(self.number)
    }
}

/// Claims for the mock user identified by `rut`
pub fn mock_claims(rut: &Rut, ttl: Duration) -> Claims {
    Claims::new(rut.as_str(), MOCK_FIRST_NAME, MOCK_LAST_NAME, rut.role(), ttl)
}

/// Reads an optionally signed integer prefix after leading whitespace
fn leading_integer(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    // Keep the parity of oversized values by reading only the trailing 18 digits
    let digits = &rest[..digits_len];
    let tail = &digits[digits_len.saturating_sub(18)..];
    let value: i64 = tail.parse().ok()?;

    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_plain_numeric_string() {
        let rut = Rut::parse(&json!("12345678")).unwrap();
        assert_eq!(rut.number(), 12345678);
        assert_eq!(rut.as_str(), "12345678");
        assert_eq!(rut.role(), Role::SystemUser);
    }

    #[test]
    fn parses_rut_with_check_digit() {
        let rut = Rut::parse(&json!("11111111-K")).unwrap();
        assert_eq!(rut.number(), 11111111);
        assert_eq!(rut.as_str(), "11111111-K");
        assert_eq!(rut.role(), Role::SystemClient);
    }

    #[test]
    fn parses_json_number() {
        let rut = Rut::parse(&json!(24)).unwrap();
        assert_eq!(rut.number(), 24);
        assert_eq!(rut.as_str(), "24");
    }

    #[test]
    fn truncates_fractional_number() {
        let rut = Rut::parse(&json!(13.9)).unwrap();
        assert_eq!(rut.number(), 13);
    }

    #[test]
    fn accepts_leading_whitespace_and_sign() {
        assert_eq!(Rut::parse(&json!("  42abc")).unwrap().number(), 42);
        assert_eq!(Rut::parse(&json!("-7")).unwrap().number(), -7);
    }

    #[test]
    fn string_zero_is_accepted() {
        let rut = Rut::parse(&json!("0")).unwrap();
        assert_eq!(rut.role(), Role::SystemUser);
    }

    #[test]
    fn rejects_falsy_values() {
        assert!(Rut::parse(&json!("")).is_none());
        assert!(Rut::parse(&json!(0)).is_none());
        assert!(Rut::parse(&Value::Null).is_none());
        assert!(Rut::parse(&json!(false)).is_none());
    }

    #[test]
    fn rejects_non_numeric_values() {
        assert!(Rut::parse(&json!("abc")).is_none());
        assert!(Rut::parse(&json!("-")).is_none());
        assert!(Rut::parse(&json!(true)).is_none());
        assert!(Rut::parse(&json!(["1"])).is_none());
    }

    #[test]
    fn oversized_rut_keeps_parity() {
        let rut = Rut::parse(&json!("123456789012345678901")).unwrap();
        assert_eq!(rut.role(), Role::SystemClient);
    }

    #[test]
    fn mock_claims_carry_profile() {
        let rut = Rut::parse(&json!("20")).unwrap();
        let claims = mock_claims(&rut, Duration::hours(10));

        assert_eq!(claims.rut, "20");
        assert_eq!(claims.nombre, "Mario");
        assert_eq!(claims.apellido, "Cares");
        assert!(claims.is_system_user());
    }
}
