//! Parsing rules for a single field

use freqdist_core::{Error, InvalidValueReason, Result};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Characters that give a field its range or open-ended meaning
///
/// The defaults read `"2-5"` as the range 2 to 5 and `"10+"` as "10 or more".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoercionRules {
    /// Separator between the two ends of a range
    pub range_separator: char,
    /// Suffix marking an open-ended lower bound
    pub open_ended_marker: char,
}

impl Default for CoercionRules {
    fn default() -> Self {
        Self {
            range_separator: '-',
            open_ended_marker: '+',
        }
    }
}

impl CoercionRules {
    /// Parse one field, reporting why it was rejected
    ///
    /// Rules, first match wins:
    /// 1. `"A-B"`: the mean of `A` and `B`
    /// 2. `"N+"`: `N` itself, as a lower-bound estimate
    /// 3. anything else: the whole trimmed text as a number
    ///
    /// Results that are NaN or infinite are rejected.
    pub fn try_coerce(&self, raw: &str) -> Result<f64> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(Error::invalid_value(raw, InvalidValueReason::Empty));
        }

        if let Some((low, high)) = self.split_range(text) {
            let (Some(low), Some(high)) = (parse_real(low), parse_real(high)) else {
                return Err(Error::invalid_value(raw, InvalidValueReason::MalformedRange));
            };
            return finite(raw, low / 2.0 + high / 2.0);
        }

        let body = text
            .strip_suffix(self.open_ended_marker)
            .map_or(text, str::trim_end);
        match parse_real(body) {
            Some(value) => finite(raw, value),
            None => Err(Error::invalid_value(raw, InvalidValueReason::NotANumber)),
        }
    }

    /// Parse one field, mapping every failure to `None`
    pub fn coerce(&self, raw: &str) -> Option<f64> {
        match self.try_coerce(raw) {
            Ok(value) => Some(value),
            Err(err) => {
                trace!("rejected field: {err}");
                None
            }
        }
    }

    /// Locate a range separator that is neither a leading sign nor part of an
    /// exponent such as `1e-3`.
    fn split_range<'a>(&self, text: &'a str) -> Option<(&'a str, &'a str)> {
        let mut prev: Option<char> = None;
        for (index, c) in text.char_indices() {
            if c == self.range_separator {
                if let Some(p) = prev {
                    let is_sign = self.range_separator == '-' && matches!(p, 'e' | 'E');
                    if !is_sign {
                        let high = &text[index + c.len_utf8()..];
                        return Some((text[..index].trim(), high.trim()));
                    }
                }
            }
            if !c.is_whitespace() {
                prev = Some(c);
            }
        }
        None
    }
}

fn parse_real(text: &str) -> Option<f64> {
    text.parse::<f64>().ok()
}

fn finite(raw: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::invalid_value(raw, InvalidValueReason::NonFinite))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(raw: &str) -> InvalidValueReason {
        match CoercionRules::default().try_coerce(raw) {
            Err(Error::InvalidValue { reason, .. }) => reason,
            other => panic!("expected rejection for {raw:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_range_is_averaged() {
        let rules = CoercionRules::default();
        assert_eq!(rules.coerce("2-5"), Some(3.5));
        assert_eq!(rules.coerce(" 0 - 1 "), Some(0.5));
        assert_eq!(rules.coerce("1.5-2.5"), Some(2.0));
    }

    #[test]
    fn test_open_ended_keeps_prefix() {
        let rules = CoercionRules::default();
        assert_eq!(rules.coerce("10+"), Some(10.0));
        assert_eq!(rules.coerce("10 +"), Some(10.0));
        assert_eq!(rules.coerce("+5"), Some(5.0));
    }

    #[test]
    fn test_plain_numbers() {
        let rules = CoercionRules::default();
        assert_eq!(rules.coerce("7"), Some(7.0));
        assert_eq!(rules.coerce("  3.25\t"), Some(3.25));
        assert_eq!(rules.coerce("-3"), Some(-3.0));
        assert_eq!(rules.coerce("1e-3"), Some(0.001));
    }

    #[test]
    fn test_negative_range_ends() {
        let rules = CoercionRules::default();
        assert_eq!(rules.coerce("-4-2"), Some(-1.0));
        assert_eq!(rules.coerce("-4--2"), Some(-3.0));
    }

    #[test]
    fn test_rejection_reasons() {
        assert_eq!(reason(""), InvalidValueReason::Empty);
        assert_eq!(reason("   "), InvalidValueReason::Empty);
        assert_eq!(reason("abc"), InvalidValueReason::NotANumber);
        assert_eq!(reason("+"), InvalidValueReason::NotANumber);
        assert_eq!(reason("2-"), InvalidValueReason::MalformedRange);
        assert_eq!(reason("2-5-7"), InvalidValueReason::MalformedRange);
        assert_eq!(reason("two-five"), InvalidValueReason::MalformedRange);
        assert_eq!(reason("inf"), InvalidValueReason::NonFinite);
        assert_eq!(reason("NaN"), InvalidValueReason::NonFinite);
    }

    #[test]
    fn test_custom_separator() {
        let rules = CoercionRules {
            range_separator: '~',
            ..Default::default()
        };
        assert_eq!(rules.coerce("2~4"), Some(3.0));
        assert_eq!(rules.coerce("-2"), Some(-2.0));
        assert_eq!(rules.coerce("2-4"), None);
    }
}
