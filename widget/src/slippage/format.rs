//! Slippage string normalization.

/// Upper clamp applied on commit; slippage is a percentage.
pub const MAX_SLIPPAGE: f64 = 100.0;

/// Decimal places kept on commit.
const PRECISION: f64 = 10_000.0;

/// Normalize a raw slippage string against a fallback.
///
/// - Empty, non-numeric or negative input returns `fallback` verbatim.
/// - While `editing` is true, parseable input is returned unchanged so that
///   partial entries like `"0."` survive the keystroke echo.
/// - On commit (`editing` false) the value is clamped to `[0, MAX_SLIPPAGE]`,
///   rounded to four decimal places and re-rendered without trailing zeros or
///   a dangling separator (`"1."` becomes `"1"`, `"0.30"` becomes `"0.3"`).
///
/// Committing an already-committed value is a no-op: the function is
/// idempotent for `editing = false`.
pub fn format_slippage(raw: &str, fallback: &str, editing: bool) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return fallback.to_string();
    }

    let parsed: f64 = match trimmed.parse() {
        Ok(value) => value,
        Err(_) => return fallback.to_string(),
    };
    if !parsed.is_finite() || parsed < 0.0 {
        return fallback.to_string();
    }

    if editing {
        return raw.to_string();
    }

    let clamped = parsed.min(MAX_SLIPPAGE);
    let rounded = (clamped * PRECISION).round() / PRECISION;
    format!("{rounded}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT: &str = "0.5";

    #[test]
    fn test_empty_input_falls_back_to_default() {
        assert_eq!(format_slippage("", DEFAULT, false), DEFAULT);
        assert_eq!(format_slippage("   ", DEFAULT, false), DEFAULT);
        assert_eq!(format_slippage("", DEFAULT, true), DEFAULT);
    }

    #[test]
    fn test_non_numeric_input_falls_back_to_default() {
        assert_eq!(format_slippage("abc", DEFAULT, false), DEFAULT);
        assert_eq!(format_slippage("1,5", DEFAULT, false), DEFAULT);
        assert_eq!(format_slippage("abc", DEFAULT, true), DEFAULT);
    }

    #[test]
    fn test_negative_input_is_rejected() {
        assert_eq!(format_slippage("-1", DEFAULT, false), DEFAULT);
        assert_eq!(format_slippage("-0.3", DEFAULT, true), DEFAULT);
    }

    #[test]
    fn test_non_finite_input_is_rejected() {
        assert_eq!(format_slippage("inf", DEFAULT, false), DEFAULT);
        assert_eq!(format_slippage("NaN", DEFAULT, false), DEFAULT);
    }

    #[test]
    fn test_editing_preserves_partial_input() {
        assert_eq!(format_slippage("0.", DEFAULT, true), "0.");
        assert_eq!(format_slippage("2.50", DEFAULT, true), "2.50");
    }

    #[test]
    fn test_commit_canonicalizes() {
        assert_eq!(format_slippage("0.", DEFAULT, false), "0");
        assert_eq!(format_slippage("1.", DEFAULT, false), "1");
        assert_eq!(format_slippage("0.30", DEFAULT, false), "0.3");
        assert_eq!(format_slippage("2.5", DEFAULT, false), "2.5");
        assert_eq!(format_slippage(" 2.5 ", DEFAULT, false), "2.5");
    }

    #[test]
    fn test_commit_clamps_to_maximum() {
        assert_eq!(format_slippage("150", DEFAULT, false), "100");
        assert_eq!(format_slippage("100.0001", DEFAULT, false), "100");
    }

    #[test]
    fn test_commit_rounds_excess_precision() {
        assert_eq!(format_slippage("0.123456", DEFAULT, false), "0.1235");
    }

    #[test]
    fn test_commit_output_is_non_negative_number_or_default() {
        for raw in ["", "x", "-3", "0.", "7", "101", "1e2", "0.0001"] {
            let committed = format_slippage(raw, DEFAULT, false);
            if committed != DEFAULT {
                let parsed: f64 = committed.parse().expect("committed value must parse");
                assert!(parsed >= 0.0);
            }
        }
    }

    #[test]
    fn test_commit_is_idempotent() {
        for raw in ["0.", "2.50", "150", "1e2", "0.123456", "abc", ""] {
            let once = format_slippage(raw, DEFAULT, false);
            let twice = format_slippage(&once, DEFAULT, false);
            assert_eq!(once, twice, "formatting {raw:?} twice diverged");
        }
    }
}
