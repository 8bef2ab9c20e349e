//! Small shared helpers

use chrono::Utc;

/// Current wall-clock time in milliseconds since the Unix epoch
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Strip everything but ASCII digits from a phone number
///
/// Used for phone lookups so `(555) 123-4567` and `5551234567` compare
/// equal.
pub fn digits_only(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_only_strips_separators() {
        assert_eq!(digits_only("(555) 123-4567"), "5551234567");
        assert_eq!(digits_only("+1 555.123.4567"), "15551234567");
        assert_eq!(digits_only(""), "");
    }
}
