//! Decorator hooks producing prefix/suffix line fragments
//!
//! A decorator is a caller-supplied producer of a short text fragment,
//! evaluated per emission. It must return quickly and must not call back
//! into the logger that invokes it.

use chrono::Local;

/// A replaceable producer of a short line fragment.
pub type Decorator = Box<dyn Fn() -> String + Send>;

/// Decorator returning the empty string. The default prefix.
pub fn empty() -> Decorator {
    Box::new(String::new)
}

/// Decorator returning `", "` followed by the current local time as
/// `YYYY-MM-DD HH:MM.SS` (period before the seconds). The default suffix.
pub fn timestamp() -> Decorator {
    Box::new(|| format!(", {}", Local::now().format("%Y-%m-%d %H:%M.%S")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_decorator() {
        assert_eq!(empty()(), "");
    }

    #[test]
    fn test_timestamp_shape() {
        // ", YYYY-MM-DD HH:MM.SS"
        let text = timestamp()();
        let bytes = text.as_bytes();
        assert_eq!(text.len(), 21, "unexpected length for {:?}", text);
        assert!(text.starts_with(", "));
        assert_eq!(bytes[6], b'-');
        assert_eq!(bytes[9], b'-');
        assert_eq!(bytes[12], b' ');
        assert_eq!(bytes[15], b':');
        assert_eq!(bytes[18], b'.');
        assert!(text[2..]
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '-' | ' ' | ':' | '.')));
    }
}
