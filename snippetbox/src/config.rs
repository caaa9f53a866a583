//! Central configuration for the snippetbox crate

use std::sync::LazyLock;

/// Default bcrypt work factor for stored password hashes
pub const DEFAULT_PASSWORD_HASH_COST: u32 = 12;

/// bcrypt work factor applied when hashing new passwords
///
/// Read from `PASSWORD_HASH_COST`; invalid values fall back to the default and
/// values outside bcrypt's accepted range are clamped into it.
pub static PASSWORD_HASH_COST: LazyLock<u32> =
    LazyLock::new(|| parse_hash_cost(std::env::var("PASSWORD_HASH_COST").ok().as_deref()));

fn parse_hash_cost(value: Option<&str>) -> u32 {
    value
        .and_then(|s| s.trim().parse::<u32>().ok())
        .unwrap_or(DEFAULT_PASSWORD_HASH_COST)
        .clamp(4, 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_cost_default() {
        assert_eq!(parse_hash_cost(None), 12);
    }

    #[test]
    fn test_hash_cost_custom() {
        assert_eq!(parse_hash_cost(Some("10")), 10);
        assert_eq!(parse_hash_cost(Some(" 4 ")), 4);
    }

    #[test]
    fn test_hash_cost_invalid_falls_back() {
        assert_eq!(parse_hash_cost(Some("twelve")), 12);
        assert_eq!(parse_hash_cost(Some("")), 12);
    }

    #[test]
    fn test_hash_cost_is_clamped() {
        assert_eq!(parse_hash_cost(Some("1")), 4);
        assert_eq!(parse_hash_cost(Some("99")), 31);
    }
}
