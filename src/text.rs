//! Small string helpers

use crate::error::{CofferError, Result};

/// Parse the `index`-th `mark`-separated field of `name` as an integer.
///
/// Useful for names following one fixed pattern, e.g. `enemy_3`.
pub fn parse_index(name: &str, mark: char, index: usize) -> Result<i64> {
    let field = name.split(mark).nth(index).ok_or_else(|| {
        CofferError::InvalidIndex(format!("'{}' has no field {} split on '{}'", name, index, mark))
    })?;

    field
        .trim()
        .parse()
        .map_err(|_| CofferError::InvalidIndex(format!("'{}' is not an integer", field)))
}

/// Code point of every character in `s`
pub fn to_ascii(s: &str) -> Vec<u32> {
    s.chars().map(u32::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("enemy_3", '_', 1).unwrap(), 3);
        assert_eq!(parse_index("tile-12-40", '-', 2).unwrap(), 40);
        assert_eq!(parse_index("-5", ',', 0).unwrap(), -5);
    }

    #[test]
    fn test_parse_index_errors() {
        assert!(matches!(parse_index("enemy", '_', 1), Err(CofferError::InvalidIndex(_))));
        assert!(matches!(parse_index("enemy_x", '_', 1), Err(CofferError::InvalidIndex(_))));
    }

    #[test]
    fn test_to_ascii() {
        assert_eq!(to_ascii("123"), vec![49, 50, 51]);
        assert_eq!(to_ascii(""), Vec::<u32>::new());
    }
}
