//! Ordered, deduplicated symbol tables for candidate generation.

use crate::error::Error;

/// An ordered sequence of distinct candidate symbols. Immutable after
/// construction; every worker enumerates over the same table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    symbols: Vec<u8>,
}

impl Charset {
    /// Build a charset from a selector code: any combination of `n` (digits),
    /// `a` (lowercase letters) and `A` (uppercase letters). Symbol order is
    /// fixed as digits, uppercase, lowercase regardless of selector order.
    pub fn from_selector(selector: &str) -> Result<Self, Error> {
        let mut digits = false;
        let mut upper = false;
        let mut lower = false;

        for c in selector.chars() {
            match c {
                'n' => digits = true,
                'a' => lower = true,
                'A' => upper = true,
                _ => return Err(Error::UnknownCharsetSelector(selector.to_string())),
            }
        }
        if !(digits || upper || lower) {
            return Err(Error::UnknownCharsetSelector(selector.to_string()));
        }

        let mut symbols = Vec::new();
        if digits {
            symbols.extend(b'0'..=b'9');
        }
        if upper {
            symbols.extend(b'A'..=b'Z');
        }
        if lower {
            symbols.extend(b'a'..=b'z');
        }

        Ok(Self { symbols })
    }

    /// Build a charset from explicit symbols, dropping duplicates while
    /// preserving first-occurrence order.
    pub fn from_symbols(symbols: &[u8]) -> Result<Self, Error> {
        let mut deduped = Vec::with_capacity(symbols.len());
        for &s in symbols {
            if !deduped.contains(&s) {
                deduped.push(s);
            }
        }
        if deduped.is_empty() {
            return Err(Error::EmptyCharset);
        }
        Ok(Self { symbols: deduped })
    }

    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl std::fmt::Display for Charset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Selector-built charsets are always printable ASCII.
        write!(f, "{}", String::from_utf8_lossy(&self.symbols))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_numeric() {
        let cs = Charset::from_selector("n").unwrap();
        assert_eq!(cs.symbols(), b"0123456789");
        assert_eq!(cs.len(), 10);
    }

    #[test]
    fn test_selector_lowercase() {
        let cs = Charset::from_selector("a").unwrap();
        assert_eq!(cs.len(), 26);
        assert_eq!(cs.symbols()[0], b'a');
        assert_eq!(cs.symbols()[25], b'z');
    }

    #[test]
    fn test_selector_combination_order_is_canonical() {
        // Digits, then uppercase, then lowercase, regardless of selector order.
        let cs = Charset::from_selector("aAn").unwrap();
        assert_eq!(cs.len(), 62);
        assert_eq!(cs.symbols()[0], b'0');
        assert_eq!(cs.symbols()[10], b'A');
        assert_eq!(cs.symbols()[36], b'a');

        let same = Charset::from_selector("naA").unwrap();
        assert_eq!(cs, same);
    }

    #[test]
    fn test_selector_duplicates_ignored() {
        let cs = Charset::from_selector("nn").unwrap();
        assert_eq!(cs.len(), 10);
    }

    #[test]
    fn test_selector_rejects_unknown() {
        assert!(Charset::from_selector("x").is_err());
        assert!(Charset::from_selector("").is_err());
    }

    #[test]
    fn test_from_symbols_dedups_preserving_order() {
        let cs = Charset::from_symbols(b"abcabc").unwrap();
        assert_eq!(cs.symbols(), b"abc");
    }

    #[test]
    fn test_from_symbols_rejects_empty() {
        assert!(Charset::from_symbols(b"").is_err());
    }
}
