//! Best survival time
//!
//! A single number persisted across runs: the longest time any run has
//! survived. Longer is better.

/// LocalStorage key for the best time
pub const STORAGE_KEY: &str = "bestTime";

/// Somewhere a best time can be read from and written to
pub trait BestTimeStore {
    /// Stored best time in milliseconds, if any
    fn get_best_time(&self) -> Option<u64>;

    fn set_best_time(&mut self, ms: u64);
}

/// Parse a stored best time
///
/// Anything that is not a finite, non-negative number counts as no best time.
pub fn parse_best_time(raw: &str) -> Option<u64> {
    let value: f64 = raw.trim().parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    Some(value.round() as u64)
}

/// Check if a survival time should replace the stored best
pub fn beats(previous: Option<u64>, survived_ms: u64) -> bool {
    previous.map(|best| survived_ms > best).unwrap_or(true)
}

/// In-process store (native runs and tests)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    best: Option<u64>,
    writes: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that already holds a best time
    pub fn with_best(ms: u64) -> Self {
        Self {
            best: Some(ms),
            writes: 0,
        }
    }

    /// Number of `set_best_time` calls so far
    pub fn writes(&self) -> u32 {
        self.writes
    }
}

impl BestTimeStore for MemoryStore {
    fn get_best_time(&self) -> Option<u64> {
        self.best
    }

    fn set_best_time(&mut self, ms: u64) {
        self.best = Some(ms);
        self.writes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_best_time() {
        assert_eq!(parse_best_time("125000"), Some(125_000));
        assert_eq!(parse_best_time(" 4200 \n"), Some(4200));
        assert_eq!(parse_best_time("1234.6"), Some(1235));
        assert_eq!(parse_best_time(""), None);
        assert_eq!(parse_best_time("fast"), None);
        assert_eq!(parse_best_time("NaN"), None);
        assert_eq!(parse_best_time("-5"), None);
    }

    #[test]
    fn test_beats() {
        assert!(beats(None, 0));
        assert!(beats(Some(1000), 1001));
        assert!(!beats(Some(1000), 1000));
        assert!(!beats(Some(1000), 10));
    }
}
