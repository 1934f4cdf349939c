use serde::Deserialize;

const DEFAULT_LIMIT: i64 = 100;
const MAX_LIMIT: i64 = 100;

/// `skip`/`limit` query parameters shared by every list endpoint.
/// The limit bound is applied uniformly across the API.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    /// Sanitized (skip, limit): negative skips floor to 0, limit is
    /// clamped to [1, 100].
    pub fn bounds(&self) -> (i64, i64) {
        (self.skip.max(0), self.limit.clamp(1, MAX_LIMIT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_skip_zero_limit_hundred() {
        let p = Pagination::default();
        assert_eq!(p.bounds(), (0, 100));
    }

    #[test]
    fn oversized_limit_is_clamped() {
        let p = Pagination {
            skip: 0,
            limit: 5000,
        };
        assert_eq!(p.bounds(), (0, 100));
    }

    #[test]
    fn negative_values_are_sanitized() {
        let p = Pagination {
            skip: -5,
            limit: -1,
        };
        assert_eq!(p.bounds(), (0, 1));
    }
}
