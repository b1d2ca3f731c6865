use super::constants::{DEFAULT_TTL, NO_TTL_OVERRIDE};

/// User-selected TTL policy for an export
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TtlOverride {
    /// Keep each row's own TTL, falling back to the default when empty
    #[default]
    Inherit,
    /// Print this TTL on every record
    Force(String),
}

impl TtlOverride {
    /// TTL to print for a row whose own TTL cell reads `row_ttl`
    pub fn resolve(&self, row_ttl: &str) -> String {
        match self {
            TtlOverride::Force(ttl) => ttl.clone(),
            TtlOverride::Inherit if row_ttl.is_empty() => DEFAULT_TTL.to_string(),
            TtlOverride::Inherit => row_ttl.to_string(),
        }
    }

    /// The override in its textual form, `"0"` when inheriting
    pub fn as_str(&self) -> &str {
        match self {
            TtlOverride::Force(ttl) => ttl,
            TtlOverride::Inherit => NO_TTL_OVERRIDE,
        }
    }
}

impl From<&str> for TtlOverride {
    fn from(value: &str) -> Self {
        if value == NO_TTL_OVERRIDE {
            TtlOverride::Inherit
        } else {
            TtlOverride::Force(value.to_string())
        }
    }
}

/// Resolve the TTL for a row given the raw override string
pub fn resolve_ttl(row_ttl: &str, override_ttl: &str) -> String {
    TtlOverride::from(override_ttl).resolve(row_ttl)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins_over_row_ttl() {
        assert_eq!(resolve_ttl("120", "300"), "300");
        assert_eq!(resolve_ttl("", "86400"), "86400");
    }

    #[test]
    fn test_sentinel_keeps_row_ttl() {
        assert_eq!(resolve_ttl("120", "0"), "120");
        assert_eq!(resolve_ttl("", "0"), "3600");
    }

    #[test]
    fn test_row_ttl_copied_verbatim_when_inheriting() {
        assert_eq!(resolve_ttl("0", "0"), "0");
        assert_eq!(resolve_ttl("0", "300"), "300");
    }

    #[test]
    fn test_sentinel_round_trips_textually() {
        assert_eq!(TtlOverride::from("0"), TtlOverride::Inherit);
        assert_eq!(TtlOverride::Inherit.as_str(), "0");
        assert_eq!(TtlOverride::from("60").as_str(), "60");
    }
}
