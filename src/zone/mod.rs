pub mod assembler;
pub mod dkim;
pub mod formatter;
pub mod record;
pub mod ttl;

pub use assembler::{RecordGroups, ZoneAssembler, domain_from_hostname};
pub use formatter::format_row;
pub use record::{FormattedRecord, RawRecordRow, RecordType};
pub use ttl::{TtlOverride, resolve_ttl};

/// Zone constants
pub mod constants {
    /// TTL printed when a row carries none and no override is active
    pub const DEFAULT_TTL: &str = "3600";

    /// Override value meaning "keep each record's own TTL"
    pub const NO_TTL_OVERRIDE: &str = "0";

    /// Maximum length of a single TXT character-string
    pub const MAX_CHARACTER_STRING: usize = 255;

    /// Marker label identifying DKIM key records
    pub const DKIM_LABEL: &str = "_domainkey";
}
