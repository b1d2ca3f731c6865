use std::fmt;

/// One row of the console's record table, exactly as it was read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecordRow {
    /// Record owner name (may or may not be fully qualified)
    pub name: String,
    /// TTL text; empty when the console shows none
    pub ttl: String,
    /// Record type tag as displayed
    pub rtype: String,
    /// Free-form record content
    pub data: String,
}

impl RawRecordRow {
    /// Create a row, trimming surrounding whitespace from every cell
    pub fn new(
        name: impl AsRef<str>,
        ttl: impl AsRef<str>,
        rtype: impl AsRef<str>,
        data: impl AsRef<str>,
    ) -> Self {
        Self {
            name: name.as_ref().trim().to_string(),
            ttl: ttl.as_ref().trim().to_string(),
            rtype: rtype.as_ref().trim().to_string(),
            data: data.as_ref().trim().to_string(),
        }
    }

    /// The recognized record type of this row, if any
    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::parse(&self.rtype)
    }
}

/// Record types the exporter knows how to group
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordType {
    SOA,
    NS,
    A,
    CNAME,
    MX,
    SRV,
    TXT,
}

impl RecordType {
    /// Section order of the exported zone file
    pub const ALL: [RecordType; 7] = [
        RecordType::SOA,
        RecordType::NS,
        RecordType::A,
        RecordType::CNAME,
        RecordType::MX,
        RecordType::SRV,
        RecordType::TXT,
    ];

    /// Parse a type tag. Tags are matched exactly as the console prints them.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "SOA" => Some(RecordType::SOA),
            "NS" => Some(RecordType::NS),
            "A" => Some(RecordType::A),
            "CNAME" => Some(RecordType::CNAME),
            "MX" => Some(RecordType::MX),
            "SRV" => Some(RecordType::SRV),
            "TXT" => Some(RecordType::TXT),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::SOA => "SOA",
            RecordType::NS => "NS",
            RecordType::A => "A",
            RecordType::CNAME => "CNAME",
            RecordType::MX => "MX",
            RecordType::SRV => "SRV",
            RecordType::TXT => "TXT",
        }
    }

    /// Position of this type in [`RecordType::ALL`]
    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single zone file line: `<name>\t<ttl>\tIN\t<type>\t<rdata>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedRecord {
    /// Fully qualified owner name
    pub name: String,
    /// Resolved TTL
    pub ttl: String,
    pub rtype: RecordType,
    /// Record data in presentation format
    pub rdata: String,
}

impl FormattedRecord {
    /// Create a record, forcing the owner name to be fully qualified
    pub fn new(name: &str, ttl: String, rtype: RecordType, rdata: String) -> Self {
        Self {
            name: fully_qualified(name),
            ttl,
            rtype,
            rdata,
        }
    }
}

impl fmt::Display for FormattedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\tIN\t{}\t{}",
            self.name, self.ttl, self.rtype, self.rdata
        )
    }
}

/// Append the root label unless the name already ends with it
pub fn fully_qualified(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{}.", name)
    }
}
