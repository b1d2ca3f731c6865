use super::constants::DKIM_LABEL;
use super::dkim::{encode_dkim, strip_outer_quotes};
use super::record::{FormattedRecord, RawRecordRow, RecordType, fully_qualified};
use super::ttl::TtlOverride;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

// Sub-field patterns for the console's rendered MX/SRV content
static PRIORITY_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"Priority:\s*(\d+)").unwrap());
static WEIGHT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"Weight:\s*(\d+)").unwrap());
static PORT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"Port:\s*(\d+)").unwrap());
static DESTINATION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Destination:\s*([^\n]+)").unwrap());
static TARGET_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"Target:\s*([^\n]+)").unwrap());

/// Format one raw row into a zone file line.
///
/// Returns `None` for rows that produce no output: unrecognized types,
/// SOA/NS rows, and MX/SRV rows missing a required field.
pub fn format_row(row: &RawRecordRow, ttl_override: &TtlOverride) -> Option<FormattedRecord> {
    let Some(rtype) = row.record_type() else {
        debug!("Dropping row {} with unsupported type {:?}", row.name, row.rtype);
        return None;
    };

    let ttl = ttl_override.resolve(&row.ttl);
    let rdata = match rtype {
        RecordType::A => Some(row.data.clone()),
        RecordType::CNAME => Some(fully_qualified(&row.data)),
        RecordType::MX => format_mx(&row.data),
        RecordType::SRV => format_srv(&row.data),
        RecordType::TXT => Some(format_txt(&row.name, &row.data)),
        RecordType::SOA | RecordType::NS => None,
    };

    match rdata {
        Some(rdata) => {
            let record = FormattedRecord::new(&row.name, ttl, rtype, rdata);
            trace!("Formatted {}", record);
            Some(record)
        }
        None => {
            debug!("Dropping {} row {}: no usable record data", rtype, row.name);
            None
        }
    }
}

/// `prio dest.`, or `None` when either field is missing
fn format_mx(data: &str) -> Option<String> {
    let priority = capture(&PRIORITY_REGEX, data)?;
    let destination = capture(&DESTINATION_REGEX, data)?;
    Some(format!("{} {}", priority, fully_qualified(destination)))
}

/// `prio weight port target.`; numeric fields default to 0, target is required
fn format_srv(data: &str) -> Option<String> {
    let target = capture(&TARGET_REGEX, data)?;
    let priority = capture(&PRIORITY_REGEX, data).unwrap_or("0");
    let weight = capture(&WEIGHT_REGEX, data).unwrap_or("0");
    let port = capture(&PORT_REGEX, data).unwrap_or("0");
    Some(format!(
        "{} {} {} {}",
        priority,
        weight,
        port,
        fully_qualified(target)
    ))
}

fn format_txt(name: &str, data: &str) -> String {
    if name.contains(DKIM_LABEL) {
        return encode_dkim(data);
    }
    format!("\"{}\"", strip_outer_quotes(data).replace('"', "\\\""))
}

/// First capture group, trimmed; empty captures count as missing
fn capture<'a>(regex: &Regex, data: &'a str) -> Option<&'a str> {
    regex
        .captures(data)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|value| !value.is_empty())
}
