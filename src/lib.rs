pub mod config;
pub mod error;
pub mod export;
pub mod source;
pub mod zone;

pub use export::{ExportArtifact, ExportOptions, export_zone};
pub use zone::{RawRecordRow, RecordGroups, ZoneAssembler};
