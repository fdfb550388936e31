// Narrative parsing: turns free-text AI output into structured records.
// Every extractor here is total. Unmatched fields fall back to constants from
// vocab.rs and are reported in the record's ExtractionReport.

pub mod career_parser;
pub mod defaults;
pub mod evaluation_parser;
pub mod handlers;
pub mod proficiency;
pub mod scan;
pub mod vocab;
