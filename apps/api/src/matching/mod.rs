// Keyword analysis engine.
// Implements: static dictionaries, found/missing/suggested extraction, the
// single-field analysis scan, and the handlers that expose them over HTTP.

pub mod analysis_scan;
pub mod dictionaries;
pub mod handlers;
pub mod matcher;
pub mod missing;
