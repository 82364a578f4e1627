//! Miscellaneous utilities.

/// Parsers for the textual date and time formats used in schedule data.
pub mod data_parsers;
