//! Apex debug log analyzer (apexlog)
//!
//! Parses Salesforce Apex debug logs into eight fixed categories, splits each
//! category into labelled sub-groups, and presents the result as an
//! interactive terminal browser, a text summary, or a JSON report.
//!
//! The parsing core (`parser`, `model`, `report`) is pure; reading input,
//! persistence, logging and the terminal live in the outer modules.

pub mod config;
pub mod logging;
pub mod model;
pub mod parser;
pub mod report;
pub mod source;
pub mod state;
pub mod store;
pub mod view;
