//! Utility modules for the site toolkit.

pub mod date;
pub mod path;
