//! External interface adapters (CSV in/out for the CLI).

pub mod csv;
