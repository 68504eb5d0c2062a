//! Command line front end

pub mod convert;
pub mod rates;
pub mod route;
pub mod setup;
pub mod ui;
