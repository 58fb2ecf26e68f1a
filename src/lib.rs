//! cinelog library exports for testing

pub mod assist;
pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;
