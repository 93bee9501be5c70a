// Library module for dirclean
// Re-exports modules for use in integration tests and the binary

pub mod cleaner;
pub mod logging;
