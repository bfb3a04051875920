//! Stream resolution tests.

#[cfg(feature = "async")]
mod async_tests;
mod resolve_tests;
mod stdio_tests;
