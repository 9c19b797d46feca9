//! Internal test modules - whitebox tests with crate access
//!
//! This module contains tests that require internal access to crate types.
//! Tests here drive the TUI through the acceptance harness with a simulated
//! clock and a TestBackend.
