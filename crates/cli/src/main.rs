//! Command-line interface for the `skilltap` application.
//!
//! This crate serves as the main entry point for the executable, delegating
//! its core functionality to the `skilltap-core` crate.

fn main() -> anyhow::Result<()> {
    skilltap_core::run()
}
