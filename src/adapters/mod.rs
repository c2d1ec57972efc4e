//! External system integrations for Triage.
//!
//! This module provides adapters for integrating with external systems:
//!
//! - [`api`] - Assessment service integration (patient source and
//!   submission sink)
//!
//! Adapters follow the adapter pattern to isolate external dependencies:
//! nothing outside this module touches reqwest, and tests exercise the
//! adapters against mock HTTP endpoints.

pub mod api;
