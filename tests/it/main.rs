//! Single test binary entry point.
//!
//! This consolidates all tests into a single binary following matklad's best practices,
//! reducing linking overhead.
//!
//! Structure:
//! - helpers: Canvas builder, recording host, event shorthands
//! - integration: Full gesture flows through the canvas event handlers
//! - unit: Single-component tests against the public API
