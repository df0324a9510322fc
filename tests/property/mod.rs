//! Property-based tests for the context builder
