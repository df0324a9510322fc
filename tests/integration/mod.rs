//! Integration tests for briefing-context

mod config_integration;
mod context_builder;
mod test_utils;
