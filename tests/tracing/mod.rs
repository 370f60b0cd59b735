//! Tests for tracing functionality
//!
//! These tests verify that planning emits events when the feature is enabled
//! and that the library works the same without it.
