//! Consolidated test utilities for talent-deck
//!
//! This module provides unified testing utilities for integration tests:
//! isolated state directories, small datasets and output assertions.

pub mod assertions;
pub mod fixtures;
