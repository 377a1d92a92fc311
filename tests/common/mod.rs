//! Shared test utilities for git-iadd
//!
//! This module provides unified testing utilities for integration tests:
//! real git repositories in temporary directories, raw status fixtures and
//! output predicates.

pub mod assertions;
pub mod fixtures;
pub mod repository;
