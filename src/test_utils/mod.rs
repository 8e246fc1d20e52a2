//! Consolidated test utilities and helpers for the forwarder.
//!
//! This module provides a centralized location for test configuration builders,
//! row builders, provider fixtures and mock collaborators used throughout the codebase.

#![cfg(test)]

pub mod builders;
pub mod config;
pub mod fixtures;
pub mod mocks;
