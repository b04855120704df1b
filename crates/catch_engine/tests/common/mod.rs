//! Shared test utilities for catch calculation tests.
//!
//! Fixture types, profile builders and the fixture checker live here so
//! every test binary can import them.

#![allow(dead_code)]

pub mod fixtures;
pub mod helpers;
