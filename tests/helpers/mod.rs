//! Test helpers module
//!
//! This module provides utilities and helpers for testing the events API.
//! It includes the router test context, seeded fixtures and the optional
//! Postgres test database.

#![allow(dead_code)]

pub mod database_helper;
pub mod test_context;
pub mod test_data;

pub use database_helper::*;
pub use test_context::*;
pub use test_data::*;
