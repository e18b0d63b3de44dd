//! Core collaborators shared by the generator
//!
//! - **time**: Wall-clock readings used for time-based seeding

pub mod time;
