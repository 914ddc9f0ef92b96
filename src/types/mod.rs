//! Shared type definitions
//!
//! This module contains the data types shared by the core and the UI.

pub mod notice;
pub mod quote;
