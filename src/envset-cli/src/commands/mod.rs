//! Command handlers

pub mod batch;
pub mod convert;
