//! HTML route handlers

pub mod quote;
