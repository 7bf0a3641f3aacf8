//! Generated-source rendering and target package inference

pub mod package;
pub mod source;
