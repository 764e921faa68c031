//! Command implementations for the icon-manifest CLI

pub mod generate;
