//! Utility modules shared by config loading and asset URL generation.

pub mod path;
