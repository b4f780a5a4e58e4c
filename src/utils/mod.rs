//! Small shared helpers.

pub mod index;
