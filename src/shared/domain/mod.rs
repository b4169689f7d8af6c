//! Shared domain concepts

pub mod value_objects;
