//! Core types and trait definitions for the kitchen recipe catalog.
//!
//! This crate knows nothing about files or CSV. Storage backends implement
//! [`store::RecipeStore`]; front ends depend on the trait and the types here.

pub mod catalog;
pub mod draft;
pub mod error;
pub mod media;
pub mod recipe;
pub mod store;

pub use error::{Error, Result};
