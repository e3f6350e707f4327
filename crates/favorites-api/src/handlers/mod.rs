//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod favorites;
pub mod groups;
pub mod health;
pub mod profile;
pub mod public;
pub mod shares;
