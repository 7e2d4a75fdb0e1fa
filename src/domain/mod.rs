//! Domain layer - Core detection logic
//!
//! This module contains the domain entities, the repository traits for
//! filesystem access, and the detection services. It does not touch the
//! filesystem directly.

pub mod entities;
pub mod repositories;
pub mod services;
