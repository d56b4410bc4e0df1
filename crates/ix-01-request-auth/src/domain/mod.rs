//! # Domain Layer
//!
//! Request authentication logic with no I/O.

pub mod entities;
pub mod verify;
