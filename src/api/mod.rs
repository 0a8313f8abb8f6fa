//! # API Layer
//!
//! External interfaces. Only the REST console surface exists today.

pub mod rest;
