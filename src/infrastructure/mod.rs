//! Infrastructure layer: concrete storage backends.

pub mod keystore;
pub mod persistence;
