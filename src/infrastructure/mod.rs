pub mod identity;
pub mod observability;
pub mod persistence;
pub mod translation;
