//! Integrators that drive a rule over a larger domain.
pub mod composite;
