//! Use-Cases der Application-Layer-Orchestrierung.

pub mod curve;
pub mod points;
pub mod transform;
pub mod viewport;
