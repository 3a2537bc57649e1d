//! Use-Cases der Application-Layer-Orchestrierung.

pub mod editing;
pub mod tuning;
