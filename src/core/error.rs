//! Fehlertyp für die Geometrie-Berechnungen.

use std::fmt;

/// Fehler aus dem Geometrie-Kern.
///
/// Der Kern ist fast vollständig total; die wenigen Fehlerfälle sind
/// Argumentprüfungen, die direkt in Unit-Tests abgefragt werden können.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// Ein Argument liegt außerhalb des Definitionsbereichs.
    InvalidArgument(&'static str),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(reason) => write!(f, "Ungültiges Argument: {reason}"),
        }
    }
}

impl std::error::Error for GeometryError {}
