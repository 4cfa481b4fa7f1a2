use thiserror::Error;

/// Custom error type for the picograd framework.
///
/// The engine itself has no failure paths (every graph-builder call is a
/// single atomic construction step), so these variants all originate in the
/// consumer layers built on top of it: networks, losses, activation lookup.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum PicoGradError {
    #[error("Input length mismatch during {operation}: expected {expected}, got {actual}")]
    LengthMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Unknown activation function: {0}")]
    UnknownActivation(String),

    #[error("Architecture mismatch: {layers} layers but {activations} activation functions")]
    ArchitectureMismatch { layers: usize, activations: usize },

    #[error("Cannot compute a loss over an empty batch")]
    EmptyBatch,
}
