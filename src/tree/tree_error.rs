use std::path::PathBuf;

use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum TreeError {
    #[snafu(display("No node exists at {}", reference.display()))]
    NotFoundError { reference: PathBuf },
    #[snafu(display("Failed to read {}", reference.display()))]
    ReadError {
        reference: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to decode the leaf stored at {}", reference.display()))]
    DecodeError {
        reference: PathBuf,
        source: serde_json::Error,
    },
    #[snafu(display("Failed to write {}", reference.display()))]
    WriteError {
        reference: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to encode the leaf destined for {}", reference.display()))]
    EncodeError {
        reference: PathBuf,
        source: serde_json::Error,
    },
    #[snafu(display(
        "{} is a leaf on one side of the operation and an interior node on the other",
        reference.display()
    ))]
    StructuralMismatchError { reference: PathBuf },
}

impl TreeError {
    /// Faults raised while reading a subtree. The walk engine recovers from
    /// these locally; anything else is handed back to the caller.
    pub fn is_scan_fault(&self) -> bool {
        matches!(
            self,
            TreeError::NotFoundError { .. }
                | TreeError::ReadError { .. }
                | TreeError::DecodeError { .. }
        )
    }

    pub fn reference(&self) -> &PathBuf {
        match self {
            TreeError::NotFoundError { reference }
            | TreeError::ReadError { reference, .. }
            | TreeError::DecodeError { reference, .. }
            | TreeError::WriteError { reference, .. }
            | TreeError::EncodeError { reference, .. }
            | TreeError::StructuralMismatchError { reference } => reference,
        }
    }
}
