//! Error types shared by the containers, the gateway and the session store.

use thiserror::Error;

/// Message shown in the file slot when the receipt has a refused extension.
pub const FILE_REJECTED_MESSAGE: &str = "Seul les fichiers .jpg, .jpeg, .png sont acceptés";

/// Message shown in the file slot when the form is submitted without a receipt.
pub const FILE_MISSING_MESSAGE: &str = "Veuillez sélectionner un justificatif (.jpg, .jpeg, .png)";

/// Receipt validation failures. Reported inline next to the file input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileError {
    #[error("{}", FILE_REJECTED_MESSAGE)]
    UnsupportedExtension { file_name: String },
    #[error("{}", FILE_MISSING_MESSAGE)]
    Missing,
}

/// Failures talking to the bills API. The `Display` text is what the
/// Bills page shows in its error banner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("Erreur {status}")]
    Status { status: u16 },
    #[error("Erreur réseau : {0}")]
    Network(String),
    #[error("Réponse illisible : {0}")]
    Decode(String),
    #[error("Erreur navigateur : {0}")]
    Browser(String),
}

impl From<gloo_net::Error> for GatewayError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(err) => Self::Decode(err.to_string()),
            other => Self::Network(other.to_string()),
        }
    }
}

/// Everything that can stop a new bill from being stored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Receipt(#[from] FileError),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error("une soumission est déjà en cours")]
    InProgress,
    #[error("cette note de frais a déjà été envoyée")]
    AlreadySubmitted,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("local storage is unavailable")]
    StorageUnavailable,
    #[error("malformed session: {0}")]
    Malformed(#[from] serde_json::Error),
}
