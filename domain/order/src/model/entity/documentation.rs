use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Uploaded proof artifact attached to an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Documentation {
    pub id: Uuid,
    pub order_id: Uuid,
    pub uploader_id: Uuid,
    /// Blob store locator.
    pub locator: String,
    pub caption: String,
    pub kind: DocumentationKind,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentationKind {
    ProgressPhoto,
    PaymentProof,
    #[default]
    Other,
}

/// Caption fragments that mark legacy uploads as payment proof.
const PAYMENT_PROOF_MARKERS: &[&str] = &[
    "bukti pembayaran",
    "bukti bayar",
    "transfer",
    "payment proof",
    "proof of payment",
    "qris",
];

const PROGRESS_MARKERS: &[&str] = &["progress", "progres", "foto"];

impl DocumentationKind {
    /// Derives a kind for uploads that arrive with a caption only.
    pub fn classify(caption: &str) -> Self {
        let caption = caption.to_lowercase();
        if PAYMENT_PROOF_MARKERS.iter().any(|el| caption.contains(el)) {
            Self::PaymentProof
        } else if PROGRESS_MARKERS.iter().any(|el| caption.contains(el)) {
            Self::ProgressPhoto
        } else {
            Self::Other
        }
    }
}

impl fmt::Display for DocumentationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::ProgressPhoto => "progress photo",
            Self::PaymentProof => "payment proof",
            Self::Other => "other",
        };
        f.write_str(s)
    }
}
