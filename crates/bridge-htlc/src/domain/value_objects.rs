//! # Domain Value Objects
//!
//! Transfer lifecycle states and the hash function selector.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Transfer state machine.
///
/// `Initialized → Completed` or `Initialized → Refunded`; both targets are
/// terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransferState {
    /// Funds locked, awaiting completion or expiry.
    #[default]
    Initialized,
    /// Pre-image revealed, funds released to the counterparty.
    Completed,
    /// Time lock passed, funds returned to the originator.
    Refunded,
}

impl TransferState {
    /// Check if transition is valid.
    pub fn can_transition_to(&self, next: TransferState) -> bool {
        matches!(
            (self, next),
            (Self::Initialized, Self::Completed) | (Self::Initialized, Self::Refunded)
        )
    }

    /// Check if terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Refunded)
    }

    /// Lowercase name for logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Initialized => "initialized",
            Self::Completed => "completed",
            Self::Refunded => "refunded",
        }
    }
}

/// Hash function applied to pre-images.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// Keccak-256 (same function as transfer identifiers).
    #[default]
    Keccak256,
    /// SHA-256, for counterpart chains with SHA-256 HTLCs.
    Sha256,
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keccak256 => f.write_str("keccak256"),
            Self::Sha256 => f.write_str("sha256"),
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "keccak256" | "keccak" => Ok(Self::Keccak256),
            "sha256" => Ok(Self::Sha256),
            other => Err(format!("unknown hash algorithm: {other}")),
        }
    }
}
