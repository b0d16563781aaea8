//! Network configuration for explorer API endpoints.
//!
//! This module defines the supported networks and their associated
//! configuration such as API base URLs.

use serde::{Deserialize, Serialize};

// ============================================================================
// Network Configuration
// ============================================================================

/// Explorer network variants.
///
/// Represents the different networks the explorer can connect to,
/// each with its own API endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Network {
    /// MainNet - the production network.
    #[default]
    MainNet,
    /// TestNet - the test network for development.
    TestNet,
    /// LocalNet - a local development node.
    LocalNet,
}

impl Network {
    /// Returns the human-readable name of the network.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::MainNet => "MainNet",
            Self::TestNet => "TestNet",
            Self::LocalNet => "LocalNet",
        }
    }

    /// Returns the explorer API base URL for this network.
    #[must_use]
    pub const fn api_url(&self) -> &str {
        match self {
            Self::MainNet => "https://api.stakescope.io/v1",
            Self::TestNet => "https://testnet-api.stakescope.io/v1",
            Self::LocalNet => "http://localhost:1317/v1",
        }
    }

    /// Parses a network name as given on the command line.
    ///
    /// Matching is case-insensitive and accepts short forms
    /// ("main", "test", "local").
    #[must_use]
    pub fn from_cli_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "mainnet" | "main" => Some(Self::MainNet),
            "testnet" | "test" => Some(Self::TestNet),
            "localnet" | "local" => Some(Self::LocalNet),
            _ => None,
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Tests
// ============================================================================
