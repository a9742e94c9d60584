//! Configuration for the Uniques client.
//!
//! This module provides [`UniquesConfig`], which determines how the client
//! addresses the pallet on the target chain.

use serde::{Deserialize, Serialize};

use crate::error::{Result, UniquesError};

/// Default pallet name on chains that ship the Uniques pallet.
const DEFAULT_PALLET: &str = "uniques";

/// Configuration for [`Uniques`](crate::Uniques).
///
/// Chains occasionally mount the pallet under a different name (forks, or
/// the successor `nfts` pallet with a compatible storage layout); the
/// `pallet` field covers that.
///
/// # Example
///
/// ```
/// use uniques_client::UniquesConfig;
///
/// let config = UniquesConfig::builder().pallet("nfts").build()?;
/// assert_eq!(config.pallet(), "nfts");
/// # Ok::<(), uniques_client::UniquesError>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UniquesConfig {
    /// Pallet name used for storage entries and composed calls.
    #[serde(default = "default_pallet")]
    pub(crate) pallet: String,
}

fn default_pallet() -> String {
    DEFAULT_PALLET.to_owned()
}

impl Default for UniquesConfig {
    fn default() -> Self {
        Self { pallet: default_pallet() }
    }
}

#[bon::bon]
impl UniquesConfig {
    /// Creates a new configuration, validating all fields.
    ///
    /// # Optional Fields
    ///
    /// * `pallet` - Pallet name (default: `"uniques"`).
    ///
    /// # Errors
    ///
    /// Returns an error if the pallet name is empty.
    #[builder]
    pub fn new(#[builder(into, default = default_pallet())] pallet: String) -> Result<Self> {
        if pallet.is_empty() {
            return Err(UniquesError::precondition("pallet name cannot be empty"));
        }

        Ok(Self { pallet })
    }

    /// Returns the configured pallet name.
    #[must_use]
    pub fn pallet(&self) -> &str {
        &self.pallet
    }
}
