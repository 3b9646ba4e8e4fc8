//! Request body for fetching the next transfer nonce of a stark key.

use serde::{Deserialize, Serialize};

/// `{"stark_key": ...}` sent to the get-nonce endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct GetNonceMessage {
    stark_key: String,
}

impl GetNonceMessage {
    pub fn new(stark_key: impl Into<String>) -> Self {
        Self {
            stark_key: stark_key.into(),
        }
    }

    pub fn stark_key(&self) -> &str {
        &self.stark_key
    }

    pub fn set_stark_key(&mut self, stark_key: impl Into<String>) {
        self.stark_key = stark_key.into();
    }
}
