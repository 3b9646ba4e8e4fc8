//! # Batch Transfer Item
//!
//! One leg of a batch transfer request: which asset moves, from which
//! stark key and vault, to which receiver and vault, for how much, and the
//! signature authorizing it.
//!
//! ## Wire Format
//!
//! The JSON object always carries exactly the keys listed in
//! [`BatchTransferItem::WIRE_KEYS`]. Unset optional values are written as
//! `null`, never omitted. On input, unknown keys are ignored and missing
//! keys (or `null` string values) leave the field unset.
//!
//! ## Validation
//!
//! None. Every combination of values is a valid record. Range and format
//! checks belong to whoever signs or submits the transfer; see
//! [`TransferMsg`](crate::TransferMsg).

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ReddioError;
use crate::signature::Signature;

/// A single line item of a batch transfer.
///
/// "Unset" means the empty string for string fields and `None` for the
/// nullable ones. Equality is field-wise; two records with the same values
/// are interchangeable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchTransferItem {
    #[serde(rename = "asset_id", deserialize_with = "string_or_null")]
    asset_id: String,
    #[serde(rename = "stark_key", deserialize_with = "string_or_null")]
    stark_key: String,
    /// Decimal string; kept as text so large quantums never lose precision.
    #[serde(rename = "amount", deserialize_with = "string_or_null")]
    amount: String,
    #[serde(rename = "nonce")]
    nonce: Option<i64>,
    #[serde(rename = "vault_id", deserialize_with = "string_or_null")]
    vault_id: String,
    #[serde(rename = "receiver", deserialize_with = "string_or_null")]
    receiver: String,
    #[serde(rename = "receiver_vault_id", deserialize_with = "string_or_null")]
    receiver_vault_id: String,
    #[serde(rename = "expiration_timestamp")]
    expiration_timestamp: Option<i64>,
    #[serde(rename = "signature")]
    signature: Option<Signature>,
}

impl BatchTransferItem {
    /// `(field, wire key)` pairs, in declaration order.
    ///
    /// Must match the `rename` attributes above; the tests hold them together.
    pub const WIRE_KEYS: [(&'static str, &'static str); 9] = [
        ("asset_id", "asset_id"),
        ("stark_key", "stark_key"),
        ("amount", "amount"),
        ("nonce", "nonce"),
        ("vault_id", "vault_id"),
        ("receiver", "receiver"),
        ("receiver_vault_id", "receiver_vault_id"),
        ("expiration_timestamp", "expiration_timestamp"),
        ("signature", "signature"),
    ];

    /// Wire key for an in-memory field name, if the field exists.
    pub fn wire_key(field: &str) -> Option<&'static str> {
        Self::WIRE_KEYS
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, key)| *key)
    }

    /// An item with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// An item with every field given. Nothing is checked.
    #[allow(clippy::too_many_arguments)]
    pub fn of(
        asset_id: impl Into<String>,
        stark_key: impl Into<String>,
        amount: impl Into<String>,
        nonce: Option<i64>,
        vault_id: impl Into<String>,
        receiver: impl Into<String>,
        receiver_vault_id: impl Into<String>,
        expiration_timestamp: Option<i64>,
        signature: Option<Signature>,
    ) -> Self {
        Self {
            asset_id: asset_id.into(),
            stark_key: stark_key.into(),
            amount: amount.into(),
            nonce,
            vault_id: vault_id.into(),
            receiver: receiver.into(),
            receiver_vault_id: receiver_vault_id.into(),
            expiration_timestamp,
            signature,
        }
    }

    /// Decode an item from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `ReddioError::Serialization` for malformed JSON or a field of
    /// the wrong JSON type. No partially filled item is ever returned.
    pub fn from_json(json: &str) -> Result<Self, ReddioError> {
        let item: Self = serde_json::from_str(json)?;
        tracing::debug!(asset_id = %item.asset_id, vault_id = %item.vault_id, "decoded batch transfer item");
        Ok(item)
    }

    /// Encode the item as compact JSON.
    pub fn to_json(&self) -> Result<String, ReddioError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn asset_id(&self) -> &str {
        &self.asset_id
    }

    pub fn stark_key(&self) -> &str {
        &self.stark_key
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn nonce(&self) -> Option<i64> {
        self.nonce
    }

    pub fn vault_id(&self) -> &str {
        &self.vault_id
    }

    pub fn receiver(&self) -> &str {
        &self.receiver
    }

    pub fn receiver_vault_id(&self) -> &str {
        &self.receiver_vault_id
    }

    pub fn expiration_timestamp(&self) -> Option<i64> {
        self.expiration_timestamp
    }

    pub fn signature(&self) -> Option<&Signature> {
        self.signature.as_ref()
    }

    pub fn set_asset_id(&mut self, asset_id: impl Into<String>) {
        self.asset_id = asset_id.into();
    }

    pub fn set_stark_key(&mut self, stark_key: impl Into<String>) {
        self.stark_key = stark_key.into();
    }

    pub fn set_amount(&mut self, amount: impl Into<String>) {
        self.amount = amount.into();
    }

    pub fn set_nonce(&mut self, nonce: Option<i64>) {
        self.nonce = nonce;
    }

    pub fn set_vault_id(&mut self, vault_id: impl Into<String>) {
        self.vault_id = vault_id.into();
    }

    pub fn set_receiver(&mut self, receiver: impl Into<String>) {
        self.receiver = receiver.into();
    }

    pub fn set_receiver_vault_id(&mut self, receiver_vault_id: impl Into<String>) {
        self.receiver_vault_id = receiver_vault_id.into();
    }

    pub fn set_expiration_timestamp(&mut self, expiration_timestamp: Option<i64>) {
        self.expiration_timestamp = expiration_timestamp;
    }

    pub fn set_signature(&mut self, signature: Option<Signature>) {
        self.signature = signature;
    }
}

/// Treat an explicit `null` string like a missing one.
fn string_or_null<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_signature() -> impl Strategy<Value = Option<Signature>> {
        proptest::option::of(
            ("0x[0-9a-f]{1,64}", "0x[0-9a-f]{1,64}").prop_map(|(r, s)| Signature::new(r, s)),
        )
    }

    prop_compose! {
        fn arb_item()(
            asset_id in "(0x[0-9a-f]{0,63})?",
            stark_key in "(0x[0-9a-f]{0,64})?",
            amount in "[0-9]{0,30}",
            nonce in proptest::option::of(any::<i64>()),
            vault_id in "[0-9]{0,12}",
            receiver in "\\PC{0,16}",
            receiver_vault_id in "[0-9]{0,12}",
            expiration_timestamp in proptest::option::of(any::<i64>()),
            signature in arb_signature(),
        ) -> BatchTransferItem {
            BatchTransferItem::of(
                asset_id, stark_key, amount, nonce, vault_id,
                receiver, receiver_vault_id, expiration_timestamp, signature,
            )
        }
    }

    proptest! {
        /// Encoding then decoding yields an equal item.
        #[test]
        fn json_round_trip(item in arb_item()) {
            let json = item.to_json().unwrap();
            let back = BatchTransferItem::from_json(&json).unwrap();
            prop_assert_eq!(back, item);
        }

        /// Every encoded item carries exactly the nine wire keys.
        #[test]
        fn encoded_key_count(item in arb_item()) {
            let value = serde_json::to_value(&item).unwrap();
            let map = value.as_object().unwrap();
            prop_assert_eq!(map.len(), BatchTransferItem::WIRE_KEYS.len());
            for (_, key) in BatchTransferItem::WIRE_KEYS {
                prop_assert!(map.contains_key(key), "missing key {}", key);
            }
        }
    }
}
