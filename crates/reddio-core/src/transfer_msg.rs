//! # Transfer Message — Typed View for Signing
//!
//! A [`BatchTransferItem`] carries every number as the API sends it: decimal
//! strings, hex strings, nullable integers. The StarkEx transfer hash packs
//! those values into fixed-width slots of a single field element:
//!
//! ```text
//! type(1) | vault(31) | vault(31) | amount(63) | 0(63) | nonce(31) | expiration(22)
//! ```
//!
//! and hashes it together with the token and the receiver key. Those two are
//! Stark field elements, so they must be below the field prime
//! `P = 2^251 + 17 * 2^192 + 1`. [`TransferMsg`] is the item after parsing
//! each value and checking it fits its slot. Producing the hash itself is
//! the job of the signer and happens elsewhere.
//!
//! `expiration_timestamp` is in hours since the Unix epoch here, which is
//! why it fits 22 bits.

use serde::Serialize;

use crate::error::TransferMsgError;
use crate::transfer::BatchTransferItem;

/// Width of a vault id slot.
pub const VAULT_ID_BITS: u32 = 31;
/// Width of an amount slot.
pub const AMOUNT_BITS: u32 = 63;
/// Width of the nonce slot.
pub const NONCE_BITS: u32 = 31;
/// Width of the expiration slot.
pub const EXPIRATION_BITS: u32 = 22;
/// Stark field prime in lowercase hex, no prefix. Tokens and public keys
/// must be strictly below it.
pub const FIELD_PRIME_HEX: &str = "800000000000011000000000000000000000000000000000000000000000001";

/// Largest expiration the packed message can hold, in hours.
pub const MAX_EXPIRATION_TIMESTAMP: u64 = (1 << EXPIRATION_BITS) - 1;

/// A batch transfer item whose values have been parsed and range checked.
///
/// Hex values are normalized: lowercase, `0x` prefix, no leading zeros.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TransferMsg {
    pub amount: u64,
    pub nonce: u64,
    pub sender_vault_id: u64,
    pub token: String,
    pub receiver_vault_id: u64,
    pub receiver_public_key: String,
    pub expiration_timestamp: u64,
}

impl TryFrom<&BatchTransferItem> for TransferMsg {
    type Error = TransferMsgError;

    fn try_from(item: &BatchTransferItem) -> Result<Self, Self::Error> {
        let msg = Self {
            amount: parse_decimal("amount", item.amount(), AMOUNT_BITS)?,
            nonce: check_integer("nonce", item.nonce(), NONCE_BITS)?,
            sender_vault_id: parse_decimal("vault_id", item.vault_id(), VAULT_ID_BITS)?,
            token: parse_hex("asset_id", item.asset_id())?,
            receiver_vault_id: parse_decimal(
                "receiver_vault_id",
                item.receiver_vault_id(),
                VAULT_ID_BITS,
            )?,
            receiver_public_key: parse_hex("receiver", item.receiver())?,
            expiration_timestamp: check_integer(
                "expiration_timestamp",
                item.expiration_timestamp(),
                EXPIRATION_BITS,
            )?,
        };
        tracing::debug!(
            token = %msg.token,
            sender_vault_id = msg.sender_vault_id,
            receiver_vault_id = msg.receiver_vault_id,
            "built transfer message"
        );
        Ok(msg)
    }
}

impl TryFrom<BatchTransferItem> for TransferMsg {
    type Error = TransferMsgError;

    fn try_from(item: BatchTransferItem) -> Result<Self, Self::Error> {
        Self::try_from(&item)
    }
}

fn fits(value: u64, bits: u32) -> bool {
    bits >= 64 || value >> bits == 0
}

fn parse_decimal(field: &'static str, text: &str, bits: u32) -> Result<u64, TransferMsgError> {
    if text.is_empty() {
        return Err(TransferMsgError::Missing { field });
    }
    if let Some(bad) = text.chars().find(|c| !c.is_ascii_digit()) {
        return Err(TransferMsgError::InvalidDecimal {
            field,
            reason: format!("unexpected character {bad:?}"),
        });
    }
    // All digits, so the only possible parse failure is overflow.
    let value: u64 = text
        .parse()
        .map_err(|_| TransferMsgError::OutOfRange { field, bits })?;
    if !fits(value, bits) {
        return Err(TransferMsgError::OutOfRange { field, bits });
    }
    Ok(value)
}

fn check_integer(field: &'static str, value: Option<i64>, bits: u32) -> Result<u64, TransferMsgError> {
    let value = value.ok_or(TransferMsgError::Missing { field })?;
    let unsigned = u64::try_from(value).map_err(|_| TransferMsgError::Negative { field, value })?;
    if !fits(unsigned, bits) {
        return Err(TransferMsgError::OutOfRange { field, bits });
    }
    Ok(unsigned)
}

fn parse_hex(field: &'static str, text: &str) -> Result<String, TransferMsgError> {
    if text.is_empty() {
        return Err(TransferMsgError::Missing { field });
    }
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    if digits.is_empty() {
        return Err(TransferMsgError::InvalidHex {
            field,
            reason: "no digits after prefix".to_string(),
        });
    }
    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(TransferMsgError::InvalidHex {
            field,
            reason: format!("unexpected character {bad:?}"),
        });
    }
    let significant = digits.trim_start_matches('0').to_ascii_lowercase();
    // Same-length lowercase hex strings order like the numbers they spell.
    let below_prime = significant.len() < FIELD_PRIME_HEX.len()
        || (significant.len() == FIELD_PRIME_HEX.len() && significant.as_str() < FIELD_PRIME_HEX);
    if !below_prime {
        return Err(TransferMsgError::NotFieldElement { field });
    }
    if significant.is_empty() {
        return Ok("0x0".to_string());
    }
    Ok(format!("0x{significant}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Signature;

    fn item() -> BatchTransferItem {
        BatchTransferItem::of(
            "0x00AB",
            "0xabc",
            "100",
            Some(1),
            "1",
            "0x2",
            "2",
            Some(MAX_EXPIRATION_TIMESTAMP as i64),
            Some(Signature::new("0x1", "0x2")),
        )
    }

    #[test]
    fn test_converts_valid_item() {
        let msg = TransferMsg::try_from(&item()).unwrap();
        assert_eq!(
            msg,
            TransferMsg {
                amount: 100,
                nonce: 1,
                sender_vault_id: 1,
                token: "0xab".to_string(),
                receiver_vault_id: 2,
                receiver_public_key: "0x2".to_string(),
                expiration_timestamp: 4194303,
            }
        );
    }

    #[test]
    fn test_signature_not_required() {
        let mut it = item();
        it.set_signature(None);
        assert!(TransferMsg::try_from(it).is_ok());
    }

    #[test]
    fn test_missing_fields() {
        let mut it = item();
        it.set_nonce(None);
        assert_eq!(
            TransferMsg::try_from(&it),
            Err(TransferMsgError::Missing { field: "nonce" })
        );

        let mut it = item();
        it.set_amount("");
        assert_eq!(
            TransferMsg::try_from(&it),
            Err(TransferMsgError::Missing { field: "amount" })
        );

        let err = TransferMsg::try_from(&BatchTransferItem::new()).unwrap_err();
        assert_eq!(err, TransferMsgError::Missing { field: "amount" });
    }

    #[test]
    fn test_rejects_non_decimal_amount() {
        let mut it = item();
        it.set_amount("1.5");
        assert!(matches!(
            TransferMsg::try_from(&it),
            Err(TransferMsgError::InvalidDecimal { field: "amount", .. })
        ));
    }

    #[test]
    fn test_vault_id_bit_width() {
        let mut it = item();
        it.set_vault_id(((1u64 << VAULT_ID_BITS) - 1).to_string());
        assert!(TransferMsg::try_from(&it).is_ok());

        it.set_vault_id((1u64 << VAULT_ID_BITS).to_string());
        assert_eq!(
            TransferMsg::try_from(&it),
            Err(TransferMsgError::OutOfRange { field: "vault_id", bits: 31 })
        );
    }

    #[test]
    fn test_amount_overflowing_u64() {
        let mut it = item();
        it.set_amount("99999999999999999999999");
        assert_eq!(
            TransferMsg::try_from(&it),
            Err(TransferMsgError::OutOfRange { field: "amount", bits: 63 })
        );
    }

    #[test]
    fn test_expiration_in_seconds_is_out_of_range() {
        let mut it = item();
        it.set_expiration_timestamp(Some(1699999999));
        assert_eq!(
            TransferMsg::try_from(&it),
            Err(TransferMsgError::OutOfRange { field: "expiration_timestamp", bits: 22 })
        );
    }

    #[test]
    fn test_negative_nonce() {
        let mut it = item();
        it.set_nonce(Some(-1));
        assert_eq!(
            TransferMsg::try_from(&it),
            Err(TransferMsgError::Negative { field: "nonce", value: -1 })
        );
    }

    #[test]
    fn test_hex_normalization() {
        assert_eq!(parse_hex("asset_id", "0X00").unwrap(), "0x0");
        assert_eq!(parse_hex("asset_id", "DeadBeef").unwrap(), "0xdeadbeef");
        assert!(matches!(
            parse_hex("asset_id", "0x"),
            Err(TransferMsgError::InvalidHex { .. })
        ));
        assert!(matches!(
            parse_hex("receiver", "0xzz"),
            Err(TransferMsgError::InvalidHex { field: "receiver", .. })
        ));
    }

    #[test]
    fn test_hex_field_element_bound() {
        let below_prime = "0x800000000000011000000000000000000000000000000000000000000000000";
        assert_eq!(parse_hex("receiver", below_prime).unwrap(), below_prime);

        let padded = "0x000800000000000011000000000000000000000000000000000000000000000000";
        assert_eq!(parse_hex("receiver", padded).unwrap(), below_prime);

        let prime = format!("0x{FIELD_PRIME_HEX}");
        assert_eq!(
            parse_hex("receiver", &prime),
            Err(TransferMsgError::NotFieldElement { field: "receiver" })
        );

        let upper_case_prime = prime.to_ascii_uppercase();
        assert_eq!(
            parse_hex("asset_id", &upper_case_prime),
            Err(TransferMsgError::NotFieldElement { field: "asset_id" })
        );

        let all_f = format!("0x{}", "f".repeat(63));
        assert!(parse_hex("receiver", &all_f).is_err());

        let too_wide = format!("0x1{}", "0".repeat(63));
        assert!(parse_hex("receiver", &too_wide).is_err());
    }

    #[test]
    fn test_receiver_above_prime_rejected() {
        let mut it = item();
        it.set_receiver("0x800000000000011000000000000000000000000000000000000000000000002");
        assert_eq!(
            TransferMsg::try_from(&it),
            Err(TransferMsgError::NotFieldElement { field: "receiver" })
        );
    }
}
