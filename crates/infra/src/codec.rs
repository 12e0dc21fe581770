//! Snapshot serialization.
//!
//! The byte layout is private to the codec and not a stable format: bytes are
//! only ever read back by the codec that wrote them.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::RepositoryError;

/// Turns any serde-shaped snapshot into opaque bytes and back.
pub trait SnapshotCodec: Send + Sync {
    fn encode<S>(&self, snapshot: &S) -> Result<Vec<u8>, RepositoryError>
    where
        S: Serialize + ?Sized;

    fn decode<S>(&self, bytes: &[u8]) -> Result<S, RepositoryError>
    where
        S: DeserializeOwned;
}

/// JSON codec backed by `serde_json`.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonSnapshotCodec;

impl SnapshotCodec for JsonSnapshotCodec {
    fn encode<S>(&self, snapshot: &S) -> Result<Vec<u8>, RepositoryError>
    where
        S: Serialize + ?Sized,
    {
        Ok(serde_json::to_vec(snapshot)?)
    }

    fn decode<S>(&self, bytes: &[u8]) -> Result<S, RepositoryError>
    where
        S: DeserializeOwned,
    {
        Ok(serde_json::from_slice(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use playground_core::{CustomerId, InvoiceId};
    use playground_invoicing::{InvoiceDto, InvoiceItemDto};

    #[test]
    fn decode_reads_back_what_encode_wrote() {
        let mut dto = InvoiceDto::new(InvoiceId::new(), CustomerId::new());
        dto.push_item("ABIB123", 100).unwrap();
        dto.push_item("MIKE456", 150).unwrap();

        let codec = JsonSnapshotCodec;
        let bytes = codec.encode(&dto).unwrap();

        assert_eq!(codec.decode::<InvoiceDto>(&bytes).unwrap(), dto);
    }

    #[test]
    fn item_snapshots_are_encodable_too() {
        let item = InvoiceItemDto {
            invoice_item_id: 3,
            product_code: "WXYZ999".to_string(),
            quantity: 150,
        };

        let codec = JsonSnapshotCodec;
        let bytes = codec.encode(&item).unwrap();

        assert_eq!(codec.decode::<InvoiceItemDto>(&bytes).unwrap(), item);
    }

    #[test]
    fn garbage_is_a_codec_error() {
        let err = JsonSnapshotCodec
            .decode::<InvoiceDto>(b"\x00\x01not json")
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Codec(_)));
    }
}
