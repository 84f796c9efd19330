//! The ingest pipeline
//!
//! Decode, verify, validate — in that order, each stage gating the next.
//! The pipeline borrows the request buffer and returns a structured
//! outcome; it never panics across the boundary and never re-encodes the
//! item. On acceptance the caller forwards the same bytes it handed in.

use notary_dataitem::DataItem;
use notary_types::{DataItemId, Result, ValidationOutcome};

/// Run one DataItem blob through the full admission pipeline
pub fn process_data_item(raw: &[u8]) -> ValidationOutcome {
    match admit(raw) {
        Ok(id) => {
            tracing::debug!(%id, size = raw.len(), "data item accepted");
            ValidationOutcome::Accepted { id }
        }
        Err(error) => {
            tracing::debug!(%error, size = raw.len(), "data item rejected");
            ValidationOutcome::Rejected { error }
        }
    }
}

fn admit(raw: &[u8]) -> Result<DataItemId> {
    let item = DataItem::parse(raw)?;
    notary_verify::verify(&item)?;
    notary_schema::validate(&item)?;
    Ok(item.id())
}

#[cfg(test)]
mod tests {
    use super::*;
    use notary_types::Error;

    #[test]
    fn test_garbage_is_rejected_not_panicked() {
        for raw in [&b""[..], &[0u8; 1][..], &[0xffu8; 2000][..]] {
            let outcome = process_data_item(raw);
            assert!(!outcome.is_accepted());
        }
    }

    #[test]
    fn test_unsupported_signature_type_surfaces_distinctly() {
        let mut raw = vec![0u8; 2048];
        raw[0] = 0x03;
        match process_data_item(&raw) {
            ValidationOutcome::Rejected {
                error: Error::UnsupportedSignatureType(3),
            } => {}
            other => panic!("expected UnsupportedSignatureType, got {other:?}"),
        }
    }
}
