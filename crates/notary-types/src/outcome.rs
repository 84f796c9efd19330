//! Per-request pipeline outcome

use crate::encoding::DataItemId;
use crate::error::Error;

/// The result of running one DataItem through decode, verify, and validate
///
/// The pipeline never panics or throws across its boundary; every request
/// ends in exactly one of these. The HTTP boundary turns `Accepted` into a
/// `200 {id}` and `Rejected` into the status class of the carried error.
#[derive(Debug)]
pub enum ValidationOutcome {
    /// The item is authentic and schema-conformant; forward the original
    /// bytes downstream unmodified
    Accepted {
        /// Derived identifier of the accepted item
        id: DataItemId,
    },
    /// The item was refused; the error names the failing stage
    Rejected {
        /// Why the item was refused
        error: Error,
    },
}

impl ValidationOutcome {
    /// Whether the item was accepted
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationOutcome::Accepted { .. })
    }

    /// The identifier, if the item was accepted
    pub fn id(&self) -> Option<&DataItemId> {
        match self {
            ValidationOutcome::Accepted { id } => Some(id),
            ValidationOutcome::Rejected { .. } => None,
        }
    }
}

impl From<Result<DataItemId, Error>> for ValidationOutcome {
    fn from(result: Result<DataItemId, Error>) -> Self {
        match result {
            Ok(id) => ValidationOutcome::Accepted { id },
            Err(error) => ValidationOutcome::Rejected { error },
        }
    }
}
