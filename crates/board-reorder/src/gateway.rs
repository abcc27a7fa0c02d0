//! Group Mutation Gateway
//!
//! Outbound boundary: finalized group replacements are handed to a
//! [`GroupGateway`] implementation for persistence or broadcast. The
//! engine's responsibility ends at producing a correct snapshot; a
//! gateway failure is reported upward and never rolls the board back.

use thiserror::Error;

use crate::model::Group;

/// Persistence/broadcast failure reported back to the caller
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("failed to persist group {id}: {reason}")]
    Persist { id: String, reason: String },
}

/// Receiver for finalized group replacements. Each call carries the full
/// replacement item sequence for one group id and is authoritative for
/// that group; implementations must not re-derive ordering.
pub trait GroupGateway {
    fn group_updated(&self, group: &Group) -> Result<(), GatewayError>;
}

/// Gateway that only logs, for tests and headless runs
#[derive(Debug, Default)]
pub struct LoggingGateway;

impl GroupGateway for LoggingGateway {
    fn group_updated(&self, group: &Group) -> Result<(), GatewayError> {
        log::info!("group {} updated ({} items)", group.id, group.items.len());
        Ok(())
    }
}
