use architecture::RepositoryError;
use thiserror::Error;
use uuid::Uuid;

use crate::model::{
    entity::{OrderStatus, RabStatus},
    vo::Role,
};

pub type OrderResult<T> = Result<T, OrderException>;

#[derive(Error, Debug)]
pub enum OrderException {
    #[error("Invalid argument: {reason}.")]
    InvalidArgument { reason: String },

    #[error("Precondition not met: {reason}.")]
    PreconditionNotMet { reason: String },

    #[error("Cannot {action} while status is {status}.")]
    InvalidTransition {
        action: &'static str,
        status: String,
    },

    #[error("Order: {order_id} is {status} and can no longer be changed.")]
    OrderLocked { order_id: Uuid, status: OrderStatus },

    #[error("RAB: {rab_id} is {status} and its items can no longer be changed.")]
    RabLocked { rab_id: Uuid, status: RabStatus },

    #[error("No {entity} with id: {id}.")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("{role} {actor_id} is not allowed to {action}.")]
    Unauthorized {
        actor_id: Uuid,
        role: Role,
        action: &'static str,
    },

    #[error("Storage error: {source}")]
    StorageError {
        #[source]
        source: anyhow::Error,
    },
}

impl OrderException {
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub fn precondition(reason: impl Into<String>) -> Self {
        Self::PreconditionNotMet {
            reason: reason.into(),
        }
    }

    pub fn invalid_transition(action: &'static str, status: impl ToString) -> Self {
        Self::InvalidTransition {
            action,
            status: status.to_string(),
        }
    }

    /// Validation failures are produced by the core itself; repeating the
    /// same call cannot succeed.
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::StorageError { .. } | Self::NotFound { .. })
    }
}

impl From<anyhow::Error> for OrderException {
    fn from(e: anyhow::Error) -> Self {
        let not_found = e.chain().find_map(|cause| match cause.downcast_ref::<RepositoryError>() {
            Some(RepositoryError::NotFound { entity, id }) => Some((*entity, *id)),
            None => None,
        });
        match not_found {
            Some((entity, id)) => OrderException::NotFound { entity, id },
            None => OrderException::StorageError { source: e },
        }
    }
}
