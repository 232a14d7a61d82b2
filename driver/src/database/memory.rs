use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::prelude::entity::{Rental, RentalId, Scooter, ScooterId};
use kernel::KernelError;

pub use self::{rental::*, scooter::*};

mod rental;
mod scooter;

/// In-memory tables keyed by id. Backs tests and local runs through the
/// same query/modifier interfaces as the Postgres backend.
#[derive(Debug, Default)]
pub struct InMemoryDatabase {
    scooters: Arc<Mutex<HashMap<ScooterId, Scooter>>>,
    rentals: Arc<Mutex<RentalTable>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl DatabaseConnection<InMemoryConnection> for InMemoryDatabase {
    async fn transact(&self) -> error_stack::Result<InMemoryConnection, KernelError> {
        Ok(InMemoryConnection {
            scooters: Arc::clone(&self.scooters),
            rentals: Arc::clone(&self.rentals),
        })
    }
}

/// Handle onto the shared tables. Writes apply immediately: `commit` is a
/// no-op and `roll_back` cannot undo them. Lifecycle operations stay atomic
/// regardless because validation precedes every write and the per-scooter
/// row lock keeps competing writers out of the sequence.
pub struct InMemoryConnection {
    pub(in crate::database::memory) scooters: Arc<Mutex<HashMap<ScooterId, Scooter>>>,
    pub(in crate::database::memory) rentals: Arc<Mutex<RentalTable>>,
}

#[async_trait::async_trait]
impl Transaction for InMemoryConnection {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }
}

/// Rental rows plus a per-scooter index in insertion order. The index tail
/// is the most recent rental, which keeps the open-rental check O(1)
/// instead of rescanning history.
#[derive(Debug, Default)]
pub struct RentalTable {
    pub(in crate::database::memory) rows: HashMap<RentalId, Rental>,
    pub(in crate::database::memory) by_scooter: HashMap<ScooterId, Vec<RentalId>>,
}
