//! Shared handler state

use std::sync::Arc;

use isoportal_core::{Clock, ContactService, InventoryService};
use isoportal_interfaces::ObservationRepository;

/// Dependencies shared by every handler
#[derive(Clone)]
pub struct AppContext {
    pub inventory: Arc<InventoryService>,
    pub contact: Arc<ContactService>,
    pub observations: Arc<dyn ObservationRepository>,
    /// Timestamps new observations
    pub clock: Arc<dyn Clock>,
}

impl AppContext {
    pub fn new(
        inventory: Arc<InventoryService>,
        contact: Arc<ContactService>,
        observations: Arc<dyn ObservationRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            inventory,
            contact,
            observations,
            clock,
        }
    }
}
