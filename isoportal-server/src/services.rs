//! Service construction from the loaded configuration

use std::sync::Arc;

use anyhow::{Context, Result};
use isoportal_config::{ContactDefaultsConfig, PortalConfig, ReportingConfig, SourceKind};
use isoportal_core::{Clock, ContactService, InventoryService, ReportSettings};
use isoportal_http::{MbmClient, MbmConfig};
use isoportal_interfaces::{ContactSettings, InventorySource};
use isoportal_rest_api::AppContext;
use isoportal_storage::{InMemoryContactSettings, InMemoryObservations, LocalInventorySource};
use tracing::info;

use crate::mail::TracingMailSink;

/// Report thresholds as the engine sees them
pub fn report_settings(config: &ReportingConfig) -> ReportSettings {
    ReportSettings {
        stuck_threshold_days: config.stuck_threshold_days,
        critical_window_days: config.critical_window_days,
        upcoming_window_days: config.upcoming_window_days,
        inventory_alert_days: config.inventory_alert_days,
        months_back: config.months_back,
        top_upcoming: config.top_upcoming,
    }
}

/// Configured contact values, used field by field when nothing is stored
pub fn contact_defaults(config: &ContactDefaultsConfig) -> ContactSettings {
    ContactSettings {
        destination_email: config.destination_email.clone(),
        whatsapp_number: config.whatsapp_number.clone(),
        team_name: Some(config.team_name.clone()),
        smtp_host: config.smtp_host.clone(),
        smtp_port: Some(config.smtp_port),
        smtp_enable_ssl: Some(config.smtp_enable_ssl),
        smtp_user: config.smtp_user.clone(),
        smtp_password: config.smtp_password.clone(),
        from_email: config.from_email.clone(),
        from_name: config.from_name.clone(),
    }
}

/// Everything the router needs, built once at startup
#[derive(Clone)]
pub struct ServiceContainer {
    pub source: Arc<dyn InventorySource>,
    pub context: AppContext,
}

impl ServiceContainer {
    pub async fn new(config: &PortalConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        let source = create_source(config, &clock).await?;

        let inventory = InventoryService::new(source.clone(), report_settings(&config.reporting))
            .with_clock(clock.clone());
        let contact = ContactService::new(
            Arc::new(InMemoryContactSettings::new()),
            Arc::new(TracingMailSink),
            contact_defaults(&config.contact),
        );

        let context = AppContext::new(
            Arc::new(inventory),
            Arc::new(contact),
            Arc::new(InMemoryObservations::new()),
            clock,
        );

        Ok(Self { source, context })
    }
}

async fn create_source(config: &PortalConfig, clock: &Arc<dyn Clock>) -> Result<Arc<dyn InventorySource>> {
    match config.source.kind {
        SourceKind::Local => match config.source.fixture_path.as_deref() {
            Some(path) => {
                let source = LocalInventorySource::from_fixture(path)
                    .await
                    .with_context(|| format!("Failed to load inventory fixture {}", path))?;
                info!(path, "Using fixture inventory");
                Ok(Arc::new(source))
            }
            None => Ok(Arc::new(LocalInventorySource::seeded(clock.today()))),
        },
        SourceKind::Mbm => {
            let mbm_config = MbmConfig::try_from(&config.source)?;
            let client = MbmClient::new(mbm_config)?.with_clock(clock.clone());
            info!(base_url = %client.base_url(), "Using MBM inventory");
            Ok(Arc::new(client))
        }
    }
}
