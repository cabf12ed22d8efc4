//! Use-case orchestration over the inventory source
//!
//! Each call fetches its own candidate set, normalises it, and runs the pure
//! pipeline over that private copy. Nothing is cached between requests.

use std::collections::HashSet;
use std::sync::Arc;

use isoportal_api_types::status::status_eq;
use isoportal_api_types::ContainerRecord;
use isoportal_interfaces::{
    CandidateQuery, ContactSettings, ContactSettingsRepository, EmailSink, InventorySource,
};
use tracing::{debug, info, warn};

use crate::clock::{Clock, SystemClock};
use crate::contact::{self, ContactInfo, ContactRequest, EffectiveContact, Sender};
use crate::error::Result;
use crate::export::{scope_title, ExportTable, NullPlaceholder};
use crate::report::{
    self, AlertsViewData, BookingReportQuery, BookingReportViewData, DashboardViewData, DocumentEntry,
    InventoryPageView, ReportViewData,
};
use crate::scope::{CallerScope, InventoryQuery, QueryPlan};
use crate::settings::ReportSettings;
use crate::sort::{self, SortKey};

/// Recompute derived fields and drop records that would break code uniqueness
pub fn normalize_records(records: Vec<ContainerRecord>, today: chrono::NaiveDate) -> Vec<ContainerRecord> {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter_map(|mut record| {
            if record.code.trim().is_empty() {
                warn!(client = %record.client, "Dropping inventory record with empty code");
                return None;
            }
            if !seen.insert(record.code.clone()) {
                warn!(code = %record.code, "Dropping duplicate inventory record");
                return None;
            }
            record.refresh_days_in_status(today);
            Some(record)
        })
        .collect()
}

pub struct InventoryService {
    source: Arc<dyn InventorySource>,
    clock: Arc<dyn Clock>,
    settings: ReportSettings,
}

impl InventoryService {
    pub fn new(source: Arc<dyn InventorySource>, settings: ReportSettings) -> Self {
        Self {
            source,
            clock: Arc::new(SystemClock),
            settings,
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn settings(&self) -> &ReportSettings {
        &self.settings
    }

    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    async fn fetch(&self, query: &CandidateQuery) -> Result<Vec<ContainerRecord>> {
        let records = self.source.fetch_candidates(query).await?;
        debug!(
            source = self.source.name(),
            client = ?query.client,
            status = ?query.status,
            search = ?query.search,
            fetched = records.len(),
            "Fetched inventory candidates"
        );
        Ok(normalize_records(records, self.clock.today()))
    }

    /// Scoped records for screens that take no filter beyond the caller's scope
    async fn fetch_scoped(&self, scope: &CallerScope) -> Result<Vec<ContainerRecord>> {
        let query = CandidateQuery {
            client: scope.effective_client(None),
            ..Default::default()
        };
        self.fetch(&query).await
    }

    /// Filter and sort an inventory request without paging it
    async fn filtered_sorted(&self, scope: &CallerScope, query: &InventoryQuery) -> Result<Vec<ContainerRecord>> {
        let plan = QueryPlan::build(scope, query);
        debug!(pushdown = ?plan.fetch, residual = ?plan.residual, "Planned inventory query");
        let candidates = self.fetch(&plan.fetch).await?;
        let mut records = plan.residual.apply(candidates, self.clock.today());
        sort::sort_records(
            &mut records,
            SortKey::parse(query.sort_by.as_deref()),
            query.ascending.unwrap_or(true),
        );
        Ok(records)
    }

    pub async fn inventory_page(&self, scope: &CallerScope, query: &InventoryQuery) -> Result<InventoryPageView> {
        let records = self.filtered_sorted(scope, query).await?;
        let cards = report::inventory_cards(&records, self.clock.today(), &self.settings);

        let clients = if scope.is_admin() {
            self.source.fetch_distinct_clients().await?
        } else {
            Vec::new()
        };
        let status_catalog = self.source.fetch_status_catalog().await?;

        let page = sort::paginate(records, query.page, query.page_size);
        info!(
            total = page.total_count,
            page = page.page,
            pages = page.total_pages,
            "Served inventory page"
        );

        Ok(InventoryPageView {
            page,
            sort_by: SortKey::parse(query.sort_by.as_deref()),
            ascending: query.ascending.unwrap_or(true),
            selected_statuses: query.status_values(),
            upcoming: query.upcoming,
            cards,
            clients,
            status_catalog,
        })
    }

    pub async fn inventory_export(
        &self,
        scope: &CallerScope,
        query: &InventoryQuery,
        placeholder: NullPlaceholder,
    ) -> Result<ExportTable> {
        let records = self.filtered_sorted(scope, query).await?;
        Ok(ExportTable::inventory(scope_title(scope), &records, placeholder))
    }

    /// Look up one record by code. Scope checks are the caller's job: use
    /// [`CallerScope::can_view`] on the result.
    pub async fn find_by_code(&self, code: &str) -> Result<Option<ContainerRecord>> {
        let code = code.trim();
        if code.is_empty() {
            return Ok(None);
        }
        let today = self.clock.today();
        Ok(self.source.fetch_by_code(code).await?.map(|mut record| {
            record.refresh_days_in_status(today);
            record
        }))
    }

    pub async fn documents(&self, scope: &CallerScope, search: Option<&str>) -> Result<Vec<DocumentEntry>> {
        let query = CandidateQuery {
            client: scope.effective_client(None),
            status: None,
            search: search.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string),
        };
        let mut records = self.fetch(&query).await?;
        sort::sort_records(&mut records, SortKey::Code, true);
        Ok(records.iter().map(DocumentEntry::from).collect())
    }

    pub async fn dashboard(&self, scope: &CallerScope) -> Result<DashboardViewData> {
        let records = self.fetch_scoped(scope).await?;
        Ok(report::dashboard(
            &records,
            scope.is_admin(),
            self.clock.today(),
            &self.settings,
        ))
    }

    pub async fn alerts(&self, scope: &CallerScope) -> Result<AlertsViewData> {
        let records = self.fetch_scoped(scope).await?;
        Ok(report::alerts(&records, self.clock.today(), &self.settings))
    }

    /// Size of the critical set, for the alert badge
    pub async fn alert_count(&self, scope: &CallerScope) -> Result<usize> {
        let records = self.fetch_scoped(scope).await?;
        Ok(report::critical_total(&records, self.clock.today(), &self.settings))
    }

    pub async fn report(
        &self,
        scope: &CallerScope,
        client: Option<&str>,
        status: Option<&str>,
    ) -> Result<ReportViewData> {
        let client_filter = scope.effective_client(client);
        let status_filter = status.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string);
        let query = CandidateQuery {
            client: client_filter.clone(),
            ..Default::default()
        };
        let mut records = self.fetch(&query).await?;
        if let Some(wanted) = status_filter.as_deref() {
            records.retain(|r| status_eq(&r.status, wanted));
        }
        Ok(report::bi_report(
            &records,
            client_filter,
            status_filter,
            self.clock.today(),
            &self.settings,
        ))
    }

    pub async fn report_export(&self, scope: &CallerScope, placeholder: NullPlaceholder) -> Result<ExportTable> {
        let mut records = self.fetch_scoped(scope).await?;
        sort::sort_records(&mut records, SortKey::Code, true);
        Ok(ExportTable::inventory(scope_title(scope), &records, placeholder))
    }

    pub async fn booking_report(
        &self,
        scope: &CallerScope,
        filters: BookingReportQuery,
    ) -> Result<BookingReportViewData> {
        let records = self.fetch_scoped(scope).await?;
        Ok(report::booking_report(&records, filters, self.clock.today(), &self.settings))
    }

    pub async fn clients(&self) -> Result<Vec<String>> {
        Ok(self.source.fetch_distinct_clients().await?)
    }

    pub async fn status_catalog(&self) -> Result<Vec<String>> {
        Ok(self.source.fetch_status_catalog().await?)
    }

    pub async fn health_check(&self) -> Result<()> {
        Ok(self.source.health_check().await?)
    }
}

/// Contact page and contact form use cases
pub struct ContactService {
    repository: Arc<dyn ContactSettingsRepository>,
    sink: Arc<dyn EmailSink>,
    defaults: ContactSettings,
}

impl ContactService {
    pub fn new(
        repository: Arc<dyn ContactSettingsRepository>,
        sink: Arc<dyn EmailSink>,
        defaults: ContactSettings,
    ) -> Self {
        Self {
            repository,
            sink,
            defaults,
        }
    }

    pub async fn effective(&self) -> Result<EffectiveContact> {
        let stored = self.repository.load().await?;
        Ok(EffectiveContact::resolve(stored.as_ref(), &self.defaults))
    }

    pub async fn info(&self) -> Result<ContactInfo> {
        Ok(ContactInfo::from(&self.effective().await?))
    }

    pub async fn send(&self, request: &ContactRequest, sender: &Sender) -> Result<()> {
        let effective = self.effective().await?;
        let mail = contact::compose(&effective, request, sender)?;
        info!(subject = %mail.subject, "Sending contact mail");
        self.sink.send(mail).await?;
        Ok(())
    }

    /// Stored settings with the password masked
    pub async fn stored_settings(&self) -> Result<ContactSettings> {
        let stored = self.repository.load().await?.unwrap_or_default();
        Ok(contact::masked(stored))
    }

    pub async fn update_settings(&self, incoming: ContactSettings) -> Result<ContactSettings> {
        let existing = self.repository.load().await?;
        let merged = contact::merge_for_save(existing, incoming);
        self.repository.save(merged.clone()).await?;
        info!("Contact settings updated");
        Ok(contact::masked(merged))
    }
}
