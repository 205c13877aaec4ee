//! CarbonService: the entry points a transport layer calls.
//!
//! Reads are public. Every mutation first resolves the caller through the
//! configured `AuthContext` and fails with `AuthError` before touching the store.

use std::sync::Arc;

use carbon_core::auth::{AuthContext, AuthRequest, UserId};
use carbon_core::config::CarbonConfig;
use carbon_core::errors::{CarbonResult, InputError};
use carbon_core::models::{DateRange, EmissionFactor};
use carbon_core::mutation_span;
use carbon_core::traits::EmissionStore;
use chrono::NaiveDate;

use crate::aggregation::HumanFactorPolicy;
use crate::population::{self, ActivityInput, PopulationInput, PopulationRecorded};
use crate::recommendations::RecommendationReport;
use crate::report::{CumulativeHumanPayload, DashboardPayload, ReportingFacade};

pub struct CarbonService {
    store: Arc<dyn EmissionStore>,
    auth: Arc<dyn AuthContext>,
    facade: ReportingFacade,
    human_factor: HumanFactorPolicy,
    default_window_days: u32,
}

impl CarbonService {
    pub fn new(
        store: Arc<dyn EmissionStore>,
        auth: Arc<dyn AuthContext>,
        human_factor: HumanFactorPolicy,
        default_window_days: u32,
    ) -> Self {
        Self {
            facade: ReportingFacade::new(Arc::clone(&store), human_factor),
            store,
            auth,
            human_factor,
            default_window_days,
        }
    }

    pub fn from_config(
        store: Arc<dyn EmissionStore>,
        auth: Arc<dyn AuthContext>,
        config: &CarbonConfig,
    ) -> Self {
        Self::new(
            store,
            auth,
            HumanFactorPolicy::from_config(&config.emissions),
            config.report.effective_default_window_days(),
        )
    }

    pub fn facade(&self) -> &ReportingFacade {
        &self.facade
    }

    // --- Public reads ---

    pub fn dashboard(&self, range: &DateRange) -> CarbonResult<DashboardPayload> {
        self.facade.dashboard(range)
    }

    /// Dashboard with optional bounds; absent bounds use the configured window.
    pub fn dashboard_from_strings(
        &self,
        start: Option<&str>,
        end: Option<&str>,
        today: NaiveDate,
    ) -> CarbonResult<DashboardPayload> {
        self.facade
            .dashboard_from_strings(start, end, today, self.default_window_days)
    }

    pub fn recommendations(&self) -> CarbonResult<RecommendationReport> {
        self.facade.recommendations()
    }

    pub fn cumulative_human_stats(&self) -> CarbonResult<CumulativeHumanPayload> {
        let stats = self.facade.aggregation().cumulative_human_stats()?;
        Ok(CumulativeHumanPayload::from(stats))
    }

    pub fn list_factors(&self) -> CarbonResult<Vec<EmissionFactor>> {
        Ok(self.store.list_factors()?)
    }

    // --- Authenticated mutations ---

    pub fn record_population(
        &self,
        request: &AuthRequest,
        input: &PopulationInput,
    ) -> CarbonResult<PopulationRecorded> {
        let user = self.authenticate(request)?;
        let _span = mutation_span!("record_population", user).entered();
        population::record_population(self.store.as_ref(), self.human_factor, input)
    }

    pub fn record_activity(
        &self,
        request: &AuthRequest,
        input: &ActivityInput,
    ) -> CarbonResult<i64> {
        let user = self.authenticate(request)?;
        let _span = mutation_span!("record_activity", user).entered();
        population::record_activity(self.store.as_ref(), input)
    }

    pub fn record_activity_batch(
        &self,
        request: &AuthRequest,
        inputs: &[ActivityInput],
    ) -> CarbonResult<usize> {
        let user = self.authenticate(request)?;
        let _span = mutation_span!("record_activity_batch", user).entered();
        let inserted = population::record_activity_batch(self.store.as_ref(), inputs)?;
        tracing::info!(inserted, "activity batch recorded");
        Ok(inserted)
    }

    /// Create or replace a factor row.
    pub fn set_factor(&self, request: &AuthRequest, factor: &EmissionFactor) -> CarbonResult<()> {
        let user = self.authenticate(request)?;
        let _span = mutation_span!("set_factor", user).entered();

        if factor.source_type.trim().is_empty() {
            return Err(InputError::missing("source_type").into());
        }
        if factor.factor_unit.trim().is_empty() {
            return Err(InputError::missing("factor_unit").into());
        }
        if !factor.factor.is_finite() || factor.factor < 0.0 {
            return Err(
                InputError::invalid("factor", "must be a finite non-negative number").into(),
            );
        }

        self.store.upsert_factor(factor)?;
        tracing::info!(source_type = %factor.source_type, factor = factor.factor, "factor set");
        Ok(())
    }

    fn authenticate(&self, request: &AuthRequest) -> CarbonResult<UserId> {
        Ok(self.auth.authenticate(request)?)
    }
}
