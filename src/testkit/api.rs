//! Mock [`EnergyApi`] for testing.
//!
//! [`ScriptedEnergyApi`] pops the next scripted result for each call and
//! falls back to a happy-path default once a queue is exhausted:
//!
//! - token: `"test-token"`
//! - products: one battery site `"1"` named `"Home"`
//! - status: 50% charged, 100% reserve
//! - backup: echoes the requested percent
//!
//! Every call is appended to a shared log that outlives the API, so tests can
//! assert on what reached the "network" after the orchestrator is done.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use super::domain;
use crate::config::Credentials;
use crate::domain::{AccessToken, Product, ReserveAck, ReservePercent, SiteId, SiteStatus};
use crate::error::Result;
use crate::port::EnergyApi;

/// One recorded call against the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    AccessToken,
    Products,
    SiteStatus(SiteId),
    SetBackupReserve(SiteId, u8),
}

/// Shared view of the calls made so far.
#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<ApiCall>>>);

impl CallLog {
    fn push(&self, call: ApiCall) {
        lock(&self.0).push(call);
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        lock(&self.0).clone()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.0).is_empty()
    }

    /// Percents sent to the backup endpoint, in order.
    pub fn reserve_updates(&self) -> Vec<u8> {
        lock(&self.0)
            .iter()
            .filter_map(|c| match c {
                ApiCall::SetBackupReserve(_, percent) => Some(*percent),
                _ => None,
            })
            .collect()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn pop<T>(queue: &Mutex<VecDeque<T>>) -> Option<T> {
    lock(queue).pop_front()
}

#[derive(Default)]
pub struct ScriptedEnergyApi {
    tokens: Mutex<VecDeque<Result<AccessToken>>>,
    products: Mutex<VecDeque<Result<Vec<Product>>>>,
    statuses: Mutex<VecDeque<Result<SiteStatus>>>,
    updates: Mutex<VecDeque<Result<ReserveAck>>>,
    log: CallLog,
}

impl ScriptedEnergyApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token_result(self, result: Result<AccessToken>) -> Self {
        lock(&self.tokens).push_back(result);
        self
    }

    pub fn with_products(self, products: Vec<Product>) -> Self {
        self.with_products_result(Ok(products))
    }

    pub fn with_products_result(self, result: Result<Vec<Product>>) -> Self {
        lock(&self.products).push_back(result);
        self
    }

    pub fn with_status(self, status: SiteStatus) -> Self {
        self.with_status_result(Ok(status))
    }

    pub fn with_status_result(self, result: Result<SiteStatus>) -> Self {
        lock(&self.statuses).push_back(result);
        self
    }

    pub fn with_update_result(self, result: Result<ReserveAck>) -> Self {
        lock(&self.updates).push_back(result);
        self
    }

    /// Handle to the call log.
    pub fn log(&self) -> CallLog {
        self.log.clone()
    }
}

#[async_trait]
impl EnergyApi for ScriptedEnergyApi {
    fn api_name(&self) -> &'static str {
        "scripted"
    }

    async fn access_token(&self, _credentials: &Credentials) -> Result<AccessToken> {
        self.log.push(ApiCall::AccessToken);
        pop(&self.tokens).unwrap_or_else(|| Ok(AccessToken::new("test-token")))
    }

    async fn products(&self, _token: &AccessToken) -> Result<Vec<Product>> {
        self.log.push(ApiCall::Products);
        pop(&self.products).unwrap_or_else(|| Ok(vec![domain::battery("1", "Home")]))
    }

    async fn site_status(&self, _token: &AccessToken, site_id: &SiteId) -> Result<SiteStatus> {
        self.log.push(ApiCall::SiteStatus(site_id.clone()));
        pop(&self.statuses).unwrap_or_else(|| Ok(domain::status(50.0, 100.0)))
    }

    async fn set_backup_reserve(
        &self,
        _token: &AccessToken,
        site_id: &SiteId,
        percent: ReservePercent,
    ) -> Result<ReserveAck> {
        self.log
            .push(ApiCall::SetBackupReserve(site_id.clone(), percent.value()));
        pop(&self.updates).unwrap_or_else(|| {
            Ok(ReserveAck {
                backup_reserve_percent: Some(f64::from(percent.value())),
            })
        })
    }
}
