//! The external write performed at submission time.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use deals_domain::{ListingId, ListingRecord};

use crate::error::StoreError;

/// Abstraction over listing backends. Implementations perform exactly one
/// write per call and never retry on their own.
#[async_trait]
pub trait ListingStore: Send + Sync {
    async fn submit_listing(&self, record: ListingRecord) -> Result<ListingId, StoreError>;
}

#[async_trait]
impl<S: ListingStore + ?Sized> ListingStore for Arc<S> {
    async fn submit_listing(&self, record: ListingRecord) -> Result<ListingId, StoreError> {
        (**self).submit_listing(record).await
    }
}

/// Outcome the mock store produces for each write.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MockBehavior {
    #[default]
    Succeed,
    Fail(String),
}

/// In-memory store that simulates network latency and optional failures.
#[derive(Debug, Default)]
pub struct MockListingStore {
    latency: Duration,
    behavior: Mutex<MockBehavior>,
    records: Mutex<Vec<(ListingId, ListingRecord)>>,
    attempts: AtomicUsize,
}

impl MockListingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        let store = Self::default();
        store.set_behavior(MockBehavior::Fail(reason.into()));
        store
    }

    pub fn set_behavior(&self, behavior: MockBehavior) {
        *self
            .behavior
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = behavior;
    }

    /// Number of write attempts, successful or not.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    pub fn records(&self) -> Vec<(ListingId, ListingRecord)> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl ListingStore for MockListingStore {
    async fn submit_listing(&self, record: ListingRecord) -> Result<ListingId, StoreError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let behavior = self
            .behavior
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        match behavior {
            MockBehavior::Succeed => {
                let id = ListingId::new();
                tracing::debug!(%id, kind = record.kind(), "mock store accepted listing");
                self.records
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .push((id, record));
                Ok(id)
            }
            MockBehavior::Fail(reason) => Err(StoreError::Rejected(reason)),
        }
    }
}

#[cfg(test)]
mod tests {
    use deals_domain::{DiscountDealRecord, DEFAULT_LISTING_STATUS};

    use super::*;

    fn listing(title: &str) -> ListingRecord {
        ListingRecord::DiscountDeal(DiscountDealRecord {
            title: title.to_string(),
            brand_name: "Acme".to_string(),
            category: "Fashion".to_string(),
            description: String::new(),
            discount_value: "20%".to_string(),
            promo_code: String::new(),
            valid_until: None,
            location: String::new(),
            terms: Vec::new(),
            status: DEFAULT_LISTING_STATUS.to_string(),
            is_featured: false,
            image_url: String::new(),
            reference_images: Vec::new(),
        })
    }

    #[tokio::test]
    async fn mock_store_records_successes_and_counts_failures() {
        let store = MockListingStore::new();
        let id = store.submit_listing(listing("first")).await.unwrap();

        store.set_behavior(MockBehavior::Fail("offline".into()));
        let err = store.submit_listing(listing("second")).await.unwrap_err();

        assert_eq!(err, StoreError::Rejected("offline".into()));
        assert_eq!(store.attempts(), 2);
        let records = store.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].0, id);
        assert_eq!(records[0].1.title(), "first");
    }

    #[tokio::test]
    async fn shared_store_forwards_through_arc() {
        let store = Arc::new(MockListingStore::new());
        let shared: Arc<dyn ListingStore> = store.clone();
        shared.submit_listing(listing("shared")).await.unwrap();
        assert_eq!(store.records().len(), 1);
    }
}
