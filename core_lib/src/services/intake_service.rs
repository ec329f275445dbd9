use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    error::{AppError, Result},
    models::{
        Booking, BookingCreate, ContactMessage, ContactMessageCreate, Lead, LeadSubmission,
        QuoteRequest, QuoteRequestCreate,
    },
    notifications::{NotificationContent, NotificationDispatcher},
    store::DynRecordStore,
};

/// Validates, persists and announces incoming leads.
#[derive(Clone)]
pub struct LeadService {
    store: DynRecordStore,
    notifier: NotificationDispatcher,
    list_limit: usize,
}

impl LeadService {
    pub fn new(store: DynRecordStore, notifier: NotificationDispatcher, list_limit: usize) -> Self {
        Self {
            store,
            notifier,
            list_limit,
        }
    }

    pub fn notifier(&self) -> &NotificationDispatcher {
        &self.notifier
    }

    pub async fn submit<S>(&self, mut input: S) -> Result<S::Record>
    where
        S: LeadSubmission,
    {
        input.normalize();

        let validation = input.validate_comprehensive();
        if !validation.is_valid {
            return Err(AppError::Validation(validation));
        }

        let record = input.into_record(Uuid::new_v4(), Utc::now());
        let collection = <S::Record as Lead>::COLLECTION;

        let document = serde_json::to_value(&record)?;
        self.store.insert(collection, document).await?;

        info!(id = %record.id(), kind = %collection, "Lead stored");

        self.notifier
            .notify(&record.subject(), &record.html_body())
            .await;

        Ok(record)
    }

    pub async fn list<L>(&self) -> Result<Vec<L>>
    where
        L: Lead,
    {
        let documents = self.store.list(L::COLLECTION, self.list_limit).await?;

        let records = documents
            .into_iter()
            .filter_map(|document| match serde_json::from_value::<L>(document) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(kind = %L::COLLECTION, error = %e, "Skipping undecodable stored record");
                    None
                }
            })
            .collect();

        Ok(records)
    }

    pub async fn submit_quote(&self, input: QuoteRequestCreate) -> Result<QuoteRequest> {
        self.submit(input).await
    }

    pub async fn submit_booking(&self, input: BookingCreate) -> Result<Booking> {
        self.submit(input).await
    }

    pub async fn submit_contact(&self, input: ContactMessageCreate) -> Result<ContactMessage> {
        self.submit(input).await
    }

    pub async fn list_quotes(&self) -> Result<Vec<QuoteRequest>> {
        self.list().await
    }

    pub async fn list_bookings(&self) -> Result<Vec<Booking>> {
        self.list().await
    }
}
