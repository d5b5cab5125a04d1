//! Ledger store
//!
//! Owns the canonical transaction collection and the filter state. The
//! collection is kept in ledger order (newest date first, then most recently
//! updated) after every operation, and every mutation writes the whole
//! collection back through the persistence layer before returning.
//!
//! Nothing here fails. Missing or unreadable storage reseeds, unknown ids are
//! no-ops, non-finite amounts become zero, and a failed write is logged while
//! the in-memory change stands.

use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::models::month::now;
use crate::models::transaction::{clean_description, sort_ledger};
use crate::models::{
    CategoryFilter, Filters, FiltersPatch, Money, MonthKey, Transaction, TransactionId,
    TransactionInput, TransactionPatch, TypeFilter,
};
use crate::reports::summary::{compute_summary, filter_transactions, Summary};
use crate::storage::envelope::{self, ReadOutcome, STORAGE_KEY, STORAGE_VERSION};
use crate::storage::init::demo_transactions;
use crate::storage::KeyValueStore;

/// Why `hydrate` fell back to the seed dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedReason {
    /// Nothing stored yet
    Missing,
    /// The backend could not be read
    Unreadable,
    /// Stored text was not a valid envelope
    Corrupt,
    /// Stored envelope had another version
    VersionMismatch { found: u64 },
    /// Stored collection was empty and reseeding empty ledgers is enabled
    Empty,
}

/// Which path `hydrate` took
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HydrateOutcome {
    Loaded { count: usize },
    Seeded { reason: SeedReason },
}

impl HydrateOutcome {
    pub fn was_seeded(&self) -> bool {
        matches!(self, Self::Seeded { .. })
    }
}

/// The ledger state container
///
/// Lifecycle: construct (optionally with a custom seed) → [`hydrate`] → drop.
///
/// [`hydrate`]: LedgerStore::hydrate
pub struct LedgerStore<S: KeyValueStore> {
    backend: S,
    key: String,
    seed: Option<Vec<Transaction>>,
    reseed_when_empty: bool,
    items: Vec<Transaction>,
    filters: Filters,
    hydrated: bool,
}

impl<S: KeyValueStore> LedgerStore<S> {
    /// Store over `backend` using the default key and the demo seed
    pub fn new(backend: S) -> Self {
        Self {
            backend,
            key: STORAGE_KEY.to_string(),
            seed: None,
            reseed_when_empty: false,
            items: Vec::new(),
            filters: Filters::default(),
            hydrated: false,
        }
    }

    /// Store configured from user settings
    pub fn from_settings(backend: S, settings: &Settings) -> Self {
        Self::new(backend)
            .with_key(settings.storage_key.clone())
            .reseed_when_empty(settings.reseed_when_empty)
    }

    /// Persist under `key` instead of the default
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Seed with `seed` instead of the demo dataset
    pub fn with_seed(mut self, seed: Vec<Transaction>) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Also reseed when the stored collection is empty
    pub fn reseed_when_empty(mut self, enabled: bool) -> Self {
        self.reseed_when_empty = enabled;
        self
    }

    /// Load the collection from storage, seeding it when nothing usable is
    /// stored. Storage is re-read on every call.
    ///
    /// A stored empty collection loads as empty. It is reseeded only when
    /// `reseed_when_empty` is set.
    pub fn hydrate(&mut self) -> HydrateOutcome {
        let outcome =
            envelope::read_envelope::<Vec<Transaction>, _>(&self.backend, &self.key, STORAGE_VERSION);
        self.hydrated = true;

        let reason = match outcome {
            ReadOutcome::Loaded(items) if items.is_empty() && self.reseed_when_empty => {
                SeedReason::Empty
            }
            ReadOutcome::Loaded(mut items) => {
                sort_ledger(&mut items);
                let count = items.len();
                self.items = items;
                debug!(key = %self.key, count, "ledger loaded");
                return HydrateOutcome::Loaded { count };
            }
            ReadOutcome::Missing => SeedReason::Missing,
            ReadOutcome::Unreadable(err) => {
                warn!(key = %self.key, error = %err, "storage unreadable, reseeding");
                SeedReason::Unreadable
            }
            ReadOutcome::Corrupt(err) => {
                warn!(key = %self.key, error = %err, "stored ledger is corrupt, reseeding");
                SeedReason::Corrupt
            }
            ReadOutcome::VersionMismatch { found, expected } => {
                warn!(key = %self.key, found, expected, "stored ledger version mismatch, reseeding");
                SeedReason::VersionMismatch { found }
            }
        };

        self.items = self.seed_items();
        info!(key = %self.key, reason = ?reason, count = self.items.len(), "ledger seeded");
        self.persist();
        HydrateOutcome::Seeded { reason }
    }

    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    /// Record a new transaction and return it
    pub fn create(&mut self, input: TransactionInput) -> Transaction {
        let now = now();
        let txn = Transaction {
            id: self.fresh_id(),
            kind: input.kind,
            amount: Money::from_decimal(input.amount.abs()),
            date: input.date,
            category_id: input.category_id,
            description: clean_description(input.description.as_deref()),
            created_at: now,
            updated_at: now,
        };

        self.items.insert(0, txn.clone());
        sort_ledger(&mut self.items);
        debug!(id = %txn.id, "transaction created");
        self.persist();
        txn
    }

    /// Merge `patch` into the transaction with `id`
    ///
    /// Returns `false` and changes nothing when no such transaction exists.
    pub fn update(&mut self, id: &TransactionId, patch: TransactionPatch) -> bool {
        let Some(txn) = self.items.iter_mut().find(|t| &t.id == id) else {
            debug!(id = %id, "update ignored, no such transaction");
            return false;
        };

        if let Some(kind) = patch.kind {
            txn.kind = kind;
        }
        if let Some(amount) = patch.amount {
            txn.amount = Money::from_decimal(amount.abs());
        }
        if let Some(date) = patch.date {
            txn.date = date;
        }
        if let Some(category_id) = patch.category_id {
            txn.category_id = category_id;
        }
        if let Some(description) = patch.description {
            txn.description = clean_description(Some(&description));
        }
        // Never move backwards, even if the clock does
        txn.updated_at = now().max(txn.updated_at);

        sort_ledger(&mut self.items);
        debug!(id = %id, "transaction updated");
        self.persist();
        true
    }

    /// Remove the transaction with `id`; returns whether one was removed
    pub fn delete(&mut self, id: &TransactionId) -> bool {
        let before = self.items.len();
        self.items.retain(|t| &t.id != id);
        if self.items.len() == before {
            debug!(id = %id, "delete ignored, no such transaction");
            return false;
        }

        debug!(id = %id, "transaction deleted");
        self.persist();
        true
    }

    /// Clear every transaction and reset filters
    pub fn reset_all(&mut self) {
        self.items.clear();
        self.filters = Filters::default();
        info!(key = %self.key, "ledger cleared");
        self.persist();
    }

    /// Replace the collection with the seed dataset and reset filters
    pub fn reset_to_demo(&mut self) {
        self.items = self.seed_items();
        self.filters = Filters::default();
        info!(key = %self.key, count = self.items.len(), "ledger reset to demo data");
        self.persist();
    }

    pub fn set_month(&mut self, month: MonthKey) {
        self.filters.month = month;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filters.search = search.into();
    }

    pub fn set_type_filter(&mut self, kind: impl Into<TypeFilter>) {
        self.filters.kind = kind.into();
    }

    pub fn set_category_filter(&mut self, category: impl Into<CategoryFilter>) {
        self.filters.category = category.into();
    }

    /// Replace only the filter fields `patch` sets
    pub fn set_filters(&mut self, patch: FiltersPatch) {
        self.filters.apply(patch);
    }

    /// Reset search, type and category filters, keeping the month
    pub fn clear_optional_filters(&mut self) {
        self.filters.clear_optional();
    }

    /// The whole collection in ledger order
    pub fn transactions(&self) -> &[Transaction] {
        &self.items
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn get(&self, id: &TransactionId) -> Option<&Transaction> {
        self.items.iter().find(|t| &t.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Transactions passing the current filters, in ledger order
    pub fn visible(&self) -> Vec<&Transaction> {
        filter_transactions(&self.items, &self.filters)
    }

    /// Summary of the currently visible transactions
    pub fn visible_summary(&self) -> Summary {
        compute_summary(self.visible())
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }

    pub fn into_backend(self) -> S {
        self.backend
    }

    fn seed_items(&self) -> Vec<Transaction> {
        let mut items = match &self.seed {
            Some(seed) => seed.clone(),
            None => demo_transactions(),
        };
        sort_ledger(&mut items);
        items
    }

    fn fresh_id(&self) -> TransactionId {
        loop {
            let id = TransactionId::generate();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    fn persist(&mut self) {
        if let Err(err) = envelope::write(&mut self.backend, &self.key, STORAGE_VERSION, &self.items)
        {
            warn!(key = %self.key, error = %err, "failed to persist ledger");
        }
    }
}
