//! Response cache keyed by entity and query scope.
//!
//! Lists that are cheap to reuse (full collections, single records, ready queues,
//! the recent-orders strip) are cached as raw JSON. Free-text search and
//! structured filter results always go to the network. Mutations invalidate the
//! keys they affect and bump a per-entity revision that list screens track to
//! refetch.

use crate::shared::api_utils::{fetch_json, ApiError, ApiRequest};
use contracts::domain::a009_order::aggregate::ENDPOINT as ORDER_ENDPOINT;
use contracts::domain::common::RecordId;
use contracts::enums::order_status::PipelineStage;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QueryScope {
    All,
    Item(RecordId),
    Ready,
    Recent,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryKey {
    /// Endpoint without leading slash (`pesanan`, `packing`, `jasa-pengiriman`).
    pub entity: String,
    pub scope: QueryScope,
}

impl QueryKey {
    pub fn new(entity: &str, scope: QueryScope) -> Self {
        Self {
            entity: entity.trim_start_matches('/').to_string(),
            scope,
        }
    }

    pub fn all(entity: &str) -> Self {
        Self::new(entity, QueryScope::All)
    }

    pub fn item(entity: &str, id: RecordId) -> Self {
        Self::new(entity, QueryScope::Item(id))
    }

    pub fn ready(stage: PipelineStage) -> Self {
        Self::new(stage.entity_key(), QueryScope::Ready)
    }

    pub fn recent_orders() -> Self {
        Self::new(ORDER_ENDPOINT, QueryScope::Recent)
    }
}

/// A write the UI just performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    OrderStatus { order_id: RecordId },
    /// Status change applied to several orders, invalidated once.
    OrderStatusBulk { order_ids: Vec<RecordId> },
    OrderImport,
    StageBulk {
        stage: PipelineStage,
        order_ids: Vec<RecordId>,
    },
    /// Create, update, delete or import on a reference entity.
    Reference { entity: String },
}

/// Keys matched by one invalidation rule: a single scope or every scope of an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invalidation {
    pub entity: String,
    pub scope: Option<QueryScope>,
}

impl Invalidation {
    fn key(key: QueryKey) -> Self {
        Self {
            entity: key.entity,
            scope: Some(key.scope),
        }
    }

    fn entity(entity: &str) -> Self {
        Self {
            entity: entity.trim_start_matches('/').to_string(),
            scope: None,
        }
    }

    pub fn matches(&self, key: &QueryKey) -> bool {
        self.entity == key.entity && self.scope.as_ref().map_or(true, |s| *s == key.scope)
    }
}

impl Mutation {
    pub fn invalidations(&self) -> Vec<Invalidation> {
        match self {
            Mutation::OrderStatus { order_id } => order_status_rules(std::slice::from_ref(order_id)),
            Mutation::OrderStatusBulk { order_ids } => order_status_rules(order_ids),
            Mutation::OrderImport => vec![
                Invalidation::entity(ORDER_ENDPOINT),
                Invalidation::key(QueryKey::ready(PipelineStage::Print)),
                Invalidation::key(QueryKey::ready(PipelineStage::Sweep)),
            ],
            Mutation::StageBulk { stage, order_ids } => {
                let mut rules = vec![
                    Invalidation::entity(stage.entity_key()),
                    Invalidation::key(QueryKey::all(ORDER_ENDPOINT)),
                    Invalidation::key(QueryKey::recent_orders()),
                ];
                rules.extend(
                    order_ids
                        .iter()
                        .map(|id| Invalidation::key(QueryKey::item(ORDER_ENDPOINT, *id))),
                );
                // Orders leaving this stage land in the next stage's queue
                if let Some(reached) = stage.output_status() {
                    rules.extend(
                        PipelineStage::ALL
                            .iter()
                            .filter(|s| s.input_status() == Some(reached))
                            .map(|s| Invalidation::key(QueryKey::ready(*s))),
                    );
                }
                if *stage != PipelineStage::Sweep {
                    rules.push(Invalidation::key(QueryKey::ready(PipelineStage::Sweep)));
                }
                rules
            }
            Mutation::Reference { entity } => vec![Invalidation::entity(entity)],
        }
    }
}

fn order_status_rules(order_ids: &[RecordId]) -> Vec<Invalidation> {
    let mut rules = vec![
        Invalidation::key(QueryKey::all(ORDER_ENDPOINT)),
        Invalidation::key(QueryKey::recent_orders()),
    ];
    rules.extend(
        order_ids
            .iter()
            .map(|id| Invalidation::key(QueryKey::item(ORDER_ENDPOINT, *id))),
    );
    // The orders may have entered or left any ready queue
    rules.extend(
        PipelineStage::ALL
            .iter()
            .map(|s| Invalidation::key(QueryKey::ready(*s))),
    );
    rules
}

/// Plain cache storage, independent of the reactive runtime.
#[derive(Debug, Default)]
pub struct QueryStore {
    entries: HashMap<QueryKey, serde_json::Value>,
}

impl QueryStore {
    pub fn get(&self, key: &QueryKey) -> Option<&serde_json::Value> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: QueryKey, value: serde_json::Value) {
        self.entries.insert(key, value);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every key matched by `mutation` and returns the entities it touched,
    /// whether or not anything was cached for them.
    pub fn invalidate(&mut self, mutation: &Mutation) -> BTreeSet<String> {
        let rules = mutation.invalidations();
        self.entries
            .retain(|key, _| !rules.iter().any(|rule| rule.matches(key)));
        rules.into_iter().map(|r| r.entity).collect()
    }
}

/// Reactive handle shared through context.
#[derive(Clone, Copy)]
pub struct QueryCache {
    store: StoredValue<QueryStore>,
    revisions: RwSignal<HashMap<String, u64>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self {
            store: StoredValue::new(QueryStore::default()),
            revisions: RwSignal::new(HashMap::new()),
        }
    }

    /// Tracked read: effects calling this rerun after the entity is invalidated.
    pub fn revision(&self, entity: &str) -> u64 {
        let entity = entity.trim_start_matches('/');
        self.revisions
            .with(|r| r.get(entity).copied().unwrap_or_default())
    }

    /// Serves `key` from the cache, or runs `request` and caches its JSON body.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        key: QueryKey,
        request: ApiRequest,
    ) -> Result<T, ApiError> {
        if let Some(value) = self
            .store
            .try_with_value(|s| s.get(&key).cloned())
            .flatten()
        {
            return Ok(serde_json::from_value(value)?);
        }
        let value: serde_json::Value = fetch_json(request).await?;
        let decoded = serde_json::from_value(value.clone())?;
        self.store.try_update_value(|s| s.insert(key, value));
        Ok(decoded)
    }

    pub fn invalidate(&self, mutation: &Mutation) {
        let Some(entities) = self.store.try_update_value(|s| s.invalidate(mutation)) else {
            return;
        };
        log::debug!("cache invalidated by {:?}: {:?}", mutation, entities);
        self.revisions.update(|r| {
            for entity in entities {
                *r.entry(entity).or_default() += 1;
            }
        });
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_query_cache() -> QueryCache {
    use_context::<QueryCache>().expect("QueryCache not provided in context")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store_with(keys: &[QueryKey]) -> QueryStore {
        let mut store = QueryStore::default();
        for key in keys {
            store.insert(key.clone(), json!([]));
        }
        store
    }

    #[test]
    fn test_order_status_patch_invalidation() {
        let keys = [
            QueryKey::all("pesanan"),
            QueryKey::item("pesanan", 7),
            QueryKey::item("pesanan", 8),
            QueryKey::recent_orders(),
            QueryKey::ready(PipelineStage::Pack),
            QueryKey::all("packing"),
            QueryKey::all("brand"),
        ];
        let mut store = store_with(&keys);
        store.invalidate(&Mutation::OrderStatus { order_id: 7 });

        assert!(store.get(&QueryKey::all("pesanan")).is_none());
        assert!(store.get(&QueryKey::item("pesanan", 7)).is_none());
        assert!(store.get(&QueryKey::recent_orders()).is_none());
        assert!(store.get(&QueryKey::ready(PipelineStage::Pack)).is_none());

        assert!(store.get(&QueryKey::item("pesanan", 8)).is_some());
        assert!(store.get(&QueryKey::all("packing")).is_some());
        assert!(store.get(&QueryKey::all("brand")).is_some());
    }

    #[test]
    fn test_bulk_status_change_invalidates_once_for_all_orders() {
        let keys = [
            QueryKey::all("pesanan"),
            QueryKey::item("pesanan", 7),
            QueryKey::item("pesanan", 8),
            QueryKey::item("pesanan", 9),
            QueryKey::recent_orders(),
            QueryKey::ready(PipelineStage::Print),
            QueryKey::ready(PipelineStage::Sweep),
            QueryKey::all("pencetakan"),
        ];
        let mut store = store_with(&keys);
        let touched = store.invalidate(&Mutation::OrderStatusBulk {
            order_ids: vec![7, 9],
        });

        assert_eq!(store.len(), 2);
        assert!(store.get(&QueryKey::item("pesanan", 8)).is_some());
        assert!(store.get(&QueryKey::all("pencetakan")).is_some());
        assert!(touched.contains("pesanan"));
        assert!(touched.contains("proses"));
    }

    #[test]
    fn test_stage_bulk_invalidation() {
        let keys = [
            QueryKey::all("pencetakan"),
            QueryKey::ready(PipelineStage::Print),
            QueryKey::ready(PipelineStage::Pack),
            QueryKey::ready(PipelineStage::Ship),
            QueryKey::all("pesanan"),
            QueryKey::recent_orders(),
            QueryKey::item("pesanan", 3),
            QueryKey::all("gudang"),
        ];
        let mut store = store_with(&keys);
        let touched = store.invalidate(&Mutation::StageBulk {
            stage: PipelineStage::Print,
            order_ids: vec![3],
        });

        assert_eq!(store.len(), 2);
        assert!(store.get(&QueryKey::ready(PipelineStage::Ship)).is_some());
        assert!(store.get(&QueryKey::all("gudang")).is_some());
        assert!(touched.contains("pencetakan"));
        assert!(touched.contains("pesanan"));
        assert!(touched.contains("packing"));
    }

    #[test]
    fn test_reference_write_only_touches_its_entity() {
        let keys = [
            QueryKey::all("jasa-pengiriman"),
            QueryKey::item("jasa-pengiriman", 1),
            QueryKey::all("pembeli"),
        ];
        let mut store = store_with(&keys);
        let touched = store.invalidate(&Mutation::Reference {
            entity: "/jasa-pengiriman".into(),
        });
        assert_eq!(touched.into_iter().collect::<Vec<_>>(), vec!["jasa-pengiriman"]);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_order_import_drops_every_order_key() {
        let mut store = store_with(&[
            QueryKey::all("pesanan"),
            QueryKey::item("pesanan", 1),
            QueryKey::recent_orders(),
            QueryKey::ready(PipelineStage::Print),
        ]);
        store.invalidate(&Mutation::OrderImport);
        assert!(store.is_empty());
    }

    #[test]
    fn test_key_normalizes_leading_slash() {
        assert_eq!(QueryKey::all("/brand"), QueryKey::all("brand"));
        assert_eq!(QueryKey::ready(PipelineStage::Ship).entity, "pengiriman");
    }
}
