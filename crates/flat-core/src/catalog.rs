//! Process-wide member catalog.
//!
//! The catalog turns a record type's raw member list into its ordered
//! descriptor table and caches it for the lifetime of the process, keyed by
//! `TypeId`. Entries are inserted once and never evicted.
//!
//! Two threads missing on the same type both compute the table outside the
//! lock; the first insertion wins and both callers receive the winning `Arc`.

use crate::schema::{MemberDescriptor, Record};
use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};
use tracing::debug;

type CatalogMap = HashMap<TypeId, Box<dyn Any + Send + Sync>>;

fn catalog() -> &'static RwLock<CatalogMap> {
    static CATALOG: OnceLock<RwLock<CatalogMap>> = OnceLock::new();
    CATALOG.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Ordered members of `T`, sorted by name with byte-wise comparison.
///
/// This order is the CSV column order in both directions.
pub fn members<T: Record>() -> Arc<[MemberDescriptor<T>]> {
    let key = TypeId::of::<T>();

    if let Some(cached) = lookup::<T>(key) {
        return cached;
    }

    let computed = build_members::<T>();

    let mut map = catalog().write().unwrap_or_else(PoisonError::into_inner);
    let entry = map.entry(key).or_insert_with(|| {
        debug!(
            "Catalogued {} members for {}",
            computed.len(),
            type_name::<T>()
        );
        Box::new(computed)
    });
    match entry.downcast_ref::<Arc<[MemberDescriptor<T>]>>() {
        Some(members) => Arc::clone(members),
        // Keys are `TypeId::of::<T>()`, so the stored value is always `T`'s table.
        None => build_members::<T>(),
    }
}

/// Number of record types currently catalogued.
pub fn len() -> usize {
    catalog()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .len()
}

/// Whether `T` has been catalogued.
pub fn contains<T: Record>() -> bool {
    catalog()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .contains_key(&TypeId::of::<T>())
}

fn lookup<T: Record>(key: TypeId) -> Option<Arc<[MemberDescriptor<T>]>> {
    let map = catalog().read().unwrap_or_else(PoisonError::into_inner);
    map.get(&key)
        .and_then(|entry| entry.downcast_ref::<Arc<[MemberDescriptor<T>]>>())
        .map(Arc::clone)
}

fn build_members<T: Record>() -> Arc<[MemberDescriptor<T>]> {
    let mut members = T::describe_members();
    // Stable: same-named members keep declaration order.
    members.sort_by(|a, b| a.name().as_bytes().cmp(b.name().as_bytes()));
    members.into()
}
