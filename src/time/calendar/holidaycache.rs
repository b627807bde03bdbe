use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::{
    Arc,
    PoisonError,
    RwLock
};

use super::holidayset::HolidaySet;

/// Cache key of a computed holiday set.
///
/// `subset` is `None` for the whole rule table, otherwise the sorted and
/// deduplicated rule names, so "all rules" never aliases a named subset.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HolidayCacheKey {
    year: i32,
    subset: Option<Vec<String>>
}

impl HolidayCacheKey {
    pub fn all(year: i32) -> HolidayCacheKey {
        HolidayCacheKey { year, subset: None }
    }

    /// `names` must already be canonical (see `HolidayRuleSet::canonical_subset`).
    pub fn subset(year: i32, names: Vec<String>) -> HolidayCacheKey {
        HolidayCacheKey { year, subset: Some(names) }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn names(&self) -> Option<&[String]> {
        self.subset.as_deref()
    }
}

/// Per-year holiday set cache: look up, or compute and store.
///
/// Values are handed out as `Arc<HolidaySet>`; `HolidaySet` has no mutating
/// API, so a caller can never alter what the cache holds.
pub trait HolidayCache {
    fn get_or_compute(
        &self,
        key: &HolidayCacheKey,
        compute: impl FnOnce() -> HolidaySet,
    ) -> Arc<HolidaySet>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ── Single-threaded: RefCell ────────────────────────────────────────────────

#[derive(Default)]
pub struct RefCellHolidayCache {
    cache: RefCell<HashMap<HolidayCacheKey, Arc<HolidaySet>>>,
}

impl RefCellHolidayCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HolidayCache for RefCellHolidayCache {
    fn get_or_compute(
        &self,
        key: &HolidayCacheKey,
        compute: impl FnOnce() -> HolidaySet,
    ) -> Arc<HolidaySet> {
        if let Some(set) = self.cache.borrow().get(key) {
            log::trace!("holiday cache hit for {:?}", key);
            return Arc::clone(set);
        }
        let set = Arc::new(compute());
        self.cache.borrow_mut().insert(key.clone(), Arc::clone(&set));
        set
    }

    fn len(&self) -> usize {
        self.cache.borrow().len()
    }
}

// ── Multi-threaded: RwLock ──────────────────────────────────────────────────
//
// Two threads missing the same key at once may both compute. The computation
// is pure, so the first insert wins and the later result is dropped; both
// callers receive equal sets. Values are only inserted fully built, so a
// poisoned lock still guards a consistent map and is recovered.

#[derive(Default)]
pub struct RwLockHolidayCache {
    cache: RwLock<HashMap<HolidayCacheKey, Arc<HolidaySet>>>,
}

impl RwLockHolidayCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HolidayCache for RwLockHolidayCache {
    fn get_or_compute(
        &self,
        key: &HolidayCacheKey,
        compute: impl FnOnce() -> HolidaySet,
    ) -> Arc<HolidaySet> {
        if let Some(set) = self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key) {
            log::trace!("holiday cache hit for {:?}", key);
            return Arc::clone(set);
        }

        // computed without holding the lock
        let computed = Arc::new(compute());
        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(cache.entry(key.clone()).or_insert(computed))
    }

    fn len(&self) -> usize {
        self.cache.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}
