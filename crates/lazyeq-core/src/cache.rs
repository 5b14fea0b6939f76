//! Process-wide comparator cache.
//!
//! Each type's comparator is built at most once per cache and then shared.
//! Callers racing on the first use of a type serialize on a per-type build
//! lock; everyone observes the same published `Arc`.

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, OnceLock, PoisonError, RwLock};

use lazyeq_config::EngineConfig;

use crate::comparator::TypeComparator;
use crate::error::{EqualityError, Result};
use crate::resolver::resolve;
use crate::traits::StructuralEquatable;

static GLOBAL: OnceLock<ComparatorCache> = OnceLock::new();

struct CacheEntry<T: ?Sized> {
    comparator: OnceLock<Arc<TypeComparator<T>>>,
    build_lock: Mutex<()>,
}

impl<T: ?Sized> CacheEntry<T> {
    fn new() -> Self {
        CacheEntry {
            comparator: OnceLock::new(),
            build_lock: Mutex::new(()),
        }
    }
}

/// Maps each type to its comparator.
///
/// Entries are never evicted. Comparators hold `'static` references to the
/// cache that built them, so a cache is used through a `'static` borrow:
/// either [`ComparatorCache::global`] or a leaked instance.
pub struct ComparatorCache {
    config: EngineConfig,
    entries: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
    builds: AtomicUsize,
}

impl ComparatorCache {
    /// Creates an empty cache with default configuration.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Creates an empty cache with the given configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        ComparatorCache {
            config,
            entries: RwLock::new(HashMap::new()),
            builds: AtomicUsize::new(0),
        }
    }

    /// Promotes the cache to `'static`. The memory is never reclaimed.
    pub fn leak(self) -> &'static Self {
        Box::leak(Box::new(self))
    }

    /// The process-wide cache, created with default configuration on first
    /// use unless [`install_global`](Self::install_global) ran earlier.
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(ComparatorCache::new)
    }

    /// Configures the process-wide cache.
    ///
    /// Fails with [`EqualityError::Config`] once the global cache exists.
    pub fn install_global(config: EngineConfig) -> Result<&'static Self> {
        let mut installed = false;
        let cache = GLOBAL.get_or_init(|| {
            installed = true;
            ComparatorCache::with_config(config)
        });
        if installed {
            Ok(cache)
        } else {
            Err(EqualityError::Config(
                "global comparator cache is already initialized".to_string(),
            ))
        }
    }

    /// The configuration comparators are built with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the comparator for `T`, building it on first use.
    pub fn get_or_build<T>(&'static self) -> Result<Arc<TypeComparator<T>>>
    where
        T: StructuralEquatable + ?Sized,
    {
        let entry = self.entry::<T>()?;
        if let Some(comparator) = entry.comparator.get() {
            return Ok(Arc::clone(comparator));
        }

        let _build = entry
            .build_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(comparator) = entry.comparator.get() {
            return Ok(Arc::clone(comparator));
        }

        let built = Arc::new(resolve::<T>(self)?);
        self.builds.fetch_add(1, Ordering::Relaxed);
        Ok(Arc::clone(entry.comparator.get_or_init(|| built)))
    }

    /// Returns the comparator for `T` if it has been built.
    pub fn get<T>(&self) -> Option<Arc<TypeComparator<T>>>
    where
        T: StructuralEquatable + ?Sized,
    {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let entry = entries.get(&TypeId::of::<T>())?;
        let entry = Arc::clone(entry)
            .downcast::<CacheEntry<T>>()
            .ok()?;
        entry.comparator.get().cloned()
    }

    /// Number of types with a built comparator.
    pub fn len(&self) -> usize {
        self.builds()
    }

    /// Returns true if no comparator has been built.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of resolver runs that produced a comparator.
    pub fn build_count(&self) -> usize {
        self.builds()
    }

    /// Compares through this cache as a manual entry.
    pub fn not_equals<T>(&'static self, x: &T, y: &T) -> Result<bool>
    where
        T: StructuralEquatable + ?Sized,
    {
        self.get_or_build::<T>()?.not_equal_checked(x, y)
    }

    /// Compares optional operands through this cache as a manual entry.
    pub fn not_equals_optional<T>(&'static self, x: Option<&T>, y: Option<&T>) -> Result<bool>
    where
        T: StructuralEquatable + ?Sized,
    {
        self.get_or_build::<T>()?.not_equal_optional_checked(x, y)
    }

    fn builds(&self) -> usize {
        self.builds.load(Ordering::Relaxed)
    }

    fn entry<T>(&self) -> Result<Arc<CacheEntry<T>>>
    where
        T: StructuralEquatable + ?Sized,
    {
        let key = TypeId::of::<T>();
        let existing = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned();
        let erased = match existing {
            Some(entry) => entry,
            None => {
                let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
                let created: Arc<dyn Any + Send + Sync> = Arc::new(CacheEntry::<T>::new());
                Arc::clone(entries.entry(key).or_insert(created))
            }
        };
        // Entries are keyed by `TypeId`, so a mismatch means a broken map.
        erased.downcast::<CacheEntry<T>>().map_err(|_| {
            EqualityError::Config(format!(
                "comparator cache entry for {} has another type",
                type_name::<T>()
            ))
        })
    }
}

impl Default for ComparatorCache {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ComparatorCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComparatorCache")
            .field("config", &self.config)
            .field("built", &self.builds())
            .finish()
    }
}
