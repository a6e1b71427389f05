//! Memoized storage for expensive generator instances.
//!
//! Generator construction dominates the cost of repeated synthesis calls, so
//! instances are built at most once per key and shared read-only afterwards.
//! The cache is a plain value owned by whoever builds the pipeline: tests get
//! a fresh, isolated cache per pipeline and nothing is process-global.
//!
//! Limits accepted by contract:
//!
//! - no eviction and no capacity bound; growth is unbounded over the cache's
//!   lifetime
//! - keys compare `mf_min` by exact bit pattern, so jittered inputs produce
//!   distinct entries and the hit-rate can be low
//! - no synchronization; callers needing concurrent access must lock around
//!   the cache themselves

use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use tracing::debug;

/// Key for one generator configuration.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorKey {
    /// Dimensionless minimum frequency (physical f_min × total mass in
    /// seconds).
    pub mf_min: f64,
    pub run_phenomd: bool,
}

impl PartialEq for GeneratorKey {
    fn eq(&self, other: &Self) -> bool {
        // Exact float equality by design: two keys match iff both fields are
        // bit-identical.
        self.mf_min.to_bits() == other.mf_min.to_bits() && self.run_phenomd == other.run_phenomd
    }
}

impl Eq for GeneratorKey {}

impl Hash for GeneratorKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.mf_min.to_bits().hash(state);
        self.run_phenomd.hash(state);
    }
}

/// Memoized factory for generator instances.
#[derive(Debug, Default)]
pub struct GeneratorCache<G> {
    entries: HashMap<GeneratorKey, Arc<G>>,
}

impl<G> GeneratorCache<G> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return the instance for `key`, constructing it on first use.
    ///
    /// The returned handle is shared: a second call with an identical key
    /// yields the same instance without invoking `build` again.
    pub fn get_or_create(
        &mut self,
        key: GeneratorKey,
        build: impl FnOnce(&GeneratorKey) -> G,
    ) -> Arc<G> {
        if let Some(existing) = self.entries.get(&key) {
            debug!(mf_min = key.mf_min, run_phenomd = key.run_phenomd, "generator cache hit");
            return Arc::clone(existing);
        }

        debug!(mf_min = key.mf_min, run_phenomd = key.run_phenomd, "generator cache miss");
        let instance = Arc::new(build(&key));
        self.entries.insert(key, Arc::clone(&instance));
        instance
    }
}
