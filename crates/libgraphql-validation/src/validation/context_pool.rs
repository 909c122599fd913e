use crate::validation::ValidationError;
use indexmap::IndexMap;
use indexmap::IndexSet;
use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::PoisonError;

/// Per-fragment marker used by depth-first walks over the fragment spread
/// graph.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum VisitState {
    Done,
    InProgress,
    #[default]
    Unvisited,
}

/// The mutable half of a
/// [`ValidationContext`](crate::validation::ValidationContext).
///
/// A `ContextState` is drawn from a [`ValidationContextPool`] at the start
/// of a validation run and returned (fully reset) at the end of it. The
/// allocations backing its collections survive the reset, so steady-state
/// validation does not re-allocate its scratch space.
#[derive(Debug, Default)]
pub struct ContextState {
    pub(crate) errors: Vec<ValidationError>,
    pub(crate) fragment_index: IndexMap<String, usize>,
    generation: u64,
    pub(crate) names: HashSet<String>,
    pub(crate) spread_path: Vec<String>,
    pub(crate) visit_states: HashMap<String, VisitState>,
    pub(crate) visited_fragments: IndexSet<String>,
}
impl ContextState {
    /// Number of times this state has been reset. Each reuse of a pooled
    /// state observes a strictly larger generation than the previous use.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether this state holds nothing from a previous run.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
            && self.fragment_index.is_empty()
            && self.names.is_empty()
            && self.spread_path.is_empty()
            && self.visit_states.is_empty()
            && self.visited_fragments.is_empty()
    }

    /// Clear the rule-private scratch structures, leaving errors and the
    /// fragment index untouched.
    pub(crate) fn clear_scratch(&mut self) {
        self.names.clear();
        self.spread_path.clear();
        self.visit_states.clear();
        self.visited_fragments.clear();
    }

    pub(crate) fn reset(&mut self) {
        self.errors.clear();
        self.fragment_index.clear();
        self.clear_scratch();
        self.generation = self.generation.wrapping_add(1);
    }
}

/// A bounded, thread-safe pool of reset-ready [`ContextState`]s.
///
/// [`acquire`](Self::acquire) never blocks: if no idle state is available a
/// fresh one is allocated. [`release`](Self::release) resets the state and
/// keeps it for reuse unless `capacity` idle states are already held, in
/// which case it is dropped.
#[derive(Debug)]
pub struct ValidationContextPool {
    capacity: usize,
    idle: Mutex<Vec<ContextState>>,
}
impl ValidationContextPool {
    pub fn new(capacity: usize) -> Self {
        let idle = (0..capacity).map(|_| ContextState::default()).collect();
        Self {
            capacity,
            idle: Mutex::new(idle),
        }
    }

    pub fn acquire(&self) -> ContextState {
        self.lock_idle().pop().unwrap_or_default()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn idle_count(&self) -> usize {
        self.lock_idle().len()
    }

    /// Acquire a state wrapped in a guard that releases it back to this pool
    /// when dropped (including during unwinding).
    pub fn lease(&self) -> PooledContextState<'_> {
        PooledContextState {
            pool: self,
            state: self.acquire(),
        }
    }

    pub fn release(&self, mut state: ContextState) {
        state.reset();
        let mut idle = self.lock_idle();
        if idle.len() < self.capacity {
            idle.push(state);
        } else {
            tracing::trace!(
                capacity = self.capacity,
                "context pool is full, dropping released context state",
            );
        }
    }

    // Pooled states are always reset before reuse, so a lock poisoned by a
    // panicking holder still guards a consistent list.
    fn lock_idle(&self) -> std::sync::MutexGuard<'_, Vec<ContextState>> {
        self.idle.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
impl Default for ValidationContextPool {
    fn default() -> Self {
        Self::new(crate::validation::ValidatorConfig::DEFAULT_POOL_CAPACITY)
    }
}

/// A [`ContextState`] on loan from a [`ValidationContextPool`].
#[derive(Debug)]
pub struct PooledContextState<'p> {
    pool: &'p ValidationContextPool,
    state: ContextState,
}
impl std::ops::Deref for PooledContextState<'_> {
    type Target = ContextState;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}
impl std::ops::DerefMut for PooledContextState<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.state
    }
}
impl Drop for PooledContextState<'_> {
    fn drop(&mut self) {
        self.pool.release(std::mem::take(&mut self.state));
    }
}
