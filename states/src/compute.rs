use std::any::TypeId;

use crate::{Dep, State, Updater};

/// `(state dependencies, compute dependencies)`.
pub type ComputeDeps = (Vec<TypeId>, Vec<TypeId>);

/// A cached value derived from other states.
///
/// A compute is re-run by [`crate::StateCtx::run_computed`] whenever one of its
/// dependencies changed. It publishes the new value through the [`Updater`];
/// the value becomes visible after the next [`crate::StateCtx::sync_computes`].
pub trait Compute: State {
    fn deps(&self) -> ComputeDeps;

    fn compute(&self, deps: Dep<'_>, updater: Updater);
}
