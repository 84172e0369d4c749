use std::any::TypeId;
use std::collections::BTreeMap;

use crate::{Compute, Error, State, StateSyncStatus};

pub(crate) type StateMap = BTreeMap<TypeId, Box<dyn State>>;

pub(crate) struct ComputeEntry {
    pub(crate) compute: Box<dyn Compute>,
    pub(crate) status: StateSyncStatus,
}

pub(crate) type ComputeMap = BTreeMap<TypeId, ComputeEntry>;

pub(crate) fn lookup_state<T: State>(states: &StateMap) -> Result<&T, Error> {
    states
        .get(&TypeId::of::<T>())
        .and_then(|state| state.as_any().downcast_ref::<T>())
        .ok_or_else(Error::state_not_found::<T>)
}

pub(crate) fn lookup_state_mut<T: State>(states: &mut StateMap) -> Result<&mut T, Error> {
    states
        .get_mut(&TypeId::of::<T>())
        .and_then(|state| state.as_any_mut().downcast_mut::<T>())
        .ok_or_else(Error::state_not_found::<T>)
}

pub(crate) fn lookup_compute<T: Compute>(computes: &ComputeMap) -> Result<&T, Error> {
    computes
        .get(&TypeId::of::<T>())
        .and_then(|entry| entry.compute.as_any().downcast_ref::<T>())
        .ok_or_else(Error::compute_not_found::<T>)
}

/// Read-only view of the context handed to [`Compute::compute`].
///
/// # Panics
/// The infallible accessors panic when the requested type was never
/// registered, which is a wiring mistake rather than a runtime condition.
#[derive(Clone, Copy)]
pub struct Dep<'a> {
    states: &'a StateMap,
}

impl<'a> Dep<'a> {
    pub(crate) fn new(states: &'a StateMap) -> Self {
        Self { states }
    }

    pub fn try_state<T: State>(&self) -> Result<&'a T, Error> {
        lookup_state::<T>(self.states)
    }

    pub fn state<T: State>(&self) -> &'a T {
        self.try_state::<T>().unwrap_or_else(|err| panic!("{err}"))
    }
}

/// Mutable view of the context handed to [`crate::Command::run`].
///
/// Every state borrowed mutably is recorded so the computes depending on it
/// get marked dirty once the command returns.
pub struct DepMut<'a> {
    states: &'a mut StateMap,
    touched: Vec<TypeId>,
}

impl<'a> DepMut<'a> {
    pub(crate) fn new(states: &'a mut StateMap) -> Self {
        Self {
            states,
            touched: Vec::new(),
        }
    }

    pub(crate) fn into_touched(self) -> Vec<TypeId> {
        self.touched
    }

    pub fn state<T: State>(&self) -> &T {
        lookup_state::<T>(self.states).unwrap_or_else(|err| panic!("{err}"))
    }

    pub fn state_mut<T: State>(&mut self) -> &mut T {
        let id = TypeId::of::<T>();
        if !self.touched.contains(&id) {
            self.touched.push(id);
        }
        lookup_state_mut::<T>(self.states).unwrap_or_else(|err| panic!("{err}"))
    }
}
