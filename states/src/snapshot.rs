use std::any::{Any, TypeId};
use std::collections::BTreeMap;

use crate::{Error, State};

/// Cloned states handed to an [`crate::AsyncCommand`].
///
/// Only states whose [`State::snapshot`] returns a value are captured.
#[derive(Default)]
pub struct CommandSnapshot {
    inner: BTreeMap<TypeId, Box<dyn Any + Send>>,
}

impl CommandSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_cloned(&mut self, id: TypeId, value: Box<dyn Any + Send>) {
        self.inner.insert(id, value);
    }

    pub fn state<T: State>(&self) -> Result<&T, Error> {
        self.inner
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
            .ok_or_else(Error::state_not_found::<T>)
    }
}
