use std::any::{Any, TypeId, type_name};

use flume::{Receiver, Sender};

use crate::State;

pub(crate) type ApplyFn = Box<dyn FnOnce(&mut dyn Any) + Send>;

/// A pending write produced by a compute or an async command.
pub(crate) enum Update {
    Assign {
        id: TypeId,
        value: Box<dyn Any + Send>,
    },
    Modify {
        id: TypeId,
        apply: ApplyFn,
    },
}

impl Update {
    pub(crate) fn id(&self) -> TypeId {
        match self {
            Self::Assign { id, .. } | Self::Modify { id, .. } => *id,
        }
    }
}

pub(crate) fn channel() -> (Updater, Receiver<Update>) {
    let (send, recv) = flume::unbounded();
    (Updater { send }, recv)
}

/// Send half of the update channel. Cheap to clone and `Send`, so it can be
/// moved into spawned futures.
#[derive(Debug, Clone)]
pub struct Updater {
    send: Sender<Update>,
}

impl Updater {
    /// Replace the whole value of `T`.
    pub fn set<T: State>(&self, value: T) {
        self.push(Update::Assign {
            id: TypeId::of::<T>(),
            value: Box::new(value),
        });
    }

    /// Patch `T` in place once the update is synced.
    pub fn update<T: State>(&self, f: impl FnOnce(&mut T) + Send + 'static) {
        let apply: ApplyFn = Box::new(move |any: &mut dyn Any| match any.downcast_mut::<T>() {
            Some(target) => f(target),
            None => log::warn!("Updater::update: target is not a {}", type_name::<T>()),
        });
        self.push(Update::Modify {
            id: TypeId::of::<T>(),
            apply,
        });
    }

    fn push(&self, update: Update) {
        if self.send.send(update).is_err() {
            log::warn!("Updater: state context dropped, update discarded");
        }
    }
}

impl std::fmt::Debug for Update {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Assign { id, .. } => f.debug_struct("Assign").field("id", id).finish(),
            Self::Modify { id, .. } => f.debug_struct("Modify").field("id", id).finish(),
        }
    }
}
