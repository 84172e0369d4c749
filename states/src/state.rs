use std::any::{Any, type_name};

/// A piece of application state stored in [`crate::StateCtx`].
///
/// States are keyed by their concrete type. Implementors that should be
/// visible to async commands return a clone from [`State::snapshot`].
pub trait State: Any + Send {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Cloned copy handed to async commands through a [`crate::CommandSnapshot`].
    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        None
    }

    /// Replace `self` with a value sent through an [`crate::Updater`].
    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Shared `assign_box` body: downcast and overwrite, or log a type mismatch.
pub fn state_assign_impl<T: Any>(target: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(value) => *target = *value,
        Err(_) => log::warn!("assign_box: value is not a {}", type_name::<T>()),
    }
}
