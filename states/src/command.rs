use std::any::Any;
use std::future::Future;
use std::pin::Pin;

use crate::{CommandSnapshot, DepMut, Updater};

pub type BoxFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// A synchronous mutation, run to completion inside [`crate::StateCtx::dispatch`].
///
/// Commands read their parameters from an input `State` the UI filled in
/// beforehand and mutate states through [`DepMut`].
pub trait Command: Any + Send {
    fn run(&self, deps: &mut DepMut<'_>, updater: &Updater);
}

/// A side-effecting command (network IO).
///
/// It only sees a snapshot of the states taken at dispatch time and reports
/// back through the [`Updater`].
pub trait AsyncCommand: Any + Send {
    fn run(&self, snap: CommandSnapshot, updater: Updater) -> BoxFuture;
}
