//! Small state container shared by the business and ui crates.
//!
//! - [`State`]: plain data registered in a [`StateCtx`]
//! - [`Compute`]: a cached value re-derived when its dependencies change
//! - [`Command`]: a synchronous mutation dispatched by the UI
//! - [`AsyncCommand`]: a side effect spawned as a task that reports back
//!   through an [`Updater`]

mod command;
mod compute;
mod ctx;
mod dep;
mod error;
mod snapshot;
mod state;
mod state_sync_status;
mod updater;

pub use command::{AsyncCommand, BoxFuture, Command};
pub use compute::{Compute, ComputeDeps};
pub use ctx::StateCtx;
pub use dep::{Dep, DepMut};
pub use error::Error;
pub use snapshot::CommandSnapshot;
pub use state::{State, state_assign_impl};
pub use state_sync_status::StateSyncStatus;
pub use updater::Updater;
