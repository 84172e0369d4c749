//! Load status cache and the command that fetches the member list.
//!
//! - `MembersLoadCompute` stores the status of the latest load
//! - `LoadMembersCommand` performs the GET and replaces the working set of
//!   [`MembersState`] through the [`Updater`] once the list arrives
//!
//! The UI dispatches the command once at startup with
//! `ctx.dispatch_async::<LoadMembersCommand>()`.

use std::any::Any;

use chrono::{DateTime, Utc};
use members_states::{
    AsyncCommand, BoxFuture, CommandSnapshot, Compute, ComputeDeps, Dep, State, Updater,
    state_assign_impl,
};

use crate::BusinessConfig;

use super::api;
use super::state::MembersState;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MembersLoadResult {
    #[default]
    Idle,

    Loading,

    Loaded {
        count: usize,
        loaded_at: DateTime<Utc>,
    },

    /// The load failed; the working set keeps its previous content.
    Error(String),
}

#[derive(Debug, Clone, Default)]
pub struct MembersLoadCompute {
    pub result: MembersLoadResult,
}

impl MembersLoadCompute {
    pub fn is_loading(&self) -> bool {
        matches!(self.result, MembersLoadResult::Loading)
    }

    /// Whether a load has completed, successfully or not.
    pub fn is_finished(&self) -> bool {
        matches!(
            self.result,
            MembersLoadResult::Loaded { .. } | MembersLoadResult::Error(_)
        )
    }

    /// "N members loaded at HH:MM:SS UTC" after a successful load.
    pub fn loaded_summary(&self) -> Option<String> {
        match &self.result {
            MembersLoadResult::Loaded { count, loaded_at } => Some(format!(
                "{count} members loaded at {}",
                loaded_at.format("%H:%M:%S UTC")
            )),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.result {
            MembersLoadResult::Error(msg) => Some(msg.as_str()),
            _ => None,
        }
    }
}

impl State for MembersLoadCompute {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

impl Compute for MembersLoadCompute {
    fn deps(&self) -> ComputeDeps {
        (Vec::new(), Vec::new())
    }

    // Only `LoadMembersCommand` writes this cache.
    fn compute(&self, _deps: Dep<'_>, _updater: Updater) {}
}

#[derive(Debug, Default)]
pub struct LoadMembersCommand;

impl AsyncCommand for LoadMembersCommand {
    fn run(&self, snap: CommandSnapshot, updater: Updater) -> BoxFuture {
        let url = match snap.state::<BusinessConfig>() {
            Ok(config) => config.members_url().to_string(),
            Err(err) => {
                log::error!("LoadMembersCommand: {err}");
                let message = err.to_string();
                return Box::pin(async move {
                    updater.set(MembersLoadCompute {
                        result: MembersLoadResult::Error(message),
                    });
                });
            }
        };

        Box::pin(async move {
            updater.set(MembersLoadCompute {
                result: MembersLoadResult::Loading,
            });
            log::info!("loading members from {url}");

            match api::fetch_members(&url).await {
                Ok(members) => {
                    let count = members.len();
                    log::info!("loaded {count} members");
                    updater.update::<MembersState>(move |state| state.replace_members(members));
                    updater.set(MembersLoadCompute {
                        result: MembersLoadResult::Loaded {
                            count,
                            loaded_at: Utc::now(),
                        },
                    });
                }
                Err(err) => {
                    log::error!("failed to load members from {url}: {err}");
                    updater.set(MembersLoadCompute {
                        result: MembersLoadResult::Error(err.to_string()),
                    });
                }
            }
        })
    }
}
