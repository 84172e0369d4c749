use std::any::TypeId;
use std::collections::BTreeMap;

use flume::Receiver;

use crate::dep::{ComputeEntry, ComputeMap, StateMap, lookup_compute, lookup_state, lookup_state_mut};
use crate::updater::{Update, channel};
use crate::{
    AsyncCommand, BoxFuture, Command, CommandSnapshot, Compute, Dep, DepMut, Error, State,
    StateSyncStatus, Updater,
};

/// Owner of every state, compute and command of the application.
///
/// The frame loop is:
/// 1. `sync_computes()` applies values sent through the [`Updater`]
/// 2. the UI reads states/computes and dispatches commands
/// 3. `run_computed()` re-runs the computes whose dependencies changed
pub struct StateCtx {
    states: StateMap,
    computes: ComputeMap,
    commands: BTreeMap<TypeId, Box<dyn Command>>,
    async_commands: BTreeMap<TypeId, Box<dyn AsyncCommand>>,

    updater: Updater,
    receiver: Receiver<Update>,

    #[cfg(not(target_arch = "wasm32"))]
    tasks: tokio::task::JoinSet<()>,
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StateCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateCtx")
            .field("states", &self.states.len())
            .field("computes", &self.computes.len())
            .field("commands", &self.commands.len())
            .field("async_commands", &self.async_commands.len())
            .finish_non_exhaustive()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (updater, receiver) = channel();

        Self {
            states: BTreeMap::new(),
            computes: BTreeMap::new(),
            commands: BTreeMap::new(),
            async_commands: BTreeMap::new(),
            updater,
            receiver,
            #[cfg(not(target_arch = "wasm32"))]
            tasks: tokio::task::JoinSet::new(),
        }
    }

    pub fn add_state<T: State>(&mut self, state: T) {
        self.states.insert(TypeId::of::<T>(), Box::new(state));
    }

    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        self.computes.insert(
            TypeId::of::<T>(),
            ComputeEntry {
                compute: Box::new(compute),
                status: StateSyncStatus::BeforeInit,
            },
        );
    }

    pub fn record_command<T: Command>(&mut self, command: T) {
        self.commands.insert(TypeId::of::<T>(), Box::new(command));
    }

    pub fn record_async_command<T: AsyncCommand>(&mut self, command: T) {
        self.async_commands
            .insert(TypeId::of::<T>(), Box::new(command));
    }

    pub fn try_state<T: State>(&self) -> Result<&T, Error> {
        lookup_state::<T>(&self.states)
    }

    /// # Panics
    /// Panics if `T` was never added with [`StateCtx::add_state`].
    pub fn state<T: State>(&self) -> &T {
        self.try_state::<T>().unwrap_or_else(|err| panic!("{err}"))
    }

    /// Mutable access; computes depending on `T` are marked dirty.
    ///
    /// # Panics
    /// Panics if `T` was never added with [`StateCtx::add_state`].
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        self.mark_dependents_dirty(TypeId::of::<T>());
        lookup_state_mut::<T>(&mut self.states).unwrap_or_else(|err| panic!("{err}"))
    }

    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        f(self.state_mut::<T>());
    }

    /// Latest synced value of a compute, `None` if it was never recorded.
    pub fn cached<T: Compute>(&self) -> Option<&T> {
        self.try_cached::<T>().ok()
    }

    pub fn try_cached<T: Compute>(&self) -> Result<&T, Error> {
        lookup_compute::<T>(&self.computes)
    }

    pub fn status(&self, id: &TypeId) -> Option<StateSyncStatus> {
        self.computes.get(id).map(|entry| entry.status)
    }

    fn mark_dependents_dirty(&mut self, id: TypeId) {
        for entry in self.computes.values_mut() {
            let (state_deps, compute_deps) = entry.compute.deps();
            if state_deps.contains(&id) || compute_deps.contains(&id) {
                entry.status = StateSyncStatus::Dirty;
            }
        }
    }

    /// Run a synchronous command to completion.
    pub fn dispatch<C: Command>(&mut self) {
        let Some(command) = self.commands.get(&TypeId::of::<C>()) else {
            log::error!("{}", Error::command_not_found::<C>());
            return;
        };

        let mut deps = DepMut::new(&mut self.states);
        command.run(&mut deps, &self.updater);

        for id in deps.into_touched() {
            self.mark_dependents_dirty(id);
        }
    }

    /// Snapshot the states and spawn an async command.
    pub fn dispatch_async<C: AsyncCommand>(&mut self) {
        let Some(command) = self.async_commands.get(&TypeId::of::<C>()) else {
            log::error!("{}", Error::command_not_found::<C>());
            return;
        };

        let future = command.run(self.snapshot(), self.updater.clone());
        self.spawn_task(future);
    }

    fn snapshot(&self) -> CommandSnapshot {
        let mut snap = CommandSnapshot::new();
        for (id, state) in &self.states {
            if let Some(value) = state.snapshot() {
                snap.insert_cloned(*id, value);
            }
        }
        for (id, entry) in &self.computes {
            if let Some(value) = entry.compute.snapshot() {
                snap.insert_cloned(*id, value);
            }
        }
        snap
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn spawn_task(&mut self, future: BoxFuture) {
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                self.tasks.spawn_on(future, &handle);
            }
            Err(err) => log::error!("No tokio runtime to spawn command task: {err}"),
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn spawn_task(&mut self, future: BoxFuture) {
        wasm_bindgen_futures::spawn_local(future);
    }

    /// Apply every pending update sent through the [`Updater`].
    pub fn sync_computes(&mut self) {
        self.reap_finished_tasks();

        let updates: Vec<Update> = self.receiver.try_iter().collect();
        for update in updates {
            self.apply(update);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn reap_finished_tasks(&mut self) {
        while let Some(finished) = self.tasks.try_join_next() {
            if let Err(err) = finished {
                log::error!("Command task failed: {err}");
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn reap_finished_tasks(&mut self) {}

    fn apply(&mut self, update: Update) {
        let id = update.id();

        if let Some(state) = self.states.get_mut(&id) {
            match update {
                Update::Assign { value, .. } => state.assign_box(value),
                Update::Modify { apply, .. } => apply(state.as_any_mut()),
            }
        } else if let Some(entry) = self.computes.get_mut(&id) {
            match update {
                Update::Assign { value, .. } => entry.compute.assign_box(value),
                Update::Modify { apply, .. } => apply(entry.compute.as_any_mut()),
            }
            // A dependency changed after the value was computed: keep it dirty.
            if entry.status != StateSyncStatus::Dirty {
                entry.status = StateSyncStatus::Clean;
            }
        } else {
            log::warn!("sync_computes: update for unregistered type {id:?}");
            return;
        }

        self.mark_dependents_dirty(id);
    }

    /// Re-run every compute that is dirty or never ran.
    pub fn run_computed(&mut self) {
        let pending: Vec<TypeId> = self
            .computes
            .iter()
            .filter(|(_, entry)| {
                matches!(
                    entry.status,
                    StateSyncStatus::BeforeInit | StateSyncStatus::Dirty
                )
            })
            .map(|(id, _)| *id)
            .collect();

        for id in pending {
            if let Some(entry) = self.computes.get(&id) {
                let deps = Dep::new(&self.states);
                entry.compute.compute(deps, self.updater.clone());
            }
            if let Some(entry) = self.computes.get_mut(&id) {
                entry.status = StateSyncStatus::Pending;
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Wait for the spawned command tasks, syncing after each one finishes.
    #[cfg(not(target_arch = "wasm32"))]
    pub async fn flush_and_wait(&mut self) {
        while let Some(finished) = self.tasks.join_next().await {
            if let Err(err) = finished {
                log::error!("Command task failed: {err}");
            }
            self.sync_computes();
        }
        self.sync_computes();
    }
}
