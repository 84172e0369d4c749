use members_business::{BusinessConfig, register_members};
use members_states::StateCtx;

/// The main application state.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
}

impl Default for State {
    fn default() -> Self {
        Self::with_config(BusinessConfig::default())
    }
}

impl State {
    /// State whose load command fetches `members_url` instead of the production endpoint.
    pub fn test(members_url: String) -> Self {
        Self::with_config(BusinessConfig::new(members_url))
    }

    fn with_config(config: BusinessConfig) -> Self {
        let mut ctx = StateCtx::new();
        register_members(&mut ctx, config);
        Self { ctx }
    }
}
