use members_states::{State, state_assign_impl};
use std::any::Any;

/// Endpoint serving the member list as a JSON array.
pub const DEFAULT_MEMBERS_URL: &str =
    "https://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json";

#[derive(Debug, Clone)]
pub struct BusinessConfig {
    pub members_url: String,
}

impl BusinessConfig {
    pub fn new(members_url: impl Into<String>) -> Self {
        Self {
            members_url: members_url.into(),
        }
    }

    pub fn members_url(&self) -> &str {
        &self.members_url
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MEMBERS_URL)
    }
}

impl State for BusinessConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send + 'static>> {
        Some(Box::new(self.clone()))
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_members_json() {
        let config = BusinessConfig::default();
        assert_eq!(config.members_url(), DEFAULT_MEMBERS_URL);
        assert!(config.members_url().ends_with("/members.json"));
    }

    #[test]
    fn test_new_overrides_url() {
        let config = BusinessConfig::new("http://127.0.0.1:1234/members.json");
        assert_eq!(config.members_url(), "http://127.0.0.1:1234/members.json");
    }
}
