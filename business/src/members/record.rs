//! The member record served by the members endpoint.

use serde::{Deserialize, Deserializer};
use ustr::Ustr;

/// Stable identifier of a member. Interned because it is cloned and compared
/// on every selection check.
pub type MemberId = Ustr;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Member {
    #[serde(deserialize_with = "deserialize_member_id")]
    pub id: MemberId,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl Member {
    pub fn new(
        id: impl AsRef<str>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: Ustr::from(id.as_ref()),
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }

    /// Whether `needle` (already lower-cased) occurs in name, email or role.
    pub fn matches(&self, needle: &str) -> bool {
        [&self.name, &self.email, &self.role]
            .into_iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// The endpoint serves ids as strings, hand-written fixtures often use numbers.
fn deserialize_member_id<'de, D>(deserializer: D) -> Result<MemberId, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => Ustr::from(text.as_str()),
        RawId::Number(number) => Ustr::from(number.to_string().as_str()),
    })
}
