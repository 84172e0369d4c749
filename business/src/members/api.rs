//! Members endpoint client.
//!
//! Performs the network IO for [`super::LoadMembersCommand`]; callers map the
//! result into state updates.

use thiserror::Error;

use crate::http::{Client, HttpError};

use super::record::Member;

#[derive(Debug, Error)]
pub enum MembersApiError {
    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("members endpoint returned status: {0}")]
    Status(u16),

    #[error("failed to parse member list: {0}")]
    Parse(#[from] serde_json::Error),
}

/// GET the member list as a JSON array of records.
pub async fn fetch_members(url: &str) -> Result<Vec<Member>, MembersApiError> {
    let response = Client::get(url)
        .header("accept", "application/json")
        .send()
        .await?;

    if !response.is_success() {
        return Err(MembersApiError::Status(response.status));
    }

    Ok(response.json()?)
}
