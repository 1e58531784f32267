use contracts::domain::a001_compte::{Compte, CompteId};
use gloo_net::http::{Request, Response};
use thiserror::Error;

use crate::shared::api_utils::api_url;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Request could not be built or sent
    #[error("Failed to send request: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("Server responded with status {0}")]
    Status(u16),
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Path of the collection or of a single compte, relative to the API base
pub fn compte_path(id: Option<CompteId>) -> String {
    match id {
        Some(id) => format!("/{}/{}", Compte::collection_name(), id),
        None => format!("/{}", Compte::collection_name()),
    }
}

fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Status(response.status()))
    }
}

/// Fetch all comptes
pub async fn fetch_comptes() -> Result<Vec<Compte>, ApiError> {
    let response = Request::get(&api_url(&compte_path(None)))
        .header("Accept", "application/json")
        .send()
        .await?;

    ensure_ok(response)?
        .json::<Vec<Compte>>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Create a new compte. The server echoes the created record, which the form does not need.
pub async fn create_compte(compte: &Compte) -> Result<(), ApiError> {
    let response = Request::post(&api_url(&compte_path(None)))
        .json(compte)?
        .send()
        .await?;

    ensure_ok(response)?;
    Ok(())
}

/// Replace the compte `id` with the full payload
pub async fn update_compte(id: CompteId, compte: &Compte) -> Result<(), ApiError> {
    let response = Request::put(&api_url(&compte_path(Some(id))))
        .json(compte)?
        .send()
        .await?;

    ensure_ok(response)?;
    Ok(())
}

pub async fn delete_compte(id: CompteId) -> Result<(), ApiError> {
    let response = Request::delete(&api_url(&compte_path(Some(id))))
        .send()
        .await?;

    ensure_ok(response)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compte_path() {
        assert_eq!(compte_path(None), "/comptes");
        assert_eq!(compte_path(Some(CompteId(42))), "/comptes/42");
    }

    #[test]
    fn test_status_error_message() {
        assert_eq!(
            ApiError::Status(500).to_string(),
            "Server responded with status 500"
        );
    }
}
