use reqwest::Method;
use serde::Serialize;

use super::*;
use crate::transport::ApiResponse;

impl<T: Transport> PlayerManagementClient<T> {
    /// Get a player's configuration, optionally for a single branch
    /// (`master` or `preview`).
    pub async fn get_player_config(
        &self,
        player_id: &str,
        branch: Option<&str>,
    ) -> Result<ApiResponse, Error> {
        let path = match branch {
            Some(branch) => format!("/players/{player_id}/configuration/{branch}"),
            None => format!("/players/{player_id}/configuration"),
        };
        self.get("get_player_config", &path).await
    }

    /// Replace a player's configuration.
    pub async fn put_player_config(
        &self,
        player_id: &str,
        body: &impl Serialize,
    ) -> Result<ApiResponse, Error> {
        let path = format!("/players/{player_id}/configuration");
        self.write("put_player_config", Method::PUT, &path, Some(body))
            .await
    }

    /// Merge the given JSON into a player's configuration.
    pub async fn patch_player_config(
        &self,
        player_id: &str,
        body: &impl Serialize,
    ) -> Result<ApiResponse, Error> {
        let path = format!("/players/{player_id}/configuration");
        self.write("patch_player_config", Method::PATCH, &path, Some(body))
            .await
    }
}
