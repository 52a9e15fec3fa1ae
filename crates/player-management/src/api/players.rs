use reqwest::Method;
use serde::Serialize;

use super::*;
use crate::transport::ApiResponse;

impl<T: Transport> PlayerManagementClient<T> {
    /// List all players in the account.
    pub async fn list_players(&self) -> Result<ApiResponse, Error> {
        self.get("list_players", "/players").await
    }

    /// List all players and parse the `items` envelope. Non-2xx is an error.
    pub async fn list_players_typed(&self) -> Result<ItemsResponse<Player>, Error> {
        self.list_players().await?.error_for_status()?.json()
    }

    /// Create a player from the given JSON.
    pub async fn create_player(&self, body: &impl Serialize) -> Result<ApiResponse, Error> {
        self.write("create_player", Method::POST, "/players", Some(body))
            .await
    }

    pub async fn get_player(&self, player_id: &str) -> Result<ApiResponse, Error> {
        let path = format!("/players/{player_id}");
        self.get("get_player", &path).await
    }

    /// Patch a player's top-level fields (name, description).
    pub async fn patch_player(
        &self,
        player_id: &str,
        body: &impl Serialize,
    ) -> Result<ApiResponse, Error> {
        let path = format!("/players/{player_id}");
        self.write("patch_player", Method::PATCH, &path, Some(body))
            .await
    }

    pub async fn delete_player(&self, player_id: &str) -> Result<ApiResponse, Error> {
        let path = format!("/players/{player_id}");
        self.delete("delete_player", &path).await
    }

    /// Publish the player's preview branch to master.
    pub async fn publish_player(
        &self,
        player_id: &str,
        body: Option<&PublishRequest>,
    ) -> Result<ApiResponse, Error> {
        let path = format!("/players/{player_id}/publish");
        self.write("publish_player", Method::POST, &path, body)
            .await
    }
}
