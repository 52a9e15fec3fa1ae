use reqwest::Method;
use serde::Serialize;

use super::*;
use crate::transport::ApiResponse;

impl<T: Transport> PlayerManagementClient<T> {
    /// List the embeds that belong to a player.
    pub async fn list_embeds(&self, player_id: &str) -> Result<ApiResponse, Error> {
        let path = format!("/players/{player_id}/embeds");
        self.get("list_embeds", &path).await
    }

    /// List a player's embeds and parse the `items` envelope. Non-2xx is an error.
    pub async fn list_embeds_typed(&self, player_id: &str) -> Result<ItemsResponse<Embed>, Error> {
        self.list_embeds(player_id).await?.error_for_status()?.json()
    }

    pub async fn create_embed(
        &self,
        player_id: &str,
        body: &impl Serialize,
    ) -> Result<ApiResponse, Error> {
        let path = format!("/players/{player_id}/embeds");
        self.write("create_embed", Method::POST, &path, Some(body))
            .await
    }

    pub async fn get_embed(&self, player_id: &str, embed_id: &str) -> Result<ApiResponse, Error> {
        let path = format!("/players/{player_id}/embeds/{embed_id}");
        self.get("get_embed", &path).await
    }

    pub async fn delete_embed(
        &self,
        player_id: &str,
        embed_id: &str,
    ) -> Result<ApiResponse, Error> {
        let path = format!("/players/{player_id}/embeds/{embed_id}");
        self.delete("delete_embed", &path).await
    }

    /// Publish a single embed's preview branch.
    pub async fn publish_embed(
        &self,
        player_id: &str,
        embed_id: &str,
        body: Option<&PublishRequest>,
    ) -> Result<ApiResponse, Error> {
        let path = format!("/players/{player_id}/embeds/{embed_id}/publish");
        self.write("publish_embed", Method::POST, &path, body)
            .await
    }
}
