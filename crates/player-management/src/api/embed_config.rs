use reqwest::Method;
use serde::Serialize;

use super::*;
use crate::transport::ApiResponse;

impl<T: Transport> PlayerManagementClient<T> {
    pub async fn get_embed_config(
        &self,
        player_id: &str,
        embed_id: &str,
        branch: Option<&str>,
    ) -> Result<ApiResponse, Error> {
        let mut path = format!("/players/{player_id}/embeds/{embed_id}/configuration");
        if let Some(branch) = branch {
            path.push('/');
            path.push_str(branch);
        }
        self.get("get_embed_config", &path).await
    }

    /// Get the server-side merge of a player branch with an embed branch.
    ///
    /// Branch names go into the query string verbatim.
    pub async fn get_merged_embed_config(
        &self,
        player_id: &str,
        player_branch: &str,
        embed_id: &str,
        embed_branch: &str,
    ) -> Result<ApiResponse, Error> {
        let path = format!(
            "/players/{player_id}/embeds/{embed_id}/configuration/merged?playerBranch={player_branch}&embedBranch={embed_branch}"
        );
        self.get("get_merged_embed_config", &path).await
    }

    /// Replace an embed's configuration.
    pub async fn put_embed_config(
        &self,
        player_id: &str,
        embed_id: &str,
        body: &impl Serialize,
    ) -> Result<ApiResponse, Error> {
        let path = format!("/players/{player_id}/embeds/{embed_id}/configuration");
        tracing::debug!(embed_id, "Replacing embed configuration");
        self.write("put_embed_config", Method::PUT, &path, Some(body))
            .await
    }

    /// Merge the given JSON into an embed's configuration.
    pub async fn patch_embed_config(
        &self,
        player_id: &str,
        embed_id: &str,
        body: &impl Serialize,
    ) -> Result<ApiResponse, Error> {
        let path = format!("/players/{player_id}/embeds/{embed_id}/configuration");
        self.write("patch_embed_config", Method::PATCH, &path, Some(body))
            .await
    }
}
