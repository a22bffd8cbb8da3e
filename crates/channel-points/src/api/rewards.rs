use reqwest::Method;

use super::request::{decode_first, decode_list};
use super::*;

impl Endpoint for CreateCustomRewardParams {
    type Payload = CustomReward;

    const METHOD: Method = Method::POST;
    const PATH: &'static str = CUSTOM_REWARDS_PATH;

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![("broadcaster_id", self.broadcaster_id.clone())]
    }

    fn body(&self) -> Result<Option<serde_json::Value>, TwitchError> {
        Ok(Some(serde_json::to_value(&self.reward)?))
    }

    fn decode(body: &str) -> Result<CustomReward, TwitchError> {
        decode_first(body, Self::PATH)
    }
}

impl Endpoint for UpdateCustomRewardParams {
    type Payload = CustomReward;

    const METHOD: Method = Method::PATCH;
    const PATH: &'static str = CUSTOM_REWARDS_PATH;

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("broadcaster_id", self.broadcaster_id.clone()),
            ("id", self.id.clone()),
        ]
    }

    fn body(&self) -> Result<Option<serde_json::Value>, TwitchError> {
        Ok(Some(serde_json::to_value(&self.changes)?))
    }

    fn decode(body: &str) -> Result<CustomReward, TwitchError> {
        decode_first(body, Self::PATH)
    }
}

impl Endpoint for DeleteCustomRewardParams {
    type Payload = ();

    const METHOD: Method = Method::DELETE;
    const PATH: &'static str = CUSTOM_REWARDS_PATH;

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("broadcaster_id", self.broadcaster_id.clone()),
            ("id", self.id.clone()),
        ]
    }

    // 204 No Content
    fn decode(_body: &str) -> Result<(), TwitchError> {
        Ok(())
    }
}

impl Endpoint for GetCustomRewardsParams {
    type Payload = Vec<CustomReward>;

    const METHOD: Method = Method::GET;
    const PATH: &'static str = CUSTOM_REWARDS_PATH;

    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![("broadcaster_id", self.broadcaster_id.clone())];
        if let Some(id) = &self.id {
            query.push(("id", id.clone()));
        }
        if self.only_manageable_rewards {
            query.push(("only_manageable_rewards", "true".into()));
        }
        query
    }

    fn decode(body: &str) -> Result<Vec<CustomReward>, TwitchError> {
        decode_list(body)
    }
}

impl<T: Transport> TwitchApiClient<T> {
    /// Create a custom channel point reward.
    ///
    /// Required scope: `channel:manage:redemptions`.
    pub async fn create_custom_reward(
        &self,
        params: &CreateCustomRewardParams,
    ) -> Result<HelixResponse<CustomReward>, TwitchError> {
        self.send(params).await
    }

    /// Update a custom channel point reward. Only the fields set in
    /// `params.changes` are sent.
    ///
    /// Required scope: `channel:manage:redemptions`.
    pub async fn update_custom_reward(
        &self,
        params: &UpdateCustomRewardParams,
    ) -> Result<HelixResponse<CustomReward>, TwitchError> {
        self.send(params).await
    }

    /// Delete a custom channel point reward.
    ///
    /// Required scope: `channel:manage:redemptions`.
    pub async fn delete_custom_reward(
        &self,
        params: &DeleteCustomRewardParams,
    ) -> Result<HelixResponse<()>, TwitchError> {
        self.send(params).await
    }

    /// Get the custom channel point rewards for a broadcaster.
    ///
    /// Required scope: `channel:read:redemptions`.
    pub async fn get_custom_rewards(
        &self,
        params: &GetCustomRewardsParams,
    ) -> Result<HelixResponse<Vec<CustomReward>>, TwitchError> {
        let resp = self.send(params).await?;
        tracing::debug!(
            count = resp.data.len(),
            broadcaster_id = %params.broadcaster_id,
            "Fetched custom rewards"
        );
        Ok(resp)
    }

    /// Enable or disable a custom channel point reward.
    pub async fn update_reward_enabled(
        &self,
        broadcaster_id: &str,
        reward_id: &str,
        is_enabled: bool,
    ) -> Result<HelixResponse<CustomReward>, TwitchError> {
        let params = UpdateCustomRewardParams {
            broadcaster_id: broadcaster_id.to_string(),
            id: reward_id.to_string(),
            changes: CustomRewardChanges {
                is_enabled: Some(is_enabled),
                ..CustomRewardChanges::default()
            },
        };
        self.send(&params).await
    }
}
