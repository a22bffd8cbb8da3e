use reqwest::Method;

use super::request::{decode_first, decode_page};
use super::*;

impl Endpoint for GetRedemptionsParams {
    type Payload = RedemptionPage;

    const METHOD: Method = Method::GET;
    const PATH: &'static str = REDEMPTIONS_PATH;

    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![("broadcaster_id", self.broadcaster_id.clone())];
        if let Some(reward_id) = &self.reward_id {
            query.push(("reward_id", reward_id.clone()));
        }
        if let Some(id) = &self.id {
            query.push(("id", id.clone()));
        }
        if let Some(status) = self.status {
            query.push(("status", status.as_str().into()));
        }
        if let Some(sort) = self.sort {
            query.push(("sort", sort.as_str().into()));
        }
        if let Some(after) = self.after.as_ref().filter(|after| !after.is_empty()) {
            query.push(("after", after.clone()));
        }
        if let Some(first) = self.first {
            query.push(("first", first.to_string()));
        }
        query
    }

    fn decode(body: &str) -> Result<RedemptionPage, TwitchError> {
        let (redemptions, cursor) = decode_page(body)?;
        Ok(RedemptionPage {
            redemptions,
            cursor,
        })
    }
}

impl Endpoint for UpdateRedemptionStatusParams {
    type Payload = CustomRewardRedemption;

    const METHOD: Method = Method::PATCH;
    const PATH: &'static str = REDEMPTIONS_PATH;

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("broadcaster_id", self.broadcaster_id.clone()),
            ("reward_id", self.reward_id.clone()),
            ("id", self.id.clone()),
        ]
    }

    fn body(&self) -> Result<Option<serde_json::Value>, TwitchError> {
        Ok(Some(serde_json::json!({ "status": self.status })))
    }

    fn decode(body: &str) -> Result<CustomRewardRedemption, TwitchError> {
        decode_first(body, Self::PATH)
    }
}

impl<T: Transport> TwitchApiClient<T> {
    /// Get one page of redemptions for a broadcaster's rewards.
    ///
    /// Pass the returned cursor to [`GetRedemptionsParams::next_page`] to
    /// continue; pages are never fetched automatically.
    ///
    /// Required scope: `channel:read:redemptions`.
    pub async fn get_custom_reward_redemptions(
        &self,
        params: &GetRedemptionsParams,
    ) -> Result<HelixResponse<RedemptionPage>, TwitchError> {
        let resp = self.send(params).await?;
        tracing::debug!(
            count = resp.data.redemptions.len(),
            has_more = resp.data.has_more(),
            broadcaster_id = %params.broadcaster_id,
            "Fetched redemptions page"
        );
        Ok(resp)
    }

    /// Mark a redemption as fulfilled or canceled.
    ///
    /// Required scope: `channel:manage:redemptions`.
    pub async fn update_redemption_status(
        &self,
        params: &UpdateRedemptionStatusParams,
    ) -> Result<HelixResponse<CustomRewardRedemption>, TwitchError> {
        self.send(params).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    use super::*;

    #[test]
    fn test_redemptions_query_order_and_filters() {
        let params = GetRedemptionsParams::new("274637212")
            .with_reward_id("92af127c-7326-4483-a52b-b0da0be61c01")
            .with_status(RedemptionStatus::Canceled)
            .with_sort(RedemptionSort::Newest)
            .with_first(5);
        let request = params.to_request().unwrap();

        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "/channel_points/custom_rewards/redemptions");
        let keys: Vec<&str> = request.query.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, ["broadcaster_id", "reward_id", "status", "sort", "first"]);
        assert_eq!(request.query_value("status"), Some("CANCELED"));
        assert_eq!(request.query_value("first"), Some("5"));
        assert_eq!(request.body, None);
    }

    #[test]
    fn test_next_page_keeps_filters() {
        let params = GetRedemptionsParams::new("274637212")
            .with_status(RedemptionStatus::Unfulfilled)
            .with_first(2);
        let next = params.next_page("eyJiIjpudWxsfQ==");

        assert_eq!(next.after.as_deref(), Some("eyJiIjpudWxsfQ=="));
        assert_eq!(next.status, params.status);
        assert_eq!(next.first, Some(2));
        assert_eq!(
            next.to_request().unwrap().query_value("after"),
            Some("eyJiIjpudWxsfQ==")
        );
    }

    #[test]
    fn test_status_update_body() {
        let params = UpdateRedemptionStatusParams {
            broadcaster_id: "274637212".into(),
            reward_id: "92af127c-7326-4483-a52b-b0da0be61c01".into(),
            id: "17fa2df1-ad76-4804-bfa5-a40ef63efe63".into(),
            status: RedemptionStatus::Fulfilled,
        };
        let request = params.to_request().unwrap();
        assert_eq!(request.method, Method::PATCH);
        assert_eq!(request.body, Some(json!({ "status": "FULFILLED" })));
        assert_eq!(request.query.len(), 3);
    }

    #[test]
    fn test_redemption_page_deserializes() {
        let body = r#"{
          "data": [{
            "broadcaster_name": "torpedo09",
            "broadcaster_login": "torpedo09",
            "broadcaster_id": "274637212",
            "id": "17fa2df1-ad76-4804-bfa5-a40ef63efe63",
            "user_login": "torpedo09",
            "user_id": "274637212",
            "user_name": "torpedo09",
            "user_input": "",
            "status": "CANCELED",
            "redeemed_at": "2020-07-01T18:37:32Z",
            "reward": {
              "id": "92af127c-7326-4483-a52b-b0da0be61c01",
              "title": "game analysis",
              "prompt": "",
              "cost": 50000
            }
          }],
          "pagination": { "cursor": "eyJiIjpudWxsLCJhIjp7IkN1cnNvciI6Ik1UZG1ZVEprWmpFdFlXUTNOaTAwT0RBMExXSm1ZVFV0WVRRd1pXWTJNMlZtWlRZelgxOHlNREl3TFRBM0xUQXhWREU0T2pNM09qTXlMakl6TXpFeU56RTFOMW89In19" }
        }"#;

        let page = GetRedemptionsParams::decode(body).unwrap();
        assert_eq!(page.redemptions.len(), 1);
        let redemption = &page.redemptions[0];
        assert_eq!(redemption.status, RedemptionStatus::Canceled);
        assert_eq!(
            redemption.redeemed_at,
            Utc.with_ymd_and_hms(2020, 7, 1, 18, 37, 32).unwrap()
        );
        assert_eq!(redemption.reward.cost, 50000);
        assert!(page.has_more());
    }
}
