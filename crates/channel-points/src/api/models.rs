use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

/// Typed result of one Helix call: response metadata plus the
/// operation-specific payload.
#[derive(Debug, Clone, PartialEq)]
pub struct HelixResponse<T> {
    pub common: ResponseCommon,
    pub data: T,
}

impl<T> HelixResponse<T> {
    pub fn into_data(self) -> T {
        self.data
    }
}

/// Metadata shared by every successful response.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseCommon {
    pub status: u16,
    pub rate_limit: Option<RateLimit>,
}

/// Helix rate-limit bucket state from the `Ratelimit-*` headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    pub limit: u64,
    pub remaining: u64,
    /// Unix timestamp at which the bucket refills.
    pub reset: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HelixPagination {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

/// One page of redemptions from GET /helix/channel_points/custom_rewards/redemptions.
#[derive(Debug, Clone, PartialEq)]
pub struct RedemptionPage {
    /// Redemptions in server order.
    pub redemptions: Vec<CustomRewardRedemption>,
    /// Opaque cursor for the next page; pass back verbatim as `after`.
    pub cursor: Option<String>,
}

impl RedemptionPage {
    pub fn has_more(&self) -> bool {
        self.cursor.is_some()
    }
}

// ---------------------------------------------------------------------------
// Rewards
// ---------------------------------------------------------------------------

/// Image URLs at different scales.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardImage {
    pub url_1x: String,
    pub url_2x: String,
    pub url_4x: String,
}

/// Nested setting for max redemptions per stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaxPerStreamSetting {
    pub is_enabled: bool,
    pub max_per_stream: u64,
}

/// Nested setting for max redemptions per user per stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaxPerUserPerStreamSetting {
    pub is_enabled: bool,
    pub max_per_user_per_stream: u64,
}

/// Nested setting for global cooldown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalCooldownSetting {
    pub is_enabled: bool,
    pub global_cooldown_seconds: u64,
}

/// Custom channel point reward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomReward {
    #[serde(default)]
    pub broadcaster_id: String,
    #[serde(default)]
    pub broadcaster_login: String,
    #[serde(default)]
    pub broadcaster_name: String,
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub prompt: String,
    pub cost: u64,
    /// Custom image; `None` when the reward uses the default image.
    #[serde(default)]
    pub image: Option<RewardImage>,
    #[serde(default)]
    pub default_image: RewardImage,
    #[serde(default)]
    pub background_color: String,
    pub is_enabled: bool,
    #[serde(default)]
    pub is_user_input_required: bool,
    #[serde(default)]
    pub max_per_stream_setting: MaxPerStreamSetting,
    #[serde(default)]
    pub max_per_user_per_stream_setting: MaxPerUserPerStreamSetting,
    #[serde(default)]
    pub global_cooldown_setting: GlobalCooldownSetting,
    pub is_paused: bool,
    pub is_in_stock: bool,
    #[serde(default)]
    pub should_redemptions_skip_request_queue: bool,
    #[serde(default)]
    pub redemptions_redeemed_current_stream: Option<u64>,
    #[serde(default)]
    pub cooldown_expires_at: Option<DateTime<Utc>>,
}

/// Request body for creating a custom reward.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomRewardDefinition {
    pub title: String,
    pub cost: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_user_input_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_max_per_stream_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_per_stream: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_max_per_user_per_stream_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_per_user_per_stream: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_global_cooldown_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_cooldown_seconds: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_redemptions_skip_request_queue: Option<bool>,
}

impl CustomRewardDefinition {
    pub fn new(title: impl Into<String>, cost: u64) -> Self {
        Self {
            title: title.into(),
            cost,
            ..Self::default()
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn with_enabled(mut self, is_enabled: bool) -> Self {
        self.is_enabled = Some(is_enabled);
        self
    }

    pub fn with_user_input_required(mut self, required: bool) -> Self {
        self.is_user_input_required = Some(required);
        self
    }

    /// Limit total redemptions per stream.
    pub fn with_max_per_stream(mut self, max: u64) -> Self {
        self.is_max_per_stream_enabled = Some(true);
        self.max_per_stream = Some(max);
        self
    }

    /// Limit redemptions per user per stream.
    pub fn with_max_per_user_per_stream(mut self, max: u64) -> Self {
        self.is_max_per_user_per_stream_enabled = Some(true);
        self.max_per_user_per_stream = Some(max);
        self
    }

    pub fn with_global_cooldown(mut self, seconds: u64) -> Self {
        self.is_global_cooldown_enabled = Some(true);
        self.global_cooldown_seconds = Some(seconds);
        self
    }
}

/// Request body for updating a custom reward. Unset fields are left as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomRewardChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_paused: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_user_input_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_max_per_stream_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_per_stream: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_max_per_user_per_stream_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_per_user_per_stream: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_global_cooldown_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_cooldown_seconds: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_redemptions_skip_request_queue: Option<bool>,
}

// ---------------------------------------------------------------------------
// Redemptions
// ---------------------------------------------------------------------------

/// Redemption lifecycle state. `Unfulfilled` is the open state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RedemptionStatus {
    Unfulfilled,
    Fulfilled,
    Canceled,
}

impl RedemptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RedemptionStatus::Unfulfilled => "UNFULFILLED",
            RedemptionStatus::Fulfilled => "FULFILLED",
            RedemptionStatus::Canceled => "CANCELED",
        }
    }
}

/// Ordering of listed redemptions by `redeemed_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RedemptionSort {
    Oldest,
    Newest,
}

impl RedemptionSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            RedemptionSort::Oldest => "OLDEST",
            RedemptionSort::Newest => "NEWEST",
        }
    }
}

/// Snapshot of the reward as it was when redeemed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedemptionReward {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub prompt: String,
    pub cost: u64,
}

/// A viewer's redemption of a custom reward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomRewardRedemption {
    pub broadcaster_id: String,
    #[serde(default)]
    pub broadcaster_login: String,
    #[serde(default)]
    pub broadcaster_name: String,
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub user_login: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub user_input: String,
    pub status: RedemptionStatus,
    pub redeemed_at: DateTime<Utc>,
    pub reward: RedemptionReward,
}

// ---------------------------------------------------------------------------
// Parameter bundles
// ---------------------------------------------------------------------------

/// Parameters for POST /helix/channel_points/custom_rewards.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateCustomRewardParams {
    /// Query: `broadcaster_id`.
    pub broadcaster_id: String,
    /// Body.
    pub reward: CustomRewardDefinition,
}

/// Parameters for PATCH /helix/channel_points/custom_rewards.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateCustomRewardParams {
    /// Query: `broadcaster_id`.
    pub broadcaster_id: String,
    /// Query: `id`.
    pub id: String,
    /// Body.
    pub changes: CustomRewardChanges,
}

/// Parameters for DELETE /helix/channel_points/custom_rewards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCustomRewardParams {
    pub broadcaster_id: String,
    pub id: String,
}

/// Parameters for GET /helix/channel_points/custom_rewards. All query fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetCustomRewardsParams {
    pub broadcaster_id: String,
    pub id: Option<String>,
    pub only_manageable_rewards: bool,
}

impl GetCustomRewardsParams {
    pub fn new(broadcaster_id: impl Into<String>) -> Self {
        Self {
            broadcaster_id: broadcaster_id.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn only_manageable(mut self) -> Self {
        self.only_manageable_rewards = true;
        self
    }
}

/// Parameters for GET /helix/channel_points/custom_rewards/redemptions. All query fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetRedemptionsParams {
    pub broadcaster_id: String,
    pub reward_id: Option<String>,
    pub id: Option<String>,
    pub status: Option<RedemptionStatus>,
    pub sort: Option<RedemptionSort>,
    pub after: Option<String>,
    /// Page size hint. The server decides the actual page size.
    pub first: Option<u32>,
}

impl GetRedemptionsParams {
    pub fn new(broadcaster_id: impl Into<String>) -> Self {
        Self {
            broadcaster_id: broadcaster_id.into(),
            ..Self::default()
        }
    }

    pub fn with_reward_id(mut self, reward_id: impl Into<String>) -> Self {
        self.reward_id = Some(reward_id.into());
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_status(mut self, status: RedemptionStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_sort(mut self, sort: RedemptionSort) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_first(mut self, first: u32) -> Self {
        self.first = Some(first);
        self
    }

    /// Same filters, continuing after `cursor`.
    pub fn next_page(&self, cursor: impl Into<String>) -> Self {
        Self {
            after: Some(cursor.into()),
            ..self.clone()
        }
    }
}

/// Parameters for PATCH /helix/channel_points/custom_rewards/redemptions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRedemptionStatusParams {
    /// Query: `broadcaster_id`.
    pub broadcaster_id: String,
    /// Query: `reward_id`.
    pub reward_id: String,
    /// Query: `id`.
    pub id: String,
    /// Body: `status`.
    pub status: RedemptionStatus,
}
