//! Twitch Helix channel points client.
//!
//! Every operation follows the same shape: a parameter bundle implementing
//! [`Endpoint`] is turned into a [`HelixRequest`], executed through a
//! [`Transport`], and the response body is decoded into the endpoint's
//! payload wrapped in a [`HelixResponse`].

mod config;
mod redemptions;
mod request;
mod rewards;
mod transport;

pub mod models;


pub use config::HelixConfig;
pub use models::{
    CreateCustomRewardParams, CustomReward, CustomRewardChanges, CustomRewardDefinition,
    CustomRewardRedemption, DeleteCustomRewardParams, GetCustomRewardsParams,
    GetRedemptionsParams, GlobalCooldownSetting, HelixPagination, HelixResponse,
    MaxPerStreamSetting, MaxPerUserPerStreamSetting, RateLimit, RedemptionPage,
    RedemptionReward, RedemptionSort, RedemptionStatus, ResponseCommon, RewardImage,
    UpdateCustomRewardParams, UpdateRedemptionStatusParams,
};
pub use request::Endpoint;
pub use transport::{HelixRequest, HttpTransport, RawResponse, Transport};

use crate::TwitchError;

const HELIX_BASE: &str = "https://api.twitch.tv/helix";

const CUSTOM_REWARDS_PATH: &str = "/channel_points/custom_rewards";
const REDEMPTIONS_PATH: &str = "/channel_points/custom_rewards/redemptions";

/// Twitch Helix channel points client over a pre-authenticated transport.
pub struct TwitchApiClient<T = HttpTransport> {
    pub(super) transport: T,
}

impl<T: Transport> TwitchApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// The transport requests are sent through.
    pub fn transport(&self) -> &T {
        &self.transport
    }
}
