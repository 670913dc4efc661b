use std::{fs::File, path::Path, time::Duration};

use anyhow::{bail, Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use trex_common::{
    config::{
        DEFAULT_EXPIRY_WARNING_SECS, DEFAULT_KYC_TOPIC, DEFAULT_QUERY_TIMEOUT_MS,
        MAX_SCANNED_TOPIC, MAX_STANDARD_TOPIC, VERSION,
    },
    identity::TopicId,
};

// Functions Helpers
fn default_query_timeout_ms() -> u64 {
    DEFAULT_QUERY_TIMEOUT_MS
}

fn default_kyc_topic() -> TopicId {
    DEFAULT_KYC_TOPIC
}

fn default_max_claim_topic() -> u32 {
    MAX_STANDARD_TOPIC
}

fn default_expiry_warning_secs() -> u64 {
    DEFAULT_EXPIRY_WARNING_SECS
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Upper bound for a single contract query, in milliseconds.
    /// A query running longer resolves to its empty default.
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,
    /// Topic whose trusted issuers act as KYC providers
    #[serde(default = "default_kyc_topic")]
    pub kyc_topic: TopicId,
    /// Claims are scanned for topics 1 to this value,
    /// in addition to the required topics. At most `MAX_SCANNED_TOPIC`.
    #[serde(default = "default_max_claim_topic")]
    pub max_claim_topic: u32,
    /// Claims expiring within this window are reported as expiring soon
    #[serde(default = "default_expiry_warning_secs")]
    pub expiry_warning_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            query_timeout_ms: default_query_timeout_ms(),
            kyc_topic: default_kyc_topic(),
            max_claim_topic: default_max_claim_topic(),
            expiry_warning_secs: default_expiry_warning_secs(),
        }
    }
}

impl ClientConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref()).context("Error while opening config file")?;
        let config: Self =
            serde_json::from_reader(file).context("Error while reading config file")?;
        config.validate()?;
        if log::log_enabled!(log::Level::Info) {
            info!(
                "Loaded client config v{} from {}",
                VERSION,
                path.as_ref().display()
            );
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_claim_topic > MAX_SCANNED_TOPIC {
            bail!(
                "max_claim_topic {} is above the limit of {}",
                self.max_claim_topic,
                MAX_SCANNED_TOPIC
            );
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Error while serializing config file")
    }

    #[inline]
    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }

    /// Topics scanned when loading claims, before adding the required ones
    pub fn scanned_topics(&self) -> impl Iterator<Item = TopicId> {
        (1..=self.max_claim_topic.min(MAX_SCANNED_TOPIC))
            .filter_map(|value| TopicId::new(value).ok())
    }
}
