use serde::{Deserialize, Serialize};

use super::{CollectionStatus, SubmissionOutcome};

/// 运行模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RunMode {
    #[default]
    Normal,
    /// Usage fetch only, nothing is submitted.
    DryRun,
    /// Submit an empty collection (registrar is not queried).
    SkipCollection,
}

impl RunMode {
    /// `dry_run` takes precedence over `skip_collection`.
    pub fn from_flags(dry_run: bool, skip_collection: bool) -> Self {
        if dry_run {
            Self::DryRun
        } else if skip_collection {
            Self::SkipCollection
        } else {
            Self::Normal
        }
    }
}

/// 同步任务的静态参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncSettings {
    /// Team name sent in the team upsert.
    pub team_name: String,
    /// Server name sent in the account upsert.
    pub server_name: String,
    /// This host's public IP, sent in the account upsert.
    pub client_ip: String,
    pub mode: RunMode,
}

/// 一次运行的摘要
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub mode: RunMode,
    pub domains_collected: usize,
    /// `None` in dry-run mode.
    pub collection_status: Option<CollectionStatus>,
    pub collection_message: Option<String>,
    pub usage_available: bool,
    /// `None` in dry-run mode.
    pub outcome: Option<SubmissionOutcome>,
    /// `Fetched N domains` or `Dry run mode enabled`.
    pub message: String,
}
