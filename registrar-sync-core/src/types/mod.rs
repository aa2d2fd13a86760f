//! Type definition module

mod collection;
mod run;
mod submission;

pub use collection::{CollectionResult, CollectionStatus};
pub use run::{RunMode, RunSummary, SyncSettings};
pub use submission::{
    AccountPayload, DomainBatchPayload, DomainWireRecord, RemoteId, SubmissionContext,
    SubmissionOutcome, TeamPayload,
};

// Re-export upstream record types
pub use registrar_sync_provider::{
    BalanceSnapshot, DomainRecord, HostRecord, HostRecordInput, SetHostsResult, UsageSnapshot,
};
