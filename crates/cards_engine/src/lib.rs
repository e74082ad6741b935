//! Contributor cards engine: GitHub fetch pipeline and effect execution.
mod decode;
mod engine;
mod fetch;
mod persist;
mod types;

pub use decode::{decode_contributors, DecodeError};
pub use engine::{EngineError, EngineHandle};
pub use fetch::{ContributorSource, FetchSettings, GithubContributorSource, GITHUB_ACCEPT};
pub use persist::{ensure_output_dir, PageWriter, PersistError};
pub use types::{ContributorRecord, EngineEvent, FailureKind, FetchError, RequestId};
