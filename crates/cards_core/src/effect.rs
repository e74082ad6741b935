use crate::RequestId;

/// Side effects requested by [`crate::update`]; executed by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the contributor list for `organization/repository`.
    FetchContributors {
        request_id: RequestId,
        organization: String,
        repository: String,
    },
}
