use crate::{Contributor, RequestId, WidgetConfig};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Host replaced the widget configuration.
    ConfigChanged(WidgetConfig),
    /// Host changed only the page size; applies from the next fetch on.
    PageSizeChanged(usize),
    /// User activated the "show more" control.
    ShowMoreClicked,
    /// Engine completion for a fetch.
    ContributorsLoaded {
        request_id: RequestId,
        result: Result<Vec<Contributor>, LoadFailure>,
    },
}

/// Why a fetch produced no contributor list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadFailure {
    /// Network, HTTP status, or size-cap failure.
    Transport,
    /// Response body was not an array of contributor records.
    Malformed,
}
