use crate::view_model::{ContributorCard, WidgetViewModel};

/// Sequence number attached to every fetch so late results can be discarded.
pub type RequestId = u64;

/// Initial number of visible cards when the host does not set one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Number of extra cards revealed per "show more" activation.
pub const REVEAL_STEP: usize = 5;

/// Externally supplied widget inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    pub organization: String,
    pub repository: String,
    pub page_size: usize,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            organization: String::new(),
            repository: String::new(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl WidgetConfig {
    pub fn new(organization: impl Into<String>, repository: impl Into<String>) -> Self {
        Self {
            organization: organization.into(),
            repository: repository.into(),
            ..Self::default()
        }
    }

    /// Page size is floored at 1.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Both organization and repository are set, so a fetch may be issued.
    pub fn is_complete(&self) -> bool {
        !self.organization.is_empty() && !self.repository.is_empty()
    }

    /// `organization/repository`, as shown in the widget header.
    pub fn slug(&self) -> String {
        format!("{}/{}", self.organization, self.repository)
    }

    pub(crate) fn targets_same_repository(&self, other: &WidgetConfig) -> bool {
        self.organization == other.organization && self.repository == other.repository
    }
}

/// A user record returned by the contributors endpoint. Identity is `login`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contributor {
    pub login: String,
    pub profile_url: String,
    pub contributions: u64,
}

/// Fetched contributor list plus the visible-count cursor.
///
/// `visible_count <= all_contributors.len()` holds for every value produced
/// through this type's API.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WidgetState {
    all_contributors: Vec<Contributor>,
    visible_count: usize,
}

impl WidgetState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State after a successful fetch: `visible_count = min(page_size, len)`.
    pub fn from_fetch(contributors: Vec<Contributor>, page_size: usize) -> Self {
        let visible_count = page_size.max(1).min(contributors.len());
        Self {
            all_contributors: contributors,
            visible_count,
        }
    }

    pub fn all_contributors(&self) -> &[Contributor] {
        &self.all_contributors
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn visible_contributors(&self) -> &[Contributor] {
        &self.all_contributors[..self.visible_count]
    }

    /// Whether the "show more" control should be presented.
    pub fn has_more(&self) -> bool {
        self.visible_count < self.all_contributors.len()
    }

    /// Advances the cursor by [`REVEAL_STEP`], capped at the list length.
    /// Returns `false` when already at the end.
    pub fn reveal_more(&mut self) -> bool {
        if !self.has_more() {
            return false;
        }
        self.visible_count = (self.visible_count + REVEAL_STEP).min(self.all_contributors.len());
        true
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.all_contributors.is_empty() && self.visible_count == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    config: WidgetConfig,
    widget: WidgetState,
    next_request_id: RequestId,
    pending_request: Option<RequestId>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            config: WidgetConfig::default(),
            widget: WidgetState::default(),
            next_request_id: 1,
            pending_request: None,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn widget(&self) -> &WidgetState {
        &self.widget
    }

    /// Id of the fetch whose result will be applied, if one is outstanding.
    pub fn pending_request(&self) -> Option<RequestId> {
        self.pending_request
    }

    pub fn view(&self) -> WidgetViewModel {
        WidgetViewModel {
            repository_label: self.config.slug(),
            repository_url: format!(
                "https://github.com/{}/{}",
                self.config.organization, self.config.repository
            ),
            cards: self
                .widget
                .visible_contributors()
                .iter()
                .map(ContributorCard::from)
                .collect(),
            total_count: self.widget.all_contributors().len(),
            visible_count: self.widget.visible_count(),
            show_more: self.widget.has_more(),
            loading: self.pending_request.is_some(),
        }
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn replace_config(&mut self, config: WidgetConfig) -> bool {
        if self.config == config {
            return false;
        }
        self.config = config;
        true
    }

    /// Zero is rejected; the visible cursor is left alone until the next fetch.
    pub(crate) fn set_page_size(&mut self, page_size: usize) -> bool {
        if page_size == 0 || self.config.page_size == page_size {
            return false;
        }
        self.config.page_size = page_size;
        true
    }

    pub(crate) fn begin_request(&mut self) -> RequestId {
        let id = self.next_request_id;
        self.next_request_id += 1;
        self.pending_request = Some(id);
        id
    }

    pub(crate) fn abandon_request(&mut self) {
        self.pending_request = None;
    }

    /// Claims the outstanding request if `request_id` is the latest one.
    pub(crate) fn settle_request(&mut self, request_id: RequestId) -> bool {
        if self.pending_request != Some(request_id) {
            return false;
        }
        self.pending_request = None;
        self.mark_dirty();
        true
    }

    pub(crate) fn replace_widget(&mut self, contributors: Vec<Contributor>) {
        self.widget = WidgetState::from_fetch(contributors, self.config.page_size);
    }

    pub(crate) fn reset_widget(&mut self) {
        if !self.widget.is_empty() {
            self.widget = WidgetState::new();
        }
    }

    pub(crate) fn reveal_more(&mut self) -> bool {
        let changed = self.widget.reveal_more();
        if changed {
            self.mark_dirty();
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contributors(n: usize) -> Vec<Contributor> {
        (0..n)
            .map(|i| Contributor {
                login: format!("user{i}"),
                profile_url: format!("https://github.com/user{i}"),
                contributions: (n - i) as u64,
            })
            .collect()
    }

    #[test]
    fn from_fetch_caps_visible_count_at_list_length() {
        for page_size in 1..=20 {
            for len in 0..=25 {
                let state = WidgetState::from_fetch(contributors(len), page_size);
                assert_eq!(state.visible_count(), page_size.min(len));
                assert_eq!(state.visible_contributors().len(), page_size.min(len));
            }
        }
    }

    #[test]
    fn reveal_more_steps_by_five_until_exhausted() {
        let mut state = WidgetState::from_fetch(contributors(17), 3);
        let mut seen = vec![state.visible_count()];
        while state.reveal_more() {
            seen.push(state.visible_count());
        }
        assert_eq!(seen, vec![3, 8, 13, 17]);
        assert!(!state.has_more());
        assert!(!state.reveal_more());
        assert_eq!(state.visible_count(), 17);
    }

    #[test]
    fn empty_state_has_nothing_to_reveal() {
        let mut state = WidgetState::new();
        assert!(!state.has_more());
        assert!(!state.reveal_more());
        assert!(state.visible_contributors().is_empty());
    }

    #[test]
    fn config_completeness_requires_both_fields() {
        assert!(!WidgetConfig::default().is_complete());
        assert!(!WidgetConfig::new("rust-lang", "").is_complete());
        assert!(!WidgetConfig::new("", "rust").is_complete());
        assert!(WidgetConfig::new("rust-lang", "rust").is_complete());
    }

    #[test]
    fn page_size_is_floored_at_one() {
        assert_eq!(WidgetConfig::new("a", "b").with_page_size(0).page_size, 1);
        assert_eq!(WidgetConfig::new("a", "b").with_page_size(7).page_size, 7);
    }
}
