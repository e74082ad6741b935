use crate::Contributor;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WidgetViewModel {
    /// `organization/repository`.
    pub repository_label: String,
    pub repository_url: String,
    /// One card per visible contributor, in API order.
    pub cards: Vec<ContributorCard>,
    pub total_count: usize,
    pub visible_count: usize,
    /// Present the "show more" control.
    pub show_more: bool,
    /// A fetch is outstanding.
    pub loading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributorCard {
    pub login: String,
    pub profile_url: String,
    pub contributions: u64,
}

impl From<&Contributor> for ContributorCard {
    fn from(contributor: &Contributor) -> Self {
        Self {
            login: contributor.login.clone(),
            profile_url: contributor.profile_url.clone(),
            contributions: contributor.contributions,
        }
    }
}
