//! Contributor cards core: pure widget state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::{LoadFailure, Msg};
pub use state::{
    AppState, Contributor, RequestId, WidgetConfig, WidgetState, DEFAULT_PAGE_SIZE, REVEAL_STEP,
};
pub use update::update;
pub use view_model::{ContributorCard, WidgetViewModel};
