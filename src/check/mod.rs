//! Parameter-count checks over extracted declarations.

mod params;
mod types;
mod visibility;

pub use params::{check_params, effective_count};
pub use types::{Issue, RunSummary};
pub use visibility::{is_public, GoVisibility, Visibility, VisibilityRule};
