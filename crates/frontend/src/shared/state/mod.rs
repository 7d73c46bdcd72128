pub mod breadcrumbs;
pub mod filter_store;
pub mod preference_store;
pub mod selection;

pub use breadcrumbs::Crumb;
pub use filter_store::FilterStore;
pub use preference_store::{use_preferences, PreferenceStore, Preferences};
pub use selection::{SelectionEntry, SelectionList};
