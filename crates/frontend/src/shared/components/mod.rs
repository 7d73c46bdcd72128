pub mod breadcrumb_bar;
pub mod collection_screen;
pub mod collection_view;
pub mod date_range_input;
pub mod filter_panel;
pub mod numeric_range_input;
pub mod pagination_controls;
pub mod selection_bar;
pub mod table_checkbox;
pub mod ui;
pub mod view_mode_switch;

pub use breadcrumb_bar::BreadcrumbBar;
pub use collection_screen::CollectionScreen;
pub use collection_view::CollectionView;
pub use date_range_input::DateRangeInput;
pub use filter_panel::FilterPanel;
pub use numeric_range_input::NumericRangeInput;
pub use pagination_controls::PaginationControls;
pub use selection_bar::SelectionBar;
pub use table_checkbox::SelectionCheckbox;
pub use view_mode_switch::{ViewMode, ViewModeSwitch};
