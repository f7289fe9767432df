// Components module

pub mod date_range;
pub mod limit_control;
pub mod result_panel;
pub mod submit_button;
pub mod view_selector;

pub use date_range::DateRange;
pub use limit_control::LimitControl;
pub use result_panel::ResultPanel;
pub use submit_button::SubmitButton;
pub use view_selector::ViewSelector;
