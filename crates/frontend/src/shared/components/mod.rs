pub mod badge;
pub mod confirm_dialog;
pub mod date_input;
pub mod date_range_picker;
pub mod stat_card;
pub mod table;

pub use badge::{Badge, EstadoPagoBadge};
pub use confirm_dialog::ConfirmDialog;
pub use date_input::DateInput;
pub use date_range_picker::DateRangePicker;
pub use stat_card::{StatCard, StatTone};
