// Event Countdown Library
// Countdown breakdown and Russian plural formatting, plus the glue around them

pub mod models;
pub mod services;
pub mod utils;

pub use models::countdown::CountdownBreakdown;
pub use models::word_forms::{UnitWordForms, WordForms};
pub use services::countdown::compute_countdown;
pub use services::plural::{format_countdown, format_quantity, select_form};
