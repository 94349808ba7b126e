// Module exports for models

pub mod countdown;
pub mod settings;
pub mod word_forms;
