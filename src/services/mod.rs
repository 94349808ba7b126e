// Service module exports

pub mod countdown;
pub mod plural;
pub mod reminder;
pub mod settings;
