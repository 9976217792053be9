// Global state management

pub mod settings_store;
