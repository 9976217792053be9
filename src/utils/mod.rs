// Utility functions

pub mod clipboard;
pub mod data_state;

pub use data_state::DataState;
