pub mod use_shortener;

pub use use_shortener::use_shortener;
