// UI Components

pub mod icons;
pub mod shortened_link;
pub mod url_shortener;

pub use url_shortener::UrlShortener;
