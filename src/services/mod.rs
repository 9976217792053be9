// External services

pub mod shortener;
