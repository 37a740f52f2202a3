pub mod application;
pub mod service;
