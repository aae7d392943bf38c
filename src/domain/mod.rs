pub mod app_config;
pub mod download;
pub mod error;
pub mod image_candidate;

// Menu dataset records
pub mod menu;
