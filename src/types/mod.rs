// Download history shared type definitions
// Plain data consumed and produced by the services and managers.

pub mod download;
pub mod errors;
pub mod file_category;
pub mod list_item;
pub mod row;
pub mod settings;
