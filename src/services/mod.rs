// Download history services
// Stateless or near-stateless services: classification, formatting, layouts, binding, settings.

pub mod formatters;
pub mod history_row_binder;
pub mod layout_inflater;
pub mod mime_classifier;
pub mod settings_engine;
