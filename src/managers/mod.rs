// Download history state managers
// Managers own list state: the date-divided list and the adapter that binds its rows.

pub mod date_divided_list;
pub mod download_history_adapter;
