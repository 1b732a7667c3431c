pub mod status_updates;
