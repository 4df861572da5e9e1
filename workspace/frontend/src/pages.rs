pub mod analytics;
pub mod not_found;
pub mod overview;
pub mod reports;
pub mod settings;
pub mod trends;
pub mod users;
