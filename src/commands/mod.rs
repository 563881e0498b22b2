pub mod dashboard;
pub mod issues;
pub mod notifications;
pub mod profile;
pub mod projects;
pub mod search;
pub mod settings;
pub mod work;
