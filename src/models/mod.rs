pub mod dashboard;
pub mod notification;
pub mod project;
pub mod record;
pub mod search;
pub mod user;
pub mod work_item;
