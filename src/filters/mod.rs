pub mod notifications;
pub mod search;
pub mod work;
