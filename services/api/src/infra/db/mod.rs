pub mod analytics;
pub mod content;
pub mod hire;
pub mod jobs;
pub mod messages;
pub mod profile;
pub mod users;
