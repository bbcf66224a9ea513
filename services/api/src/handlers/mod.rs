pub mod analytics;
pub mod auth;
pub mod awards;
pub mod blogs;
pub mod educations;
pub mod experiences;
pub mod faqs;
pub mod hire;
pub mod messages;
pub mod npm_packages;
pub mod profile;
pub mod projects;
pub mod reviews;
pub mod services;
pub mod skills;
pub mod socials;
pub mod uploads;
pub mod users;
