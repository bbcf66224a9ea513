pub mod awards;
pub mod blogs;
pub mod educations;
pub mod email_jobs;
pub mod experiences;
pub mod faqs;
pub mod file_documents;
pub mod hire_requests;
pub mod npm_packages;
pub mod page_views;
pub mod pages;
pub mod profiles;
pub mod projects;
pub mod reviews;
pub mod services;
pub mod skills;
pub mod socials;
pub mod user_messages;
pub mod users;
pub mod visitors;
