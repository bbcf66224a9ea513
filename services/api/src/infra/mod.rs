pub mod cdn;
pub mod db;
pub mod mailer;
pub mod queue;
