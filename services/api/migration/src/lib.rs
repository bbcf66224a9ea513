use sea_orm_migration::prelude::*;

mod m20260810_000001_create_users;
mod m20260810_000002_create_email_jobs;
mod m20260810_000003_create_profiles;
mod m20260810_000004_create_content_tables;
mod m20260810_000005_create_hire_requests;
mod m20260810_000006_create_user_messages;
mod m20260810_000007_create_analytics;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260810_000001_create_users::Migration),
            Box::new(m20260810_000002_create_email_jobs::Migration),
            Box::new(m20260810_000003_create_profiles::Migration),
            Box::new(m20260810_000004_create_content_tables::Migration),
            Box::new(m20260810_000005_create_hire_requests::Migration),
            Box::new(m20260810_000006_create_user_messages::Migration),
            Box::new(m20260810_000007_create_analytics::Migration),
        ]
    }
}
