use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EmailJobs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EmailJobs::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(EmailJobs::Kind).string().not_null())
                    .col(
                        ColumnDef::new(EmailJobs::Payload)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmailJobs::Attempts)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(EmailJobs::LastError).string())
                    .col(
                        ColumnDef::new(EmailJobs::NextAttemptAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmailJobs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(EmailJobs::FailedAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await?;

        // Index for the worker poll (due, unfailed, ordered by next_attempt_at).
        manager
            .create_index(
                Index::create()
                    .table(EmailJobs::Table)
                    .col(EmailJobs::NextAttemptAt)
                    .name("idx_email_jobs_next_attempt_at")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EmailJobs::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum EmailJobs {
    Table,
    Id,
    Kind,
    Payload,
    Attempts,
    LastError,
    NextAttemptAt,
    CreatedAt,
    FailedAt,
}
