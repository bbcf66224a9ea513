use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Profiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Profiles::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Profiles::Email).string())
                    .col(ColumnDef::new(Profiles::Name).string())
                    .col(ColumnDef::new(Profiles::Subtitle).string())
                    .col(ColumnDef::new(Profiles::Location).string())
                    .col(ColumnDef::new(Profiles::Bio).text())
                    .col(ColumnDef::new(Profiles::Description).text())
                    .col(ColumnDef::new(Profiles::ResumeUrl).string())
                    .col(ColumnDef::new(Profiles::ContactEmail).string())
                    .col(ColumnDef::new(Profiles::Phone).string())
                    .col(ColumnDef::new(Profiles::WorkingHour).string())
                    .col(ColumnDef::new(Profiles::AvatarUrl).string())
                    .col(
                        ColumnDef::new(Profiles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Profiles::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Profiles {
    Table,
    Id,
    Email,
    Name,
    Subtitle,
    Location,
    Bio,
    Description,
    ResumeUrl,
    ContactEmail,
    Phone,
    WorkingHour,
    AvatarUrl,
    UpdatedAt,
}
