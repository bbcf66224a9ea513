use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserMessages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserMessages::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserMessages::Name).string().not_null())
                    .col(ColumnDef::new(UserMessages::Email).string().not_null())
                    .col(ColumnDef::new(UserMessages::Title).string().not_null())
                    .col(ColumnDef::new(UserMessages::Message).text().not_null())
                    .col(
                        ColumnDef::new(UserMessages::Status)
                            .string()
                            .not_null()
                            .default("unread"),
                    )
                    .col(
                        ColumnDef::new(UserMessages::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserMessages::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum UserMessages {
    Table,
    Id,
    Name,
    Email,
    Title,
    Message,
    Status,
    CreatedAt,
}
