use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HireRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HireRequests::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(HireRequests::Email).string().not_null())
                    .col(ColumnDef::new(HireRequests::Name).string())
                    .col(ColumnDef::new(HireRequests::CompanyName).string())
                    .col(ColumnDef::new(HireRequests::LinkedinUrl).string())
                    .col(ColumnDef::new(HireRequests::Notes).text())
                    .col(ColumnDef::new(HireRequests::ProjectDesc).text())
                    .col(ColumnDef::new(HireRequests::EstimateBudget).string())
                    .col(ColumnDef::new(HireRequests::Timeline).string())
                    .col(
                        ColumnDef::new(HireRequests::CoreFeatures)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(HireRequests::TechSuggestion)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(HireRequests::Status)
                            .string()
                            .not_null()
                            .default("inprocess"),
                    )
                    .col(
                        ColumnDef::new(HireRequests::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(HireRequests::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FileDocuments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FileDocuments::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FileDocuments::HireRequestId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(FileDocuments::Url).string().not_null())
                    .col(
                        ColumnDef::new(FileDocuments::PublicId)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(FileDocuments::Format).string())
                    .col(ColumnDef::new(FileDocuments::ResourceType).string())
                    .col(ColumnDef::new(FileDocuments::Bytes).big_integer())
                    .col(
                        ColumnDef::new(FileDocuments::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(FileDocuments::Table, FileDocuments::HireRequestId)
                            .to(HireRequests::Table, HireRequests::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(FileDocuments::Table)
                    .col(FileDocuments::HireRequestId)
                    .name("idx_file_documents_hire_request_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FileDocuments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(HireRequests::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum HireRequests {
    Table,
    Id,
    Email,
    Name,
    CompanyName,
    LinkedinUrl,
    Notes,
    ProjectDesc,
    EstimateBudget,
    Timeline,
    CoreFeatures,
    TechSuggestion,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum FileDocuments {
    Table,
    Id,
    HireRequestId,
    Url,
    PublicId,
    Format,
    ResourceType,
    Bytes,
    CreatedAt,
}
