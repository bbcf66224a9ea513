use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Visitors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Visitors::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Visitors::UserAgent).string())
                    .col(ColumnDef::new(Visitors::IpAddress).string())
                    .col(
                        ColumnDef::new(Visitors::FirstVisitAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Visitors::LastVisitAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Pages::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Pages::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Pages::Slug)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Pages::Title).string())
                    .col(
                        ColumnDef::new(Pages::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PageViews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PageViews::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PageViews::VisitorId).uuid().not_null())
                    .col(ColumnDef::new(PageViews::PageId).uuid().not_null())
                    .col(
                        ColumnDef::new(PageViews::ViewedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(PageViews::Table, PageViews::VisitorId)
                            .to(Visitors::Table, Visitors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(PageViews::Table, PageViews::PageId)
                            .to(Pages::Table, Pages::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(PageViews::Table)
                    .col(PageViews::PageId)
                    .name("idx_page_views_page_id")
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(PageViews::Table)
                    .col(PageViews::ViewedAt)
                    .name("idx_page_views_viewed_at")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PageViews::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Pages::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Visitors::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Visitors {
    Table,
    Id,
    UserAgent,
    IpAddress,
    FirstVisitAt,
    LastVisitAt,
}

#[derive(Iden)]
enum Pages {
    Table,
    Id,
    Slug,
    Title,
    CreatedAt,
}

#[derive(Iden)]
enum PageViews {
    Table,
    Id,
    VisitorId,
    PageId,
    ViewedAt,
}
