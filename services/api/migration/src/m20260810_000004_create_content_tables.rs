use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Projects::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Projects::Title).string().not_null())
                    .col(ColumnDef::new(Projects::Subtitle).string())
                    .col(ColumnDef::new(Projects::Description).text())
                    .col(
                        ColumnDef::new(Projects::FrontendTechs)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Projects::BackendTechs)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Projects::DevopsTechs)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Projects::OthersTechs)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Projects::IsFeatured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Projects::LiveUrl).string())
                    .col(ColumnDef::new(Projects::GithubUrl).string())
                    .col(ColumnDef::new(Projects::ImageUrl).string())
                    .col(
                        ColumnDef::new(Projects::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Projects::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Blogs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Blogs::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Blogs::Title).string().not_null())
                    .col(ColumnDef::new(Blogs::Category).string())
                    .col(ColumnDef::new(Blogs::Blocks).json_binary().not_null())
                    .col(ColumnDef::new(Blogs::Tags).json_binary().not_null())
                    .col(ColumnDef::new(Blogs::CoverImageUrl).string())
                    .col(
                        ColumnDef::new(Blogs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Blogs::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Experiences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Experiences::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Experiences::Title).string().not_null())
                    .col(ColumnDef::new(Experiences::Company).string().not_null())
                    .col(ColumnDef::new(Experiences::Location).string())
                    .col(
                        ColumnDef::new(Experiences::StartingDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Experiences::EndingDate).timestamp_with_time_zone())
                    .col(ColumnDef::new(Experiences::Description).text())
                    .col(
                        ColumnDef::new(Experiences::KeyAchievements)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Experiences::Technologies)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Experiences::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Educations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Educations::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Educations::Title).string().not_null())
                    .col(ColumnDef::new(Educations::Institution).string().not_null())
                    .col(ColumnDef::new(Educations::Location).string())
                    .col(ColumnDef::new(Educations::GraduationDate).timestamp_with_time_zone())
                    .col(ColumnDef::new(Educations::Description).text())
                    .col(ColumnDef::new(Educations::ImageUrl).string())
                    .col(
                        ColumnDef::new(Educations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Awards::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Awards::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Awards::Title).string().not_null())
                    .col(ColumnDef::new(Awards::Subtitle).string())
                    .col(ColumnDef::new(Awards::AwardFrom).string())
                    .col(ColumnDef::new(Awards::AwardDate).timestamp_with_time_zone())
                    .col(ColumnDef::new(Awards::Description).text())
                    .col(ColumnDef::new(Awards::ImageUrl).string())
                    .col(
                        ColumnDef::new(Awards::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Reviews::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Reviews::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Reviews::Name).string().not_null())
                    .col(ColumnDef::new(Reviews::Subtitle).string())
                    .col(ColumnDef::new(Reviews::Rate).small_integer().not_null())
                    .col(ColumnDef::new(Reviews::Comment).text())
                    .col(
                        ColumnDef::new(Reviews::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Faqs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Faqs::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Faqs::Question).string().not_null())
                    .col(ColumnDef::new(Faqs::Answer).text().not_null())
                    .col(ColumnDef::new(Faqs::Category).string())
                    .col(
                        ColumnDef::new(Faqs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Services::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Services::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Services::Title).string().not_null())
                    .col(ColumnDef::new(Services::Subtitle).string())
                    .col(
                        ColumnDef::new(Services::BulletPoints)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Services::CoreTechStacks)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Services::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Socials::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Socials::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Socials::Title).string().not_null())
                    .col(ColumnDef::new(Socials::Url).string().not_null())
                    .col(
                        ColumnDef::new(Socials::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(NpmPackages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(NpmPackages::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(NpmPackages::Title).string().not_null())
                    .col(ColumnDef::new(NpmPackages::Version).string().not_null())
                    .col(ColumnDef::new(NpmPackages::Description).text())
                    .col(ColumnDef::new(NpmPackages::LiveUrl).string())
                    .col(ColumnDef::new(NpmPackages::GithubUrl).string())
                    .col(ColumnDef::new(NpmPackages::Installable).string())
                    .col(ColumnDef::new(NpmPackages::Tags).json_binary().not_null())
                    .col(
                        ColumnDef::new(NpmPackages::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(NpmPackages::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Skills::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Skills::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Skills::Name).string().not_null())
                    .col(ColumnDef::new(Skills::Description).text())
                    .col(
                        ColumnDef::new(Skills::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Skills::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(NpmPackages::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Socials::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Services::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Faqs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Reviews::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Awards::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Educations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Experiences::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Blogs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Projects {
    Table,
    Id,
    Title,
    Subtitle,
    Description,
    FrontendTechs,
    BackendTechs,
    DevopsTechs,
    OthersTechs,
    IsFeatured,
    LiveUrl,
    GithubUrl,
    ImageUrl,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Blogs {
    Table,
    Id,
    Title,
    Category,
    Blocks,
    Tags,
    CoverImageUrl,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Experiences {
    Table,
    Id,
    Title,
    Company,
    Location,
    StartingDate,
    EndingDate,
    Description,
    KeyAchievements,
    Technologies,
    CreatedAt,
}

#[derive(Iden)]
enum Educations {
    Table,
    Id,
    Title,
    Institution,
    Location,
    GraduationDate,
    Description,
    ImageUrl,
    CreatedAt,
}

#[derive(Iden)]
enum Awards {
    Table,
    Id,
    Title,
    Subtitle,
    AwardFrom,
    AwardDate,
    Description,
    ImageUrl,
    CreatedAt,
}

#[derive(Iden)]
enum Reviews {
    Table,
    Id,
    Name,
    Subtitle,
    Rate,
    Comment,
    CreatedAt,
}

#[derive(Iden)]
enum Faqs {
    Table,
    Id,
    Question,
    Answer,
    Category,
    CreatedAt,
}

#[derive(Iden)]
enum Services {
    Table,
    Id,
    Title,
    Subtitle,
    BulletPoints,
    CoreTechStacks,
    CreatedAt,
}

#[derive(Iden)]
enum Socials {
    Table,
    Id,
    Title,
    Url,
    CreatedAt,
}

#[derive(Iden)]
enum NpmPackages {
    Table,
    Id,
    Title,
    Version,
    Description,
    LiveUrl,
    GithubUrl,
    Installable,
    Tags,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Skills {
    Table,
    Id,
    Name,
    Description,
    CreatedAt,
}
