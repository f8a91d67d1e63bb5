use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sections::Table)
                    .if_not_exists()
                    .col(string(Sections::CourseId))
                    .col(integer(Sections::Section))
                    .col(string(Sections::Title))
                    .col(string(Sections::Term))
                    .col(string(Sections::Instructor))
                    .col(string_len(Sections::InstType, 1))
                    .col(integer(Sections::Registered))
                    .col(integer(Sections::Cap))
                    .col(integer(Sections::Credits))
                    .primary_key(
                        Index::create()
                            .col(Sections::CourseId)
                            .col(Sections::Section),
                    )
                    .to_owned(),
            )
            .await?;

        // Term lookups filter on term alone
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_sections_term")
                    .table(Sections::Table)
                    .col(Sections::Term)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sections::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Sections {
    Table,
    CourseId,
    Section,
    Title,
    Term,
    Instructor,
    InstType,
    Registered,
    Cap,
    Credits,
}
