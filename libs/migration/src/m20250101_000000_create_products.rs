use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(pk_auto(Products::Id))
                    .col(string_len(Products::Name, 100))
                    .col(string_len(Products::Description, 250).default(""))
                    .col(decimal_len(Products::Price, 14, 2))
                    .col(boolean(Products::Available).default(true))
                    .col(string_len(Products::Category, 32).default("UNKNOWN"))
                    .to_owned(),
            )
            .await?;

        // Each list filter is a single-column equality lookup
        for (name, column) in [
            ("idx_products_name", Products::Name),
            ("idx_products_category", Products::Category),
            ("idx_products_available", Products::Available),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Products::Table)
                        .col(column)
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Products::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden, Clone, Copy)]
enum Products {
    Table,
    Id,
    Name,
    Description,
    Price,
    Available,
    Category,
}
