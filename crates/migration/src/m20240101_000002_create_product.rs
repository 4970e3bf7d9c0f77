//! Create `product` table.
//!
//! The (category, brand, model) uniqueness is enforced by a composite
//! index in the index migration; `sku` is unique on its own.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Product::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string_len(Product::Sku, 20).unique_key().not_null())
                    .col(string_len(Product::Category, 50).not_null())
                    .col(string_len(Product::Brand, 50).not_null())
                    .col(string_len(Product::Model, 50).not_null())
                    .col(double(Product::Price).not_null())
                    .col(
                        ColumnDef::new(Product::Description)
                            .string_len(255)
                            .null(),
                    )
                    .col(string_len(Product::ImagePath, 255).not_null())
                    .col(timestamp_with_time_zone(Product::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Product::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Product::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Product { Table, Id, Sku, Category, Brand, Model, Price, Description, ImagePath, CreatedAt, UpdatedAt }
