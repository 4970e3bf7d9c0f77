//! Secondary and composite-unique indexes, applied after all tables exist.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("ux_product_category_brand_model")
                    .table(Product::Table)
                    .col(Product::Category)
                    .col(Product::Brand)
                    .col(Product::Model)
                    .unique()
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("ix_product_category")
                    .table(Product::Table)
                    .col(Product::Category)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("ix_customer_order_customer_id")
                    .table(CustomerOrder::Table)
                    .col(CustomerOrder::CustomerId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("ix_order_item_order_id")
                    .table(OrderItem::Table)
                    .col(OrderItem::OrderId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("ix_order_item_product_id")
                    .table(OrderItem::Table)
                    .col(OrderItem::ProductId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("ix_order_item_product_id").table(OrderItem::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("ix_order_item_order_id").table(OrderItem::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("ix_customer_order_customer_id").table(CustomerOrder::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("ix_product_category").table(Product::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("ux_product_category_brand_model").table(Product::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Product { Table, Category, Brand, Model }

#[derive(DeriveIden)]
enum CustomerOrder { Table, CustomerId }

#[derive(DeriveIden)]
enum OrderItem { Table, OrderId, ProductId }
