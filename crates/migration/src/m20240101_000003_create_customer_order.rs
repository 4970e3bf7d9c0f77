//! Create `customer_order` table with FK to `customer`.
//!
//! Named `customer_order` because `order` is an SQL reserved word.
//! Deleting a customer cascades to its orders.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CustomerOrder::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CustomerOrder::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(big_integer(CustomerOrder::CustomerId).not_null())
                    .col(timestamp_with_time_zone(CustomerOrder::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(CustomerOrder::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_customer_order_customer")
                            .from(CustomerOrder::Table, CustomerOrder::CustomerId)
                            .to(Customer::Table, Customer::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(CustomerOrder::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum CustomerOrder { Table, Id, CustomerId, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Customer { Table, Id }
