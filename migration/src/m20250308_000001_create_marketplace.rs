use sea_orm_migration::prelude::*;

use crate::m20250301_000001_create_tables::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建商品表，卖家删除时级联删除其商品
        manager
            .create_table(
                Table::create()
                    .table(Goods::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Goods::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Goods::GoodName).string().not_null())
                    .col(ColumnDef::new(Goods::ImageUrl).string().not_null())
                    .col(ColumnDef::new(Goods::Price).big_integer().not_null())
                    .col(ColumnDef::new(Goods::SellerId).big_integer().not_null())
                    .col(ColumnDef::new(Goods::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Goods::Table, Goods::SellerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建交易表，关联行删除后保留交易记录
        manager
            .create_table(
                Table::create()
                    .table(Transactions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Transactions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Transactions::GoodId).big_integer().null())
                    .col(ColumnDef::new(Transactions::BuyerId).big_integer().null())
                    .col(ColumnDef::new(Transactions::SellerId).big_integer().null())
                    .col(ColumnDef::new(Transactions::Amount).big_integer().not_null())
                    .col(ColumnDef::new(Transactions::Rating).double().null())
                    .col(
                        ColumnDef::new(Transactions::Timestamp)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Transactions::Table, Transactions::GoodId)
                            .to(Goods::Table, Goods::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Transactions::Table, Transactions::BuyerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Transactions::Table, Transactions::SellerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_goods_seller_id")
                    .table(Goods::Table)
                    .col(Goods::SellerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_transactions_seller_id")
                    .table(Transactions::Table)
                    .col(Transactions::SellerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_transactions_buyer_id")
                    .table(Transactions::Table)
                    .col(Transactions::BuyerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Transactions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Goods::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Goods {
    #[sea_orm(iden = "goods")]
    Table,
    Id,
    GoodName,
    ImageUrl,
    Price,
    SellerId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Transactions {
    #[sea_orm(iden = "transactions")]
    Table,
    Id,
    GoodId,
    BuyerId,
    SellerId,
    Amount,
    Rating,
    Timestamp,
}
