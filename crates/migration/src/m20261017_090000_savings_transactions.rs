use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Learn more at https://docs.rs/sea-query#iden
#[derive(Iden)]
enum SavingsTransactions {
    Table,
    Id,
    AmountMinor,
    Method,
    Description,
    Date,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SavingsTransactions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SavingsTransactions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SavingsTransactions::AmountMinor)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SavingsTransactions::Method)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SavingsTransactions::Description)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(SavingsTransactions::Date)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-savings_transactions-date")
                    .table(SavingsTransactions::Table)
                    .col(SavingsTransactions::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SavingsTransactions::Table).to_owned())
            .await
    }
}
