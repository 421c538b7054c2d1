//! Migration: Create users table.

use sea_orm_migration::prelude::*;

use domain::{
    MAX_ADDRESS_LENGTH, MAX_CODE_LENGTH, MAX_EMAIL_LENGTH, MAX_FULL_NAME_LENGTH,
    MAX_PHONE_NUMBER_LENGTH,
};

/// Name of the unique index on `users.code`
const CODE_INDEX: &str = "idx_users_code";

/// Name of the unique index on `users.email`
const EMAIL_INDEX: &str = "idx_users_email";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Code)
                            .string_len(MAX_CODE_LENGTH as u32)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Users::FullName)
                            .string_len(MAX_FULL_NAME_LENGTH as u32)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Users::DateOfBirth).date().not_null())
                    .col(
                        ColumnDef::new(Users::Email)
                            .string_len(MAX_EMAIL_LENGTH as u32)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Users::PhoneNumber)
                            .string_len(MAX_PHONE_NUMBER_LENGTH as u32)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Users::Address)
                            .string_len(MAX_ADDRESS_LENGTH as u32)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Uniqueness also holds at the storage level
        manager
            .create_index(
                Index::create()
                    .name(CODE_INDEX)
                    .table(Users::Table)
                    .col(Users::Code)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(EMAIL_INDEX)
                    .table(Users::Table)
                    .col(Users::Email)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Code,
    FullName,
    DateOfBirth,
    Email,
    PhoneNumber,
    Address,
}
