//! Migration: Create the identity tables.
//!
//! Standard user/role/claim/login/token shape in the public schema.
//! Application-specific columns arrive in a later migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Users::UserName)
                            .string_len(256)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::NormalizedUserName).string_len(256))
                    .col(ColumnDef::new(Users::Email).string_len(256))
                    .col(ColumnDef::new(Users::NormalizedEmail).string_len(256))
                    .col(
                        ColumnDef::new(Users::EmailConfirmed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).text())
                    .col(ColumnDef::new(Users::SecurityStamp).string())
                    .col(ColumnDef::new(Users::ConcurrencyStamp).string())
                    .col(ColumnDef::new(Users::PhoneNumber).string_len(50))
                    .col(
                        ColumnDef::new(Users::PhoneNumberConfirmed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Users::TwoFactorEnabled)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Users::LockoutEnd).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Users::LockoutEnabled)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Users::AccessFailedCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_users_normalized_user_name")
                    .table(Users::Table)
                    .col(Users::NormalizedUserName)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Roles::Table)
                    .col(ColumnDef::new(Roles::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Roles::Name).string_len(256).not_null())
                    .col(
                        ColumnDef::new(Roles::NormalizedName)
                            .string_len(256)
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Roles::ConcurrencyStamp).string())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UserRoles::Table)
                    .col(ColumnDef::new(UserRoles::UserId).uuid().not_null())
                    .col(ColumnDef::new(UserRoles::RoleId).uuid().not_null())
                    .primary_key(
                        Index::create()
                            .name("pk_user_roles")
                            .col(UserRoles::UserId)
                            .col(UserRoles::RoleId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(UserRoles::Table, UserRoles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(UserRoles::Table, UserRoles::RoleId)
                            .to(Roles::Table, Roles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UserClaims::Table)
                    .col(
                        ColumnDef::new(UserClaims::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserClaims::UserId).uuid().not_null())
                    .col(ColumnDef::new(UserClaims::ClaimType).string())
                    .col(ColumnDef::new(UserClaims::ClaimValue).string())
                    .foreign_key(
                        ForeignKey::create()
                            .from(UserClaims::Table, UserClaims::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_claims_user_id")
                    .table(UserClaims::Table)
                    .col(UserClaims::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UserLogins::Table)
                    .col(
                        ColumnDef::new(UserLogins::LoginProvider)
                            .string_len(128)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserLogins::ProviderKey)
                            .string_len(128)
                            .not_null(),
                    )
                    .col(ColumnDef::new(UserLogins::ProviderDisplayName).string())
                    .col(ColumnDef::new(UserLogins::UserId).uuid().not_null())
                    .primary_key(
                        Index::create()
                            .name("pk_user_logins")
                            .col(UserLogins::LoginProvider)
                            .col(UserLogins::ProviderKey),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(UserLogins::Table, UserLogins::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UserTokens::Table)
                    .col(ColumnDef::new(UserTokens::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(UserTokens::LoginProvider)
                            .string_len(128)
                            .not_null(),
                    )
                    .col(ColumnDef::new(UserTokens::Name).string_len(128).not_null())
                    .col(ColumnDef::new(UserTokens::Value).text())
                    .primary_key(
                        Index::create()
                            .name("pk_user_tokens")
                            .col(UserTokens::UserId)
                            .col(UserTokens::LoginProvider)
                            .col(UserTokens::Name),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(UserTokens::Table, UserTokens::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(RoleClaims::Table)
                    .col(
                        ColumnDef::new(RoleClaims::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RoleClaims::RoleId).uuid().not_null())
                    .col(ColumnDef::new(RoleClaims::ClaimType).string())
                    .col(ColumnDef::new(RoleClaims::ClaimValue).string())
                    .foreign_key(
                        ForeignKey::create()
                            .from(RoleClaims::Table, RoleClaims::RoleId)
                            .to(Roles::Table, Roles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoleClaims::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UserTokens::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UserLogins::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UserClaims::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UserRoles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Roles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Users {
    Table,
    Id,
    UserName,
    NormalizedUserName,
    Email,
    NormalizedEmail,
    EmailConfirmed,
    PasswordHash,
    SecurityStamp,
    ConcurrencyStamp,
    PhoneNumber,
    PhoneNumberConfirmed,
    TwoFactorEnabled,
    LockoutEnd,
    LockoutEnabled,
    AccessFailedCount,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum Roles {
    Table,
    Id,
    Name,
    NormalizedName,
    ConcurrencyStamp,
}

#[derive(DeriveIden)]
enum UserRoles {
    Table,
    UserId,
    RoleId,
}

#[derive(DeriveIden)]
enum UserClaims {
    Table,
    Id,
    UserId,
    ClaimType,
    ClaimValue,
}

#[derive(DeriveIden)]
enum UserLogins {
    Table,
    LoginProvider,
    ProviderKey,
    ProviderDisplayName,
    UserId,
}

#[derive(DeriveIden)]
enum UserTokens {
    Table,
    UserId,
    LoginProvider,
    Name,
    Value,
}

#[derive(DeriveIden)]
enum RoleClaims {
    Table,
    Id,
    RoleId,
    ClaimType,
    ClaimValue,
}
