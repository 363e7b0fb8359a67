use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Preference::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Preference::UserId).string().not_null())
                    .col(ColumnDef::new(Preference::Category).string().not_null())
                    .col(ColumnDef::new(Preference::Name).string().not_null())
                    .col(ColumnDef::new(Preference::Value).string().not_null())
                    .primary_key(
                        Index::create()
                            .col(Preference::UserId)
                            .col(Preference::Category)
                            .col(Preference::Name),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SidebarChannel::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(SidebarChannel::UserId).string().not_null())
                    .col(ColumnDef::new(SidebarChannel::ChannelId).string().not_null())
                    .primary_key(
                        Index::create()
                            .col(SidebarChannel::UserId)
                            .col(SidebarChannel::ChannelId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SidebarChannel::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Preference::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Preference {
    Table,
    UserId,
    Category,
    Name,
    Value,
}

#[derive(DeriveIden)]
enum SidebarChannel {
    Table,
    UserId,
    ChannelId,
}
