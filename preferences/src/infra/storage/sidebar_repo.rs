use async_trait::async_trait;
use preferences_sdk::models::{self, Preference};
use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::domain::ports::SidebarSync;

use super::entity::sidebar_channel::{self, Entity as SidebarChannelEntity};

/// Maintains the `sidebar_channel` projection from `favorite_channel`
/// preferences: value `"true"` favorites the channel, anything else (or a
/// deleted preference) removes it. Preferences in other categories are
/// ignored.
pub struct OrmSidebarRepository {
    db: DatabaseConnection,
}

impl OrmSidebarRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn remove(&self, user_id: &str, channel_id: &str) -> anyhow::Result<()> {
        SidebarChannelEntity::delete_many()
            .filter(sidebar_channel::Column::UserId.eq(user_id))
            .filter(sidebar_channel::Column::ChannelId.eq(channel_id))
            .exec(&self.db)
            .await?;

        Ok(())
    }

    fn favorites(preferences: &[Preference]) -> impl Iterator<Item = &Preference> {
        preferences
            .iter()
            .filter(|p| p.category == models::CATEGORY_FAVORITE_CHANNEL)
    }
}

#[async_trait]
impl SidebarSync for OrmSidebarRepository {
    async fn update_from_preferences(&self, preferences: &[Preference]) -> anyhow::Result<()> {
        for p in Self::favorites(preferences) {
            // Replace rather than upsert; the row carries no payload beyond
            // its key.
            self.remove(&p.user_id, &p.name).await?;

            if p.value == "true" {
                let row = sidebar_channel::ActiveModel {
                    user_id: Set(p.user_id.clone()),
                    channel_id: Set(p.name.clone()),
                };
                SidebarChannelEntity::insert(row).exec(&self.db).await?;
            }
        }

        Ok(())
    }

    async fn delete_from_preferences(&self, preferences: &[Preference]) -> anyhow::Result<()> {
        for p in Self::favorites(preferences) {
            self.remove(&p.user_id, &p.name).await?;
        }

        Ok(())
    }
}
