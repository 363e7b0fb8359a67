use async_trait::async_trait;
use preferences_sdk::models::Preference;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, TransactionTrait};

use crate::domain::repo::PreferencesRepository;

use super::entity::preference::{self, Entity as PreferenceEntity};

pub struct OrmPreferencesRepository {
    db: DatabaseConnection,
}

impl OrmPreferencesRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PreferencesRepository for OrmPreferencesRepository {
    async fn get_all(&self, user_id: &str) -> anyhow::Result<Vec<Preference>> {
        let rows = PreferenceEntity::find()
            .filter(preference::Column::UserId.eq(user_id))
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get_category(
        &self,
        user_id: &str,
        category: &str,
    ) -> anyhow::Result<Vec<Preference>> {
        let rows = PreferenceEntity::find()
            .filter(preference::Column::UserId.eq(user_id))
            .filter(preference::Column::Category.eq(category))
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get(
        &self,
        user_id: &str,
        category: &str,
        name: &str,
    ) -> anyhow::Result<Option<Preference>> {
        let row = PreferenceEntity::find_by_id((
            user_id.to_owned(),
            category.to_owned(),
            name.to_owned(),
        ))
        .one(&self.db)
        .await?;

        Ok(row.map(Into::into))
    }

    async fn save(&self, preferences: &[Preference]) -> anyhow::Result<()> {
        if preferences.is_empty() {
            return Ok(());
        }

        // One transaction per batch: the whole batch lands or none of it does.
        let txn = self.db.begin().await?;
        for p in preferences {
            let model: preference::ActiveModel = p.into();
            PreferenceEntity::insert(model)
                .on_conflict(
                    OnConflict::columns([
                        preference::Column::UserId,
                        preference::Column::Category,
                        preference::Column::Name,
                    ])
                    .update_column(preference::Column::Value)
                    .to_owned(),
                )
                .exec(&txn)
                .await?;
        }
        txn.commit().await?;

        Ok(())
    }

    async fn delete(&self, user_id: &str, category: &str, name: &str) -> anyhow::Result<()> {
        PreferenceEntity::delete_many()
            .filter(preference::Column::UserId.eq(user_id))
            .filter(preference::Column::Category.eq(category))
            .filter(preference::Column::Name.eq(name))
            .exec(&self.db)
            .await?;

        Ok(())
    }
}
