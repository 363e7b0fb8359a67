use preferences_sdk::models::Preference;

pub mod preference {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "preference")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub user_id: String,
        #[sea_orm(primary_key, auto_increment = false)]
        pub category: String,
        #[sea_orm(primary_key, auto_increment = false)]
        pub name: String,
        pub value: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod sidebar_channel {
    use sea_orm::entity::prelude::*;

    /// One row per channel currently favorited by a user; the sidebar
    /// projection derived from `favorite_channel` preferences.
    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "sidebar_channel")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub user_id: String,
        #[sea_orm(primary_key, auto_increment = false)]
        pub channel_id: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

impl From<preference::Model> for Preference {
    fn from(m: preference::Model) -> Self {
        Self {
            user_id: m.user_id,
            category: m.category,
            name: m.name,
            value: m.value,
        }
    }
}

impl From<&Preference> for preference::ActiveModel {
    fn from(p: &Preference) -> Self {
        use sea_orm::ActiveValue::Set;

        Self {
            user_id: Set(p.user_id.clone()),
            category: Set(p.category.clone()),
            name: Set(p.name.clone()),
            value: Set(p.value.clone()),
        }
    }
}

#[cfg(test)]
mod mapper_test {
    use super::preference;
    use preferences_sdk::models::Preference;

    #[test]
    fn model_maps_to_preference() {
        let model = preference::Model {
            user_id: "u1".to_owned(),
            category: "display".to_owned(),
            name: "theme".to_owned(),
            value: "dark".to_owned(),
        };

        let p: Preference = model.into();
        assert_eq!(p.user_id, "u1");
        assert_eq!(p.category, "display");
        assert_eq!(p.name, "theme");
        assert_eq!(p.value, "dark");
    }
}
