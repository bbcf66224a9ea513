use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait};
use uuid::Uuid;

use portfolio_api_schema::profiles;

use crate::error::ApiError;

/// Fields a profile update may change; `None` leaves the column untouched.
#[derive(Debug, Default)]
pub struct ProfileFields {
    pub email: Option<String>,
    pub name: Option<String>,
    pub subtitle: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub description: Option<String>,
    pub resume_url: Option<String>,
    pub contact_email: Option<String>,
    pub phone: Option<String>,
    pub working_hour: Option<String>,
    pub avatar_url: Option<String>,
}

/// The profile is a singleton row, created on first update.
#[derive(Clone)]
pub struct DbProfileRepository {
    pub db: DatabaseConnection,
}

impl DbProfileRepository {
    pub async fn get(&self) -> Result<Option<profiles::Model>, ApiError> {
        Ok(profiles::Entity::find()
            .one(&self.db)
            .await
            .context("get profile")?)
    }

    pub async fn upsert(&self, fields: ProfileFields) -> Result<profiles::Model, ApiError> {
        let existing = self.get().await?;
        let mut am = match existing {
            Some(model) => profiles::ActiveModel {
                id: Set(model.id),
                ..Default::default()
            },
            None => profiles::ActiveModel {
                id: Set(Uuid::now_v7()),
                email: Set(None),
                name: Set(None),
                subtitle: Set(None),
                location: Set(None),
                bio: Set(None),
                description: Set(None),
                resume_url: Set(None),
                contact_email: Set(None),
                phone: Set(None),
                working_hour: Set(None),
                avatar_url: Set(None),
                updated_at: Set(Utc::now()),
            },
        };
        let is_insert = matches!(am.email, Set(_));

        if let Some(v) = fields.email {
            am.email = Set(Some(v));
        }
        if let Some(v) = fields.name {
            am.name = Set(Some(v));
        }
        if let Some(v) = fields.subtitle {
            am.subtitle = Set(Some(v));
        }
        if let Some(v) = fields.location {
            am.location = Set(Some(v));
        }
        if let Some(v) = fields.bio {
            am.bio = Set(Some(v));
        }
        if let Some(v) = fields.description {
            am.description = Set(Some(v));
        }
        if let Some(v) = fields.resume_url {
            am.resume_url = Set(Some(v));
        }
        if let Some(v) = fields.contact_email {
            am.contact_email = Set(Some(v));
        }
        if let Some(v) = fields.phone {
            am.phone = Set(Some(v));
        }
        if let Some(v) = fields.working_hour {
            am.working_hour = Set(Some(v));
        }
        if let Some(v) = fields.avatar_url {
            am.avatar_url = Set(Some(v));
        }
        am.updated_at = Set(Utc::now());

        let model = if is_insert {
            am.insert(&self.db).await.context("create profile")?
        } else {
            am.update(&self.db).await.context("update profile")?
        };
        Ok(model)
    }
}
