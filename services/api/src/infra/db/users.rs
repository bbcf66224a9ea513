use anyhow::Context as _;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use portfolio_api_schema::users;

use crate::domain::repository::UserStore;
use crate::domain::types::{User, UserUpdate};
use crate::error::ApiError;

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserStore for DbUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn list(&self) -> Result<Vec<User>, ApiError> {
        let models = users::Entity::find()
            .order_by_desc(users::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list users")?;
        Ok(models.into_iter().map(user_from_model).collect())
    }

    async fn create(&self, user: &User) -> Result<(), ApiError> {
        users::ActiveModel {
            id: Set(user.id),
            email: Set(user.email.clone()),
            name: Set(user.name.clone()),
            password: Set(user.password.clone()),
            is_verified: Set(user.is_verified),
            otp: Set(user.otp.clone()),
            otp_expires_at: Set(user.otp_expires_at),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create user")?;
        Ok(())
    }

    async fn update(&self, id: Uuid, update: UserUpdate) -> Result<(), ApiError> {
        let mut am = users::ActiveModel {
            id: Set(id),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };
        if let Some(name) = update.name {
            am.name = Set(name);
        }
        if let Some(email) = update.email {
            am.email = Set(email);
        }
        if let Some(password) = update.password {
            am.password = Set(password);
        }
        am.update(&self.db).await.context("update user")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        let result = users::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete user")?;
        Ok(result.rows_affected > 0)
    }

    async fn set_otp(
        &self,
        id: Uuid,
        code: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), ApiError> {
        users::ActiveModel {
            id: Set(id),
            otp: Set(Some(code.to_owned())),
            otp_expires_at: Set(Some(expires_at)),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("set otp")?;
        Ok(())
    }

    async fn clear_otp_and_verify(&self, id: Uuid) -> Result<(), ApiError> {
        users::ActiveModel {
            id: Set(id),
            otp: Set(None),
            otp_expires_at: Set(None),
            is_verified: Set(true),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("clear otp")?;
        Ok(())
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        email: model.email,
        name: model.name,
        password: model.password,
        is_verified: model.is_verified,
        otp: model.otp,
        otp_expires_at: model.otp_expires_at,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}
