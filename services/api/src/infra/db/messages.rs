use anyhow::Context as _;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use portfolio_api_schema::user_messages;

use crate::domain::types::MessageStatus;
use crate::error::ApiError;

#[derive(Clone)]
pub struct DbMessageRepository {
    pub db: DatabaseConnection,
}

impl DbMessageRepository {
    pub async fn list(&self) -> Result<Vec<user_messages::Model>, ApiError> {
        Ok(user_messages::Entity::find()
            .order_by_desc(user_messages::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list messages")?)
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<user_messages::Model>, ApiError> {
        Ok(user_messages::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("get message")?)
    }

    pub async fn insert(
        &self,
        name: String,
        email: String,
        title: String,
        message: String,
    ) -> Result<user_messages::Model, ApiError> {
        let model = user_messages::ActiveModel {
            id: Set(Uuid::now_v7()),
            name: Set(name),
            email: Set(email),
            title: Set(title),
            message: Set(message),
            status: Set(MessageStatus::Unread.as_str().to_owned()),
            created_at: Set(Utc::now()),
        }
        .insert(&self.db)
        .await
        .context("create message")?;
        Ok(model)
    }

    pub async fn set_status(&self, id: Uuid, status: MessageStatus) -> Result<bool, ApiError> {
        let result = user_messages::Entity::update_many()
            .col_expr(user_messages::Column::Status, Expr::value(status.as_str()))
            .filter(user_messages::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("set message status")?;
        Ok(result.rows_affected > 0)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        let result = user_messages::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete message")?;
        Ok(result.rows_affected > 0)
    }
}
