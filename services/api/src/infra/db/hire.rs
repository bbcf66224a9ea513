use anyhow::Context as _;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use portfolio_api_schema::{file_documents, hire_requests};

use crate::domain::types::{CdnFile, HireStatus};
use crate::error::ApiError;

#[derive(Clone)]
pub struct DbHireRepository {
    pub db: DatabaseConnection,
}

impl DbHireRepository {
    pub async fn list(&self) -> Result<Vec<hire_requests::Model>, ApiError> {
        Ok(hire_requests::Entity::find()
            .order_by_desc(hire_requests::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list hire requests")?)
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<hire_requests::Model>, ApiError> {
        Ok(hire_requests::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("get hire request")?)
    }

    pub async fn insert(
        &self,
        model: hire_requests::ActiveModel,
    ) -> Result<hire_requests::Model, ApiError> {
        Ok(model.insert(&self.db).await.context("create hire request")?)
    }

    pub async fn update(
        &self,
        model: hire_requests::ActiveModel,
    ) -> Result<hire_requests::Model, ApiError> {
        Ok(model.update(&self.db).await.context("update hire request")?)
    }

    pub async fn set_status(&self, id: Uuid, status: HireStatus) -> Result<bool, ApiError> {
        let result = hire_requests::Entity::update_many()
            .col_expr(hire_requests::Column::Status, Expr::value(status.as_str()))
            .col_expr(hire_requests::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(hire_requests::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("set hire request status")?;
        Ok(result.rows_affected > 0)
    }

    /// Attached file rows go with the request (FK cascade).
    pub async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        let result = hire_requests::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete hire request")?;
        Ok(result.rows_affected > 0)
    }

    pub async fn files_for(&self, id: Uuid) -> Result<Vec<file_documents::Model>, ApiError> {
        Ok(file_documents::Entity::find()
            .filter(file_documents::Column::HireRequestId.eq(id))
            .all(&self.db)
            .await
            .context("list hire request files")?)
    }

    pub async fn insert_file(
        &self,
        hire_request_id: Uuid,
        file: &CdnFile,
    ) -> Result<file_documents::Model, ApiError> {
        let model = file_documents::ActiveModel {
            id: Set(Uuid::now_v7()),
            hire_request_id: Set(hire_request_id),
            url: Set(file.url.clone()),
            public_id: Set(file.public_id.clone()),
            format: Set(file.format.clone()),
            resource_type: Set(file.resource_type.clone()),
            bytes: Set(file.bytes),
            created_at: Set(Utc::now()),
        }
        .insert(&self.db)
        .await
        .context("attach file to hire request")?;
        Ok(model)
    }
}
