use sea_orm::entity::prelude::*;
use serde::Serialize;

/// File uploaded to the CDN and attached to a hire request.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "file_documents")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub hire_request_id: Uuid,
    pub url: String,
    /// CDN identifier used for deletion.
    pub public_id: String,
    pub format: Option<String>,
    pub resource_type: Option<String>,
    pub bytes: Option<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::hire_requests::Entity",
        from = "Column::HireRequestId",
        to = "super::hire_requests::Column::Id"
    )]
    HireRequest,
}

impl Related<super::hire_requests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HireRequest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
