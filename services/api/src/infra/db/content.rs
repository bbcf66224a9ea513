//! Generic CRUD over the flat content tables (projects, blogs, skills, …).
//! These tables share the same access shape, so the repository is a set of
//! entity-generic functions instead of one struct per table. The `label`
//! argument names the operation in error context.

use anyhow::Context as _;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PrimaryKeyTrait, QueryOrder,
};
use uuid::Uuid;

use crate::error::ApiError;

pub async fn list<E>(
    db: &DatabaseConnection,
    order: E::Column,
    label: &'static str,
) -> Result<Vec<E::Model>, ApiError>
where
    E: EntityTrait,
{
    Ok(E::find().order_by_desc(order).all(db).await.context(label)?)
}

pub async fn get<E>(
    db: &DatabaseConnection,
    id: Uuid,
    label: &'static str,
) -> Result<Option<E::Model>, ApiError>
where
    E: EntityTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<Uuid>,
{
    Ok(E::find_by_id(id).one(db).await.context(label)?)
}

pub async fn insert<A>(
    db: &DatabaseConnection,
    model: A,
    label: &'static str,
) -> Result<<A::Entity as EntityTrait>::Model, ApiError>
where
    A: ActiveModelTrait + ActiveModelBehavior + Send,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
{
    Ok(model.insert(db).await.context(label)?)
}

/// Update by primary key. The active model must carry `Set` values for the
/// key and every changed column.
pub async fn update<A>(
    db: &DatabaseConnection,
    model: A,
    label: &'static str,
) -> Result<<A::Entity as EntityTrait>::Model, ApiError>
where
    A: ActiveModelTrait + ActiveModelBehavior + Send,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
{
    Ok(model.update(db).await.context(label)?)
}

/// Returns `true` if a row was deleted, `false` if the id was unknown.
pub async fn delete<E>(
    db: &DatabaseConnection,
    id: Uuid,
    label: &'static str,
) -> Result<bool, ApiError>
where
    E: EntityTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<Uuid>,
{
    let result = E::delete_by_id(id).exec(db).await.context(label)?;
    Ok(result.rows_affected > 0)
}
