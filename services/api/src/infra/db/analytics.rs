use anyhow::Context as _;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    FromQueryResult, PaginatorTrait, QueryFilter, QuerySelect,
};
use serde::Serialize;
use uuid::Uuid;

use portfolio_api_schema::{page_views, pages, visitors};

use crate::error::ApiError;

/// Per-page totals joined with the page row.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageStat {
    pub slug: String,
    pub title: Option<String>,
    pub views: i64,
    pub unique_visitors: i64,
}

#[derive(FromQueryResult)]
struct ViewCount {
    page_id: Uuid,
    views: i64,
    unique_visitors: i64,
}

#[derive(Clone)]
pub struct DbAnalyticsRepository {
    pub db: DatabaseConnection,
}

impl DbAnalyticsRepository {
    /// Create the visitor row on first sight, bump `last_visit_at` after.
    pub async fn touch_visitor(
        &self,
        id: Uuid,
        user_agent: Option<String>,
        ip_address: Option<String>,
    ) -> Result<(), ApiError> {
        let now = Utc::now();
        let existing = visitors::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find visitor")?;
        match existing {
            Some(_) => {
                visitors::ActiveModel {
                    id: Set(id),
                    last_visit_at: Set(now),
                    ..Default::default()
                }
                .update(&self.db)
                .await
                .context("touch visitor")?;
            }
            None => {
                visitors::ActiveModel {
                    id: Set(id),
                    user_agent: Set(user_agent),
                    ip_address: Set(ip_address),
                    first_visit_at: Set(now),
                    last_visit_at: Set(now),
                }
                .insert(&self.db)
                .await
                .context("create visitor")?;
            }
        }
        Ok(())
    }

    pub async fn upsert_page(
        &self,
        slug: &str,
        title: Option<String>,
    ) -> Result<pages::Model, ApiError> {
        let existing = pages::Entity::find()
            .filter(pages::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .context("find page by slug")?;
        if let Some(page) = existing {
            if let Some(title) = title.filter(|t| Some(t.as_str()) != page.title.as_deref()) {
                let updated = pages::ActiveModel {
                    id: Set(page.id),
                    title: Set(Some(title)),
                    ..Default::default()
                }
                .update(&self.db)
                .await
                .context("update page title")?;
                return Ok(updated);
            }
            return Ok(page);
        }
        let model = pages::ActiveModel {
            id: Set(Uuid::now_v7()),
            slug: Set(slug.to_owned()),
            title: Set(title),
            created_at: Set(Utc::now()),
        }
        .insert(&self.db)
        .await
        .context("create page")?;
        Ok(model)
    }

    pub async fn insert_view(&self, visitor_id: Uuid, page_id: Uuid) -> Result<(), ApiError> {
        page_views::ActiveModel {
            id: Set(Uuid::now_v7()),
            visitor_id: Set(visitor_id),
            page_id: Set(page_id),
            viewed_at: Set(Utc::now()),
        }
        .insert(&self.db)
        .await
        .context("record page view")?;
        Ok(())
    }

    pub async fn total_views(&self) -> Result<u64, ApiError> {
        Ok(page_views::Entity::find()
            .count(&self.db)
            .await
            .context("count page views")?)
    }

    pub async fn total_visitors(&self) -> Result<u64, ApiError> {
        Ok(visitors::Entity::find()
            .count(&self.db)
            .await
            .context("count visitors")?)
    }

    pub async fn page_stats(&self) -> Result<Vec<PageStat>, ApiError> {
        let counts: Vec<ViewCount> = page_views::Entity::find()
            .select_only()
            .column(page_views::Column::PageId)
            .column_as(page_views::Column::Id.count(), "views")
            .expr_as(Expr::cust("COUNT(DISTINCT visitor_id)"), "unique_visitors")
            .group_by(page_views::Column::PageId)
            .into_model::<ViewCount>()
            .all(&self.db)
            .await
            .context("aggregate page views")?;

        let all_pages = pages::Entity::find()
            .all(&self.db)
            .await
            .context("list pages")?;

        let mut stats: Vec<PageStat> = all_pages
            .into_iter()
            .map(|page| {
                let count = counts.iter().find(|c| c.page_id == page.id);
                PageStat {
                    slug: page.slug,
                    title: page.title,
                    views: count.map_or(0, |c| c.views),
                    unique_visitors: count.map_or(0, |c| c.unique_visitors),
                }
            })
            .collect();
        stats.sort_by(|a, b| b.views.cmp(&a.views));
        Ok(stats)
    }
}
