//! Insert/lookup operations for option categories.

use sqlx::PgConnection;
use uuid::Uuid;

use crate::error::StoreError;
use crate::rows::CategoryRow;

/// Insert a new option category under a template.
pub async fn insert_category(
    conn: &mut PgConnection,
    template_id: Uuid,
    str_id: &str,
    name: &str,
) -> Result<CategoryRow, StoreError> {
    let row = sqlx::query_as::<_, CategoryRow>(
        "INSERT INTO option_categories (template_id, str_id, name)
         VALUES ($1, $2, $3)
         RETURNING category_id, template_id, str_id, name, created_at",
    )
    .bind(template_id)
    .bind(str_id)
    .bind(name)
    .fetch_one(conn)
    .await?;
    Ok(row)
}

/// Look up a category by string id within one template.
///
/// Category string ids are only unique per template, so the lookup is
/// always template-scoped.
pub async fn find_category_by_str_id(
    conn: &mut PgConnection,
    template_id: Uuid,
    str_id: &str,
) -> Result<Option<CategoryRow>, StoreError> {
    let row = sqlx::query_as::<_, CategoryRow>(
        "SELECT category_id, template_id, str_id, name, created_at
         FROM option_categories WHERE template_id = $1 AND str_id = $2",
    )
    .bind(template_id)
    .bind(str_id)
    .fetch_optional(conn)
    .await?;
    Ok(row)
}
