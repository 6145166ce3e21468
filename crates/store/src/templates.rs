//! Insert/lookup operations for product templates.

use rust_decimal::Decimal;
use sqlx::PgConnection;

use crate::error::StoreError;
use crate::rows::TemplateRow;

/// Insert a new product template and return the created row.
pub async fn insert_template(
    conn: &mut PgConnection,
    str_id: &str,
    name: &str,
    base_price: Decimal,
) -> Result<TemplateRow, StoreError> {
    let row = sqlx::query_as::<_, TemplateRow>(
        "INSERT INTO product_templates (str_id, name, base_price)
         VALUES ($1, $2, $3)
         RETURNING template_id, str_id, name, base_price, created_at",
    )
    .bind(str_id)
    .bind(name)
    .bind(base_price)
    .fetch_one(conn)
    .await?;
    Ok(row)
}

/// Look up a template by its string id.
pub async fn find_template_by_str_id(
    conn: &mut PgConnection,
    str_id: &str,
) -> Result<Option<TemplateRow>, StoreError> {
    let row = sqlx::query_as::<_, TemplateRow>(
        "SELECT template_id, str_id, name, base_price, created_at
         FROM product_templates WHERE str_id = $1",
    )
    .bind(str_id)
    .fetch_optional(conn)
    .await?;
    Ok(row)
}
