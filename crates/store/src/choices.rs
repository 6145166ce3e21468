//! Insert/lookup operations for option choices, including the two scoped
//! queries the engine depends on: target-category listing and selection
//! resolution.

use rust_decimal::Decimal;
use sqlx::PgConnection;
use uuid::Uuid;

use crate::error::StoreError;
use crate::rows::{ChoiceRef, ChoiceRow};

/// Insert a new option choice under a category.
pub async fn insert_choice(
    conn: &mut PgConnection,
    category_id: Uuid,
    str_id: &str,
    name: &str,
    price_delta: Decimal,
) -> Result<ChoiceRow, StoreError> {
    let row = sqlx::query_as::<_, ChoiceRow>(
        "INSERT INTO option_choices (category_id, str_id, name, price_delta)
         VALUES ($1, $2, $3, $4)
         RETURNING choice_id, category_id, str_id, name, price_delta, created_at",
    )
    .bind(category_id)
    .bind(str_id)
    .bind(name)
    .bind(price_delta)
    .fetch_one(conn)
    .await?;
    Ok(row)
}

/// All choices of one category within one template, ordered by string id.
///
/// An empty result does not distinguish "unknown template", "unknown
/// category", and "category with no choices".
pub async fn fetch_category_choices(
    conn: &mut PgConnection,
    template_str_id: &str,
    category_str_id: &str,
) -> Result<Vec<ChoiceRow>, StoreError> {
    let rows = sqlx::query_as::<_, ChoiceRow>(
        "SELECT oc.choice_id, oc.category_id, oc.str_id, oc.name, oc.price_delta, oc.created_at
         FROM option_choices oc
         JOIN option_categories cat ON oc.category_id = cat.category_id
         JOIN product_templates pt ON cat.template_id = pt.template_id
         WHERE pt.str_id = $1 AND cat.str_id = $2
         ORDER BY oc.str_id",
    )
    .bind(template_str_id)
    .bind(category_str_id)
    .fetch_all(conn)
    .await?;
    Ok(rows)
}

/// Resolve (category string id, choice string id) pairs to canonical choice
/// ids within one template.
///
/// Pairs that match nothing are simply absent from the result; the caller
/// treats a fully unresolvable selection as an empty one.
pub async fn resolve_selection(
    conn: &mut PgConnection,
    template_str_id: &str,
    pairs: &[(String, String)],
) -> Result<Vec<Uuid>, StoreError> {
    if pairs.is_empty() {
        return Ok(Vec::new());
    }
    let categories: Vec<String> = pairs.iter().map(|(c, _)| c.clone()).collect();
    let choices: Vec<String> = pairs.iter().map(|(_, ch)| ch.clone()).collect();

    let ids = sqlx::query_scalar::<_, Uuid>(
        "SELECT oc.choice_id
         FROM option_choices oc
         JOIN option_categories cat ON oc.category_id = cat.category_id
         JOIN product_templates pt ON cat.template_id = pt.template_id
         JOIN unnest($2::text[], $3::text[]) AS sel(category_str_id, choice_str_id)
           ON cat.str_id = sel.category_str_id AND oc.str_id = sel.choice_str_id
         WHERE pt.str_id = $1",
    )
    .bind(template_str_id)
    .bind(&categories)
    .bind(&choices)
    .fetch_all(conn)
    .await?;
    Ok(ids)
}

/// Fetch the choices matching two string ids within one template.
///
/// Used by rule admission: exactly two rows prove both endpoints exist and
/// belong to the template. Fewer rows means at least one endpoint is
/// missing or foreign; more means a string id is ambiguous across the
/// template's categories.
pub async fn lookup_choices_for_rule(
    conn: &mut PgConnection,
    template_str_id: &str,
    choice_str_id_a: &str,
    choice_str_id_b: &str,
) -> Result<Vec<ChoiceRef>, StoreError> {
    let rows = sqlx::query_as::<_, ChoiceRef>(
        "SELECT oc.choice_id, oc.str_id
         FROM option_choices oc
         JOIN option_categories cat ON oc.category_id = cat.category_id
         JOIN product_templates pt ON cat.template_id = pt.template_id
         WHERE pt.str_id = $1 AND oc.str_id IN ($2, $3)",
    )
    .bind(template_str_id)
    .bind(choice_str_id_a)
    .bind(choice_str_id_b)
    .fetch_all(conn)
    .await?;
    Ok(rows)
}
