//! Integration tests for the batch reorder operation.

use causeway_core::field_type::FieldType;
use causeway_core::schema::FieldDefinition;
use causeway_core::types::DbId;
use causeway_db::models::category::CreateCategory;
use causeway_db::repositories::{CategoryRepo, FieldRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_category_with_fields(pool: &PgPool, field_names: &[&str]) -> (DbId, Vec<DbId>) {
    let category_id = CategoryRepo::create(
        pool,
        &CreateCategory {
            name: "Food".to_string(),
            description: Some("test".to_string()),
            icon: None,
        },
    )
    .await
    .unwrap()
    .id;

    let mut field_ids = Vec::new();
    for name in field_names {
        let field = FieldRepo::create(
            pool,
            category_id,
            &FieldDefinition {
                name: name.to_string(),
                field_type: FieldType::ShortText,
                required: false,
                placeholder: None,
                options: Vec::new(),
            },
        )
        .await
        .unwrap();
        field_ids.push(field.id);
    }
    (category_id, field_ids)
}

async fn listed_ids(pool: &PgPool, category_id: DbId) -> Vec<DbId> {
    FieldRepo::list_by_category(pool, category_id)
        .await
        .unwrap()
        .iter()
        .map(|f| f.id)
        .collect()
}

// ---------------------------------------------------------------------------
// Test: reorder rewrites the whole sequence
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reorder_applies_supplied_sequence(pool: PgPool) {
    let (category_id, ids) = seed_category_with_fields(&pool, &["f1", "f2", "f3"]).await;
    let (f1, f2, f3) = (ids[0], ids[1], ids[2]);

    // Move f3 to the front.
    FieldRepo::reorder(&pool, category_id, &[f3, f1, f2])
        .await
        .unwrap();

    assert_eq!(listed_ids(&pool, category_id).await, vec![f3, f1, f2]);
    let orders: Vec<i32> = FieldRepo::list_by_category(&pool, category_id)
        .await
        .unwrap()
        .iter()
        .map(|f| f.display_order)
        .collect();
    assert_eq!(orders, vec![0, 1, 2]);
}

// ---------------------------------------------------------------------------
// Test: reorder is idempotent for the same input
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reorder_is_idempotent(pool: PgPool) {
    let (category_id, ids) = seed_category_with_fields(&pool, &["f1", "f2", "f3"]).await;
    let swapped = vec![ids[1], ids[0], ids[2]];

    FieldRepo::reorder(&pool, category_id, &swapped).await.unwrap();
    FieldRepo::reorder(&pool, category_id, &swapped).await.unwrap();

    assert_eq!(listed_ids(&pool, category_id).await, swapped);
}

// ---------------------------------------------------------------------------
// Test: ids outside the category are ignored
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reorder_ignores_foreign_field_ids(pool: PgPool) {
    let (category_id, ids) = seed_category_with_fields(&pool, &["f1", "f2"]).await;

    let other_category = CategoryRepo::create(
        &pool,
        &CreateCategory {
            name: "Clothing".to_string(),
            description: Some("test".to_string()),
            icon: None,
        },
    )
    .await
    .unwrap();
    let foreign = FieldRepo::create(
        &pool,
        other_category.id,
        &FieldDefinition {
            name: "Size".to_string(),
            field_type: FieldType::ShortText,
            required: false,
            placeholder: None,
            options: Vec::new(),
        },
    )
    .await
    .unwrap();

    // The foreign id occupies index 0 but cannot match the category guard,
    // so the category's own fields simply take the remaining indices.
    FieldRepo::reorder(&pool, category_id, &[foreign.id, ids[1], ids[0]])
        .await
        .unwrap();

    assert_eq!(listed_ids(&pool, category_id).await, vec![ids[1], ids[0]]);
    let untouched = FieldRepo::find_by_id(&pool, foreign.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(untouched.display_order, 0);
    assert_eq!(untouched.category_id, other_category.id);
}

// ---------------------------------------------------------------------------
// Test: find_with_fields reflects the stored order
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_with_fields_returns_sorted_fields(pool: PgPool) {
    let (category_id, ids) = seed_category_with_fields(&pool, &["f1", "f2", "f3"]).await;
    let (f1, f2, f3) = (ids[0], ids[1], ids[2]);

    FieldRepo::reorder(&pool, category_id, &[f3, f1, f2])
        .await
        .unwrap();

    let with_fields = CategoryRepo::find_with_fields(&pool, category_id)
        .await
        .unwrap()
        .expect("category should exist");
    let ids: Vec<DbId> = with_fields.fields.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![f3, f1, f2]);
    let orders: Vec<i32> = with_fields.fields.iter().map(|f| f.display_order).collect();
    assert_eq!(orders, vec![0, 1, 2]);
}
