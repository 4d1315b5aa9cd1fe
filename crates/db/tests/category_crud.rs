//! Integration tests for category CRUD and cascade behaviour.

use causeway_core::field_type::FieldType;
use causeway_core::options::ChoiceOption;
use causeway_core::schema::FieldDefinition;
use causeway_db::models::category::{CreateCategory, UpdateCategory};
use causeway_db::models::field_value::{FieldValueEntry, ValueInput};
use causeway_db::repositories::{CategoryRepo, FieldRepo, FieldValueRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_category(name: &str) -> CreateCategory {
    CreateCategory {
        name: name.to_string(),
        description: Some(format!("{name} assistance")),
        icon: None,
    }
}

fn text_field(name: &str) -> FieldDefinition {
    FieldDefinition {
        name: name.to_string(),
        field_type: FieldType::ShortText,
        required: false,
        placeholder: None,
        options: Vec::new(),
    }
}

fn select_field(name: &str, values: &[&str]) -> FieldDefinition {
    FieldDefinition {
        name: name.to_string(),
        field_type: FieldType::SingleSelect,
        required: true,
        placeholder: None,
        options: values.iter().map(|v| ChoiceOption::plain(*v)).collect(),
    }
}

fn single_entry(field_id: i64, value: &str) -> FieldValueEntry {
    FieldValueEntry {
        field_id,
        value: ValueInput::Single(value.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Test: create and fetch
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_fetch_category(pool: PgPool) {
    let category = CategoryRepo::create(&pool, &new_category("Food"))
        .await
        .unwrap();
    assert_eq!(category.name, "Food");
    assert_eq!(category.description, "Food assistance");
    assert_eq!(category.icon, None);

    let fetched = CategoryRepo::find_by_id(&pool, category.id)
        .await
        .unwrap()
        .expect("category should exist");
    assert_eq!(fetched.id, category.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_description_defaults_to_empty(pool: PgPool) {
    let category = CategoryRepo::create(
        &pool,
        &CreateCategory {
            name: "Shelter".to_string(),
            description: None,
            icon: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(category.description, "");
}

// ---------------------------------------------------------------------------
// Test: duplicate name rejected
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_category_name_rejected(pool: PgPool) {
    CategoryRepo::create(&pool, &new_category("Education"))
        .await
        .unwrap();
    let result = CategoryRepo::create(&pool, &new_category("Education")).await;
    assert!(result.is_err(), "Duplicate category name should fail");
}

// ---------------------------------------------------------------------------
// Test: list carries field counts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_with_field_counts(pool: PgPool) {
    let food = CategoryRepo::create(&pool, &new_category("Food"))
        .await
        .unwrap();
    let clothing = CategoryRepo::create(&pool, &new_category("Clothing"))
        .await
        .unwrap();

    FieldRepo::create(&pool, food.id, &text_field("Household size"))
        .await
        .unwrap();
    FieldRepo::create(&pool, food.id, &text_field("Dietary notes"))
        .await
        .unwrap();

    let listed = CategoryRepo::list(&pool).await.unwrap();
    assert_eq!(listed.len(), 2);
    // Ordered by name: Clothing first.
    assert_eq!(listed[0].id, clothing.id);
    assert_eq!(listed[0].field_count, 0);
    assert_eq!(listed[1].id, food.id);
    assert_eq!(listed[1].field_count, 2);
}

// ---------------------------------------------------------------------------
// Test: update patches only supplied fields
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_category(pool: PgPool) {
    let category = CategoryRepo::create(&pool, &new_category("Food"))
        .await
        .unwrap();

    let updated = CategoryRepo::update(
        &pool,
        category.id,
        &UpdateCategory {
            name: None,
            description: Some("Weekly grocery support".to_string()),
            icon: Some("basket".to_string()),
        },
    )
    .await
    .unwrap()
    .expect("category should exist");

    assert_eq!(updated.name, "Food");
    assert_eq!(updated.description, "Weekly grocery support");
    assert_eq!(updated.icon.as_deref(), Some("basket"));

    let missing = CategoryRepo::update(
        &pool,
        999_999,
        &UpdateCategory {
            name: Some("Ghost".to_string()),
            description: None,
            icon: None,
        },
    )
    .await
    .unwrap();
    assert!(missing.is_none());
}

// ---------------------------------------------------------------------------
// Test: delete cascades to fields and values
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_category_cascades(pool: PgPool) {
    let category = CategoryRepo::create(&pool, &new_category("Education"))
        .await
        .unwrap();
    let level = FieldRepo::create(
        &pool,
        category.id,
        &select_field("level", &["Beginner", "Advanced"]),
    )
    .await
    .unwrap();

    let record_id = 42;
    FieldValueRepo::save_for_record(&pool, record_id, &[single_entry(level.id, "Beginner")])
        .await
        .unwrap();

    let deleted = CategoryRepo::delete(&pool, category.id).await.unwrap();
    assert!(deleted);

    assert!(CategoryRepo::find_by_id(&pool, category.id)
        .await
        .unwrap()
        .is_none());
    assert!(FieldRepo::find_by_id(&pool, level.id)
        .await
        .unwrap()
        .is_none());
    let values = FieldValueRepo::get_for_record(&pool, record_id)
        .await
        .unwrap();
    assert!(values.is_empty(), "orphaned values must not be retrievable");

    // Deleting again reports not found.
    assert!(!CategoryRepo::delete(&pool, category.id).await.unwrap());
}
