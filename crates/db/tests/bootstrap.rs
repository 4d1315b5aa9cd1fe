use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    // Health check
    causeway_db::health_check(&pool).await.unwrap();

    // Verify the three engine tables exist and are empty after migration.
    for table in ["categories", "fields", "field_values"] {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// Verify the field_kind enum covers every FieldType label.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_field_kind_enum_matches_field_types(pool: PgPool) {
    let labels: Vec<(String,)> = sqlx::query_as(
        "SELECT enumlabel::TEXT FROM pg_enum
         JOIN pg_type ON pg_type.oid = pg_enum.enumtypid
         WHERE pg_type.typname = 'field_kind'
         ORDER BY enumsortorder",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    let expected: Vec<String> = causeway_core::field_type::ALL_FIELD_TYPES
        .into_iter()
        .map(|t| t.as_str().to_string())
        .collect();
    let actual: Vec<String> = labels.into_iter().map(|(l,)| l).collect();
    assert_eq!(actual, expected);
}
