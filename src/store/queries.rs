/// 모든 상품 조회 (저장 순서)
pub const GET_ALL_ITEMS: &str =
    "SELECT id, name, description, starting_bid, current_bid, created_at FROM items ORDER BY id ASC";

/// 상품 저장
pub const INSERT_ITEM: &str = r#"
    INSERT INTO items (name, description, starting_bid, current_bid, created_at)
    VALUES ($1, $2, $3, $4, COALESCE($5, NOW()))
    RETURNING id, name, description, starting_bid, current_bid, created_at
"#;
