use bigdecimal::BigDecimal;

/// Membership tier. Seeded by migrations and admin data, never deleted.
#[derive(Debug, sqlx::FromRow, Clone, PartialEq)]
pub struct Level {
    pub id: i32,
    pub level_name: String,
    pub profit_bonus_percentage: BigDecimal,
}

/// The lowest tier; `users.level_id` defaults to it.
pub const DEFAULT_LEVEL_ID: i32 = 1;
