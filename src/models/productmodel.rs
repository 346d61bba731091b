use bigdecimal::BigDecimal;

#[derive(Debug, sqlx::FromRow, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub product_name: String,
    pub level_id: i32,
    pub price: BigDecimal,
    pub profit_percentage: i32,
    pub duration_days: i32,
    pub logo_url: Option<String>,
    pub promotes_to_level_id: Option<i32>,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub product_name: String,
    pub level_id: i32,
    pub price: BigDecimal,
    pub profit_percentage: i32,
    pub duration_days: i32,
    pub logo_url: Option<String>,
    pub promotes_to_level_id: Option<i32>,
}
