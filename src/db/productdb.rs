// db/productdb.rs
use async_trait::async_trait;

use super::db::DBClient;
use crate::models::productmodel::{NewProduct, Product};

#[async_trait]
pub trait ProductExt: Send + Sync + std::fmt::Debug {
    async fn save_product(
        &self,
        new_product: NewProduct,
    ) -> Result<Product, sqlx::Error>;

    async fn get_active_products(&self) -> Result<Vec<Product>, sqlx::Error>;
}

#[async_trait]
impl ProductExt for DBClient {
    async fn save_product(
        &self,
        new_product: NewProduct,
    ) -> Result<Product, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (
                product_name, level_id, price, profit_percentage,
                duration_days, logo_url, promotes_to_level_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING
                id, product_name, level_id, price, profit_percentage,
                duration_days, logo_url, promotes_to_level_id, is_active
            "#
        )
        .bind(new_product.product_name)
        .bind(new_product.level_id)
        .bind(new_product.price)
        .bind(new_product.profit_percentage)
        .bind(new_product.duration_days)
        .bind(new_product.logo_url)
        .bind(new_product.promotes_to_level_id)
        .fetch_one(&self.pool)
        .await
    }

    async fn get_active_products(&self) -> Result<Vec<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            r#"
            SELECT
                id, product_name, level_id, price, profit_percentage,
                duration_days, logo_url, promotes_to_level_id, is_active
            FROM products
            WHERE is_active = TRUE
            ORDER BY id
            "#
        )
        .fetch_all(&self.pool)
        .await
    }
}
