// service/catalog_service.rs
use std::sync::Arc;

use tracing::info;

use crate::{
    db::{leveldb::LevelExt, productdb::ProductExt},
    models::{
        levelmodel::Level,
        productmodel::{NewProduct, Product},
    },
    service::error::ServiceError,
    utils::decimal::BigDecimalHelpers,
};

#[derive(Debug, Clone)]
pub struct CatalogService<S: ?Sized> {
    db_client: Arc<S>,
}

impl<S: ProductExt + LevelExt + ?Sized> CatalogService<S> {
    pub fn new(db_client: Arc<S>) -> Self {
        Self { db_client }
    }

    // Open to any caller: there is no admin check on product creation.
    pub async fn create_product(&self, mut new_product: NewProduct) -> Result<Product, ServiceError> {
        if new_product.product_name.is_empty() {
            return Err(ServiceError::Validation("Product name is required".to_string()));
        }

        new_product.price = new_product.price.to_money();

        let product = self.db_client.save_product(new_product).await?;

        info!(
            "Created product {} ({}) for level {}",
            product.id, product.product_name, product.level_id
        );

        Ok(product)
    }

    pub async fn list_active_products(&self) -> Result<Vec<Product>, ServiceError> {
        Ok(self.db_client.get_active_products().await?)
    }

    pub async fn list_levels(&self) -> Result<Vec<Level>, ServiceError> {
        Ok(self.db_client.get_levels().await?)
    }
}
