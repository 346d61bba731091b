use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    models::{
        levelmodel::Level,
        productmodel::{NewProduct, Product},
    },
    service::error::ServiceError,
    utils::decimal::BigDecimalHelpers,
};

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct CreateProductDto {
    #[validate(
        required(message = "Product name is required"),
        length(min = 1, message = "Product name is required"),
        length(max = 100, message = "Product name must be at most 100 characters")
    )]
    pub product_name: Option<String>,

    #[validate(required(message = "Level id is required"))]
    pub level_id: Option<i32>,

    // Accepts a JSON number or a decimal string.
    #[validate(required(message = "Price is required"))]
    pub price: Option<BigDecimal>,

    #[validate(required(message = "Profit percentage is required"))]
    pub profit_percentage: Option<i32>,

    #[validate(required(message = "Duration in days is required"))]
    pub duration_days: Option<i32>,

    #[validate(length(max = 255, message = "Logo url must be at most 255 characters"))]
    pub logo_url: Option<String>,

    pub promotes_to_level_id: Option<i32>,
}

impl TryFrom<CreateProductDto> for NewProduct {
    type Error = ServiceError;

    fn try_from(dto: CreateProductDto) -> Result<Self, Self::Error> {
        fn missing(field: &str) -> ServiceError {
            ServiceError::Validation(format!("{} is required", field))
        }

        Ok(NewProduct {
            product_name: dto.product_name.ok_or_else(|| missing("product_name"))?,
            level_id: dto.level_id.ok_or_else(|| missing("level_id"))?,
            price: dto.price.ok_or_else(|| missing("price"))?,
            profit_percentage: dto.profit_percentage.ok_or_else(|| missing("profit_percentage"))?,
            duration_days: dto.duration_days.ok_or_else(|| missing("duration_days"))?,
            logo_url: dto.logo_url,
            promotes_to_level_id: dto.promotes_to_level_id,
        })
    }
}

/// Public projection of a product; price goes out as a string to keep the cents exact.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ProductFilterDto {
    pub id: i32,
    pub product_name: String,
    pub level_id: i32,
    pub price: String,
    pub profit_percentage: i32,
    pub duration_days: i32,
    pub logo_url: Option<String>,
}

impl ProductFilterDto {
    pub fn filter_product(product: &Product) -> Self {
        ProductFilterDto {
            id: product.id,
            product_name: product.product_name.to_owned(),
            level_id: product.level_id,
            price: product.price.to_money_string(),
            profit_percentage: product.profit_percentage,
            duration_days: product.duration_days,
            logo_url: product.logo_url.clone(),
        }
    }

    pub fn filter_products(products: &[Product]) -> Vec<ProductFilterDto> {
        products.iter().map(ProductFilterDto::filter_product).collect()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProductListResponseDto {
    pub products: Vec<ProductFilterDto>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct LevelFilterDto {
    pub id: i32,
    pub level_name: String,
    pub profit_bonus_percentage: String,
}

impl LevelFilterDto {
    pub fn filter_level(level: &Level) -> Self {
        LevelFilterDto {
            id: level.id,
            level_name: level.level_name.to_owned(),
            profit_bonus_percentage: level.profit_bonus_percentage.to_money_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LevelListResponseDto {
    pub levels: Vec<LevelFilterDto>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    fn full_payload() -> serde_json::Value {
        json!({
            "product_name": "Starter Plan",
            "level_id": 1,
            "price": 1500,
            "profit_percentage": 12,
            "duration_days": 30
        })
    }

    #[test]
    fn test_full_payload_validates_and_converts() {
        let dto: CreateProductDto = serde_json::from_value(full_payload()).unwrap();
        assert!(dto.validate().is_ok());

        let product = NewProduct::try_from(dto).unwrap();
        assert_eq!(product.product_name, "Starter Plan");
        assert_eq!(product.price, BigDecimal::from(1500));
        assert_eq!(product.logo_url, None);
        assert_eq!(product.promotes_to_level_id, None);
    }

    #[test]
    fn test_price_as_string_is_accepted() {
        let mut payload = full_payload();
        payload["price"] = json!("1500.50");
        let dto: CreateProductDto = serde_json::from_value(payload).unwrap();
        assert_eq!(dto.price, Some(BigDecimal::from_str("1500.50").unwrap()));
    }

    #[test]
    fn test_each_required_field_is_enforced() {
        for field in ["product_name", "level_id", "price", "profit_percentage", "duration_days"] {
            let mut payload = full_payload();
            payload.as_object_mut().unwrap().remove(field);

            let dto: CreateProductDto = serde_json::from_value(payload).unwrap();
            assert!(dto.validate().is_err(), "{} should be required", field);
            assert!(NewProduct::try_from(dto).is_err());
        }
    }

    #[test]
    fn test_list_projection_renders_price_as_string() {
        let product = Product {
            id: 3,
            product_name: "Gold Plan".to_string(),
            level_id: 2,
            price: BigDecimal::from(1500),
            profit_percentage: 20,
            duration_days: 60,
            logo_url: Some("https://cdn.example.com/gold.png".to_string()),
            promotes_to_level_id: Some(3),
            is_active: true,
        };

        let value = serde_json::to_value(ProductFilterDto::filter_product(&product)).unwrap();
        assert_eq!(value["price"], json!("1500.00"));
        assert!(value.get("promotes_to_level_id").is_none());
        assert!(value.get("is_active").is_none());
        assert_eq!(value["logo_url"], json!("https://cdn.example.com/gold.png"));
    }

    #[test]
    fn test_free_product_projection_keeps_cents() {
        let mut payload = full_payload();
        payload["price"] = json!(0);
        let dto: CreateProductDto = serde_json::from_value(payload).unwrap();
        let new_product = NewProduct::try_from(dto).unwrap();

        let product = Product {
            id: 1,
            product_name: new_product.product_name,
            level_id: new_product.level_id,
            price: new_product.price.to_money(),
            profit_percentage: new_product.profit_percentage,
            duration_days: new_product.duration_days,
            logo_url: None,
            promotes_to_level_id: None,
            is_active: true,
        };

        let listed = ProductFilterDto::filter_products(&[product]);
        assert_eq!(listed[0].price, "0.00");
    }

    #[test]
    fn test_level_projection() {
        let level = Level {
            id: 1,
            level_name: "Bronze".to_string(),
            profit_bonus_percentage: BigDecimal::from(0),
        };
        assert_eq!(LevelFilterDto::filter_level(&level).profit_bonus_percentage, "0.00");
    }
}
