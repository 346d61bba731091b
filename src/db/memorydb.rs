// db/memorydb.rs
// In-memory stand-in for DBClient used by service and router tests.
use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::error::{DatabaseError, ErrorKind};
use tokio::sync::Mutex;

use super::{leveldb::LevelExt, productdb::ProductExt, userdb::UserExt};
use crate::models::{
    levelmodel::{Level, DEFAULT_LEVEL_ID},
    productmodel::{NewProduct, Product},
    usermodel::{NewUser, User},
};

#[derive(Debug, Default)]
pub struct MemoryDB {
    users: Mutex<Vec<User>>,
    products: Mutex<Vec<Product>>,
    levels: Mutex<Vec<Level>>,
    pub phone_lookups: AtomicUsize,
    pub user_inserts: AtomicUsize,
    pub otp_clears: AtomicUsize,
    unavailable: AtomicBool,
    users_hidden: AtomicBool,
}

/// The error Postgres raises when an insert hits a unique constraint.
#[derive(Debug)]
pub struct UniqueViolation {
    pub constraint: &'static str,
}

impl UniqueViolation {
    pub fn into_sqlx(self) -> sqlx::Error {
        sqlx::Error::Database(Box::new(self))
    }
}

impl fmt::Display for UniqueViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "duplicate key value violates unique constraint \"{}\"", self.constraint)
    }
}

impl StdError for UniqueViolation {}

impl DatabaseError for UniqueViolation {
    fn message(&self) -> &str {
        "duplicate key value violates unique constraint"
    }

    fn code(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed("23505"))
    }

    fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self
    }

    fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
        self
    }

    fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
        self
    }

    fn constraint(&self) -> Option<&str> {
        Some(self.constraint)
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::UniqueViolation
    }
}

impl MemoryDB {
    /// Mirrors the migration seed: only the default level exists.
    pub fn seeded() -> Self {
        let db = MemoryDB::default();
        db.levels.try_lock().expect("fresh mutex").push(Level {
            id: DEFAULT_LEVEL_ID,
            level_name: "Bronze".to_string(),
            profit_bonus_percentage: BigDecimal::from(0),
        });
        db
    }

    pub async fn add_level(&self, level_name: &str, bonus: &str) -> Level {
        let mut levels = self.levels.lock().await;
        let level = Level {
            id: levels.len() as i32 + 1,
            level_name: level_name.to_string(),
            profit_bonus_percentage: BigDecimal::from_str(bonus).unwrap(),
        };
        levels.push(level.clone());
        level
    }

    pub async fn user(&self, phone_number: &str) -> Option<User> {
        self.users
            .lock()
            .await
            .iter()
            .find(|u| u.phone_number == phone_number)
            .cloned()
    }

    pub async fn set_otp_expiration(&self, phone_number: &str, expiration: Option<DateTime<Utc>>) {
        let mut users = self.users.lock().await;
        if let Some(user) = users.iter_mut().find(|u| u.phone_number == phone_number) {
            user.otp_expiration = expiration;
        }
    }

    pub async fn set_product_active(&self, product_id: i32, is_active: bool) {
        let mut products = self.products.lock().await;
        if let Some(product) = products.iter_mut().find(|p| p.id == product_id) {
            product.is_active = is_active;
        }
    }

    /// Phone lookups stop seeing stored users, as if another request inserted
    /// the same phone between this request's lookup and its insert.
    pub fn hide_existing_users(&self) {
        self.users_hidden.store(true, Ordering::SeqCst);
    }

    /// Makes every subsequent query fail like a dropped connection.
    pub fn go_offline(&self) {
        self.unavailable.store(true, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), sqlx::Error> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(sqlx::Error::PoolTimedOut)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl UserExt for MemoryDB {
    async fn get_user_by_phone(&self, phone_number: &str) -> Result<Option<User>, sqlx::Error> {
        self.check_available()?;
        self.phone_lookups.fetch_add(1, Ordering::SeqCst);
        if self.users_hidden.load(Ordering::SeqCst) {
            return Ok(None);
        }
        Ok(self.user(phone_number).await)
    }

    async fn save_user(&self, new_user: NewUser) -> Result<User, sqlx::Error> {
        self.check_available()?;
        let mut users = self.users.lock().await;
        if users.iter().any(|u| u.phone_number == new_user.phone_number) {
            return Err(UniqueViolation { constraint: "users_phone_number_key" }.into_sqlx());
        }
        if users.iter().any(|u| u.referral_code == new_user.referral_code) {
            return Err(UniqueViolation { constraint: "users_referral_code_key" }.into_sqlx());
        }
        self.user_inserts.fetch_add(1, Ordering::SeqCst);
        let user = User {
            id: users.len() as i32 + 1,
            phone_number: new_user.phone_number,
            level_id: DEFAULT_LEVEL_ID,
            withdrawable_balance: BigDecimal::from(0),
            active_investment_balance: BigDecimal::from(0),
            referral_code: new_user.referral_code,
            referred_by_code: new_user.referred_by_code,
            ip_address: new_user.ip_address,
            otp_code: Some(new_user.otp_code),
            otp_expiration: Some(new_user.otp_expiration),
            created_at: Utc::now(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn clear_user_otp(&self, user_id: i32) -> Result<(), sqlx::Error> {
        self.check_available()?;
        self.otp_clears.fetch_add(1, Ordering::SeqCst);
        let mut users = self.users.lock().await;
        if let Some(user) = users.iter_mut().find(|u| u.id == user_id) {
            user.otp_code = None;
        }
        Ok(())
    }
}

#[async_trait]
impl ProductExt for MemoryDB {
    async fn save_product(&self, new_product: NewProduct) -> Result<Product, sqlx::Error> {
        self.check_available()?;
        let mut products = self.products.lock().await;
        let product = Product {
            id: products.len() as i32 + 1,
            product_name: new_product.product_name,
            level_id: new_product.level_id,
            price: new_product.price,
            profit_percentage: new_product.profit_percentage,
            duration_days: new_product.duration_days,
            logo_url: new_product.logo_url,
            promotes_to_level_id: new_product.promotes_to_level_id,
            is_active: true,
        };
        products.push(product.clone());
        Ok(product)
    }

    async fn get_active_products(&self) -> Result<Vec<Product>, sqlx::Error> {
        self.check_available()?;
        Ok(self
            .products
            .lock()
            .await
            .iter()
            .filter(|p| p.is_active)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl LevelExt for MemoryDB {
    async fn get_levels(&self) -> Result<Vec<Level>, sqlx::Error> {
        self.check_available()?;
        Ok(self.levels.lock().await.clone())
    }
}
