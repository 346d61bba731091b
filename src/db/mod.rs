pub mod db;
pub mod leveldb;
pub mod productdb;
pub mod userdb;

#[cfg(test)]
pub mod memorydb;

use leveldb::LevelExt;
use productdb::ProductExt;

/// Everything the catalog reads and writes, nameable as one trait object.
pub trait CatalogStore: ProductExt + LevelExt {}

impl<T: ProductExt + LevelExt> CatalogStore for T {}
