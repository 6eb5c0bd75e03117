pub mod category;
pub mod error;
pub mod item;
pub mod kv;
pub mod store;

pub use error::{KaimonoError, Result};
pub use item::{partition_by_completion, FrequentItem, ItemId, ShoppingItem};
pub use kv::{FileKvStore, KvStore, MemoryKvStore};
pub use store::ItemStore;

// Category system
pub use category::{
    BuiltinKeywordSet, Category, CategoryClassifier, KeywordSet, KeywordTable, KeywordsConfig,
    BUILTIN_KEYWORD_SETS, DAILY_KEYWORDS, FOOD_KEYWORDS,
};
