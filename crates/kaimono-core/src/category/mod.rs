//! # Category Module
//!
//! アイテム名をキーワード表に基づいてカテゴリに分類する機能を提供する。
//!
//! ## 設計目的
//!
//! 買い物アイテムの分類は決定的な部分一致マッチングで行う：
//!
//! - **Food**: 食品（野菜、肉、調味料、飲料など）
//! - **Daily**: 日用品（洗剤、電池、衛生用品など）
//! - **Other**: どのキーワードにも一致しないもの
//!
//! 食品の判定が日用品より先に評価される。両方のキーワードを含む名前は
//! 常にFoodになる。
//!
//! ## モジュール構成
//!
//! - `builtin`: ビルトインキーワード定義
//! - `table`: キーワード表のランタイムストア
//! - `classifier`: 分類器
//!
//! ## 使用例
//!
//! ```rust
//! use kaimono_core::category::{Category, CategoryClassifier};
//!
//! let classifier = CategoryClassifier::builtin();
//! assert_eq!(classifier.classify("牛乳"), Category::Food);
//! assert_eq!(classifier.classify("シャンプー"), Category::Daily);
//! assert_eq!(classifier.classify("プレゼント"), Category::Other);
//! ```

use serde::{Deserialize, Serialize};

mod builtin;
mod classifier;
mod table;

// Re-exports
pub use builtin::{BuiltinKeywordSet, BUILTIN_KEYWORD_SETS, DAILY_KEYWORDS, FOOD_KEYWORDS};
pub use classifier::CategoryClassifier;
pub use table::{KeywordSet, KeywordTable, KeywordsConfig};

/// 買い物アイテムのカテゴリ
///
/// 閉じた集合。実行時の拡張はない。永続化時は既存データ互換の
/// 日本語ラベルで表現される。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// 食品
    #[serde(rename = "食品")]
    Food,
    /// 日用品
    #[serde(rename = "日用品")]
    Daily,
    /// その他
    #[serde(rename = "その他")]
    Other,
}

impl Category {
    /// 表示・永続化に使うラベル
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "食品",
            Category::Daily => "日用品",
            Category::Other => "その他",
        }
    }

    /// 全カテゴリ
    pub fn all() -> &'static [Category] {
        &[Category::Food, Category::Daily, Category::Other]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
