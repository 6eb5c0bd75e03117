//! Shopping Item Model
//!
//! 買い物リストの永続データ型。
//! シリアライズ形状は既存の保存データと互換（camelCaseフィールド、
//! `completedAt`は未完了時に省略）。

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::category::Category;

/// 買い物アイテムの一意識別子
///
/// エポックミリ秒 + UUID。同一ミリ秒内の連続追加でも衝突しない。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(String);

impl ItemId {
    pub fn new() -> Self {
        let millis = Utc::now().timestamp_millis();
        Self(format!("{}-{}", millis, uuid::Uuid::new_v4().simple()))
    }

    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 買い物リストの1アイテム
///
/// 不変条件: `completed_at`は`completed == true`のときに限り`Some`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    pub id: ItemId,
    pub name: String,
    pub category: Category,
    pub completed: bool,
    /// 作成時刻（エポックミリ秒）
    pub created_at: i64,
    /// 完了時刻（エポックミリ秒）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<i64>,
}

impl ShoppingItem {
    /// 未完了の新規アイテムを作成
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            category,
            completed: false,
            created_at: Utc::now().timestamp_millis(),
            completed_at: None,
        }
    }

    /// 完了状態を反転する
    ///
    /// 新たに完了したら`completed_at`を現在時刻に、未完了に戻したら
    /// クリアする。
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
        self.completed_at = if self.completed {
            Some(Utc::now().timestamp_millis())
        } else {
            None
        };
    }
}

/// 頻度インデックスの1エントリ
///
/// `name`がインデックス内の一意キー。`category`は初回登録時のもので、
/// 以降の追加では更新されない。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequentItem {
    pub name: String,
    pub category: Category,
    pub count: u32,
}

/// 未完了/完了済みでリストを分割する
pub fn partition_by_completion(items: &[ShoppingItem]) -> (Vec<ShoppingItem>, Vec<ShoppingItem>) {
    items.iter().cloned().partition(|item| !item.completed)
}
