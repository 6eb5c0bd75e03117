//! Item Store
//!
//! 買い物リストと頻度インデックスの永続化操作。
//!
//! 各操作はバッキングストアからの読み直し→変更→全体書き戻しで行い、
//! 操作間で共有するメモリ上の状態を持たない。単一プロセス・逐次呼び出し
//! を前提としており、変更が並行した場合はコレクション全体の粒度で
//! last-write-winsになる。
//!
//! 読み込み時の欠損・破損データは空リスト扱い（修復はせず、次回保存で
//! 上書きされるまで影に隠れるだけ）。書き込み失敗はそのまま呼び出し元へ
//! 伝播する。

use log::warn;
use serde::de::DeserializeOwned;

use crate::category::Category;
use crate::error::{KaimonoError, Result};
use crate::item::{FrequentItem, ShoppingItem};
use crate::kv::KvStore;

const ITEMS_KEY: &str = "shopping_items";
const FREQUENT_KEY: &str = "frequent_items";

/// 頻度インデックスの提示件数上限
const FREQUENT_LIMIT: usize = 10;

/// 買い物アイテムの永続ストア
///
/// バッキングストアはコンストラクタ注入。
pub struct ItemStore<S: KvStore> {
    kv: S,
}

impl<S: KvStore> ItemStore<S> {
    /// バッキングストアを指定して作成
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    /// 保存済みアイテム一覧を取得する
    ///
    /// キー未設定・読み込み失敗・壊れたデータはすべて空リスト扱い。
    pub async fn get_items(&self) -> Vec<ShoppingItem> {
        self.read_collection(ITEMS_KEY).await
    }

    /// アイテム一覧全体を書き戻す
    pub async fn save_items(&self, items: &[ShoppingItem]) -> Result<()> {
        let json = serde_json::to_string(items)?;
        self.kv.set(ITEMS_KEY, &json).await
    }

    /// 新規アイテムを追加する
    ///
    /// 名前はトリムされ、空になる場合はエラー。リスト先頭に挿入し
    /// （最新が常にindex 0）、保存後に頻度インデックスを更新して、
    /// 作成したアイテムを返す。
    pub async fn add_item(&self, name: &str, category: Category) -> Result<ShoppingItem> {
        let name = name.trim();
        if name.is_empty() {
            return Err(KaimonoError::EmptyItemName);
        }

        let item = ShoppingItem::new(name, category);
        let mut items = self.get_items().await;
        items.insert(0, item.clone());
        self.save_items(&items).await?;

        self.update_frequent(name, category).await?;
        Ok(item)
    }

    /// 完了状態を反転する
    ///
    /// 未知のIDはエラーではなく無変更。常に保存し、結果の一覧を返す。
    pub async fn toggle_item(&self, id: &str) -> Result<Vec<ShoppingItem>> {
        let mut items = self.get_items().await;
        if let Some(item) = items.iter_mut().find(|i| i.id.as_str() == id) {
            item.toggle();
        }
        self.save_items(&items).await?;
        Ok(items)
    }

    /// アイテムを削除する
    ///
    /// 存在しないIDは無視。頻度インデックスには触れない。
    pub async fn delete_item(&self, id: &str) -> Result<Vec<ShoppingItem>> {
        let mut items = self.get_items().await;
        items.retain(|i| i.id.as_str() != id);
        self.save_items(&items).await?;
        Ok(items)
    }

    /// よく買うアイテムを取得する
    ///
    /// count降順（同数は保存順を維持）で上位10件。
    /// 欠損・破損データは空リスト扱い。
    pub async fn get_frequent_items(&self) -> Vec<FrequentItem> {
        let mut entries: Vec<FrequentItem> = self.read_collection(FREQUENT_KEY).await;
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries.truncate(FREQUENT_LIMIT);
        entries
    }

    /// 頻度インデックスを更新する
    ///
    /// 同名エントリがあればcountのみ加算（カテゴリは初回登録時のまま）。
    /// なければcount=1で新規作成。
    async fn update_frequent(&self, name: &str, category: Category) -> Result<()> {
        let mut entries: Vec<FrequentItem> = self.read_collection(FREQUENT_KEY).await;
        match entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => entry.count += 1,
            None => entries.push(FrequentItem {
                name: name.to_string(),
                category,
                count: 1,
            }),
        }

        let json = serde_json::to_string(&entries)?;
        self.kv.set(FREQUENT_KEY, &json).await
    }

    /// キーのコレクションを読み込む。失敗はすべて空扱い。
    async fn read_collection<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let raw = match self.kv.get(key).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("{}: read failed, treating as empty: {}", key, e);
                return Vec::new();
            }
        };
        decode_collection(key, raw.as_deref())
    }
}

/// 型付きデコード
///
/// パース結果は内部ではResultとして扱い、この境界で空リストへ写像する。
fn decode_collection<T: DeserializeOwned>(key: &str, raw: Option<&str>) -> Vec<T> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    match serde_json::from_str(raw) {
        Ok(values) => values,
        Err(e) => {
            warn!("{}: corrupt data shadowed until next save: {}", key, e);
            Vec::new()
        }
    }
}
