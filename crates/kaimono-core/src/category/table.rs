//! Keyword Table
//!
//! キーワード定義のランタイムストア。
//! ビルトインと設定ファイルをマージして保持。

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::builtin::BUILTIN_KEYWORD_SETS;
use super::Category;

/// 実行時キーワード集合
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordSet {
    /// 対象カテゴリ
    pub category: Category,
    /// 部分一致で照合されるキーワード
    pub keywords: Vec<String>,
}

/// キーワード定義のランタイムストア
///
/// 集合の並び順がそのまま分類の評価順になる。
#[derive(Debug, Clone)]
pub struct KeywordTable {
    sets: Vec<KeywordSet>,
}

impl KeywordTable {
    /// ビルトインキーワードのみで初期化
    pub fn builtin() -> Self {
        let sets = BUILTIN_KEYWORD_SETS
            .iter()
            .map(|b| KeywordSet {
                category: b.category,
                keywords: b.keywords.iter().map(|s| s.to_string()).collect(),
            })
            .collect();
        Self { sets }
    }

    /// 設定でオーバーライド
    ///
    /// - 空でないリストは同カテゴリのビルトインを置き換える
    /// - 空のリストはビルトインを維持する
    pub fn with_config(mut self, config: &KeywordsConfig) -> Self {
        for set in &mut self.sets {
            let configured = match set.category {
                Category::Food => &config.food,
                Category::Daily => &config.daily,
                Category::Other => continue,
            };
            if !configured.is_empty() {
                set.keywords = configured.clone();
            }
        }
        self
    }

    /// カテゴリのキーワード一覧を取得
    pub fn get(&self, category: Category) -> Option<&[String]> {
        self.sets
            .iter()
            .find(|s| s.category == category)
            .map(|s| s.keywords.as_slice())
    }

    /// 全集合を評価順で取得
    pub fn sets(&self) -> &[KeywordSet] {
        &self.sets
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// キーワード設定ファイルの`[keywords]`セクション
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeywordsConfig {
    /// 食品キーワード（空ならビルトインを使用）
    #[serde(default)]
    pub food: Vec<String>,
    /// 日用品キーワード（空ならビルトインを使用）
    #[serde(default)]
    pub daily: Vec<String>,
}

impl KeywordsConfig {
    /// TOMLファイルから読み込む
    ///
    /// ファイルが存在しない場合はデフォルト（ビルトイン維持）を返す。
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let file: KeywordsFile = toml::from_str(&content)?;
        Ok(file.keywords)
    }
}

#[derive(Debug, Default, Deserialize)]
struct KeywordsFile {
    #[serde(default)]
    keywords: KeywordsConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_table_builtin() {
        let table = KeywordTable::builtin();
        assert!(table.get(Category::Food).is_some());
        assert!(table.get(Category::Daily).is_some());
        assert!(table.get(Category::Other).is_none());
    }

    #[test]
    fn test_keyword_table_override() {
        let config = KeywordsConfig {
            food: vec!["milk".to_string()],
            daily: Vec::new(),
        };

        let table = KeywordTable::builtin().with_config(&config);
        assert_eq!(table.get(Category::Food), Some(&["milk".to_string()][..]));
        // 空の設定はビルトインを維持する
        assert!(table
            .get(Category::Daily)
            .unwrap()
            .contains(&"洗剤".to_string()));
    }

    #[test]
    fn test_keywords_config_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keywords.toml");
        fs::write(
            &path,
            r#"
[keywords]
food = ["牛乳", "パン"]
"#,
        )
        .unwrap();

        let config = KeywordsConfig::load(&path).unwrap();
        assert_eq!(config.food, vec!["牛乳", "パン"]);
        assert!(config.daily.is_empty());
    }

    #[test]
    fn test_keywords_config_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = KeywordsConfig::load(&dir.path().join("none.toml")).unwrap();
        assert!(config.food.is_empty());
        assert!(config.daily.is_empty());
    }
}
