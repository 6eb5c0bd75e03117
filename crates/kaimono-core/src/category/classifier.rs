//! Category Classifier
//!
//! アイテム名をキーワード表に基づいて分類する。

use super::table::KeywordTable;
use super::Category;

/// カテゴリ分類器
///
/// 副作用もI/Oもない決定的な部分一致分類。トークン化や
/// あいまい一致は行わない。
#[derive(Debug, Clone, Default)]
pub struct CategoryClassifier {
    table: KeywordTable,
}

impl CategoryClassifier {
    /// キーワード表を指定して分類器を作成
    pub fn new(table: KeywordTable) -> Self {
        Self { table }
    }

    /// ビルトインキーワードのみで分類器を構築
    pub fn builtin() -> Self {
        Self::new(KeywordTable::builtin())
    }

    /// アイテム名を分類する
    ///
    /// 名前を小文字化し、評価順で最初にキーワードが部分一致した
    /// カテゴリを返す。どれにも一致しなければ`Other`。
    pub fn classify(&self, name: &str) -> Category {
        let normalized = name.to_lowercase();
        for set in self.table.sets() {
            if set
                .keywords
                .iter()
                .any(|kw| normalized.contains(kw.as_str()))
            {
                return set.category;
            }
        }
        Category::Other
    }

    /// 分類結果が`Other`の場合のみ指定カテゴリへフォールバックする
    ///
    /// UI側で選択中のカテゴリを既定値として使う場合に用いる。
    pub fn classify_or(&self, name: &str, fallback: Category) -> Category {
        match self.classify(name) {
            Category::Other => fallback,
            category => category,
        }
    }
}
