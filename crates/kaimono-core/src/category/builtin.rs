//! Builtin Keyword Definitions
//!
//! コード内で定義されるビルトインキーワード表。
//! 設定ファイルがない環境でもそのまま使える。

use super::Category;

/// 食品キーワード
pub const FOOD_KEYWORDS: &[&str] = &[
    "野菜",
    "肉",
    "魚",
    "パン",
    "牛乳",
    "卵",
    "米",
    "ご飯",
    "果物",
    "りんご",
    "バナナ",
    "みかん",
    "トマト",
    "キャベツ",
    "レタス",
    "豚",
    "鶏",
    "牛",
    "ハム",
    "ソーセージ",
    "ベーコン",
    "豆腐",
    "納豆",
    "ヨーグルト",
    "チーズ",
    "バター",
    "醤油",
    "味噌",
    "塩",
    "砂糖",
    "油",
    "酢",
    "マヨネーズ",
    "ケチャップ",
    "ラーメン",
    "うどん",
    "そば",
    "パスタ",
    "カレー",
    "お菓子",
    "チョコ",
    "クッキー",
    "アイス",
    "ジュース",
    "お茶",
    "コーヒー",
    "ビール",
    "酒",
    "ワイン",
    "水",
];

/// 日用品キーワード
pub const DAILY_KEYWORDS: &[&str] = &[
    "シャンプー",
    "リンス",
    "石鹸",
    "ボディソープ",
    "歯磨き",
    "歯ブラシ",
    "トイレットペーパー",
    "ティッシュ",
    "キッチンペーパー",
    "ゴミ袋",
    "洗剤",
    "柔軟剤",
    "スポンジ",
    "ラップ",
    "アルミホイル",
    "ジップロック",
    "電池",
    "電球",
    "薬",
    "絆創膏",
    "マスク",
    "消毒",
    "ハンドソープ",
    "ボディクリーム",
    "化粧水",
    "日焼け止め",
];

/// ビルトインキーワード集合
///
/// 並び順がそのまま分類の評価順。Foodが先に評価されるため、
/// 両方に一致する名前はFoodになる。
pub const BUILTIN_KEYWORD_SETS: &[BuiltinKeywordSet] = &[
    BuiltinKeywordSet {
        category: Category::Food,
        keywords: FOOD_KEYWORDS,
    },
    BuiltinKeywordSet {
        category: Category::Daily,
        keywords: DAILY_KEYWORDS,
    },
];

/// ビルトインキーワード集合の静的定義
#[derive(Debug, Clone)]
pub struct BuiltinKeywordSet {
    /// 対象カテゴリ
    pub category: Category,
    /// 部分一致で照合されるキーワード
    pub keywords: &'static [&'static str],
}
