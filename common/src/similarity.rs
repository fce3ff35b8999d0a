//! 文字列類似度の計算
//!
//! フィールドキーのあいまい一致に使用するトークンソート方式の
//! 類似度。決定的・対称で、0-100の整数スケールに正規化する。

/// トークンソート類似度を計算（0-100）
///
/// 両者を正規化（小文字化・英数字以外を区切りとしてトークン分割・
/// ソート・空白結合）した上で編集距離ベースの類似度を取る。
/// 語順の違いは正規化で吸収されるため影響しない。
///
/// # Examples
/// ```
/// use schema_qa_common::similarity::token_sort_ratio;
///
/// assert_eq!(token_sort_ratio("firstName", "firstName"), 100);
/// assert_eq!(token_sort_ratio("first_name", "firstName"), 90);
/// assert_eq!(token_sort_ratio("full name", "name full"), 100);
/// ```
pub fn token_sort_ratio(a: &str, b: &str) -> u32 {
    let a_norm = normalize(a);
    let b_norm = normalize(b);

    if a_norm == b_norm {
        return 100;
    }
    if a_norm.is_empty() || b_norm.is_empty() {
        return 0;
    }

    let distance = levenshtein_distance(&a_norm, &b_norm);
    let max_len = a_norm.chars().count().max(b_norm.chars().count());

    (100.0 * (1.0 - distance as f64 / max_len as f64)).round() as u32
}

/// トークンソート正規化
///
/// 小文字化し、英数字以外の文字をすべて区切りとして扱い、
/// トークンをソートして単一空白で結合する。
fn normalize(s: &str) -> String {
    let mut tokens: Vec<String> = Vec::new();
    let mut current = String::new();

    for c in s.chars() {
        if c.is_alphanumeric() {
            for lower in c.to_lowercase() {
                current.push(lower);
            }
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }

    tokens.sort();
    tokens.join(" ")
}

/// レーベンシュタイン距離を計算
fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let a_len = a_chars.len();
    let b_len = b_chars.len();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    let mut matrix = vec![vec![0; b_len + 1]; a_len + 1];

    for i in 0..=a_len {
        matrix[i][0] = i;
    }
    for j in 0..=b_len {
        matrix[0][j] = j;
    }

    for i in 1..=a_len {
        for j in 1..=b_len {
            let cost = if a_chars[i - 1] == b_chars[j - 1] { 0 } else { 1 };
            matrix[i][j] = (matrix[i - 1][j] + 1)
                .min(matrix[i][j - 1] + 1)
                .min(matrix[i - 1][j - 1] + cost);
        }
    }

    matrix[a_len][b_len]
}
