//! User-facing text.

pub const PLACEHOLDER: &str = "問題を生成してください";
pub const SELECT_AN_ANSWER: &str = "回答を選択してください";
pub const GENERATE_FAILED: &str = "問題の生成中にエラーが発生しました";
pub const EVALUATE_FAILED: &str = "回答の評価中にエラーが発生しました";
pub const CORRECT: &str = "正解です！";
pub const INCORRECT: &str = "不正解です";
pub const MULTIPLE_HINT: &str = "複数選択可";
pub const LOADING: &str = "処理中...";

/// Prefix a request failure with the phase it happened in.
pub fn phase_error(phase: &str, detail: impl std::fmt::Display) -> String {
    format!("{phase}: {detail}")
}
