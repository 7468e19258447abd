// src/math/error.rs

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum MathError {
    #[error("評価点の列が空です。")]
    EmptyTimeGrid,
    #[error("評価点の列が単調増加ではありません。")]
    NonMonotonicTimeGrid,
    #[error("最大ステップ数 {max_steps} に達しました (t = {t})。")]
    MaxStepsExceeded { max_steps: usize, t: f64 },
    // 他の数値計算エラーを追加可能
}
