// src/config/parameters.rs

use serde::Deserialize;
use thiserror::Error;

/// パラメータ検証エラー
#[derive(Error, Debug, PartialEq)]
pub enum ParameterError {
    #[error("{name} を数値として解釈できません: {value}")]
    NotANumber { name: &'static str, value: String },
    #[error("{name} は有限の実数でなければなりません: {value}")]
    NotFinite { name: &'static str, value: f64 },
}

/// ロジスティック成長モデルのパラメータ
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SimulationParameters {
    pub r: f64,  // 成長率 (1/時間)
    pub k: f64,  // 環境収容力（個体数の上限）
    pub y0: f64, // 初期個体数 (t=0)
}

impl SimulationParameters {
    /// 境界から届いた3つの数値文字列をパラメータへ変換する
    ///
    /// # 引数
    /// - `r`: 成長率の文字列表現
    /// - `k`: 環境収容力の文字列表現
    /// - `y0`: 初期個体数の文字列表現
    ///
    /// # 戻り値
    /// - 3つすべてが有限の実数として解釈できた場合はパラメータ
    /// - 解釈できない場合は `ParameterError`（シミュレーションは開始しない）
    pub fn from_strs(r: &str, k: &str, y0: &str) -> Result<Self, ParameterError> {
        let r = parse_finite("r", r)?;
        let k = parse_finite("K", k)?;
        let y0 = parse_finite("y0", y0)?;
        Ok(SimulationParameters { r, k, y0 })
    }
}

/// 文字列を有限の f64 として解釈する
fn parse_finite(name: &'static str, value: &str) -> Result<f64, ParameterError> {
    let parsed: f64 = value.trim().parse().map_err(|_| ParameterError::NotANumber {
        name,
        value: value.to_string(),
    })?;
    if !parsed.is_finite() {
        return Err(ParameterError::NotFinite {
            name,
            value: parsed,
        });
    }
    Ok(parsed)
}
