// src/simulation/mod.rs

pub mod load_settings;
pub mod framework;

/// 1回のシミュレーションで得られる時系列
///
/// 各評価点 t[i] における個体数 y[i] を並行する2本の列として持つ。
/// 描画が終わるまでの間だけ保持され、データとしては永続化しない。
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    pub t: Vec<f64>, // 評価点の時刻
    pub y: Vec<f64>, // 各時刻での個体数
}

impl TimeSeries {
    /// (t, y) の組を順に返すイテレータ
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.t.iter().copied().zip(self.y.iter().copied())
    }

    /// サンプル数
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }
}
