// src/config/settings.rs

use serde::Deserialize;

/// シミュレーション実行設定
///
/// config/simulation.yaml から読み込む。ファイルが無い場合は
/// `Default` の固定値（区間 [0, 50]・500点・static/plot.png）を使う。
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationSettings {
    pub t_start: f64,         // 積分区間の開始時刻
    pub t_end: f64,           // 積分区間の終了時刻
    pub samples: usize,       // 評価点の数（両端を含む）
    pub output_dir: String,   // 画像の出力ディレクトリ
    pub plot_file: String,    // 画像のファイル名
    pub plot_width: u32,      // 画像の幅 (px)
    pub plot_height: u32,     // 画像の高さ (px)
}

impl Default for SimulationSettings {
    fn default() -> Self {
        SimulationSettings {
            t_start: 0.0,
            t_end: 50.0,
            samples: 500,
            output_dir: "static".to_string(),
            plot_file: "plot.png".to_string(),
            plot_width: 1000,
            plot_height: 600,
        }
    }
}

impl SimulationSettings {
    /// 出力画像のパスを組み立てる
    pub fn plot_path(&self) -> std::path::PathBuf {
        std::path::Path::new(&self.output_dir).join(&self.plot_file)
    }
}
