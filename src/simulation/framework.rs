// src/simulation/framework.rs

use std::error::Error;

use crate::config::parameters::SimulationParameters;
use crate::config::settings::SimulationSettings;
use crate::math::{rk45, Rk45Options};
use crate::models::logistic::logistic_growth;
use crate::simulation::TimeSeries;

/// 等間隔の評価点列の生成
///
/// # 引数
/// - `t_start`: 区間の開始時刻
/// - `t_end`: 区間の終了時刻
/// - `samples`: 評価点の数（両端を含む）
///
/// # 戻り値
/// - [t_start, t_end] を等分割した単調増加の時刻列
pub fn time_grid(t_start: f64, t_end: f64, samples: usize) -> Vec<f64> {
    if samples <= 1 {
        return vec![t_start];
    }
    (0..samples)
        .map(|i| t_start + (t_end - t_start) * i as f64 / (samples - 1) as f64)
        .collect()
}

/// シミュレーションの実行
///
/// 評価点列を組み立て、ロジスティック成長モデルの右辺を RK45 積分器に
/// 渡して時系列を得る。検証済みのパラメータを前提とする。
///
/// # 引数
/// - `params`: 検証済みのモデルパラメータ (r, K, y0)
/// - `settings`: 積分区間と評価点数
///
/// # 戻り値
/// - 各評価点での個体数を収めた時系列
pub fn run_simulation(
    params: &SimulationParameters,
    settings: &SimulationSettings,
) -> Result<TimeSeries, Box<dyn Error>> {
    let t = time_grid(settings.t_start, settings.t_end, settings.samples);
    let y = rk45(
        |t, y| logistic_growth(t, y, params.r, params.k),
        params.y0,
        &t,
        &Rk45Options::default(),
    )?;

    Ok(TimeSeries { t, y })
}
