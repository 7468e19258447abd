// src/render/plot.rs

use std::error::Error;
use std::fs;
use std::path::Path;

use plotters::prelude::*;

use crate::config::settings::SimulationSettings;
use crate::simulation::TimeSeries;

/// 時系列を折れ線グラフとして PNG に描画する
///
/// 出力ディレクトリが無ければ作成し、既存の画像は上書きする。
/// バージョン管理やロックは行わないため、同じパスへ同時に書き込むと
/// 後勝ちになる。非有限のサンプルは描画対象から除外する。
///
/// # 引数
/// - `series`: 描画する時系列
/// - `path`: 出力画像のパス
/// - `settings`: 画像サイズ
///
/// # 戻り値
/// - 出力ディレクトリの作成や描画に失敗した場合はエラー
pub fn render_time_series(
    series: &TimeSeries,
    path: &Path,
    settings: &SimulationSettings,
) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    // 軸の範囲は有限のサンプルだけから決める
    let finite: Vec<(f64, f64)> = series.points().filter(|(_, y)| y.is_finite()).collect();

    let x_min = series.t.first().copied().unwrap_or(0.0);
    let mut x_max = series.t.last().copied().unwrap_or(1.0);
    if x_max <= x_min {
        x_max = x_min + 1.0;
    }

    let mut y_min = finite.iter().map(|&(_, y)| y).fold(f64::INFINITY, f64::min);
    let mut y_max = finite
        .iter()
        .map(|&(_, y)| y)
        .fold(f64::NEG_INFINITY, f64::max);
    if !y_min.is_finite() || !y_max.is_finite() {
        y_min = 0.0;
        y_max = 1.0;
    }
    if y_max <= y_min {
        y_max = y_min + 1.0;
    }

    let root =
        BitMapBackend::new(path, (settings.plot_width, settings.plot_height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Logistic Growth Model of a Crop", ("sans-serif", 28))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Time")
        .y_desc("Crop Population")
        .draw()?;

    chart.draw_series(LineSeries::new(finite, &BLUE))?;

    // 描画コンテキストを確定させてバックエンドを解放する
    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_output(name: &str) -> std::path::PathBuf {
        std::env::temp_dir()
            .join(format!("cropsim_render_{}_{}", name, std::process::id()))
            .join("plot.png")
    }

    /// test_render_creates_directory_and_file
    /// 出力ディレクトリが無くても作成され、空でない PNG が書き出されます。
    #[test]
    fn test_render_creates_directory_and_file() {
        let series = TimeSeries {
            t: (0..100).map(|i| i as f64 * 0.5).collect(),
            y: (0..100).map(|i| 10.0 + i as f64).collect(),
        };
        let path = temp_output("basic");

        render_time_series(&series, &path, &SimulationSettings::default()).unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);

        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    /// test_render_overwrites_previous_artifact
    /// 2回目の描画は前回の画像を上書きします。
    #[test]
    fn test_render_overwrites_previous_artifact() {
        let series = TimeSeries {
            t: vec![0.0, 1.0, 2.0],
            y: vec![1.0, 2.0, 3.0],
        };
        let path = temp_output("overwrite");

        render_time_series(&series, &path, &SimulationSettings::default()).unwrap();
        let first = std::fs::metadata(&path).unwrap().modified().unwrap();

        render_time_series(&series, &path, &SimulationSettings::default()).unwrap();
        let second = std::fs::metadata(&path).unwrap().modified().unwrap();

        assert!(second >= first);

        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    /// test_render_tolerates_non_finite_samples
    /// NaN を含む時系列でも描画は失敗せず、有限の点だけが描かれます。
    #[test]
    fn test_render_tolerates_non_finite_samples() {
        let series = TimeSeries {
            t: vec![0.0, 1.0, 2.0, 3.0],
            y: vec![10.0, f64::NAN, f64::INFINITY, 12.0],
        };
        let path = temp_output("nan");

        render_time_series(&series, &path, &SimulationSettings::default()).unwrap();

        assert!(std::fs::metadata(&path).unwrap().len() > 0);

        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    /// test_render_constant_series
    /// 定数曲線（r = 0 の出力）でも軸の範囲が潰れないことを確認します。
    #[test]
    fn test_render_constant_series() {
        let series = TimeSeries {
            t: vec![0.0, 25.0, 50.0],
            y: vec![10.0, 10.0, 10.0],
        };
        let path = temp_output("constant");

        render_time_series(&series, &path, &SimulationSettings::default()).unwrap();

        assert!(std::fs::metadata(&path).unwrap().len() > 0);

        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }
}
