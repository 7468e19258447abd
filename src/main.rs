// src/main.rs

use std::env;
use std::error::Error;
use std::process;

use auth::store::UserStore;
use config::parameters::SimulationParameters;
use narrative::procedure_narrative;
use render::plot::render_time_series;
use simulation::framework::run_simulation;
use simulation::load_settings::load_settings;

mod auth;
mod config;
mod math;
mod models;
mod narrative;
mod render;
mod simulation;

const SETTINGS_PATH: &str = "config/simulation.yaml";
const USERS_PATH: &str = "users.json";

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("register") if args.len() == 4 => register(&args[2], &args[3]),
        Some("simulate") if args.len() == 7 => {
            simulate(&args[2], &args[3], &args[4], &args[5], &args[6])
        }
        _ => {
            eprintln!("usage: cropsim register <username> <password>");
            eprintln!("       cropsim simulate <username> <password> <r> <K> <y0>");
            process::exit(2);
        }
    }
}

/// 新規ユーザーの登録
fn register(username: &str, password: &str) -> Result<(), Box<dyn Error>> {
    let mut store = UserStore::load(USERS_PATH)?;

    if store.register(username, password)? {
        println!("ユーザー {} を登録しました。", username);
        Ok(())
    } else {
        eprintln!("そのユーザー名は既に使われています。別のユーザー名を選んでください。");
        process::exit(1);
    }
}

/// シミュレーションの実行
///
/// 認証 → 入力検証 → 積分 → 描画 → 解説の順で処理する。
/// 認証か検証に失敗した場合は成果物を作らずに終了する。
fn simulate(
    username: &str,
    password: &str,
    r: &str,
    k: &str,
    y0: &str,
) -> Result<(), Box<dyn Error>> {
    // 認証はシミュレーション実行の前提条件
    let store = UserStore::load(USERS_PATH)?;
    if !store.authenticate(username, password) {
        eprintln!("認証に失敗しました。ユーザー名とパスワードを確認してください。");
        process::exit(1);
    }

    // 3つの数値文字列の検証
    let params = match SimulationParameters::from_strs(r, k, y0) {
        Ok(params) => params,
        Err(e) => {
            eprintln!("r, K, y0 には有効な数値を入力してください: {}", e);
            process::exit(1);
        }
    };

    // 実行設定の読み込み（ファイルが無ければ既定値）
    let settings = load_settings(SETTINGS_PATH)?;

    // シミュレーションの実行とプロットの保存
    let series = run_simulation(&params, &settings)?;
    let plot_path = settings.plot_path();
    render_time_series(&series, &plot_path, &settings)?;

    // 手順解説の出力
    println!(
        "Simulation result for r={}, K={}, y0={}",
        params.r, params.k, params.y0
    );
    for step in procedure_narrative(&params) {
        println!("{}: {}", step.label, step.description);
    }
    println!("プロットを {} に保存しました。", plot_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::SimulationSettings;

    /// test_end_to_end_pipeline
    /// r=0.1, K=100, y0=10 の入力に対して、空でない PNG が所定のパスに
    /// 生成され、解説が8ステップとも値の文字列を含むことを確認します。
    #[test]
    fn test_end_to_end_pipeline() {
        let params = SimulationParameters::from_strs("0.1", "100", "10").unwrap();

        let out_dir = std::env::temp_dir().join(format!("cropsim_e2e_{}", std::process::id()));
        let settings = SimulationSettings {
            output_dir: out_dir.to_string_lossy().into_owned(),
            ..SimulationSettings::default()
        };

        let series = run_simulation(&params, &settings).unwrap();
        let plot_path = settings.plot_path();
        render_time_series(&series, &plot_path, &settings).unwrap();

        assert!(std::fs::metadata(&plot_path).unwrap().len() > 0);

        let steps = procedure_narrative(&params);
        assert_eq!(steps.len(), 8);
        let all_text: String = steps
            .iter()
            .map(|s| s.description.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        assert!(all_text.contains("0.1"));
        assert!(all_text.contains("100"));
        assert!(all_text.contains("10"));

        std::fs::remove_dir_all(&out_dir).ok();
    }
}
