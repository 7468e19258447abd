// src/simulation/load_settings.rs

use std::error::Error;
use std::fs::File;
use std::path::Path;
use serde_yaml::from_reader;

use crate::config::settings::SimulationSettings;

/// シミュレーション設定の読み込み
///
/// 設定ファイルが存在しない場合は既定値を返す。存在するのに
/// 読み込めない場合（書式誤りなど）はエラーとする。
pub fn load_settings(path: &str) -> Result<SimulationSettings, Box<dyn Error>> {
    if !Path::new(path).exists() {
        return Ok(SimulationSettings::default());
    }
    let file = File::open(path)?;
    let settings: SimulationSettings = from_reader(file)?;
    Ok(settings)
}
