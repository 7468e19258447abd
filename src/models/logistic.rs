// src/models/logistic.rs

/// ロジスティック成長モデルの右辺を計算する純粋関数
///
/// dy/dt = r * y * (1 - y / K)
///
/// 個体数 y が環境収容力 K に近づくほど成長率が線形に減衰する。
/// K = 0 のゼロ除算は意図的に保護しない。生じた NaN/inf は
/// そのまま積分結果へ伝播させる。
///
/// # 引数
/// - `_t`: 時刻（右辺は自励系なので未使用）
/// - `y`: 現在の個体数
/// - `r`: 成長率
/// - `k`: 環境収容力
///
/// # 戻り値
/// - dy/dt の値
pub fn logistic_growth(_t: f64, y: f64, r: f64, k: f64) -> f64 {
    r * y * (1.0 - y / k)
}
