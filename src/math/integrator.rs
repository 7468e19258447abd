// src/math/integrator.rs

use crate::math::error::MathError;

/// 適応ステップ Runge-Kutta 4(5) 積分器の設定
///
/// 既定の許容誤差は rtol = 1e-3, atol = 1e-6。
#[derive(Debug, Clone, PartialEq)]
pub struct Rk45Options {
    pub rtol: f64,        // 相対許容誤差
    pub atol: f64,        // 絶対許容誤差
    pub h_min: f64,       // ステップ幅の下限
    pub max_steps: usize, // 受理・棄却を合わせた最大ステップ数
}

impl Default for Rk45Options {
    fn default() -> Self {
        Rk45Options {
            rtol: 1e-3,
            atol: 1e-6,
            h_min: 1e-12,
            max_steps: 100_000,
        }
    }
}

// Dormand-Prince 係数
const A21: f64 = 1.0 / 5.0;
const A31: f64 = 3.0 / 40.0;
const A32: f64 = 9.0 / 40.0;
const A41: f64 = 44.0 / 45.0;
const A42: f64 = -56.0 / 15.0;
const A43: f64 = 32.0 / 9.0;
const A51: f64 = 19372.0 / 6561.0;
const A52: f64 = -25360.0 / 2187.0;
const A53: f64 = 64448.0 / 6561.0;
const A54: f64 = -212.0 / 729.0;
const A61: f64 = 9017.0 / 3168.0;
const A62: f64 = -355.0 / 33.0;
const A63: f64 = 46732.0 / 5247.0;
const A64: f64 = 49.0 / 176.0;
const A65: f64 = -5103.0 / 18656.0;

// 5次解の重み（この解で前進する）
const B1: f64 = 35.0 / 384.0;
const B3: f64 = 500.0 / 1113.0;
const B4: f64 = 125.0 / 192.0;
const B5: f64 = -2187.0 / 6784.0;
const B6: f64 = 11.0 / 84.0;

// 4次解の重み（誤差推定用）
const BH1: f64 = 5179.0 / 57600.0;
const BH3: f64 = 7571.0 / 16695.0;
const BH4: f64 = 393.0 / 640.0;
const BH5: f64 = -92097.0 / 339200.0;
const BH6: f64 = 187.0 / 2100.0;
const BH7: f64 = 1.0 / 40.0;

// 誤差 = 5次解 - 4次解
const E1: f64 = B1 - BH1;
const E3: f64 = B3 - BH3;
const E4: f64 = B4 - BH4;
const E5: f64 = B5 - BH5;
const E6: f64 = B6 - BH6;
const E7: f64 = -BH7;

/// 適応ステップ Dormand-Prince 法 (RK45) によるスカラー初期値問題の積分
///
/// 誤差制御でステップ幅を調整しつつ、値の報告は要求された評価点に限る。
/// ステップ幅は次の評価点を跨がないよう制限するため、戻り値は
/// `t_eval` と同じ長さになる。
///
/// 状態が非有限 (NaN/inf) になった場合はエラーとせず、残りの評価点を
/// NaN で埋めて返す。右辺の数値的な病理はそのまま出力へ伝播させる。
///
/// # 引数
/// - `rhs`: 右辺関数 f(t, y)
/// - `y0`: 初期値 y(t_eval[0])
/// - `t_eval`: 評価点の列（単調増加であること）
/// - `options`: 許容誤差とステップ制限
///
/// # 戻り値
/// - 各評価点での y の値
pub fn rk45<F>(rhs: F, y0: f64, t_eval: &[f64], options: &Rk45Options) -> Result<Vec<f64>, MathError>
where
    F: Fn(f64, f64) -> f64,
{
    if t_eval.is_empty() {
        return Err(MathError::EmptyTimeGrid);
    }
    if t_eval.windows(2).any(|w| w[1] <= w[0]) {
        return Err(MathError::NonMonotonicTimeGrid);
    }

    let mut output = Vec::with_capacity(t_eval.len());
    output.push(y0);

    let mut t = t_eval[0];
    let mut y = y0;
    let span = t_eval[t_eval.len() - 1] - t_eval[0];
    let mut h = (span * 1e-3).max(options.h_min);
    let mut steps = 0usize;

    // FSAL: 受理したステップの k7 が次のステップの k1 になる
    let mut k1 = rhs(t, y);

    for &t_target in &t_eval[1..] {
        while t < t_target {
            // 非有限になった状態はそれ以上積分できないため、そのまま伝播させる
            if !y.is_finite() || !k1.is_finite() {
                y = f64::NAN;
                break;
            }

            steps += 1;
            if steps > options.max_steps {
                return Err(MathError::MaxStepsExceeded {
                    max_steps: options.max_steps,
                    t,
                });
            }

            let h_step = h.min(t_target - t).max(options.h_min);

            let k2 = rhs(t + h_step * A21, y + h_step * A21 * k1);
            let k3 = rhs(t + h_step * 3.0 / 10.0, y + h_step * (A31 * k1 + A32 * k2));
            let k4 = rhs(t + h_step * 4.0 / 5.0, y + h_step * (A41 * k1 + A42 * k2 + A43 * k3));
            let k5 = rhs(
                t + h_step * 8.0 / 9.0,
                y + h_step * (A51 * k1 + A52 * k2 + A53 * k3 + A54 * k4),
            );
            let k6 = rhs(
                t + h_step,
                y + h_step * (A61 * k1 + A62 * k2 + A63 * k3 + A64 * k4 + A65 * k5),
            );

            let y_new = y + h_step * (B1 * k1 + B3 * k3 + B4 * k4 + B5 * k5 + B6 * k6);
            let k7 = rhs(t + h_step, y_new);

            // スケール付き誤差推定
            let err = h_step * (E1 * k1 + E3 * k3 + E4 * k4 + E5 * k5 + E6 * k6 + E7 * k7);
            let scale = options.atol + options.rtol * y.abs().max(y_new.abs());
            let err_norm = (err / scale).abs();

            if !err_norm.is_finite() {
                // 誤差推定が破綻している（右辺が NaN/inf を返している）。
                // 誤差制御は続行できないので、状態を NaN として伝播させる。
                y = f64::NAN;
                break;
            }

            if err_norm <= 1.0 {
                // ステップを受理
                t += h_step;
                y = y_new;
                k1 = k7;
            }

            // ステップ幅の更新（安全係数 0.9、拡大・縮小は [0.2, 5.0] に制限）
            let factor = if err_norm == 0.0 {
                5.0
            } else {
                (0.9 * err_norm.powf(-0.2)).clamp(0.2, 5.0)
            };
            h = (h_step * factor).max(options.h_min);
        }

        if !y.is_finite() {
            // 以降の評価点はすべて NaN
            output.push(f64::NAN);
        } else {
            output.push(y);
        }
    }

    Ok(output)
}
