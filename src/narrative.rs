// src/narrative.rs

use crate::config::parameters::SimulationParameters;

/// 手順解説の1ステップ
#[derive(Debug, Clone, PartialEq)]
pub struct ProcedureStep {
    pub label: String,       // "Procedure 1" .. "Procedure 8"
    pub description: String, // パラメータを埋め込んだ説明文
}

/// モデルの固定8ステップ解説の生成
///
/// ラベルと順序は提示層との互換のため固定。説明文には r, K, y0 の値を
/// そのまま埋め込む。文字列整形だけの純粋関数であり、計算は行わない。
///
/// # 引数
/// - `params`: モデルパラメータ (r, K, y0)
///
/// # 戻り値
/// - 順序付きの8ステップ
pub fn procedure_narrative(params: &SimulationParameters) -> Vec<ProcedureStep> {
    let r = params.r;
    let k = params.k;
    let y0 = params.y0;

    let descriptions = [
        "Describes the differential equation for the logistic growth model:".to_string(),
        format!(
            "The differential equation used is dy/dt = {} * y * (1 - y / {}), \
             which models the logistic growth of a crop as a function of time t.",
            r, k
        ),
        "Substitutes the parameters r, K and y0 into the equation:".to_string(),
        format!(
            "r represents the growth rate ({}), K is the carrying capacity of the \
             environment ({}) for the crop population, and y0 is the initial \
             population ({}) at time t=0.",
            r, k, y0
        ),
        "Performs the calculations to solve the differential equation numerically:"
            .to_string(),
        "The differential equation is solved with an adaptive Runge-Kutta 4(5) \
         integrator. The time span and the initial value are specified, and the \
         solution is evaluated at several points within the span."
            .to_string(),
        "Details how the plot is generated and saved:".to_string(),
        "The solution is visualized as a chart of the crop population as a \
         function of time and saved as a static image (plot.png) in the static \
         folder."
            .to_string(),
    ];

    descriptions
        .into_iter()
        .enumerate()
        .map(|(i, description)| ProcedureStep {
            label: format!("Procedure {}", i + 1),
            description,
        })
        .collect()
}
