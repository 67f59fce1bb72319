use crate::core::Label;
use crate::prediction::Prediction;
use strum::IntoEnumIterator;

pub const BAR_WIDTH: usize = 30;

fn headline(label: Label) -> &'static str {
    match label {
        Label::NoSnow => "Clear skies, no snow expected.",
        Label::LightSnow => "Light snow is likely.",
        Label::HeavySnow => "Heavy snow! Bundle up.",
    }
}

/// Horizontal bar of `BAR_WIDTH` cells; `p` is clamped to [0, 1].
pub fn bar(p: f64) -> String {
    let filled = (p.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

pub fn render_prediction(prediction: &Prediction) -> String {
    let mut out = format!(
        "\nPrediction: {} ({:+.1} °C, {:.0}% humidity)\n{}\n\n",
        prediction.label,
        prediction.input.temperature,
        prediction.input.humidity,
        headline(prediction.label),
    );
    for label in Label::iter() {
        let p = prediction.probabilities.probability(label);
        let marker = if label == prediction.label { '>' } else { ' ' };
        out.push_str(&format!(
            "{marker} {:<11} {} {:5.1}%\n",
            label.name(),
            bar(p),
            p * 100.0
        ));
    }
    out
}
