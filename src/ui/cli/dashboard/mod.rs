//! Interactive terminal dashboard: two bounded prompts in place of sliders,
//! then the prediction, probability bars and a short snowfall animation.

mod render;
mod snowfall;

pub use render::{bar, render_prediction};
pub use snowfall::{Snowfall, density_for};

use crate::prediction::{DEFAULT_HUMIDITY, DEFAULT_TEMPERATURE, Predictor};
use crate::ui::cli::drivers::PromptDriver;
use anyhow::{Context, Result};
use std::io::Write;
use std::time::Duration;
use tracing::info;

/// A bounded numeric prompt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slider {
    pub title: &'static str,
    pub help: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

pub const TEMPERATURE_SLIDER: Slider = Slider {
    title: "Temperature (°C)",
    help: "Between -30 and 10",
    min: -30.0,
    max: 10.0,
    default: DEFAULT_TEMPERATURE,
};

pub const HUMIDITY_SLIDER: Slider = Slider {
    title: "Humidity (%)",
    help: "Between 0 and 100",
    min: 0.0,
    max: 100.0,
    default: DEFAULT_HUMIDITY,
};

#[derive(Debug, Clone)]
pub struct AnimationOptions {
    pub frames: usize,
    pub frame_delay: Duration,
    pub width: usize,
    pub height: usize,
    pub seed: u64,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            frames: 24,
            frame_delay: Duration::from_millis(80),
            width: 48,
            height: 8,
            seed: 7,
        }
    }
}

pub struct Dashboard<'a, D: PromptDriver, W: Write> {
    driver: &'a D,
    predictor: &'a Predictor,
    out: W,
    animation: AnimationOptions,
}

impl<'a, D: PromptDriver, W: Write> Dashboard<'a, D, W> {
    pub fn new(driver: &'a D, predictor: &'a Predictor, out: W) -> Self {
        Self {
            driver,
            predictor,
            out,
            animation: AnimationOptions::default(),
        }
    }

    pub fn with_animation(mut self, animation: AnimationOptions) -> Self {
        self.animation = animation;
        self
    }

    /// Runs until the user declines another prediction. Each round starts
    /// from the previous round's values. Returns the number of predictions.
    pub fn run(&mut self) -> Result<usize> {
        writeln!(
            self.out,
            "Snowcast dashboard ({} classifier)",
            self.predictor.classifier_name()
        )?;

        let mut temperature = TEMPERATURE_SLIDER.default;
        let mut humidity = HUMIDITY_SLIDER.default;
        let mut rounds = 0;

        loop {
            temperature = self.ask(&TEMPERATURE_SLIDER, temperature)?;
            humidity = self.ask(&HUMIDITY_SLIDER, humidity)?;

            let prediction = self
                .predictor
                .predict(temperature, humidity)
                .context("prediction failed")?;
            rounds += 1;
            info!(temperature, humidity, label = prediction.label.name(), "dashboard prediction");

            self.out
                .write_all(render_prediction(&prediction).as_bytes())?;
            let seed = self.animation.seed.wrapping_add(rounds as u64);
            self.animate(Snowfall::new(
                prediction.label,
                self.animation.width,
                self.animation.height,
                seed,
            ))?;

            if !self
                .driver
                .ask_bool("Predict again?", "Answer no to quit", true)?
            {
                break;
            }
        }

        writeln!(self.out, "Bye!")?;
        Ok(rounds)
    }

    fn ask(&self, slider: &Slider, default: f64) -> Result<f64> {
        self.driver.ask_f64(
            slider.title,
            slider.help,
            default,
            Some(slider.min),
            Some(slider.max),
        )
    }

    fn animate(&mut self, mut snowfall: Snowfall) -> Result<()> {
        let height = snowfall.height();
        for i in 0..self.animation.frames {
            if i > 0 && height > 0 {
                // redraw in place
                write!(self.out, "\x1b[{height}A")?;
            }
            self.out.write_all(snowfall.next_frame().as_bytes())?;
            self.out.flush()?;
            if !self.animation.frame_delay.is_zero() {
                std::thread::sleep(self.animation.frame_delay);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::HeuristicClassifier;
    use crate::testing::ScriptedDriver;
    use std::sync::Arc;

    fn quick() -> AnimationOptions {
        AnimationOptions {
            frames: 3,
            frame_delay: Duration::ZERO,
            width: 20,
            height: 4,
            seed: 1,
        }
    }

    fn run(driver: &ScriptedDriver) -> (Result<usize>, String) {
        let predictor = Predictor::new(Arc::new(HeuristicClassifier::new()));
        let mut out = Vec::new();
        let result = Dashboard::new(driver, &predictor, &mut out)
            .with_animation(quick())
            .run();
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn single_round_renders_prediction() {
        let driver = ScriptedDriver::new(vec![-5.0, 80.0], vec![false]);
        let (result, out) = run(&driver);
        assert_eq!(result.unwrap(), 1);
        assert!(out.contains("heuristic classifier"));
        assert!(out.contains("Prediction: Heavy Snow"));
        assert!(out.contains(snowfall::FLAKE));
        assert!(out.ends_with("Bye!\n"));
        assert_eq!(
            *driver.asked.borrow(),
            vec!["Temperature (°C)", "Humidity (%)", "Predict again?"]
        );
    }

    #[test]
    fn loops_until_declined() {
        let driver = ScriptedDriver::new(
            vec![-5.0, 80.0, 1.0, 60.0, 5.0, 30.0],
            vec![true, true, false],
        );
        let (result, out) = run(&driver);
        assert_eq!(result.unwrap(), 3);
        let heavy = out.find("Prediction: Heavy Snow").unwrap();
        let light = out.find("Prediction: Light Snow").unwrap();
        let none = out.find("Prediction: No Snow").unwrap();
        assert!(heavy < light && light < none);
    }

    #[test]
    fn clear_prediction_draws_no_flakes() {
        let driver = ScriptedDriver::new(vec![5.0, 30.0], vec![false]);
        let (_, out) = run(&driver);
        let after_bars = out.rsplit("Heavy Snow").next().unwrap();
        assert!(!after_bars.contains(snowfall::FLAKE));
    }

    #[test]
    fn out_of_bounds_answer_aborts() {
        let driver = ScriptedDriver::new(vec![25.0], vec![]);
        let (result, _) = run(&driver);
        assert!(result.is_err());
    }

    #[test]
    fn sliders_cover_training_range() {
        assert!(TEMPERATURE_SLIDER.min <= -20.0 && TEMPERATURE_SLIDER.max >= 10.0);
        assert_eq!((HUMIDITY_SLIDER.min, HUMIDITY_SLIDER.max), (0.0, 100.0));
        assert_eq!(TEMPERATURE_SLIDER.default, 0.0);
        assert_eq!(HUMIDITY_SLIDER.default, 50.0);
    }
}
