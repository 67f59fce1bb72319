use crate::core::Label;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const FLAKE: char = '*';

/// Share of cells holding a flake in one frame.
pub fn density_for(label: Label) -> f64 {
    match label {
        Label::NoSnow => 0.0,
        Label::LightSnow => 0.08,
        Label::HeavySnow => 0.30,
    }
}

/// Seeded text animation of falling snow. Each frame shifts the previous
/// rows down by one and spawns a new top row.
pub struct Snowfall {
    rng: StdRng,
    width: usize,
    rows: Vec<Vec<bool>>,
    density: f64,
}

impl Snowfall {
    pub fn new(label: Label, width: usize, height: usize, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            width,
            rows: vec![vec![false; width]; height],
            density: density_for(label),
        }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn next_frame(&mut self) -> String {
        if !self.rows.is_empty() {
            self.rows.pop();
            let density = self.density;
            let top = (0..self.width)
                .map(|_| density > 0.0 && self.rng.random_bool(density))
                .collect();
            self.rows.insert(0, top);
        }

        let mut frame = String::with_capacity((self.width + 1) * self.rows.len());
        for row in &self.rows {
            frame.extend(row.iter().map(|&f| if f { FLAKE } else { ' ' }));
            frame.push('\n');
        }
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flakes(frame: &str) -> usize {
        frame.chars().filter(|&c| c == FLAKE).count()
    }

    fn total_flakes(label: Label, frames: usize) -> usize {
        let mut s = Snowfall::new(label, 40, 8, 3);
        (0..frames).map(|_| flakes(&s.next_frame())).sum()
    }

    #[test]
    fn clear_skies_have_no_flakes() {
        assert_eq!(total_flakes(Label::NoSnow, 20), 0);
    }

    #[test]
    fn heavier_snow_is_denser() {
        let light = total_flakes(Label::LightSnow, 20);
        let heavy = total_flakes(Label::HeavySnow, 20);
        assert!(light > 0);
        assert!(heavy > 2 * light, "light={light} heavy={heavy}");
    }

    #[test]
    fn frames_have_fixed_shape_and_are_seeded() {
        let mut a = Snowfall::new(Label::HeavySnow, 12, 5, 9);
        let mut b = Snowfall::new(Label::HeavySnow, 12, 5, 9);
        for _ in 0..6 {
            let fa = a.next_frame();
            assert_eq!(fa.lines().count(), 5);
            assert!(fa.lines().all(|l| l.chars().count() == 12));
            assert_eq!(fa, b.next_frame());
        }
    }

    #[test]
    fn flakes_fall_one_row_per_frame() {
        let mut s = Snowfall::new(Label::HeavySnow, 30, 4, 1);
        let first: Vec<String> = s.next_frame().lines().map(String::from).collect();
        let second: Vec<String> = s.next_frame().lines().map(String::from).collect();
        assert_eq!(first[..3], second[1..]);
    }

    #[test]
    fn zero_height_is_empty() {
        let mut s = Snowfall::new(Label::HeavySnow, 10, 0, 1);
        assert_eq!(s.height(), 0);
        assert!(s.next_frame().is_empty());
    }
}
