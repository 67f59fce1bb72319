use crate::core::{Label, Sample};

/// Threshold rule used to label synthetic samples.
///
/// Heavy snow wins over light snow; everything else is no snow.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnowRule {
    pub heavy_max_temperature: f64,
    pub heavy_min_humidity: f64,
    pub light_max_temperature: f64,
    pub light_min_humidity: f64,
}

impl SnowRule {
    pub const STANDARD: SnowRule = SnowRule {
        heavy_max_temperature: 0.0,
        heavy_min_humidity: 70.0,
        light_max_temperature: 2.0,
        light_min_humidity: 50.0,
    };

    #[inline]
    pub fn classify(&self, sample: &Sample) -> Label {
        let (t, h) = (sample.temperature, sample.humidity);
        if t <= self.heavy_max_temperature && h > self.heavy_min_humidity {
            Label::HeavySnow
        } else if t <= self.light_max_temperature && h > self.light_min_humidity {
            Label::LightSnow
        } else {
            Label::NoSnow
        }
    }
}

impl Default for SnowRule {
    fn default() -> Self {
        Self::STANDARD
    }
}
