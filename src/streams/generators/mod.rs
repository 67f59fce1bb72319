mod snowfall;

pub use snowfall::{SnowRule, SnowfallGenerator};
