mod rule;
mod snowfall_generator;

pub use rule::SnowRule;
pub use snowfall_generator::SnowfallGenerator;
