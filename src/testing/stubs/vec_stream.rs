use crate::core::LabeledSample;
use crate::streams::Stream;
use std::io::Error;

pub struct VecStream {
    samples: Vec<LabeledSample>,
    idx: usize,
}

impl VecStream {
    pub fn new(samples: Vec<LabeledSample>) -> Self {
        Self { samples, idx: 0 }
    }
}

impl Stream for VecStream {
    fn has_more_samples(&self) -> bool {
        self.idx < self.samples.len()
    }

    fn next_sample(&mut self) -> Option<LabeledSample> {
        let s = self.samples.get(self.idx).copied()?;
        self.idx += 1;
        Some(s)
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.idx = 0;
        Ok(())
    }
}
