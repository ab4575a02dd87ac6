use crate::rings::RingSet;
use crate::{Error, Result};

/// Ring counts per ring size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingHistogram {
    counts: Vec<usize>,
}
impl RingHistogram {
    pub fn new(max_size: usize) -> Self {
        Self {
            counts: vec![0; max_size],
        }
    }
    pub fn from_rings(set: &RingSet, max_size: usize) -> Self {
        let mut hist = Self::new(max_size);
        for (_, ring) in set.iter() {
            hist.add(ring.len());
        }
        hist
    }
    pub fn add(&mut self, size: usize) {
        if size >= self.counts.len() {
            self.counts.resize(size + 1, 0);
        }
        self.counts[size] += 1;
    }
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }
    pub fn count(&self, size: usize) -> usize {
        self.counts.get(size).copied().unwrap_or(0)
    }
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
    /// Sum of size times count.
    pub fn weighted_sum(&self) -> usize {
        self.counts.iter().enumerate().map(|(s, c)| s * c).sum()
    }
    pub fn mean(&self) -> Result<f64> {
        match self.total() {
            0 => Err(Error::Statistics("mean ring size over zero rings")),
            total => Ok(self.weighted_sum() as f64 / total as f64),
        }
    }
    /// Population variance of the ring size, μ2.
    pub fn second_moment(&self) -> Result<f64> {
        let total = self.total();
        if total == 0 {
            return Err(Error::Statistics("second moment over zero rings"));
        }
        let mean = self.mean()?;
        let total = total as f64;
        Ok(self
            .counts
            .iter()
            .enumerate()
            .map(|(s, &c)| {
                let d = s as f64 - mean;
                d * d * (c as f64 / total)
            })
            .sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_size_has_no_spread() {
        let mut h = RingHistogram::new(12);
        for _ in 0..5 {
            h.add(6);
        }
        assert_eq!(h.total(), 5);
        assert_eq!(h.mean().unwrap(), 6.0);
        assert_eq!(h.second_moment().unwrap(), 0.0);
    }

    #[test]
    fn mixed_sizes() {
        let mut h = RingHistogram::new(12);
        h.add(5);
        h.add(7);
        h.add(6);
        h.add(6);
        assert_eq!(h.weighted_sum(), 24);
        assert_eq!(h.mean().unwrap(), 6.0);
        assert!((h.second_moment().unwrap() - 0.5).abs() < 1e-12);
        assert_eq!(h.counts().len(), 12);
    }

    #[test]
    fn empty_histogram_is_an_error() {
        let h = RingHistogram::new(12);
        assert!(matches!(h.second_moment(), Err(Error::Statistics(_))));
        assert!(matches!(h.mean(), Err(Error::Statistics(_))));
    }
}
