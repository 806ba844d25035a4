use crate::prelude::*;
use getset::*;
use serde::{Deserialize, Serialize};
use std::fmt;

pub trait Stats {
    fn add(&mut self, x: Real);
    fn add_many<I>(&mut self, xs: I)
    where
        I: IntoIterator<Item = Real>,
    {
        for x in xs {
            self.add(x);
        }
    }
    fn size(&self) -> usize;
    fn total(&self) -> Real;
    fn min(&self) -> Real;
    fn max(&self) -> Real;
    fn var(&self) -> Real;
    fn std(&self) -> Real {
        self.var().max(0.0).sqrt()
    }
    fn mean(&self) -> Real {
        self.total() / self.size() as Real
    }
    fn summary(&self) -> Summary {
        Summary {
            size: self.size(),
            mean: self.mean(),
            std: self.std(),
            min: self.min(),
            max: self.max(),
        }
    }
}

/// Running accumulator of first and second moments.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StatsAcc {
    n: usize,
    m1: Real,
    m2: Real,
    min: Real,
    max: Real,
}

impl StatsAcc {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Stats for StatsAcc {
    fn add(&mut self, x: Real) {
        self.n += 1;
        self.m1 += x;
        self.m2 += x * x;
        self.min = Real::min(x, self.min);
        self.max = Real::max(x, self.max);
    }

    fn size(&self) -> usize {
        self.n
    }

    fn total(&self) -> Real {
        self.m1
    }

    fn var(&self) -> Real {
        let m = self.mean();
        self.m2 / self.n as Real - m * m
    }

    fn min(&self) -> Real {
        self.min
    }

    fn max(&self) -> Real {
        self.max
    }
}

impl Default for StatsAcc {
    fn default() -> Self {
        StatsAcc {
            n: 0,
            m1: 0.,
            m2: 0.,
            min: Real::INFINITY,
            max: Real::NEG_INFINITY,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Deserialize, Serialize, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct Summary {
    size: usize,
    mean: Real,
    std: Real,
    min: Real,
    max: Real,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.size == 0 {
            return write!(f, "n=0");
        }
        write!(
            f,
            "n={}, min={}, mean={}, max={}",
            self.size,
            format_probability(self.min),
            format_probability(self.mean),
            format_probability(self.max)
        )
    }
}
