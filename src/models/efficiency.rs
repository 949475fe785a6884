//! Fault-rate efficiency levels

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Efficiency {
    Excellent,
    Good,
    Regular,
}

impl Efficiency {
    pub fn label(&self) -> &'static str {
        match self {
            Efficiency::Excellent => "EXCELLENT",
            Efficiency::Good => "GOOD",
            Efficiency::Regular => "REGULAR",
        }
    }

    pub fn indicator(&self) -> &'static str {
        match self {
            Efficiency::Excellent => "🟢",
            Efficiency::Good => "🟡",
            Efficiency::Regular => "🔴",
        }
    }
}

impl fmt::Display for Efficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.indicator(), self.label())
    }
}
