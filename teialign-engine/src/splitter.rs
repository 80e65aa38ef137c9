//! Per-document train/evaluation routing

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::fmt;

/// Output a document is written to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    /// Training data
    Training,
    /// Evaluation data
    Evaluation,
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Training => write!(f, "training"),
            Destination::Evaluation => write!(f, "evaluation"),
        }
    }
}

/// Which destinations are configured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitTargets {
    /// Only a training output
    TrainingOnly,
    /// Only an evaluation output
    EvaluationOnly,
    /// Both outputs
    Both,
}

/// Routes whole documents to a destination.
///
/// With a single destination every document goes there and no random
/// number is drawn. With both, each document costs exactly one draw, so a
/// fixed seed reproduces the same routing for the same corpus order.
#[derive(Debug)]
pub struct Splitter {
    targets: SplitTargets,
    ratio: f64,
    rng: StdRng,
}

impl Splitter {
    /// Create a splitter; `ratio` must be within [0, 1]
    pub fn new(targets: SplitTargets, ratio: f64, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            targets,
            ratio: ratio.clamp(0.0, 1.0),
            rng,
        }
    }

    /// Pick the destination of the next document
    pub fn route(&mut self) -> Destination {
        match self.targets {
            SplitTargets::TrainingOnly => Destination::Training,
            SplitTargets::EvaluationOnly => Destination::Evaluation,
            SplitTargets::Both => {
                if self.rng.gen_bool(self.ratio) {
                    Destination::Training
                } else {
                    Destination::Evaluation
                }
            }
        }
    }
}
