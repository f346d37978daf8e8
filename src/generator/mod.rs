pub mod body;
pub mod sampler;
pub mod summary;

pub use body::{add_sequence, build_body, interleave, read_sequence};
pub use sampler::{averages, mean, sample_action_times, ActionTimes, Averages};
pub use summary::build_summary;

use rand::Rng;
use tracing::debug;

use crate::command::{Balance, TestCommand};
use crate::error::{GenError, Result, MIN_TIME};

pub const DEFAULT_ADDS: usize = 1;
pub const DEFAULT_MAX_TIME: f64 = 1e6;

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub actions: Vec<String>,
    pub adds_per_action: usize,
    pub max_time: f64,
    pub balance: Balance,
}

impl GenerateOptions {
    pub fn new(actions: Vec<String>) -> Self {
        Self {
            actions,
            adds_per_action: DEFAULT_ADDS,
            max_time: DEFAULT_MAX_TIME,
            balance: Balance::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.actions.is_empty() {
            return Err(GenError::NoActions);
        }
        if self.actions.iter().any(|a| a.is_empty()) {
            return Err(GenError::EmptyActionName);
        }
        if self.adds_per_action == 0 {
            return Err(GenError::InvalidSampleCount(self.adds_per_action));
        }
        if !self.max_time.is_finite() || self.max_time <= MIN_TIME {
            return Err(GenError::InvalidMaxTime(self.max_time));
        }
        Ok(())
    }
}

/// Everything produced by one generation run.
#[derive(Debug, Clone)]
pub struct GeneratedTest {
    pub times: ActionTimes,
    pub averages: Averages,
    pub body_len: usize,
    pub commands: Vec<TestCommand>,
}

impl GeneratedTest {
    pub fn body(&self) -> &[TestCommand] {
        &self.commands[..self.body_len]
    }

    pub fn summary(&self) -> &[TestCommand] {
        &self.commands[self.body_len..]
    }
}

/// Sample times and lay out the full command list: body followed by summary.
pub fn generate<R: Rng + ?Sized>(
    options: &GenerateOptions,
    rng: &mut R,
) -> Result<GeneratedTest> {
    options.validate()?;
    debug!(?options, "generating test");

    let times = sample_action_times(
        &options.actions,
        options.adds_per_action,
        options.max_time,
        rng,
    )?;
    let averages = averages(&times);

    let mut commands = build_body(&times, options.balance);
    let body_len = commands.len();
    commands.extend(build_summary(&averages));

    Ok(GeneratedTest {
        times,
        averages,
        body_len,
        commands,
    })
}
