use tracing::debug;

use super::sampler::Averages;
use crate::command::{TestCommand, Verb};

/// A `sync` barrier followed by one `get` assertion per action.
pub fn build_summary(averages: &Averages) -> Vec<TestCommand> {
    let mut summary = Vec::with_capacity(averages.len() + 1);
    summary.push(TestCommand::sync());
    summary.extend(
        averages
            .iter()
            .map(|(action, &avg)| TestCommand::new(Verb::Get, action.as_str(), avg)),
    );

    debug!(?summary, "built test summary");
    summary
}
