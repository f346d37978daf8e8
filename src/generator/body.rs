use tracing::debug;

use super::sampler::ActionTimes;
use crate::command::{Balance, TestCommand, Verb};

pub fn add_sequence(action: &str, times: &[f64], balance: Balance) -> Vec<TestCommand> {
    let verb = balance.add_verb();
    times
        .iter()
        .map(|&time| TestCommand::new(verb, action, time))
        .collect()
}

pub fn read_sequence(action: &str, n: usize) -> Vec<TestCommand> {
    (0..n)
        .map(|_| TestCommand::new(Verb::GetAsync, action, 0.0))
        .collect()
}

/// Zip the sequences and flatten column by column: the i-th item of every
/// sequence, in order, then the (i+1)-th. Stops at the shortest sequence, so
/// trailing items of longer sequences are dropped.
pub fn interleave(sequences: Vec<Vec<TestCommand>>) -> Vec<TestCommand> {
    let columns = sequences.iter().map(Vec::len).min().unwrap_or(0);
    let mut iters: Vec<_> = sequences.into_iter().map(Vec::into_iter).collect();

    let mut out = Vec::with_capacity(columns * iters.len());
    for _ in 0..columns {
        out.extend(iters.iter_mut().filter_map(|it| it.next()));
    }
    out
}

/// Build the body of a test: every add for every action, with reads mixed in
/// according to `balance`.
pub fn build_body(times: &ActionTimes, balance: Balance) -> Vec<TestCommand> {
    let mut sequences = Vec::new();
    for (action, samples) in times {
        sequences.push(add_sequence(action, samples, balance));
        if balance == Balance::Balanced {
            sequences.push(read_sequence(action, samples.len()));
        }
    }

    let mut body = interleave(sequences);

    if balance == Balance::Read {
        let reads = times
            .iter()
            .map(|(action, samples)| read_sequence(action, samples.len()))
            .collect();
        body.extend(interleave(reads));
    }

    debug!(%balance, commands = body.len(), ?body, "built test body");
    body
}
