use indexmap::IndexMap;
use rand::Rng;
use tracing::debug;

use crate::error::{GenError, Result, MIN_TIME};

/// Sampled durations per action, in command-line order.
pub type ActionTimes = IndexMap<String, Vec<f64>>;

/// Expected average per action, in command-line order.
pub type Averages = IndexMap<String, f64>;

/// Draw `count` durations for each action, uniform over `[MIN_TIME, max_time)`.
///
/// A repeated action keeps its first position and the samples of its last
/// occurrence.
pub fn sample_action_times<R: Rng + ?Sized>(
    actions: &[String],
    count: usize,
    max_time: f64,
    rng: &mut R,
) -> Result<ActionTimes> {
    if !max_time.is_finite() || max_time <= MIN_TIME {
        return Err(GenError::InvalidMaxTime(max_time));
    }

    let mut times = ActionTimes::with_capacity(actions.len());
    for action in actions {
        let samples = (0..count)
            .map(|_| rng.gen_range(MIN_TIME..max_time))
            .collect();
        times.insert(action.clone(), samples);
    }

    debug!(?times, "sampled action times");
    Ok(times)
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Arithmetic mean of every action's samples. Actions without samples have no
/// average and are left out.
pub fn averages(times: &ActionTimes) -> Averages {
    times
        .iter()
        .filter_map(|(action, samples)| mean(samples).map(|avg| (action.clone(), avg)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn actions(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_sample_count_per_action() {
        let mut rng = StdRng::seed_from_u64(7);
        let times = sample_action_times(&actions(&["jump", "run"]), 5, 10.0, &mut rng).unwrap();

        assert_eq!(times.len(), 2);
        assert_eq!(times["jump"].len(), 5);
        assert_eq!(times["run"].len(), 5);
    }

    #[test]
    fn test_samples_within_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let times = sample_action_times(&actions(&["a"]), 1000, 2.0, &mut rng).unwrap();

        for t in &times["a"] {
            assert!(*t >= MIN_TIME && *t < 2.0, "sample {} out of range", t);
        }
    }

    #[test]
    fn test_preserves_action_order() {
        let mut rng = StdRng::seed_from_u64(1);
        let times = sample_action_times(&actions(&["z", "a", "m"]), 1, 5.0, &mut rng).unwrap();

        let keys: Vec<&str> = times.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_repeated_action_keeps_first_position() {
        let mut rng = StdRng::seed_from_u64(3);
        let times =
            sample_action_times(&actions(&["a", "b", "a"]), 2, 5.0, &mut rng).unwrap();

        let keys: Vec<&str> = times.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(times["a"].len(), 2);
    }

    #[test]
    fn test_same_seed_same_samples() {
        let names = actions(&["jump"]);
        let first =
            sample_action_times(&names, 3, 100.0, &mut StdRng::seed_from_u64(9)).unwrap();
        let second =
            sample_action_times(&names, 3, 100.0, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rejects_degenerate_max_time() {
        let mut rng = StdRng::seed_from_u64(0);
        for bad in [0.0, -1.0, MIN_TIME, f64::NAN, f64::INFINITY] {
            let result = sample_action_times(&actions(&["a"]), 1, bad, &mut rng);
            assert!(
                matches!(result, Err(GenError::InvalidMaxTime(_))),
                "max time {} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[4.0]), Some(4.0));
        assert_eq!(mean(&[1.0, 2.0, 3.0, 6.0]), Some(3.0));
    }

    #[test]
    fn test_averages_skip_empty_actions() {
        let mut times = ActionTimes::new();
        times.insert("a".to_string(), vec![1.0, 3.0]);
        times.insert("b".to_string(), vec![]);
        times.insert("c".to_string(), vec![10.0]);

        let avgs = averages(&times);
        assert_eq!(avgs.len(), 2);
        assert_eq!(avgs["a"], 2.0);
        assert_eq!(avgs["c"], 10.0);
        assert!(!avgs.contains_key("b"));
    }
}
