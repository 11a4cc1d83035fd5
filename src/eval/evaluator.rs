//! Sequence evaluation: simulation walk and makespan cost.

use crate::model::{Instance, Schedule, ScheduledJob};

/// Result of evaluating one sequence.
///
/// Infeasibility is a value, not an error: a deadline violation yields
/// `makespan = f64::INFINITY` and an absent schedule. Since any finite
/// cost compares below the sentinel, infeasible candidates can never
/// displace a feasible incumbent during search.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Completion time of the last job, or `f64::INFINITY` when some
    /// deadline is violated.
    pub makespan: f64,
    /// The timed schedule, absent when infeasible.
    pub schedule: Option<Schedule>,
}

impl Evaluation {
    /// Whether the evaluated sequence respects every deadline.
    pub fn is_feasible(&self) -> bool {
        self.makespan.is_finite() && self.schedule.is_some()
    }
}

/// Simulates `sequence` on the machine and returns its cost.
///
/// Walks the sequence once, tracking the instant the machine becomes
/// free: each job waits for the setup from its predecessor and for its
/// own release date, then runs to completion. The walk aborts on the
/// first job that cannot finish by its deadline.
///
/// The caller guarantees `sequence` is a permutation of all job ids of
/// `instance`; the neighborhood operators preserve this by construction.
/// Deterministic and side-effect free: equal inputs give equal results.
///
/// # Examples
///
/// ```
/// use u_seqopt::eval::evaluate;
/// use u_seqopt::model::Instance;
///
/// let instance = Instance::from_arrays(
///     &[2.0, 3.0],
///     &[0.0, 0.0],
///     &[10.0, 10.0],
///     vec![vec![0.0, 1.0], vec![0.0, 0.0]],
/// )
/// .unwrap();
///
/// let result = evaluate(&instance, &[0, 1]);
/// assert_eq!(result.makespan, 6.0); // 2 processing + 1 setup + 3 processing
/// ```
pub fn evaluate(instance: &Instance, sequence: &[usize]) -> Evaluation {
    let mut time = 0.0;
    let mut prev: Option<usize> = None;
    let mut entries = Vec::with_capacity(sequence.len());

    for &job in sequence {
        if let Some(prev) = prev {
            time += instance.setup(prev, job);
        }

        let start = time.max(instance.release(job));
        let finish = start + instance.processing(job);

        if finish > instance.deadline(job) {
            return Evaluation {
                makespan: f64::INFINITY,
                schedule: None,
            };
        }

        entries.push(ScheduledJob { job, start, finish });
        time = finish;
        prev = Some(job);
    }

    Evaluation {
        makespan: time,
        schedule: Some(Schedule { entries }),
    }
}
