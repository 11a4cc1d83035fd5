//! Timed schedule produced by evaluating a sequence.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One job's placement in a schedule.
///
/// Invariant (maintained by the evaluator): `finish = start + processing`,
/// `start >= release`, `finish <= deadline`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScheduledJob {
    /// Job id.
    pub job: usize,
    /// Instant processing starts.
    pub start: f64,
    /// Instant processing finishes.
    pub finish: f64,
}

/// A feasible timed schedule: one entry per job, in sequence order.
///
/// Derived deterministically from a sequence by the evaluator; never
/// constructed for an infeasible sequence.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Schedule {
    /// Entries in sequence order.
    pub entries: Vec<ScheduledJob>,
}

impl Schedule {
    /// Completion time of the last job, 0 for an empty schedule.
    pub fn makespan(&self) -> f64 {
        self.entries.last().map_or(0.0, |entry| entry.finish)
    }

    /// Number of scheduled jobs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the schedule has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_makespan_is_last_finish() {
        let schedule = Schedule {
            entries: vec![
                ScheduledJob {
                    job: 0,
                    start: 0.0,
                    finish: 2.0,
                },
                ScheduledJob {
                    job: 1,
                    start: 3.0,
                    finish: 6.0,
                },
            ],
        };
        assert_eq!(schedule.makespan(), 6.0);
        assert_eq!(schedule.len(), 2);
    }

    #[test]
    fn test_empty_schedule() {
        let schedule = Schedule::default();
        assert!(schedule.is_empty());
        assert_eq!(schedule.makespan(), 0.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_schedule_serde_round_trip() {
        let schedule = Schedule {
            entries: vec![ScheduledJob {
                job: 3,
                start: 1.5,
                finish: 4.0,
            }],
        };
        let json = serde_json::to_string(&schedule).unwrap();
        let back: Schedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, schedule);
    }
}
