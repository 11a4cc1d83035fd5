//! Jobs and the sequencing instance.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A job to be sequenced on the single machine.
///
/// Immutable after construction. `id` equals the job's index in its
/// [`Instance`], so sequences can be plain `Vec<usize>` permutations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Job {
    /// Job identifier, equal to its index in the instance.
    pub id: usize,
    /// Processing time on the machine.
    pub processing: f64,
    /// Release date: earliest instant processing may start.
    pub release: f64,
    /// Deadline: latest instant processing may finish. A violation
    /// makes the whole sequence infeasible.
    pub deadline: f64,
}

impl Job {
    /// Creates a new job.
    pub fn new(id: usize, processing: f64, release: f64, deadline: f64) -> Self {
        Self {
            id,
            processing,
            release,
            deadline,
        }
    }
}

/// A single-machine sequencing instance: the job set plus the
/// sequence-dependent setup matrix.
///
/// `setup(i, j)` is the reconfiguration time when job `j` directly
/// follows job `i`; the matrix is asymmetric and its diagonal is unused
/// (a job never follows itself in a permutation).
///
/// # Examples
///
/// ```
/// use u_seqopt::model::{Instance, Job};
///
/// let jobs = vec![Job::new(0, 2.0, 0.0, 10.0), Job::new(1, 3.0, 0.0, 10.0)];
/// let setup = vec![vec![0.0, 1.0], vec![4.0, 0.0]];
/// let instance = Instance::new(jobs, setup).unwrap();
/// assert_eq!(instance.len(), 2);
/// assert_eq!(instance.setup(1, 0), 4.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Instance {
    jobs: Vec<Job>,
    setup: Vec<Vec<f64>>,
}

impl Instance {
    /// Creates a validated instance.
    ///
    /// Validation rejects an empty job set, ids that do not match their
    /// index, negative or non-finite times, and a setup matrix that is
    /// not square `n×n` with non-negative finite entries.
    pub fn new(jobs: Vec<Job>, setup: Vec<Vec<f64>>) -> Result<Self, String> {
        let n = jobs.len();
        if n == 0 {
            return Err("instance must contain at least one job".into());
        }
        for (index, job) in jobs.iter().enumerate() {
            if job.id != index {
                return Err(format!("job id {} does not match its index {index}", job.id));
            }
            if !job.processing.is_finite() || job.processing < 0.0 {
                return Err(format!(
                    "job {} processing time must be non-negative and finite, got {}",
                    job.id, job.processing
                ));
            }
            if !job.release.is_finite() || job.release < 0.0 {
                return Err(format!(
                    "job {} release date must be non-negative and finite, got {}",
                    job.id, job.release
                ));
            }
            if !job.deadline.is_finite() {
                return Err(format!(
                    "job {} deadline must be finite, got {}",
                    job.id, job.deadline
                ));
            }
        }
        if setup.len() != n {
            return Err(format!(
                "setup matrix must have {n} rows, got {}",
                setup.len()
            ));
        }
        for (i, row) in setup.iter().enumerate() {
            if row.len() != n {
                return Err(format!(
                    "setup matrix row {i} must have {n} columns, got {}",
                    row.len()
                ));
            }
            for (j, &value) in row.iter().enumerate() {
                if !value.is_finite() || value < 0.0 {
                    return Err(format!(
                        "setup[{i}][{j}] must be non-negative and finite, got {value}"
                    ));
                }
            }
        }
        Ok(Self { jobs, setup })
    }

    /// Creates an instance from parallel per-job arrays, the form most
    /// benchmark data comes in.
    pub fn from_arrays(
        processing: &[f64],
        release: &[f64],
        deadline: &[f64],
        setup: Vec<Vec<f64>>,
    ) -> Result<Self, String> {
        let n = processing.len();
        if release.len() != n || deadline.len() != n {
            return Err(format!(
                "per-job arrays must have equal lengths, got processing={n}, release={}, deadline={}",
                release.len(),
                deadline.len()
            ));
        }
        let jobs = (0..n)
            .map(|id| Job::new(id, processing[id], release[id], deadline[id]))
            .collect();
        Self::new(jobs, setup)
    }

    /// Number of jobs.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Whether the instance has no jobs (never true for a validated instance).
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// All jobs, in id order.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// The job with the given id.
    pub fn job(&self, id: usize) -> &Job {
        &self.jobs[id]
    }

    /// Processing time of job `id`.
    pub fn processing(&self, id: usize) -> f64 {
        self.jobs[id].processing
    }

    /// Release date of job `id`.
    pub fn release(&self, id: usize) -> f64 {
        self.jobs[id].release
    }

    /// Deadline of job `id`.
    pub fn deadline(&self, id: usize) -> f64 {
        self.jobs[id].deadline
    }

    /// Setup time when job `to` directly follows job `from`.
    pub fn setup(&self, from: usize, to: usize) -> f64 {
        self.setup[from][to]
    }
}

/// The 10-job reference instance used by the tests and benchmarks.
///
/// Asymmetric setup times, staggered release dates, and tight deadlines
/// (job 8 must finish by 100, job 6 by 110), so arbitrary permutations
/// are often infeasible while feasible ones exist.
pub fn reference_instance() -> Instance {
    let processing = [12.0, 15.0, 10.0, 18.0, 14.0, 11.0, 19.0, 20.0, 14.0, 10.0];
    let release = [15.0, 50.0, 60.0, 40.0, 10.0, 20.0, 80.0, 0.0, 30.0, 20.0];
    let deadline = [
        200.0, 150.0, 170.0, 180.0, 195.0, 300.0, 110.0, 250.0, 100.0, 220.0,
    ];
    let setup = vec![
        vec![0.0, 7.0, 2.0, 9.0, 5.0, 1.0, 8.0, 6.0, 3.0, 10.0],
        vec![4.0, 0.0, 6.0, 2.0, 8.0, 9.0, 1.0, 5.0, 7.0, 3.0],
        vec![9.0, 3.0, 0.0, 7.0, 1.0, 4.0, 6.0, 10.0, 2.0, 8.0],
        vec![5.0, 8.0, 1.0, 0.0, 6.0, 2.0, 9.0, 3.0, 10.0, 4.0],
        vec![7.0, 2.0, 10.0, 4.0, 0.0, 8.0, 3.0, 1.0, 6.0, 9.0],
        vec![1.0, 6.0, 5.0, 8.0, 3.0, 0.0, 2.0, 9.0, 4.0, 7.0],
        vec![8.0, 9.0, 3.0, 1.0, 7.0, 5.0, 0.0, 4.0, 2.0, 6.0],
        vec![2.0, 1.0, 8.0, 6.0, 9.0, 3.0, 4.0, 0.0, 5.0, 7.0],
        vec![6.0, 5.0, 4.0, 3.0, 2.0, 10.0, 7.0, 8.0, 0.0, 1.0],
        vec![3.0, 4.0, 7.0, 10.0, 8.0, 6.0, 5.0, 2.0, 9.0, 0.0],
    ];
    Instance::from_arrays(&processing, &release, &deadline, setup)
        .expect("reference instance is valid")
}
