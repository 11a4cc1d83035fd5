//! Schedule sinks and the feasibility dispatcher.

use crate::eval::Evaluation;
use crate::model::Schedule;
use std::io;

/// Consumer of a finished run.
///
/// Implementors receive either the final schedule with its makespan or
/// an infeasibility notice, never both. Methods return `io::Result`
/// because sinks typically write somewhere.
pub trait ScheduleSink {
    /// Called with the final feasible schedule and its makespan.
    fn feasible(&mut self, schedule: &Schedule, makespan: f64) -> io::Result<()>;

    /// Called when the run found no feasible schedule.
    fn infeasible(&mut self) -> io::Result<()>;
}

/// Hands a final evaluation to the sink.
///
/// An infinite makespan or absent schedule is reported as infeasible;
/// no schedule data crosses the boundary in that case.
pub fn report<S: ScheduleSink>(evaluation: &Evaluation, sink: &mut S) -> io::Result<()> {
    match &evaluation.schedule {
        Some(schedule) if evaluation.makespan.is_finite() => {
            sink.feasible(schedule, evaluation.makespan)
        }
        _ => sink.infeasible(),
    }
}

/// Plain-text sink: sequence, makespan, and one start/finish line per
/// job, written to any `io::Write`.
pub struct TextSink<W: io::Write> {
    out: W,
}

impl<W: io::Write> TextSink<W> {
    /// Creates a sink writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the sink and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: io::Write> ScheduleSink for TextSink<W> {
    fn feasible(&mut self, schedule: &Schedule, makespan: f64) -> io::Result<()> {
        let sequence: Vec<usize> = schedule.entries.iter().map(|e| e.job).collect();
        writeln!(self.out, "Best sequence: {sequence:?}")?;
        writeln!(self.out, "Cmax = {makespan}")?;
        writeln!(self.out)?;
        writeln!(self.out, "Detailed schedule:")?;
        for entry in &schedule.entries {
            writeln!(
                self.out,
                "Job {}: start={}, finish={}",
                entry.job, entry.start, entry.finish
            )?;
        }
        Ok(())
    }

    fn infeasible(&mut self) -> io::Result<()> {
        writeln!(self.out, "Unfeasible Solution")
    }
}
