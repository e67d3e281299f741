pub mod batch;
pub mod interrupt;
pub mod outcome;
pub mod planner;
pub mod runner;

pub use batch::BatchExecutor;
pub use interrupt::InterruptSignal;
pub use outcome::{Outcome, ResultSet, RunReport, SkipReason};
pub use planner::{ExecutionMode, ExecutionPlan};
pub use runner::{CapturedOutput, ShellRunner, SystemShell};
