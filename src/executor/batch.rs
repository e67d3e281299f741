use crate::error::{Result, RunAllError};
use crate::executor::interrupt::InterruptSignal;
use crate::executor::outcome::{Outcome, RunReport, SkipReason};
use crate::executor::planner::{ExecutionMode, ExecutionPlan};
use crate::executor::runner::{ShellRunner, SystemShell};
use crate::ui::Reporter;
use futures::future::join_all;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;
use tokio::sync::Semaphore;

/// 병렬 실행 중 하나의 잠금으로 보호되는 상태 (결과 집합 + 출력)
struct SharedState<'a> {
    report: RunReport,
    reporter: &'a mut Reporter,
}

fn lock<'a, T>(mutex: &'a Mutex<T>) -> MutexGuard<'a, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn outcome_of(result: Result<()>) -> Outcome {
    match result {
        Ok(()) => Outcome::Success,
        Err(RunAllError::Command(detail)) => Outcome::Failure(detail),
        Err(e) => Outcome::Failure(e.to_string()),
    }
}

/// 배치 실행기
///
/// 디렉토리 목록에 같은 명령어를 순차 또는 병렬로 실행하고
/// 디렉토리별 결과를 모읍니다.
pub struct BatchExecutor {
    runner: Arc<dyn ShellRunner>,
}

impl BatchExecutor {
    pub fn new(runner: Arc<dyn ShellRunner>) -> Self {
        Self { runner }
    }

    pub fn with_shell(shell: &str) -> Self {
        Self::new(Arc::new(SystemShell::new(shell)))
    }

    /// 실행 계획에 따라 배치 실행
    pub async fn execute(
        &self,
        plan: &ExecutionPlan,
        interrupt: &InterruptSignal,
        reporter: &mut Reporter,
    ) -> RunReport {
        let start_time = Instant::now();

        let mut report = match plan.mode {
            ExecutionMode::Sequential => self.execute_sequential(plan, interrupt, reporter).await,
            ExecutionMode::Parallel => self.execute_parallel(plan, interrupt, reporter).await,
        };

        report.elapsed = start_time.elapsed();
        report
    }

    /// 순차 실행
    ///
    /// 디렉토리마다 시작 전에 중단 신호를 확인하고, 실패 시
    /// `continue_on_failure` 가 아니면 나머지를 건너뜁니다.
    async fn execute_sequential(
        &self,
        plan: &ExecutionPlan,
        interrupt: &InterruptSignal,
        reporter: &mut Reporter,
    ) -> RunReport {
        let mut report = RunReport::default();

        for (idx, dir) in plan.directories.iter().enumerate() {
            if interrupt.is_triggered() {
                reporter.print_interrupted();
                for rest in &plan.directories[idx..] {
                    report.skip(rest, SkipReason::Interrupted);
                }
                break;
            }

            reporter.print_header(dir);

            if plan.dry_run {
                reporter.print_dry_run(dir, &plan.command);
                report.skip(dir, SkipReason::DryRun);
            } else {
                let outcome = outcome_of(self.runner.run_inherited(dir, &plan.command).await);
                let failed = !outcome.is_success();

                if let Some(detail) = outcome.error() {
                    reporter.print_error(dir, detail);
                }
                report.record(dir, outcome);

                if failed && !plan.continue_on_failure {
                    for rest in &plan.directories[idx + 1..] {
                        report.skip(rest, SkipReason::Halted);
                    }
                    break;
                }
            }

            reporter.print_footer(dir);
        }

        report
    }

    /// 병렬 실행
    ///
    /// 디렉토리마다 하나의 작업을 동시에 시작하고 모두 끝날 때까지 기다립니다.
    /// 이미 시작한 작업은 다른 작업의 실패나 중단 신호와 무관하게 끝까지 실행됩니다.
    async fn execute_parallel(
        &self,
        plan: &ExecutionPlan,
        interrupt: &InterruptSignal,
        reporter: &mut Reporter,
    ) -> RunReport {
        let state = Mutex::new(SharedState {
            report: RunReport::default(),
            reporter,
        });
        let limiter = plan.max_parallel.map(Semaphore::new);

        let units = plan
            .directories
            .iter()
            .map(|dir| self.run_unit(dir, plan, interrupt, &state, limiter.as_ref()));
        join_all(units).await;

        let SharedState { report, reporter } =
            state.into_inner().unwrap_or_else(PoisonError::into_inner);

        if report.interrupted {
            reporter.print_interrupted();
        }

        report
    }

    async fn run_unit(
        &self,
        dir: &str,
        plan: &ExecutionPlan,
        interrupt: &InterruptSignal,
        state: &Mutex<SharedState<'_>>,
        limiter: Option<&Semaphore>,
    ) {
        let _permit = match limiter {
            Some(semaphore) => semaphore.acquire().await.ok(),
            None => None,
        };

        if interrupt.is_triggered() {
            lock(state).report.skip(dir, SkipReason::Interrupted);
            return;
        }

        if plan.dry_run {
            let mut guard = lock(state);
            guard.reporter.print_dry_run(dir, &plan.command);
            guard.reporter.advance();
            guard.report.skip(dir, SkipReason::DryRun);
            return;
        }

        let captured = self.runner.run_captured(dir, &plan.command).await;
        let outcome = outcome_of(captured.result);

        let mut guard = lock(state);
        let SharedState { report, reporter } = &mut *guard;

        if let Some(detail) = outcome.error() {
            reporter.print_error(dir, detail);
        }
        if outcome.is_success() || plan.continue_on_failure {
            reporter.print_output(dir, &captured.output);
        }
        reporter.advance();
        report.record(dir, outcome);
    }
}
