use crate::cli::Cli;
use crate::config::Config;
use crate::error::{Result, RunAllError};
use crate::executor::{BatchExecutor, ExecutionMode, ExecutionPlan, InterruptSignal};
use crate::selector::DirectorySelector;
use crate::ui::{create_progress_bar, ConfirmPrompt, Reporter};
use colored::*;

/// 한 번의 실행 결과 요약 (프로세스 종료 코드 결정용)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// 실행한 디렉토리가 모두 성공 (건너뛴 경우 포함)
    Succeeded,
    /// 하나 이상 실패했거나 중단됨
    Failed,
    /// 명령어 누락, 대상 없음, 사용자 취소 등으로 실행 전 종료
    Stopped,
}

fn aborted() -> RunStatus {
    println!("{}", "Operation aborted.".yellow());
    RunStatus::Stopped
}

/// 디렉토리 선택 → 확인 → 실행 → 요약 출력
pub async fn execute_run_mode(cli: &Cli, config: &Config) -> Result<RunStatus> {
    if cli.command.trim().is_empty() {
        println!("{} {}", "Error:".red(), RunAllError::MissingCommand);
        return Ok(RunStatus::Stopped);
    }

    // 1. 디렉토리 패턴 (없으면 입력 받음)
    let pattern = if cli.dir_pattern.trim().is_empty() {
        match ConfirmPrompt::new().ask_directory_pattern() {
            Ok(pattern) => pattern,
            Err(RunAllError::UserCancelled) => return Ok(aborted()),
            Err(e) => return Err(e),
        }
    } else {
        cli.dir_pattern.trim().to_string()
    };

    // 2. 디렉토리 탐색 및 필터링
    let directories = DirectorySelector::select(&pattern)?;
    if cli.debug {
        eprintln!("{} {} matched {:?}", "DEBUG:".yellow(), pattern, directories);
    }

    if directories.is_empty() {
        println!("No directories matched the pattern.");
        return Ok(RunStatus::Stopped);
    }

    let selector = DirectorySelector::new()
        .with_excludes(config.default_excludes.iter().chain(cli.exclude_patterns().iter()))
        .with_requirement(cli.required_entry());
    let directories = selector.apply(directories, &pattern);
    if cli.debug {
        eprintln!("{} after filters {:?}", "DEBUG:".yellow(), directories);
    }

    if directories.is_empty() {
        println!("No directories with the required folder or file matched the pattern.");
        return Ok(RunStatus::Stopped);
    }

    // 3. 사용자 확인 (--yes 플래그가 없으면)
    if cli.yes {
        println!("{}", "Matched directories:".cyan().bold());
        for dir in &directories {
            println!(" - {}", dir);
        }
    } else {
        match ConfirmPrompt::new().confirm_directories(&directories, &cli.command) {
            Ok(true) => {}
            Ok(false) | Err(RunAllError::UserCancelled) => return Ok(aborted()),
            Err(e) => return Err(e),
        }
    }

    // 4. 실행 계획 생성
    let mode = ExecutionMode::from_flag(cli.parallel || config.parallel);
    let plan = ExecutionPlan::new(directories, cli.command.clone())
        .with_mode(mode)
        .with_dry_run(cli.dry_run)
        .with_continue_on_failure(cli.continue_on_failure || config.continue_on_failure)
        .with_max_parallel(cli.max_parallel.unwrap_or(config.max_parallel_jobs));

    let shell = cli.shell.as_deref().unwrap_or(&config.shell);
    if cli.debug {
        eprintln!("{} shell={} plan={:?}", "DEBUG:".yellow(), shell, plan);
    }

    eprintln!(
        "{} Running in {} directories ({})...",
        "[>>]".cyan().bold(),
        plan.task_count().to_string().bold(),
        mode.as_str()
    );

    // 5. 중단 신호 등록 후 실행
    let interrupt = InterruptSignal::new();
    interrupt.listen_for_os_signals()?;

    let mut reporter = Reporter::stdout();
    if mode == ExecutionMode::Parallel && config.show_progress {
        reporter.attach_progress(create_progress_bar(plan.task_count() as u64));
    }

    let executor = BatchExecutor::with_shell(shell);
    let report = executor.execute(&plan, &interrupt, &mut reporter).await;
    reporter.finish_progress();

    // 6. 결과 출력
    reporter.print_summary(&report);

    if report.all_succeeded() && !report.interrupted {
        eprintln!("{} Batch execution complete!", "[OK]".green().bold());
        Ok(RunStatus::Succeeded)
    } else {
        eprintln!(
            "{} {} failed, {} skipped.",
            "[X]".red(),
            report.failure_count(),
            report.skipped.len()
        );
        Ok(RunStatus::Failed)
    }
}
