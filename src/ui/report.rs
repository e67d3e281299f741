use crate::executor::outcome::{Outcome, RunReport};
use colored::*;
use crossterm::terminal;
use indicatif::ProgressBar;
use std::io::{self, Write};

/// 터미널 폭을 알 수 없을 때 사용하는 기본 폭
pub const FALLBACK_WIDTH: usize = 80;

const RULE_CHAR: &str = "#";

/// 터미널 폭 조회 (실패하거나 터미널이 없으면 80)
pub fn terminal_width() -> usize {
    terminal::size()
        .ok()
        .map(|(cols, _)| cols as usize)
        .filter(|cols| *cols > 0)
        .unwrap_or(FALLBACK_WIDTH)
}

/// 실행 과정과 결과를 출력하는 리포터
///
/// 병렬 실행 중에는 실행기의 공유 잠금 안에서만 사용되므로
/// 디렉토리별 출력 블록이 서로 섞이지 않습니다.
pub struct Reporter {
    out: Box<dyn Write + Send>,
    /// 고정 폭 (None이면 출력할 때마다 터미널에서 조회)
    width: Option<usize>,
    progress: Option<ProgressBar>,
}

impl Reporter {
    pub fn stdout() -> Self {
        Self {
            out: Box::new(io::stdout()),
            width: None,
            progress: None,
        }
    }

    pub fn with_writer(out: impl Write + Send + 'static, width: usize) -> Self {
        Self {
            out: Box::new(out),
            width: Some(width),
            progress: None,
        }
    }

    /// 출력 중에는 잠시 숨겨지는 진행률 표시 연결
    pub fn attach_progress(&mut self, progress: ProgressBar) {
        self.progress = Some(progress);
    }

    /// 디렉토리 하나 완료 시 진행률 증가
    pub fn advance(&self) {
        if let Some(progress) = &self.progress {
            progress.inc(1);
        }
    }

    pub fn finish_progress(&mut self) {
        if let Some(progress) = self.progress.take() {
            progress.finish_and_clear();
        }
    }

    fn width(&self) -> usize {
        self.width.unwrap_or_else(terminal_width)
    }

    fn emit(&mut self, lines: &[String]) {
        let Self { out, progress, .. } = self;
        let mut write_all = || {
            for line in lines {
                // 파이프가 닫힌 경우 등 출력 실패는 실행 결과에 영향을 주지 않음
                let _ = writeln!(out, "{}", line);
            }
            let _ = out.flush();
        };

        match progress {
            Some(progress) => progress.suspend(write_all),
            None => write_all(),
        }
    }

    fn framed(&self, label: String) -> Vec<String> {
        let rule = RULE_CHAR.repeat(self.width());
        vec![rule.clone(), label, rule]
    }

    pub fn print_header(&mut self, dir: &str) {
        let lines = self.framed(format!("Running command in directory: {}", dir));
        self.emit(&lines);
    }

    pub fn print_footer(&mut self, dir: &str) {
        let lines = self.framed(format!("Finished command in directory: {}", dir));
        self.emit(&lines);
    }

    /// 병렬 실행에서 모아둔 출력을 구분선과 함께 한 번에 출력
    pub fn print_output(&mut self, dir: &str, output: &str) {
        let mut lines = self.framed(format!("Output for directory: {}", dir));
        lines.push(output.trim_end_matches('\n').to_string());
        lines.extend(self.framed(format!("Finished command in directory: {}", dir)));
        self.emit(&lines);
    }

    pub fn print_dry_run(&mut self, dir: &str, command: &str) {
        self.emit(&[format!(
            "{} Command to be run in directory '{}': {}",
            "[Dry Run]".cyan(),
            dir,
            command
        )]);
    }

    pub fn print_error(&mut self, dir: &str, detail: &str) {
        self.emit(&[format!(
            "{} running command in directory '{}': {}",
            "Error".red(),
            dir,
            detail
        )]);
    }

    pub fn print_interrupted(&mut self) {
        self.emit(&[String::new(), format!("{}", "Execution interrupted by user.".yellow())]);
    }

    /// 최종 요약 출력 (디렉토리 이름순)
    pub fn print_summary(&mut self, report: &RunReport) {
        let mut lines = vec![format!("{}", "Command execution summary:".bold())];

        let mut entries: Vec<(&String, &Outcome)> = report.results.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        for (dir, outcome) in entries {
            let status = match outcome {
                Outcome::Success => outcome.to_string().green(),
                Outcome::Failure(_) => outcome.to_string().red(),
            };
            lines.push(format!("Directory: {} - {}", dir, status));
        }

        for (dir, reason) in &report.skipped {
            lines.push(format!(
                "Directory: {} - {}",
                dir,
                format!("Skipped ({})", reason.as_str()).dimmed()
            ));
        }

        lines.push(format!(
            "  - Success: {}, Failed: {}, Skipped: {} ({}ms)",
            report.success_count().to_string().green(),
            report.failure_count().to_string().red(),
            report.skipped.len(),
            report.elapsed.as_millis()
        ));

        self.emit(&lines);
    }
}
