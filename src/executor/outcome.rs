use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

/// 디렉토리 하나의 실행 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// 0이 아닌 종료 코드 또는 프로세스 실행 실패
    Failure(String),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success => None,
            Self::Failure(detail) => Some(detail),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "Success"),
            Self::Failure(detail) => write!(f, "Error: {}", detail),
        }
    }
}

/// 디렉토리 → 결과 (순서 없음)
pub type ResultSet = HashMap<String, Outcome>;

/// 결과 없이 건너뛴 이유
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    DryRun,
    Interrupted,
    /// 앞선 실패로 순차 실행이 중단됨
    Halted,
}

impl SkipReason {
    pub fn as_str(&self) -> &str {
        match self {
            Self::DryRun => "dry run",
            Self::Interrupted => "interrupted",
            Self::Halted => "halted after failure",
        }
    }
}

/// 실행 전체 결과
///
/// 건너뛴 디렉토리는 `results` 에 들어가지 않고 `skipped` 에만 기록됩니다.
#[derive(Debug, Default)]
pub struct RunReport {
    pub results: ResultSet,
    pub skipped: Vec<(String, SkipReason)>,
    /// 중단 신호로 일찍 끝났는지 여부
    pub interrupted: bool,
    pub elapsed: Duration,
}

impl RunReport {
    pub fn record(&mut self, dir: &str, outcome: Outcome) {
        self.results.insert(dir.to_string(), outcome);
    }

    pub fn skip(&mut self, dir: &str, reason: SkipReason) {
        if reason == SkipReason::Interrupted {
            self.interrupted = true;
        }
        self.skipped.push((dir.to_string(), reason));
    }

    pub fn success_count(&self) -> usize {
        self.results.values().filter(|o| o.is_success()).count()
    }

    pub fn failure_count(&self) -> usize {
        self.results.values().filter(|o| !o.is_success()).count()
    }

    /// 실행한 디렉토리가 모두 성공했는지 확인
    pub fn all_succeeded(&self) -> bool {
        self.failure_count() == 0
    }
}
