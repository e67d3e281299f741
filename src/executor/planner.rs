/// 실행 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// 입력 순서대로 하나씩 실행, 출력은 그대로 터미널로 전달
    #[default]
    Sequential,
    /// 디렉토리마다 동시 실행, 출력은 디렉토리별로 모아서 출력
    Parallel,
}

impl ExecutionMode {
    pub fn from_flag(parallel: bool) -> Self {
        if parallel {
            Self::Parallel
        } else {
            Self::Sequential
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Sequential => "sequential",
            Self::Parallel => "parallel",
        }
    }
}

/// 한 번의 실행에 대한 불변 입력
#[derive(Debug, Clone)]
pub struct ExecutionPlan {
    /// 대상 디렉토리 (선택된 순서)
    pub directories: Vec<String>,
    /// 모든 디렉토리에 동일하게 적용되는 셸 명령어
    pub command: String,
    pub mode: ExecutionMode,
    /// 프로세스를 실행하지 않고 할 일만 출력
    pub dry_run: bool,
    /// 실패해도 다음 디렉토리 계속 진행
    pub continue_on_failure: bool,
    /// 병렬 모드 동시 실행 상한 (None이면 무제한)
    pub max_parallel: Option<usize>,
}

impl ExecutionPlan {
    pub fn new(directories: Vec<String>, command: String) -> Self {
        Self {
            directories,
            command,
            mode: ExecutionMode::Sequential,
            dry_run: false,
            continue_on_failure: false,
            max_parallel: None,
        }
    }

    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_continue_on_failure(mut self, continue_on_failure: bool) -> Self {
        self.continue_on_failure = continue_on_failure;
        self
    }

    /// 0은 무제한으로 취급
    pub fn with_max_parallel(mut self, max_parallel: usize) -> Self {
        self.max_parallel = (max_parallel > 0).then_some(max_parallel);
        self
    }

    /// 전체 디렉토리 수
    pub fn task_count(&self) -> usize {
        self.directories.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_defaults() {
        let plan = ExecutionPlan::new(vec!["/a".to_string()], "git pull".to_string());

        assert_eq!(plan.task_count(), 1);
        assert_eq!(plan.mode, ExecutionMode::Sequential);
        assert!(!plan.dry_run);
        assert!(!plan.continue_on_failure);
        assert_eq!(plan.max_parallel, None);
    }

    #[test]
    fn test_plan_builders() {
        let plan = ExecutionPlan::new(vec![], "make".to_string())
            .with_mode(ExecutionMode::from_flag(true))
            .with_dry_run(true)
            .with_continue_on_failure(true)
            .with_max_parallel(4);

        assert_eq!(plan.mode, ExecutionMode::Parallel);
        assert!(plan.dry_run);
        assert!(plan.continue_on_failure);
        assert_eq!(plan.max_parallel, Some(4));
    }

    #[test]
    fn test_zero_max_parallel_is_unbounded() {
        let plan = ExecutionPlan::new(vec![], "ls".to_string()).with_max_parallel(0);
        assert_eq!(plan.max_parallel, None);
    }
}
