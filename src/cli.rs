use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "run-all")]
#[command(version)]
#[command(about = "Run a shell command in every directory matching a pattern", long_about = None)]
pub struct Cli {
    /// 명령어만 출력하고 실행하지 않음
    #[arg(long)]
    pub dry_run: bool,

    /// 대상 디렉토리 패턴 (예: "/tmp/hello-*/world/run-here"). 없으면 입력 받음
    #[arg(long, default_value = "")]
    pub dir_pattern: String,

    /// 각 디렉토리에서 실행할 명령어
    #[arg(long, default_value = "")]
    pub command: String,

    /// 제외할 디렉토리 패턴 (쉼표 구분, 전체 경로 또는 dir-pattern 기준 상대 경로)
    #[arg(long, default_value = "")]
    pub exclude: String,

    /// 디렉토리 안에 반드시 있어야 하는 파일 또는 폴더
    #[arg(long, default_value = "")]
    pub require: String,

    /// 한 디렉토리가 실패해도 나머지 계속 실행
    #[arg(long)]
    pub continue_on_failure: bool,

    /// 모든 디렉토리에서 동시에 실행
    #[arg(long)]
    pub parallel: bool,

    /// 최대 병렬 실행 개수 (0 = 무제한). 미지정시 설정 파일 값 사용
    #[arg(long)]
    pub max_parallel: Option<usize>,

    /// 명령어를 실행할 셸. 미지정시 설정 파일 값 사용
    #[arg(long)]
    pub shell: Option<String>,

    /// 확인 없이 바로 실행
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// 디버그 모드
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// 설정 파일 경로 (기본: ~/.run-all/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// 기본 설정 파일 생성 후 종료
    #[arg(long)]
    pub init_config: bool,
}

impl Cli {
    /// 쉼표로 구분된 제외 패턴 목록
    pub fn exclude_patterns(&self) -> Vec<String> {
        self.exclude
            .split(',')
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect()
    }

    pub fn required_entry(&self) -> Option<String> {
        let entry = self.require.trim();
        (!entry.is_empty()).then(|| entry.to_string())
    }
}
