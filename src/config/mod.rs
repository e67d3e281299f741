use crate::error::{Result, RunAllError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// run-all 사용자 설정
///
/// 설정 파일은 ~/.run-all/config.toml에 저장됩니다.
/// 명령행 플래그가 있으면 설정값보다 우선합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// 명령어를 실행할 셸 (`<shell> -c <command>`)
    #[serde(default = "default_shell")]
    pub shell: String,

    /// 실패해도 다른 디렉토리 계속 실행
    #[serde(default)]
    pub continue_on_failure: bool,

    /// 기본 병렬 실행 여부
    #[serde(default)]
    pub parallel: bool,

    /// 최대 병렬 작업 개수 (0 = 무제한)
    #[serde(default)]
    pub max_parallel_jobs: usize,

    /// 항상 적용할 제외 패턴
    #[serde(default)]
    pub default_excludes: Vec<String>,

    /// 병렬 실행 시 진행률 표시
    #[serde(default = "default_show_progress")]
    pub show_progress: bool,
}

fn default_shell() -> String {
    "sh".to_string()
}

fn default_show_progress() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shell: default_shell(),
            continue_on_failure: false,
            parallel: false,
            max_parallel_jobs: 0,
            default_excludes: Vec::new(),
            show_progress: default_show_progress(),
        }
    }
}

impl Config {
    /// 설정 디렉토리 경로
    fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".run-all")
    }

    /// 설정 파일 경로 가져오기
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// 설정 파일에서 로드 (없으면 기본값 사용)
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        // 설정 파일이 없으면 기본값 반환
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| RunAllError::Config(format!("{}: {}", path.display(), e)))
    }

    /// 설정을 파일에 저장
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let toml_string =
            toml::to_string_pretty(self).map_err(|e| RunAllError::Config(e.to_string()))?;
        fs::write(path, toml_string)?;

        Ok(())
    }

    /// 설정 파일 초기화 (기본값으로)
    pub fn init() -> Result<PathBuf> {
        Self::default().save()?;
        Ok(Self::config_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.shell, "sh");
        assert!(!config.continue_on_failure);
        assert!(!config.parallel);
        assert_eq!(config.max_parallel_jobs, 0);
        assert!(config.default_excludes.is_empty());
        assert!(config.show_progress);
    }

    #[test]
    fn test_config_deserialization() {
        let toml_str = r#"
            shell = "bash"
            parallel = true
            max_parallel_jobs = 8
            default_excludes = ["node_modules", "target"]
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.shell, "bash");
        assert!(config.parallel);
        assert!(!config.continue_on_failure);
        assert_eq!(config.max_parallel_jobs, 8);
        assert_eq!(config.default_excludes, vec!["node_modules", "target"]);
        assert!(config.show_progress);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = Config::load_from(&tmp.path().join("missing.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.shell = "zsh".to_string();
        config.continue_on_failure = true;
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "parallel = \"maybe\"").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, RunAllError::Config(_)));
    }
}
