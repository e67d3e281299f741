pub mod filter;

use crate::error::Result;
pub use filter::{exclude_directories, filter_by_requirement};

/// 디렉토리 선택기 - glob 패턴으로 대상 디렉토리를 찾고 필터를 적용
pub struct DirectorySelector {
    /// 제외 패턴 목록 (전체 경로 또는 패턴 기준 상대 경로)
    exclude_patterns: Vec<String>,
    /// 디렉토리 안에 반드시 존재해야 하는 파일/폴더 이름
    required_entry: Option<String>,
}

impl DirectorySelector {
    pub fn new() -> Self {
        Self {
            exclude_patterns: Vec::new(),
            required_entry: None,
        }
    }

    pub fn with_excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.exclude_patterns.extend(
            patterns
                .into_iter()
                .map(|p| p.as_ref().trim().to_string())
                .filter(|p| !p.is_empty()),
        );
        self
    }

    pub fn with_requirement(mut self, entry: Option<String>) -> Self {
        self.required_entry = entry.filter(|e| !e.trim().is_empty());
        self
    }

    /// glob 패턴을 확장하여 매칭되는 디렉토리 목록 반환
    ///
    /// 잘못된 패턴이면 `RunAllError::Pattern`, 매칭이 없으면 빈 목록을 반환합니다.
    /// 일반 파일과 읽을 수 없는 경로는 건너뜁니다.
    pub fn select(pattern: &str) -> Result<Vec<String>> {
        let dirs = glob::glob(pattern)?
            .filter_map(|entry| entry.ok())
            .filter(|path| path.is_dir())
            .map(|path| path.display().to_string())
            .collect();

        Ok(dirs)
    }

    /// 제외 패턴과 필수 항목 필터를 순서대로 적용
    pub fn apply(&self, mut dirs: Vec<String>, pattern: &str) -> Vec<String> {
        if !self.exclude_patterns.is_empty() {
            dirs = exclude_directories(dirs, &self.exclude_patterns, pattern);
        }

        if let Some(entry) = &self.required_entry {
            dirs = filter_by_requirement(dirs, entry);
        }

        dirs
    }

    /// 패턴 확장 후 필터까지 적용
    pub fn resolve(&self, pattern: &str) -> Result<Vec<String>> {
        let dirs = Self::select(pattern)?;
        Ok(self.apply(dirs, pattern))
    }
}

impl Default for DirectorySelector {
    fn default() -> Self {
        Self::new()
    }
}
