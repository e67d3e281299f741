use std::collections::HashSet;
use std::path::Path;

/// 제외 패턴에 해당하는 디렉토리 제거 (남은 디렉토리 순서 유지)
///
/// 다음 중 하나라도 만족하면 제외됩니다:
/// * 제외 패턴을 독립적으로 glob 확장한 결과에 포함
/// * `dir(base_pattern)/exclude_pattern` 로 시작하는 경로
pub fn exclude_directories(
    dirs: Vec<String>,
    exclude_patterns: &[String],
    base_pattern: &str,
) -> Vec<String> {
    // 전체 경로 패턴 (잘못된 패턴은 무시)
    let globbed: HashSet<String> = exclude_patterns
        .iter()
        .filter_map(|pattern| glob::glob(pattern).ok())
        .flat_map(|paths| paths.filter_map(|p| p.ok()))
        .map(|p| p.display().to_string())
        .collect();

    // 패턴 기준 상대 경로
    let base_dir = parent_dir(base_pattern);
    let prefixes: Vec<String> = exclude_patterns
        .iter()
        .map(|pattern| clean_join(base_dir, pattern))
        .collect();

    dirs.into_iter()
        .filter(|dir| !globbed.contains(dir))
        .filter(|dir| !prefixes.iter().any(|prefix| dir.starts_with(prefix.as_str())))
        .collect()
}

/// `required_entry` 파일 또는 폴더가 바로 아래에 존재하는 디렉토리만 남김
pub fn filter_by_requirement(dirs: Vec<String>, required_entry: &str) -> Vec<String> {
    dirs.into_iter()
        .filter(|dir| Path::new(dir).join(required_entry).exists())
        .collect()
}

/// 마지막 구분자 앞부분 (구분자가 없으면 ".")
fn parent_dir(pattern: &str) -> &str {
    match pattern.rfind('/') {
        Some(0) => "/",
        Some(idx) => &pattern[..idx],
        None => ".",
    }
}

/// 두 경로를 이어 붙인 뒤 어휘적으로 정리
///
/// `.` 와 빈 구성요소는 버리고 `..` 는 앞 구성요소를 지웁니다.
/// 파일 시스템은 조회하지 않습니다.
fn clean_join(base: &str, tail: &str) -> String {
    let joined = format!("{}/{}", base, tail);
    let absolute = joined.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();

    for part in joined.split('/') {
        match part {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                _ if absolute => {}
                _ => parts.push(".."),
            },
            other => parts.push(other),
        }
    }

    let body = parts.join("/");
    match (absolute, body.is_empty()) {
        (true, _) => format!("/{}", body),
        (false, true) => ".".to_string(),
        (false, false) => body,
    }
}
