use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// 병렬 실행용 프로그레스 바 (stderr에 표시, 터미널이 아니면 숨김)
pub fn create_progress_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} directories {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░ ");
    pb.set_style(style);
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}
