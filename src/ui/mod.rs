pub mod prompt;
pub mod progress;
pub mod report;

pub use prompt::ConfirmPrompt;
pub use progress::create_progress_bar;
pub use report::Reporter;
