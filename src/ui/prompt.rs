use crate::error::{Result, RunAllError};
use colored::*;
use dialoguer::{Confirm, Input};
use std::io::{self, BufRead, IsTerminal, Write};

const CONFIRM_PROMPT: &str = "Do you want to proceed with these directories?";
const PATTERN_PROMPT: &str = "Enter the directory pattern (e.g., /tmp/hello-*/world/run-here)";

pub struct ConfirmPrompt;

impl ConfirmPrompt {
    pub fn new() -> Self {
        Self
    }

    /// 대상 디렉토리 목록을 보여주고 진행 여부 확인
    ///
    /// 터미널이 아니면 표준 입력에서 한 줄을 읽어 "yes" 일 때만 진행합니다.
    pub fn confirm_directories(&self, directories: &[String], command: &str) -> Result<bool> {
        println!("{}", "Matched directories:".cyan().bold());
        for dir in directories {
            println!(" - {}", dir);
        }
        println!("\n{} {}", "Command:".bold(), command.yellow());

        if !is_interactive() {
            println!("{} (yes/no)", CONFIRM_PROMPT);
            let answer = read_answer(&mut io::stdin().lock())?;
            return Ok(is_affirmative(&answer));
        }

        let result = Confirm::new()
            .with_prompt(CONFIRM_PROMPT)
            .default(false)
            .interact()
            .map_err(|_| RunAllError::UserCancelled)?;

        Ok(result)
    }

    /// --dir-pattern 이 없을 때 패턴 입력 받기
    pub fn ask_directory_pattern(&self) -> Result<String> {
        if !is_interactive() {
            println!("{}:", PATTERN_PROMPT);
            print!("> ");
            io::stdout().flush()?;
            return read_answer(&mut io::stdin().lock());
        }

        let pattern: String = Input::new()
            .with_prompt(PATTERN_PROMPT)
            .interact_text()
            .map_err(|_| RunAllError::UserCancelled)?;

        Ok(pattern.trim().to_string())
    }
}

impl Default for ConfirmPrompt {
    fn default() -> Self {
        Self::new()
    }
}

fn is_interactive() -> bool {
    io::stdin().is_terminal() && io::stderr().is_terminal()
}

/// 한 줄 읽기 (입력이 끝났으면 빈 문자열)
fn read_answer(reader: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn is_affirmative(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("yes")
}
