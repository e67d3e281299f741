use crate::error::{Result, RunAllError};
use async_trait::async_trait;
use std::io;
use std::process::{ExitStatus, Stdio};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;

/// 캡처 실행 결과 (stdout, stderr를 도착 순서대로 합친 출력)
#[derive(Debug)]
pub struct CapturedOutput {
    pub output: String,
    pub result: Result<()>,
}

/// 디렉토리 안에서 셸 명령어를 실행하는 방법
///
/// 실행기는 이 trait만 알고 있으므로 테스트에서는 가짜 구현으로 대체합니다.
#[async_trait]
pub trait ShellRunner: Send + Sync {
    /// 출력을 현재 프로세스의 표준 스트림으로 그대로 전달하며 실행
    async fn run_inherited(&self, dir: &str, command: &str) -> Result<()>;

    /// 출력을 하나의 버퍼로 모으며 실행
    async fn run_captured(&self, dir: &str, command: &str) -> CapturedOutput;
}

/// `<shell> -c <command>` 로 실제 프로세스를 실행
pub struct SystemShell {
    shell: String,
}

impl SystemShell {
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }

    fn command(&self, dir: &str, command: &str) -> Command {
        let mut cmd = Command::new(&self.shell);
        cmd.arg("-c").arg(command).current_dir(dir).stdin(Stdio::null());
        cmd
    }
}

impl Default for SystemShell {
    fn default() -> Self {
        Self::new("sh")
    }
}

#[async_trait]
impl ShellRunner for SystemShell {
    async fn run_inherited(&self, dir: &str, command: &str) -> Result<()> {
        let status = self
            .command(dir, command)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| RunAllError::Command(e.to_string()))?;

        check_status(status)
    }

    async fn run_captured(&self, dir: &str, command: &str) -> CapturedOutput {
        let mut buffer = Vec::new();
        let result = self.capture_into(dir, command, &mut buffer).await;

        CapturedOutput {
            output: String::from_utf8_lossy(&buffer).to_string(),
            result,
        }
    }
}

impl SystemShell {
    async fn capture_into(&self, dir: &str, command: &str, buffer: &mut Vec<u8>) -> Result<()> {
        let mut child = self
            .command(dir, command)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| RunAllError::Command(e.to_string()))?;

        let (Some(mut stdout), Some(mut stderr)) = (child.stdout.take(), child.stderr.take())
        else {
            return Err(RunAllError::Command("failed to capture output".to_string()));
        };

        if let Err(e) = drain_streams(&mut stdout, &mut stderr, buffer).await {
            // 읽기 실패 시 자식 프로세스를 종료하고 회수
            let _ = child.kill().await;
            return Err(e.into());
        }

        let status = child
            .wait()
            .await
            .map_err(|e| RunAllError::Command(e.to_string()))?;

        check_status(status)
    }
}

/// 두 스트림을 읽히는 순서대로 같은 버퍼에 기록
async fn drain_streams<O, E>(stdout: &mut O, stderr: &mut E, buffer: &mut Vec<u8>) -> io::Result<()>
where
    O: AsyncRead + Unpin,
    E: AsyncRead + Unpin,
{
    let mut out_chunk = [0u8; 4096];
    let mut err_chunk = [0u8; 4096];
    let (mut out_done, mut err_done) = (false, false);

    while !(out_done && err_done) {
        tokio::select! {
            read = stdout.read(&mut out_chunk), if !out_done => match read? {
                0 => out_done = true,
                n => buffer.extend_from_slice(&out_chunk[..n]),
            },
            read = stderr.read(&mut err_chunk), if !err_done => match read? {
                0 => err_done = true,
                n => buffer.extend_from_slice(&err_chunk[..n]),
            },
        }
    }

    Ok(())
}

fn check_status(status: ExitStatus) -> Result<()> {
    if status.success() {
        Ok(())
    } else {
        Err(RunAllError::Command(status.to_string()))
    }
}
