use tokio_util::sync::CancellationToken;

/// 사용자 중단 요청 신호
///
/// 한 번 발생하면 되돌릴 수 없고, 복제본 모두가 같은 상태를 관찰합니다.
/// 실행 중인 프로세스를 종료하지는 않으며 실행기가 정해진 지점에서 확인합니다.
#[derive(Debug, Clone, Default)]
pub struct InterruptSignal {
    token: CancellationToken,
}

impl InterruptSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger(&self) {
        self.token.cancel();
    }

    /// 비차단 확인
    pub fn is_triggered(&self) -> bool {
        self.token.is_cancelled()
    }

    /// OS 중단 신호(SIGINT, SIGTERM)를 받으면 트리거하는 백그라운드 작업 등록
    ///
    /// tokio 런타임 안에서 호출해야 합니다.
    pub fn listen_for_os_signals(&self) -> std::io::Result<()> {
        let signal = self.clone();

        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal as unix_signal, SignalKind};

            let mut interrupt = unix_signal(SignalKind::interrupt())?;
            let mut terminate = unix_signal(SignalKind::terminate())?;

            tokio::spawn(async move {
                tokio::select! {
                    _ = interrupt.recv() => {}
                    _ = terminate.recv() => {}
                }
                signal.trigger();
            });
        }

        #[cfg(not(unix))]
        {
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    signal.trigger();
                }
            });
        }

        Ok(())
    }
}
