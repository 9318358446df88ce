use crate::domain::model::Coordinate;
use crate::domain::ports::PositionSource;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Live observer position fed by a background task.
///
/// Only the most recent fix is kept. Dropping the stream stops the task.
pub struct PositionStream {
    latest: watch::Receiver<Option<Coordinate>>,
    task: JoinHandle<()>,
}

impl PositionStream {
    pub fn spawn<S: PositionSource>(mut source: S) -> Self {
        let (tx, rx) = watch::channel(None);

        let task = tokio::spawn(async move {
            let mut received = 0usize;
            loop {
                match source.next_fix().await {
                    Ok(Some(fix)) => {
                        received += 1;
                        tracing::trace!("📍 Position update #{}: {}", received, fix);
                        if tx.send(Some(fix)).is_err() {
                            break;
                        }
                    }
                    Ok(None) => {
                        tracing::debug!("Position source finished after {} fixes", received);
                        break;
                    }
                    Err(e) => {
                        // 感測失敗：記錄後停止，保留最後一個位置
                        tracing::warn!("⚠️ Position source failed, no further updates: {}", e);
                        break;
                    }
                }
            }
        });

        Self { latest: rx, task }
    }

    pub fn latest(&self) -> Option<Coordinate> {
        *self.latest.borrow()
    }

    /// Waits for the first fix. Returns `None` if the source ends without one.
    pub async fn wait_for_fix(&self) -> Option<Coordinate> {
        let mut rx = self.latest.clone();
        let first = match rx.wait_for(|fix| fix.is_some()).await {
            Ok(fix) => *fix,
            Err(_) => None,
        };
        first
    }

    /// Waits until the source has stopped producing fixes.
    pub async fn finished(&self) {
        let mut rx = self.latest.clone();
        while rx.changed().await.is_ok() {}
    }
}

impl Drop for PositionStream {
    fn drop(&mut self) {
        self.task.abort();
    }
}
