use crate::events::AppEvent;
use async_channel::Sender;
use std::thread;
use std::time::Duration;
use tokio::runtime::Runtime;

pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub fn start_background_services(tx: Sender<AppEvent>) {
    thread::spawn(move || {
        let rt = match Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                log::error!("Failed to create Tokio runtime: {}", e);
                return;
            }
        };

        rt.block_on(async {
            {
                let tx = tx.clone();
                tokio::spawn(async move {
                    run_frame_ticker(tx).await;
                });
            }

            {
                let tx = tx.clone();
                tokio::spawn(async move {
                    crate::config::run_async_watcher(tx).await;
                });
            }

            std::future::pending::<()>().await;
        });
    });
}

/// Drives the glow animation. Stops once the UI side hangs up.
async fn run_frame_ticker(tx: Sender<AppEvent>) {
    let mut interval = tokio::time::interval(FRAME_INTERVAL);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    loop {
        interval.tick().await;
        if tx.send(AppEvent::Frame).await.is_err() {
            break;
        }
    }
}
