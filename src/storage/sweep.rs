use crate::storage::consts::IDLE_SWEEP_INTERVAL;
use crate::storage::interface::IGameStorage;
use std::time::Duration;

/// Periodically drops games that nobody played for longer than `max_idle`.
pub fn spawn_idle_sweep<GS>(games: GS, max_idle: Duration)
where
    GS: IGameStorage,
{
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(IDLE_SWEEP_INTERVAL);
        loop {
            interval.tick().await;
            let removed = games.remove_idle(max_idle).await;
            if removed > 0 {
                let remaining = games.count().await;
                tracing::info!(
                    task = "game_event",
                    event = "idle_games_removed",
                    removed,
                    remaining,
                );
            }
        }
    });
}
