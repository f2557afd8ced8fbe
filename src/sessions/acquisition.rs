use crate::app_context::AppContext;
use crate::game::machine::{AcquisitionTicket, LocationHandoff};
use crate::locations::errors::LocationError;
use crate::storage::interface::IGameStorage;

/// Looks for the location of the next round without holding the game lock, then hands the
/// result back to the game it was started for.
pub fn spawn_location_acquisition<GS>(
    app_context: AppContext<GS>,
    game_id: String,
    ticket: AcquisitionTicket,
) where
    GS: IGameStorage,
{
    tokio::spawn(async move {
        if !ticket.delay.is_zero() {
            tokio::time::sleep(ticket.delay).await;
        }
        let generation = ticket.generation();
        let handoff = match app_context
            .oracle
            .acquire(ticket.difficulty, &ticket.guard)
            .await
        {
            Ok(location) => {
                app_context
                    .games
                    .location_ready(&game_id, generation, location)
                    .await
            }
            Err(LocationError::Superseded) => {
                tracing::debug!(game_id = %game_id, generation, "Acquisition was superseded.");
                return;
            }
            Err(err) => {
                tracing::warn!(
                    game_id = %game_id,
                    round = ticket.round_index,
                    "Failed to acquire a location: {err}"
                );
                app_context
                    .games
                    .location_failed(&game_id, generation, &err)
                    .await
            }
        };
        match handoff {
            Ok(LocationHandoff::Accepted) => tracing::info!(
                task = "game_event",
                event = "location_handed_off",
                game_id = %game_id,
                round = ticket.round_index,
                generation,
            ),
            Ok(LocationHandoff::Discarded) => tracing::debug!(
                game_id = %game_id,
                generation,
                "Discarded a location of an abandoned round."
            ),
            Err(err) => tracing::debug!(game_id = %game_id, "Game is gone: {err}"),
        }
    });
}
