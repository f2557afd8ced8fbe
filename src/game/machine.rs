use crate::game::consts::MAX_ROUNDS;
use crate::game::errors::GameError;
use crate::game::models::{
    Difficulty, GamePhase, GameSession, GameSnapshot, GameSummary, PanoramaView, QuizSnapshot,
    Round, RoundOutcome, RoundSnapshot, StarRating,
};
use crate::locations::consts::PANORAMA_PITCH;
use crate::locations::errors::LocationError;
use crate::locations::models::{GenerationGuard, ValidatedLocation};
use crate::map::consts::{HINT_MAX_OFFSET_M, HINT_REGION_RADIUS_M};
use crate::map::models::{HintRegion, LatLng};
use crate::map::{self, distance_km, score_for};
use crate::presentation::{PresentationCommand, PresentationError, Presenter};
use crate::quiz::consts::{
    ANSWERS_TO_CLEAR_CHECKPOINT, CHECKPOINT_CLEARED_DELAY, NEXT_QUESTION_DELAY,
};
use crate::quiz::QuizCheckpoint;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tokio::sync::watch;

/// Everything needed to go and fetch the location of the next round.
#[derive(Debug)]
pub struct AcquisitionTicket {
    pub difficulty: Difficulty,
    pub round_index: u32,
    pub guard: GenerationGuard,
    /// How long to wait before starting, used to let the client show quiz feedback.
    pub delay: Duration,
}

impl AcquisitionTicket {
    pub fn generation(&self) -> u64 {
        self.guard.generation()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LocationHandoff {
    Accepted,
    /// The result belonged to an older round and was thrown away.
    Discarded,
}

#[derive(Debug)]
pub enum NextStep {
    AcquireLocation(AcquisitionTicket),
    QuizCheckpoint,
    Summary(GameSummary),
}

#[derive(Debug)]
pub enum QuizFeedback {
    Incorrect,
    NextQuestion,
    CheckpointCleared(AcquisitionTicket),
}

/// Round state machine of a single player's game.
///
/// Location acquisition happens outside of the machine: starting a round hands out an
/// [`AcquisitionTicket`] and the result comes back through [`GameMachine::location_ready`] or
/// [`GameMachine::location_failed`]. Every new acquisition bumps the generation counter, so a
/// result for an abandoned round is recognized and discarded. Delayed presentation commands
/// carry the same counter; moving on to the next quiz question bumps it too.
pub struct GameMachine<P: Presenter> {
    presenter: P,
    rng: StdRng,
    player_name: String,
    phase: GamePhase,
    session: GameSession,
    round: Option<Round>,
    pending_guess: Option<LatLng>,
    hint: Option<HintRegion>,
    quiz: Option<QuizCheckpoint>,
    summary: Option<GameSummary>,
    generation: watch::Sender<u64>,
}

impl<P: Presenter> GameMachine<P> {
    pub fn new(player_name: String, presenter: P) -> Self {
        Self::with_rng(player_name, presenter, StdRng::from_entropy())
    }

    pub fn with_rng(player_name: String, presenter: P, rng: StdRng) -> Self {
        let (generation, _) = watch::channel(0);
        Self {
            presenter,
            rng,
            player_name,
            phase: GamePhase::Idle,
            session: GameSession::new(Difficulty::default()),
            round: None,
            pending_guess: None,
            hint: None,
            quiz: None,
            summary: None,
            generation,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn quiz(&self) -> Option<&QuizCheckpoint> {
        self.quiz.as_ref()
    }

    pub fn generation(&self) -> u64 {
        *self.generation.borrow()
    }

    pub fn start_game(&mut self, difficulty: Difficulty) -> Result<AcquisitionTicket, GameError> {
        self.expect_phase("startGame", &[GamePhase::Idle])?;
        self.session = GameSession::new(difficulty);
        self.summary = None;
        Ok(self.begin_acquisition(Duration::ZERO))
    }

    /// Abandons the current game and starts over on round one with another difficulty.
    pub fn change_difficulty(
        &mut self,
        difficulty: Difficulty,
    ) -> Result<AcquisitionTicket, GameError> {
        if self.phase == GamePhase::Idle {
            return Err(self.not_allowed("changeDifficulty"));
        }
        self.session = GameSession::new(difficulty);
        self.summary = None;
        Ok(self.begin_acquisition(Duration::ZERO))
    }

    pub fn restart(&mut self) -> Result<(), GameError> {
        self.expect_phase(
            "restart",
            &[GamePhase::Summary, GamePhase::LocationUnavailable],
        )?;
        self.bump_generation();
        self.session = GameSession::new(self.session.difficulty);
        self.clear_round();
        self.summary = None;
        self.phase = GamePhase::Idle;
        Ok(())
    }

    pub fn location_ready(
        &mut self,
        generation: u64,
        validated: ValidatedLocation,
    ) -> LocationHandoff {
        if !self.awaits_generation(generation) {
            return LocationHandoff::Discarded;
        }
        self.round = Some(Round {
            index: self.session.round_count,
            actual_location: validated.location,
            actual_country_name: validated.country_name,
            heading: validated.heading,
            guess_location: None,
            distance_km: None,
            round_score: None,
            hint_used: false,
        });
        self.phase = GamePhase::AwaitingGuess;
        self.presenter.present(PresentationCommand::ShowPanorama {
            location: validated.location,
            heading: validated.heading,
            pitch: PANORAMA_PITCH,
        });
        LocationHandoff::Accepted
    }

    pub fn location_failed(&mut self, generation: u64, error: &LocationError) -> LocationHandoff {
        if !self.awaits_generation(generation) {
            return LocationHandoff::Discarded;
        }
        let reason = match error {
            LocationError::ProviderUnavailable(_) => PresentationError::CannotConnect,
            LocationError::ExhaustedRetries { .. } => PresentationError::NoLocationFound,
            LocationError::Superseded => return LocationHandoff::Discarded,
        };
        self.phase = GamePhase::LocationUnavailable;
        self.presenter
            .present(PresentationCommand::ShowError { reason });
        LocationHandoff::Accepted
    }

    /// Places or moves the guess pin. The pin only counts once the guess is submitted.
    pub fn place_guess(&mut self, location: LatLng) -> Result<(), GameError> {
        self.expect_phase("placeGuess", &[GamePhase::AwaitingGuess])?;
        if !location.is_valid() {
            return Err(GameError::InvalidCoordinate);
        }
        self.pending_guess = Some(location);
        Ok(())
    }

    pub fn submit_guess(&mut self) -> Result<RoundOutcome, GameError> {
        self.expect_phase("submitGuess", &[GamePhase::AwaitingGuess])?;
        let guess = self.pending_guess.ok_or(GameError::NoGuess)?;
        let Some(round) = self.round.as_mut() else {
            return Err(GameError::ActionNotAllowed {
                action: "submitGuess",
                phase: self.phase,
            });
        };

        let distance = distance_km(round.actual_location, guess);
        let score = score_for(distance);
        round.guess_location = Some(guess);
        round.distance_km = Some(distance);
        round.round_score = Some(score);
        self.session.record_round_score(score);
        self.phase = GamePhase::RoundResolved;

        let outcome = RoundOutcome {
            round_index: round.index,
            country_name: round.actual_country_name.clone(),
            distance_km: distance,
            round_score: score,
            total_score: self.session.total_score,
        };
        self.presenter.present(PresentationCommand::ShowScoreBar {
            country_name: outcome.country_name.clone(),
            distance_km: outcome.distance_km,
            round_score: outcome.round_score,
            total_score: outcome.total_score,
        });
        Ok(outcome)
    }

    /// Discloses a region that contains the actual location, centered somewhere near it.
    pub fn use_hint(&mut self) -> Result<HintRegion, GameError> {
        self.expect_phase("useHint", &[GamePhase::AwaitingGuess])?;
        let Some(round) = self.round.as_mut() else {
            return Err(GameError::ActionNotAllowed {
                action: "useHint",
                phase: self.phase,
            });
        };
        if round.hint_used {
            return Err(GameError::HintAlreadyUsed);
        }

        let offset_m = self.rng.gen_range(0.0..HINT_MAX_OFFSET_M);
        let bearing = self.rng.gen_range(0.0..360.0);
        let region = HintRegion {
            center: map::offset(round.actual_location, offset_m, bearing),
            radius_meters: HINT_REGION_RADIUS_M,
        };
        round.hint_used = true;
        self.hint = Some(region);
        self.presenter.present(PresentationCommand::ShowHintRegion {
            center: region.center,
            radius_meters: region.radius_meters,
        });
        Ok(region)
    }

    pub fn next(&mut self) -> Result<NextStep, GameError> {
        match self.phase {
            GamePhase::RoundResolved => {}
            // Try again to find a location for the same round.
            GamePhase::LocationUnavailable => {
                return Ok(NextStep::AcquireLocation(
                    self.begin_acquisition(Duration::ZERO),
                ))
            }
            _ => return Err(self.not_allowed("next")),
        }

        if self.session.round_count >= MAX_ROUNDS {
            return Ok(NextStep::Summary(self.finish()));
        }
        if self.session.round_count % 2 == 0 {
            let checkpoint = QuizCheckpoint::new(&mut self.rng);
            self.presenter.present(PresentationCommand::ShowQuizOverlay {
                question: checkpoint.current().clone(),
                question_number: 1,
                questions_needed: ANSWERS_TO_CLEAR_CHECKPOINT,
            });
            self.quiz = Some(checkpoint);
            self.phase = GamePhase::QuizCheckpoint;
            return Ok(NextStep::QuizCheckpoint);
        }
        self.session.round_count += 1;
        Ok(NextStep::AcquireLocation(
            self.begin_acquisition(Duration::ZERO),
        ))
    }

    pub fn answer_quiz(&mut self, selected: &str) -> Result<QuizFeedback, GameError> {
        self.expect_phase("answerQuiz", &[GamePhase::QuizCheckpoint])?;
        let Some(checkpoint) = self.quiz.as_mut() else {
            return Err(GameError::ActionNotAllowed {
                action: "answerQuiz",
                phase: self.phase,
            });
        };
        let outcome = checkpoint.submit_answer(selected, &mut self.rng)?;
        let next_question = checkpoint.current().clone();
        let correct_answers = checkpoint.correct_answers();

        self.presenter.present(PresentationCommand::ShowQuizFeedback {
            correct: outcome.correct,
            checkpoint_cleared: outcome.cleared,
        });
        if !outcome.correct {
            return Ok(QuizFeedback::Incorrect);
        }
        if !outcome.cleared {
            self.bump_generation();
            let guard = self.generation_guard();
            self.presenter.present_after(
                PresentationCommand::ShowQuizOverlay {
                    question: next_question,
                    question_number: correct_answers + 1,
                    questions_needed: ANSWERS_TO_CLEAR_CHECKPOINT,
                },
                NEXT_QUESTION_DELAY,
                guard,
            );
            return Ok(QuizFeedback::NextQuestion);
        }

        self.session.quiz_checkpoints_passed += 1;
        self.session.round_count += 1;
        Ok(QuizFeedback::CheckpointCleared(
            self.begin_acquisition(CHECKPOINT_CLEARED_DELAY),
        ))
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let round = self.round.as_ref().map(|round| RoundSnapshot {
            index: round.index,
            panorama: PanoramaView {
                location: round.actual_location,
                heading: round.heading,
                pitch: PANORAMA_PITCH,
            },
            guess_location: round.guess_location,
            hint_used: round.hint_used,
            outcome: match (round.distance_km, round.round_score) {
                (Some(distance_km), Some(round_score)) => Some(RoundOutcome {
                    round_index: round.index,
                    country_name: round.actual_country_name.clone(),
                    distance_km,
                    round_score,
                    total_score: self.session.total_score,
                }),
                _ => None,
            },
        });
        let quiz = self.quiz.as_ref().map(|checkpoint| QuizSnapshot {
            question: checkpoint.current().clone(),
            correct_answers: checkpoint.correct_answers(),
            answers_needed: ANSWERS_TO_CLEAR_CHECKPOINT,
        });
        GameSnapshot {
            phase: self.phase,
            player_name: self.player_name.clone(),
            difficulty: self.session.difficulty,
            round_count: self.session.round_count,
            max_rounds: MAX_ROUNDS,
            total_score: self.session.total_score,
            quiz_checkpoints_passed: self.session.quiz_checkpoints_passed,
            round,
            pending_guess: self.pending_guess,
            hint: self.hint,
            quiz,
            summary: self.summary.clone(),
        }
    }

    fn finish(&mut self) -> GameSummary {
        let stars = StarRating::from_total_score(self.session.total_score);
        let summary = GameSummary {
            player_name: self.player_name.clone(),
            total_score: self.session.total_score,
            stars,
            round_scores: self.session.round_scores.clone(),
        };
        self.phase = GamePhase::Summary;
        self.summary = Some(summary.clone());
        self.presenter.present(PresentationCommand::ShowSummary {
            total_score: summary.total_score,
            stars,
        });
        summary
    }

    fn begin_acquisition(&mut self, delay: Duration) -> AcquisitionTicket {
        self.bump_generation();
        self.clear_round();
        self.phase = GamePhase::AwaitingLocation;
        self.presenter.present_after(
            PresentationCommand::ShowLoading {
                round_number: self.session.round_count,
                max_rounds: MAX_ROUNDS,
                difficulty: self.session.difficulty,
            },
            delay,
            self.generation_guard(),
        );
        AcquisitionTicket {
            difficulty: self.session.difficulty,
            round_index: self.session.round_count,
            guard: self.generation_guard(),
            delay,
        }
    }

    fn generation_guard(&self) -> GenerationGuard {
        GenerationGuard::new(self.generation(), self.generation.subscribe())
    }

    fn bump_generation(&mut self) {
        self.generation.send_modify(|generation| *generation += 1);
    }

    fn clear_round(&mut self) {
        self.round = None;
        self.pending_guess = None;
        self.hint = None;
        self.quiz = None;
    }

    fn awaits_generation(&self, generation: u64) -> bool {
        self.phase == GamePhase::AwaitingLocation && generation == self.generation()
    }

    fn expect_phase(&self, action: &'static str, allowed: &[GamePhase]) -> Result<(), GameError> {
        if allowed.contains(&self.phase) {
            Ok(())
        } else {
            Err(self.not_allowed(action))
        }
    }

    fn not_allowed(&self, action: &'static str) -> GameError {
        GameError::ActionNotAllowed {
            action,
            phase: self.phase,
        }
    }
}
