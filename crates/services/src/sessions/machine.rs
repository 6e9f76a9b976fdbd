use std::str::FromStr;

use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::{debug, info, warn};

use quiz_core::bar::CountdownBar;
use quiz_core::generator::{UsedQuestions, generate};
use quiz_core::model::{
    AnswerRecord, Difficulty, Question, QuizLength, SessionSummary, TimeBudget,
};
use quiz_core::scoring::score;
use quiz_core::{Clock, CoreError};

use super::collab::{SelectionList, TextCapture};
use super::events::{ClockKind, Command, Epoch, Event, Input, TimerEvent};
use super::flash::{Fade, FlashState, FuseAnimation};
use super::timers::{TickDecision, TimerComposer, main_tick, pulse_due};
use crate::config::SessionConfig;
use crate::error::SessionError;

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

/// Top-level screen of the quiz. Exactly one is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Menu,
    TimeSelect,
    Running,
    Results,
}

//
// ─── SESSION MACHINE ───────────────────────────────────────────────────────────
//

/// Owns all session state and reduces one event at a time into state changes
/// plus follow-up commands.
///
/// The lists and the answer box are the terminal widgets; inputs the machine
/// does not consume are forwarded to them.
pub struct SessionMachine<L, T, R> {
    phase: SessionPhase,
    config: SessionConfig,
    clock: Clock,
    rng: R,

    difficulties: L,
    lengths: L,
    answer_box: T,

    difficulty: Difficulty,
    budget: TimeBudget,
    current: Option<Question>,
    question_shown_at: DateTime<Utc>,
    used: UsedQuestions,
    answers: Vec<AnswerRecord>,

    suspend_tick: bool,
    flash: FlashState,
    fuse: FuseAnimation,
    timers: TimerComposer,
}

impl<L, T, R> SessionMachine<L, T, R>
where
    L: SelectionList,
    T: TextCapture,
    R: Rng,
{
    #[must_use]
    pub fn new(
        config: SessionConfig,
        clock: Clock,
        rng: R,
        difficulties: L,
        lengths: L,
        answer_box: T,
    ) -> Self {
        Self {
            phase: SessionPhase::Menu,
            config,
            clock,
            rng,
            difficulties,
            lengths,
            answer_box,
            difficulty: Difficulty::FirstGrade,
            budget: TimeBudget::default(),
            current: None,
            question_shown_at: clock.now(),
            used: UsedQuestions::new(),
            answers: Vec::new(),
            suspend_tick: false,
            flash: FlashState::default(),
            fuse: FuseAnimation::default(),
            timers: TimerComposer::default(),
        }
    }

    /// Commands to issue once at program start.
    #[must_use]
    pub fn boot(&self) -> Vec<Command> {
        self.timers.boot()
    }

    /// Reduce a single event.
    pub fn handle(&mut self, event: Event) -> Vec<Command> {
        if self.phase == SessionPhase::Running && self.current.is_none() {
            return self.recover(&SessionError::MissingQuestion);
        }
        match event {
            Event::Input(input) => self.on_input(input),
            Event::Timer(timer) => self.on_timer(timer),
        }
    }

    // ─── Inputs ────────────────────────────────────────────────────────────────

    fn on_input(&mut self, input: Input) -> Vec<Command> {
        if input == Input::Interrupt {
            return vec![Command::Exit];
        }

        match self.phase {
            SessionPhase::Menu => match input {
                Input::Enter => self.confirm_difficulty(),
                Input::Char('q') => vec![Command::Exit],
                other => {
                    self.difficulties.handle_input(other);
                    Vec::new()
                }
            },
            SessionPhase::TimeSelect => match input {
                Input::Enter => self.confirm_length(),
                Input::Back => {
                    debug!("back to difficulty menu");
                    self.phase = SessionPhase::Menu;
                    Vec::new()
                }
                Input::Char('q') => vec![Command::Exit],
                other => {
                    self.lengths.handle_input(other);
                    Vec::new()
                }
            },
            SessionPhase::Running => match input {
                Input::Enter => self.submit(),
                Input::Char('q') => {
                    info!(answered = self.answers.len(), "round abandoned");
                    self.return_to_menu();
                    Vec::new()
                }
                other => {
                    self.answer_box.handle_input(other);
                    Vec::new()
                }
            },
            SessionPhase::Results => {
                if input == Input::Back {
                    self.return_to_menu();
                }
                Vec::new()
            }
        }
    }

    fn confirm_difficulty(&mut self) -> Vec<Command> {
        self.difficulty = match parse_selection::<Difficulty, L>(&self.difficulties) {
            Ok(difficulty) => difficulty,
            Err(err) => {
                warn!(error = %err, "using fallback question rule");
                Difficulty::Unrecognized
            }
        };
        debug!(difficulty = %self.difficulty, "difficulty chosen");
        self.phase = SessionPhase::TimeSelect;
        Vec::new()
    }

    fn confirm_length(&mut self) -> Vec<Command> {
        match parse_selection::<QuizLength, L>(&self.lengths) {
            Ok(length) => self.start_round(length),
            Err(err) => {
                warn!(error = %err, "staying on duration menu");
                Vec::new()
            }
        }
    }

    fn start_round(&mut self, length: QuizLength) -> Vec<Command> {
        self.budget = TimeBudget::for_length(length);
        self.used.clear();
        self.answers.clear();
        self.flash = FlashState::default();
        self.suspend_tick = false;
        self.answer_box.reset();
        self.answer_box.focus();
        self.next_question();
        self.phase = SessionPhase::Running;

        let commands = self.timers.start_round();
        info!(
            difficulty = %self.difficulty,
            limit_secs = self.budget.limit().as_secs(),
            epoch = self.timers.epoch().value(),
            "round started"
        );
        commands
    }

    fn submit(&mut self) -> Vec<Command> {
        if !self.answer_box.is_focused() {
            return Vec::new();
        }
        let Some(question) = self.current.as_ref() else {
            return self.recover(&SessionError::MissingQuestion);
        };

        let elapsed = self.clock.elapsed_since(self.question_shown_at);
        let Some(outcome) = score(question, self.answer_box.value(), elapsed) else {
            debug!(input = self.answer_box.value(), "ignoring non-numeric answer");
            return Vec::new();
        };

        outcome.verdict.settle(&mut self.budget);
        debug!(
            verdict = ?outcome.verdict,
            remaining_secs = self.budget.remaining_secs(),
            "answer scored"
        );
        self.answers.push(outcome.record);
        self.flash.arm(outcome.verdict);
        self.suspend_tick = true;
        self.answer_box.blur();
        self.timers.answer_scored()
    }

    fn next_question(&mut self) {
        let question = generate(self.difficulty, &mut self.used, &mut self.rng);
        self.current = Some(question);
        self.question_shown_at = self.clock.now();
    }

    fn return_to_menu(&mut self) {
        self.phase = SessionPhase::Menu;
        self.difficulties.select(0);
        self.lengths.select(0);
        self.answer_box.reset();
        self.answer_box.focus();
        self.used.clear();
        self.answers.clear();
        self.current = None;
        self.flash = FlashState::default();
        self.suspend_tick = false;
    }

    fn recover(&mut self, err: &SessionError) -> Vec<Command> {
        warn!(error = %err, phase = ?self.phase, "inconsistent session state, returning to menu");
        self.return_to_menu();
        Vec::new()
    }

    // ─── Timers ────────────────────────────────────────────────────────────────

    fn on_timer(&mut self, timer: TimerEvent) -> Vec<Command> {
        if !self.timers.is_current(timer) {
            return Vec::new();
        }
        let running = self.phase == SessionPhase::Running;

        match timer.kind {
            ClockKind::Fuse => {
                self.fuse.advance();
                vec![self.timers.arm(ClockKind::Fuse)]
            }
            ClockKind::Pulse => {
                if running && pulse_due(&self.budget) {
                    self.flash.pulse();
                }
                vec![self.timers.arm(ClockKind::Pulse)]
            }
            ClockKind::Tick if running => match main_tick(&mut self.budget, self.suspend_tick) {
                TickDecision::Expired => {
                    self.phase = SessionPhase::Results;
                    info!(
                        answered = self.answers.len(),
                        correct = self.correct_count(),
                        "time's up"
                    );
                    vec![Command::Bell]
                }
                TickDecision::Decremented | TickDecision::Suspended => {
                    vec![self.timers.arm(ClockKind::Tick)]
                }
            },
            ClockKind::FlashTimeout if running => {
                self.flash.tear_down();
                self.answer_box.reset();
                self.answer_box.focus();
                self.next_question();
                self.suspend_tick = false;
                Vec::new()
            }
            ClockKind::FlashFade if running => match self.flash.fade() {
                Fade::Continue => vec![self.timers.arm(ClockKind::FlashFade)],
                Fade::Done => Vec::new(),
            },
            ClockKind::Tick | ClockKind::FlashTimeout | ClockKind::FlashFade => Vec::new(),
        }
    }

    // ─── Queries ───────────────────────────────────────────────────────────────

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn budget(&self) -> &TimeBudget {
        &self.budget
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.answers.iter().filter(|record| record.is_correct()).count()
    }

    #[must_use]
    pub fn used_questions(&self) -> &UsedQuestions {
        &self.used
    }

    #[must_use]
    pub fn is_tick_suspended(&self) -> bool {
        self.suspend_tick
    }

    #[must_use]
    pub fn flash(&self) -> &FlashState {
        &self.flash
    }

    #[must_use]
    pub fn fuse(&self) -> &FuseAnimation {
        &self.fuse
    }

    #[must_use]
    pub fn epoch(&self) -> Epoch {
        self.timers.epoch()
    }

    #[must_use]
    pub fn difficulties(&self) -> &L {
        &self.difficulties
    }

    #[must_use]
    pub fn lengths(&self) -> &L {
        &self.lengths
    }

    #[must_use]
    pub fn answer_box(&self) -> &T {
        &self.answer_box
    }

    /// Mutable access to the clock, for driving a fixed clock.
    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    /// Current frame of the countdown bar.
    #[must_use]
    pub fn countdown_bar(&self) -> CountdownBar<'static> {
        CountdownBar {
            remaining: self.budget.remaining(),
            limit: self.budget.limit(),
            width: self.config.bar_width(),
            adjust: self.flash.bar_adjust(),
            color_override: self.flash.color_override(),
            fuse_glyph: self.fuse.glyph(),
        }
    }

    /// Results for the answers given so far.
    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        SessionSummary::from_answers(&self.answers, self.budget.is_expired())
    }
}

fn parse_selection<S, L>(list: &L) -> Result<S, SessionError>
where
    S: FromStr<Err = CoreError>,
    L: SelectionList,
{
    let label = list.selected_label().ok_or(SessionError::NothingSelected)?;
    Ok(label.parse::<S>()?)
}
