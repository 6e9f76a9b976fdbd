use std::time::Duration;

use proptest::prelude::*;
use quiz_core::model::Difficulty;
use quiz_core::style::ColorOverride;
use quiz_core::time::fixed_clock;
use rand::SeedableRng;
use rand::rngs::StdRng;
use services::session::TickDecision;
use services::{
    ClockKind, Command, Input, SelectionList, SessionConfig, SessionMachine, SessionPhase,
    TextCapture, Timeline,
};

struct List {
    labels: Vec<&'static str>,
    cursor: usize,
}

impl List {
    fn new(labels: &[&'static str]) -> Self {
        Self {
            labels: labels.to_vec(),
            cursor: 0,
        }
    }
}

impl SelectionList for List {
    fn selected_label(&self) -> Option<&str> {
        self.labels.get(self.cursor).copied()
    }

    fn select(&mut self, index: usize) {
        self.cursor = index;
    }

    fn handle_input(&mut self, input: Input) {
        match input {
            Input::Down => self.cursor = (self.cursor + 1).min(self.labels.len() - 1),
            Input::Up => self.cursor = self.cursor.saturating_sub(1),
            _ => {}
        }
    }
}

#[derive(Default)]
struct Text {
    value: String,
    focused: bool,
}

impl TextCapture for Text {
    fn value(&self) -> &str {
        &self.value
    }

    fn reset(&mut self) {
        self.value.clear();
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn blur(&mut self) {
        self.focused = false;
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn handle_input(&mut self, input: Input) {
        if !self.focused {
            return;
        }
        match input {
            Input::Char(c) if self.value.chars().count() < 5 => self.value.push(c),
            Input::Backspace => {
                self.value.pop();
            }
            _ => {}
        }
    }
}

/// Drives a machine on a virtual timeline the way the terminal runtime does.
struct Harness {
    machine: SessionMachine<List, Text, StdRng>,
    timeline: Timeline,
    bells: usize,
    exits: usize,
    ticks_seen: usize,
}

impl Harness {
    fn new(seed: u64) -> Self {
        let mut text = Text::default();
        text.focus();
        let machine = SessionMachine::new(
            SessionConfig::default(),
            fixed_clock(),
            StdRng::seed_from_u64(seed),
            List::new(&["1st Grade", "3rd Grade", "5th Grade", "Algebra"]),
            List::new(&["30s", "60s", "90s", "2m"]),
            text,
        );
        let mut timeline = Timeline::new();
        let rest = timeline.apply(machine.boot());
        assert!(rest.is_empty());
        Self {
            machine,
            timeline,
            bells: 0,
            exits: 0,
            ticks_seen: 0,
        }
    }

    fn send(&mut self, input: Input) {
        let commands = self.machine.handle(input.into());
        self.absorb(commands);
    }

    fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.send(Input::Char(c));
        }
    }

    fn answer(&mut self, correct: bool) {
        let answer = self.machine.current_question().unwrap().answer();
        let given = if correct { answer } else { answer + 1 };
        self.type_text(&given.to_string());
        self.send(Input::Enter);
    }

    fn start(&mut self, difficulty_downs: usize, length_downs: usize) {
        for _ in 0..difficulty_downs {
            self.send(Input::Down);
        }
        self.send(Input::Enter);
        for _ in 0..length_downs {
            self.send(Input::Down);
        }
        self.send(Input::Enter);
        assert_eq!(self.machine.phase(), SessionPhase::Running);
    }

    fn run_for(&mut self, span: Duration) {
        let limit = self.timeline.now() + span;
        loop {
            let before = self.timeline.now();
            let fired = self.timeline.pop_until(limit);
            let elapsed = self.timeline.now() - before;
            self.machine.clock_mut().advance(elapsed);
            let Some(event) = fired else { break };
            if event.kind == ClockKind::Tick {
                self.ticks_seen += 1;
            }
            let commands = self.machine.handle(event.into());
            self.absorb(commands);
        }
    }

    fn absorb(&mut self, commands: Vec<Command>) {
        for command in self.timeline.apply(commands) {
            match command {
                Command::Bell => self.bells += 1,
                Command::Exit => self.exits += 1,
                Command::Schedule { .. } => unreachable!("timeline keeps schedules"),
            }
        }
    }
}

#[test]
fn correct_answer_at_full_budget_stays_capped() {
    let mut h = Harness::new(1);
    h.start(0, 0);
    assert_eq!(h.machine.difficulty(), Difficulty::FirstGrade);
    assert_eq!(h.machine.budget().remaining_secs(), 30);

    h.answer(true);

    assert_eq!(h.machine.budget().remaining_secs(), 30);
    assert_eq!(h.machine.answers().len(), 1);
    assert!(h.machine.answers()[0].is_correct());
    assert_eq!(h.machine.flash().message(), Some("Correct!"));
    assert_eq!(
        h.machine.flash().color_override(),
        ColorOverride::BrightPositive
    );
}

#[test]
fn unanswered_round_expires_with_one_bell() {
    let mut h = Harness::new(2);
    h.start(0, 0);

    h.run_for(Duration::from_millis(29_500));
    assert_eq!(h.machine.phase(), SessionPhase::Running);
    assert_eq!(h.machine.budget().remaining_secs(), 1);

    h.run_for(Duration::from_millis(500));
    assert_eq!(h.machine.phase(), SessionPhase::Results);
    assert!(h.machine.budget().is_expired());
    assert_eq!(h.bells, 1);

    let summary = h.machine.summary();
    assert!(summary.timed_out());
    assert_eq!(summary.total(), 0);

    let ticks = h.ticks_seen;
    h.run_for(Duration::from_secs(5));
    assert_eq!(h.ticks_seen, ticks, "tick must not re-arm after time's up");
    assert_eq!(h.bells, 1);
}

#[test]
fn feedback_suspends_the_main_tick() {
    let mut h = Harness::new(3);
    h.start(0, 1);
    h.run_for(Duration::from_millis(500));

    h.answer(false);
    assert_eq!(h.machine.budget().remaining_secs(), 59);
    assert!(h.machine.is_tick_suspended());

    // tick at 1.0s lands inside the feedback window
    h.run_for(Duration::from_millis(700));
    assert_eq!(h.machine.budget().remaining_secs(), 59);
    assert!(h.machine.is_tick_suspended());

    // feedback ends at 1.5s; tick at 2.0s counts again
    h.run_for(Duration::from_millis(850));
    assert!(!h.machine.is_tick_suspended());
    assert!(h.machine.answer_box().is_focused());
    assert_eq!(h.machine.answer_box().value(), "");
    assert_eq!(h.machine.flash().message(), None);
    assert_eq!(h.machine.budget().remaining_secs(), 58);
    assert_eq!(h.machine.used_questions().len(), 2);
}

#[test]
fn fade_clears_override_before_feedback_ends() {
    let mut h = Harness::new(4);
    h.start(0, 0);
    h.answer(false);

    h.run_for(Duration::from_millis(650));
    assert_eq!(
        h.machine.flash().color_override(),
        ColorOverride::BrightNegative
    );
    h.run_for(Duration::from_millis(300));
    assert_eq!(h.machine.flash().color_override(), ColorOverride::None);
    assert_eq!(h.machine.flash().message(), Some("Incorrect!"));
    assert_eq!(h.machine.flash().bar_adjust(), -1);
}

#[test]
fn enter_during_feedback_is_not_a_second_submission() {
    let mut h = Harness::new(5);
    h.start(0, 0);
    h.answer(true);
    let submitted = h.machine.answer_box().value().to_string();
    h.type_text("7");
    h.send(Input::Enter);

    assert_eq!(h.machine.answers().len(), 1);
    assert_eq!(h.machine.answer_box().value(), submitted);
}

#[test]
fn unparsable_input_creates_no_record() {
    let mut h = Harness::new(6);
    h.start(0, 0);
    h.type_text("x1");
    h.send(Input::Enter);

    assert!(h.machine.answers().is_empty());
    assert!(!h.machine.is_tick_suspended());
    assert_eq!(h.machine.budget().remaining_secs(), 30);
}

#[test]
fn answer_box_holds_at_most_five_characters() {
    let mut h = Harness::new(7);
    h.start(0, 0);
    h.type_text("1234567");
    assert_eq!(h.machine.answer_box().value(), "12345");
    h.send(Input::Backspace);
    assert_eq!(h.machine.answer_box().value(), "1234");
}

#[test]
fn results_back_returns_to_a_clean_menu() {
    let mut h = Harness::new(8);
    h.start(2, 0);
    h.answer(true);
    h.run_for(Duration::from_secs(40));
    assert_eq!(h.machine.phase(), SessionPhase::Results);
    assert_eq!(h.machine.summary().total(), 1);

    h.send(Input::Forward);
    assert_eq!(h.machine.phase(), SessionPhase::Results);

    h.send(Input::Back);
    assert_eq!(h.machine.phase(), SessionPhase::Menu);
    assert!(h.machine.answers().is_empty());
    assert!(h.machine.used_questions().is_empty());
    assert_eq!(h.machine.difficulties().selected_label(), Some("1st Grade"));
    assert_eq!(h.machine.lengths().selected_label(), Some("30s"));
}

#[test]
fn quitting_a_round_keeps_the_program_running() {
    let mut h = Harness::new(9);
    h.start(0, 0);
    h.send(Input::Char('q'));

    assert_eq!(h.exits, 0);
    assert_eq!(h.machine.phase(), SessionPhase::Menu);
    assert!(h.machine.current_question().is_none());

    h.send(Input::Char('q'));
    assert_eq!(h.exits, 1);
}

#[test]
fn fast_restart_drops_the_old_round_clocks() {
    let mut h = Harness::new(10);
    h.start(0, 0);
    h.run_for(Duration::from_millis(600));
    h.send(Input::Char('q'));
    h.start(0, 0);

    // the old round's tick is still queued for 1.0s
    h.run_for(Duration::from_millis(500));
    assert_eq!(h.machine.budget().remaining_secs(), 30);

    h.run_for(Duration::from_millis(500));
    assert_eq!(h.machine.budget().remaining_secs(), 29);
}

#[test]
fn back_from_time_select_returns_to_menu() {
    let mut h = Harness::new(11);
    h.send(Input::Enter);
    assert_eq!(h.machine.phase(), SessionPhase::TimeSelect);
    h.send(Input::Back);
    assert_eq!(h.machine.phase(), SessionPhase::Menu);
}

#[test]
fn fuse_animates_from_boot() {
    let mut h = Harness::new(12);
    let before = h.machine.fuse().frame_index();
    h.run_for(Duration::from_millis(150));
    assert_eq!(h.machine.fuse().frame_index(), (before + 1) % 4);
    assert_eq!(h.machine.phase(), SessionPhase::Menu);
}

#[test]
fn final_seconds_pulse_blinks_the_bar() {
    let mut h = Harness::new(13);
    h.start(0, 0);
    h.run_for(Duration::from_millis(19_500));
    assert_eq!(h.machine.budget().remaining_secs(), 11);
    assert_eq!(h.machine.flash().color_override(), ColorOverride::None);

    // remaining hits 10 at 20.0s; the next pulse lands at 20.1s
    h.run_for(Duration::from_millis(610));
    let first = h.machine.flash().color_override();
    h.run_for(Duration::from_millis(150));
    let second = h.machine.flash().color_override();
    assert_ne!(first, second);
    assert!(first.is_set() || second.is_set());
}

#[test]
fn answer_timings_follow_the_clock() {
    let mut h = Harness::new(14);
    h.start(0, 0);
    h.run_for(Duration::from_millis(2_400));
    h.answer(true);

    let record = &h.machine.answers()[0];
    assert_eq!(record.elapsed(), Duration::from_millis(2_400));
    let summary = h.machine.summary();
    assert_eq!(summary.overall_average(), Some(Duration::from_millis(2_400)));
    assert!(!summary.timed_out());
}

#[test]
fn main_tick_helper_reports_expiry() {
    let mut budget = quiz_core::model::TimeBudget::new(Duration::from_secs(1));
    assert_eq!(
        services::session::main_tick(&mut budget, false),
        TickDecision::Expired
    );
}

#[derive(Clone, Debug)]
enum Step {
    Key(Input),
    Answer(bool),
    Wait(u64),
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => any::<bool>().prop_map(Step::Answer),
        3 => (0_u64..1_500).prop_map(Step::Wait),
        1 => Just(Step::Key(Input::Enter)),
        1 => Just(Step::Key(Input::Down)),
        1 => Just(Step::Key(Input::Back)),
        1 => Just(Step::Key(Input::Char('q'))),
        1 => prop::char::range('0', '9').prop_map(|c| Step::Key(Input::Char(c))),
    ]
}

proptest! {
    #[test]
    fn budget_and_used_ids_hold_under_any_interleaving(
        seed in any::<u64>(),
        steps in prop::collection::vec(step_strategy(), 0..80),
    ) {
        let mut h = Harness::new(seed);
        for step in steps {
            match step {
                Step::Key(input) => h.send(input),
                Step::Answer(correct) => {
                    if h.machine.phase() == SessionPhase::Running {
                        h.answer(correct);
                    }
                }
                Step::Wait(ms) => h.run_for(Duration::from_millis(ms)),
            }
            if h.exits > 0 {
                break;
            }

            let budget = h.machine.budget();
            prop_assert!(budget.remaining() <= budget.limit());
            if h.machine.phase() != SessionPhase::Running {
                continue;
            }
            prop_assert!(budget.remaining() >= Duration::from_secs(1));

            let question = h.machine.current_question().unwrap();
            prop_assert!(h.machine.used_questions().contains(question.id()));
            let pending = usize::from(!h.machine.flash().is_active());
            prop_assert_eq!(
                h.machine.used_questions().len(),
                h.machine.answers().len() + pending
            );
        }
    }
}
