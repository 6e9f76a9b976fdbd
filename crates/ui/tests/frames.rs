use std::time::Duration;

use proptest::prelude::*;
use quiz_core::style::PlainPainter;
use quiz_core::time::fixed_clock;
use rand::SeedableRng;
use rand::rngs::StdRng;
use services::{Command, Input, SessionConfig, SessionPhase, Timeline};
use ui::{CLEAR_SCREEN, QuizMachine, build_machine, render_frame};

fn machine(seed: u64) -> (QuizMachine<StdRng>, Timeline) {
    let machine = build_machine(
        SessionConfig::default(),
        fixed_clock(),
        StdRng::seed_from_u64(seed),
    );
    let mut timeline = Timeline::new();
    timeline.apply(machine.boot());
    (machine, timeline)
}

fn send(machine: &mut QuizMachine<StdRng>, timeline: &mut Timeline, input: Input) -> Vec<Command> {
    let commands = machine.handle(input.into());
    timeline.apply(commands)
}

fn run_for(machine: &mut QuizMachine<StdRng>, timeline: &mut Timeline, span: Duration) -> Vec<Command> {
    let limit = timeline.now() + span;
    let mut rest = Vec::new();
    loop {
        let before = timeline.now();
        let fired = timeline.pop_until(limit);
        machine.clock_mut().advance(timeline.now() - before);
        let Some(event) = fired else { break };
        let commands = machine.handle(event.into());
        rest.extend(timeline.apply(commands));
    }
    rest
}

fn frame(machine: &QuizMachine<StdRng>) -> String {
    render_frame(machine, &PlainPainter)
}

#[test]
fn menu_frame_lists_difficulties() {
    let (machine, _) = machine(1);
    let text = frame(&machine);
    assert!(text.starts_with(CLEAR_SCREEN));
    assert!(text.contains("Select Difficulty Level"));
    assert!(text.contains("> 1st Grade"));
    assert!(text.ends_with("Fullscreen recommended"));
}

#[test]
fn running_frame_shows_budget_bar_and_question() {
    let (mut machine, mut timeline) = machine(2);
    send(&mut machine, &mut timeline, Input::Enter);
    let text = frame(&machine);
    assert!(text.contains("Select Quiz Duration"));
    send(&mut machine, &mut timeline, Input::Enter);

    let question = machine.current_question().unwrap().text().to_string();
    let text = frame(&machine);
    assert!(text.contains("  Time Left: 30s\n  💣["));
    assert!(text.contains("  Correct: 0/0\n"));
    assert!(text.contains(&format!("  {question}\n")));
    assert!(text.contains("  > Your answer\n  [q] to quit\n"));
    assert!(!text.contains("Correct!"));
}

#[test]
fn feedback_appears_after_an_answer() {
    let (mut machine, mut timeline) = machine(3);
    send(&mut machine, &mut timeline, Input::Enter);
    send(&mut machine, &mut timeline, Input::Enter);

    let answer = machine.current_question().unwrap().answer();
    for c in answer.to_string().chars() {
        send(&mut machine, &mut timeline, Input::Char(c));
    }
    send(&mut machine, &mut timeline, Input::Enter);

    let text = frame(&machine);
    assert!(text.contains("  Correct: 1/1\n"));
    assert!(text.ends_with("  \n  \n  Correct!\n"));

    run_for(&mut machine, &mut timeline, Duration::from_millis(1_100));
    assert!(!frame(&machine).contains("Correct!\n"));
}

#[test]
fn time_out_frame_has_banner_and_bell() {
    let (mut machine, mut timeline) = machine(4);
    send(&mut machine, &mut timeline, Input::Enter);
    send(&mut machine, &mut timeline, Input::Enter);

    let rest = run_for(&mut machine, &mut timeline, Duration::from_secs(31));
    assert_eq!(rest, vec![Command::Bell]);
    assert_eq!(machine.phase(), SessionPhase::Results);

    let text = frame(&machine);
    let body = text.strip_prefix(CLEAR_SCREEN).unwrap();
    assert!(body.starts_with("\n  \n  \n  💣💥 BOOM! TIME’S UP! 💥💣\n  \n  Final Score: 0 / 0\n"));
    assert!(body.ends_with("  [←] to play again\n"));
    assert!(!body.contains("Avg time"));
}

#[test]
fn narrow_bar_follows_config() {
    let config = SessionConfig::default().with_bar_width(10).unwrap();
    let mut machine = build_machine(config, fixed_clock(), StdRng::seed_from_u64(5));
    machine.handle(Input::Enter.into());
    machine.handle(Input::Enter.into());

    let bar = machine.countdown_bar().render(&PlainPainter);
    assert_eq!(bar.chars().count(), 13);
}

fn input_strategy() -> impl Strategy<Value = Input> {
    prop_oneof![
        Just(Input::Up),
        Just(Input::Down),
        Just(Input::Back),
        Just(Input::Forward),
        Just(Input::Enter),
        Just(Input::Backspace),
        prop::char::range('0', '9').prop_map(Input::Char),
        Just(Input::Char('-')),
        Just(Input::Char('q')),
    ]
}

proptest! {
    #[test]
    fn any_key_sequence_renders_a_frame(
        seed in any::<u64>(),
        inputs in prop::collection::vec((input_strategy(), 0_u64..400), 0..60),
    ) {
        let (mut machine, mut timeline) = machine(seed);
        for (input, wait_ms) in inputs {
            let rest = send(&mut machine, &mut timeline, input);
            if rest.contains(&Command::Exit) {
                break;
            }
            run_for(&mut machine, &mut timeline, Duration::from_millis(wait_ms));
            let text = frame(&machine);
            prop_assert!(text.starts_with(CLEAR_SCREEN));
            prop_assert!(machine.budget().remaining() <= machine.budget().limit());
        }
    }
}
