use super::*;
use crate::region::catalog;

fn start(high_score: Option<u64>, now: u64) -> Transition {
    Session::new(catalog::builtin(), high_score, now).unwrap()
}

fn text(commands: &[Command], target: TextTarget) -> Option<&str> {
    commands.iter().find_map(|c| match c {
        Command::SetText { target: t, text } if *t == target => Some(text.as_str()),
        _ => None,
    })
}

#[test]
fn test_start_commands() {
    let Transition { session, commands } = start(None, 100);
    assert_eq!(session.phase, Phase::Question);
    assert_eq!(session.current, 0);
    assert_eq!(text(&commands, TextTarget::Score), Some("0"));
    assert_eq!(text(&commands, TextTarget::Timer), Some("0"));
    assert_eq!(text(&commands, TextTarget::HighScore), Some("--"));
    assert_eq!(text(&commands, TextTarget::LocationName), Some("Bookstein Hall"));
    assert!(commands.contains(&Command::ClearOverlays));
    assert!(commands.contains(&Command::HidePanel { panel: Panel::GameOver }));
    assert!(commands.contains(&Command::HidePanel { panel: Panel::Feedback }));
}

#[test]
fn test_start_shows_existing_high_score() {
    let Transition { commands, .. } = start(Some(42), 100);
    assert_eq!(text(&commands, TextTarget::HighScore), Some("42"));
}

#[test]
fn test_new_rejects_bad_config() {
    let mut regions = catalog::builtin();
    regions[1].radius = Some(-1.);
    assert!(Session::new(regions, None, 0).is_err());
    assert!(Session::new(vec![], None, 0).is_err());
}

#[test]
fn test_map_ready_fits_view() {
    let Transition { session, .. } = start(None, 100);
    let regions = session.regions.clone();
    let Transition { session, commands } = session.handle(Event::MapReady);
    assert_eq!(
        commands,
        vec![Command::FitView {
            bounds: view::fit_bounds(&regions),
            padding: view::VIEW_PADDING_PX,
        }]
    );
    let Transition { commands, .. } = session.handle(Event::ViewFitted { zoom: 16. });
    match &commands[..] {
        [Command::LockView { center, zoom }] => {
            assert_eq!(*center, view::centroid(&regions));
            assert_relative_eq!(*zoom, 16.8, epsilon = 1e-12);
        }
        other => panic!("expected a single LockView, got {:?}", other),
    }
}

#[test_log::test]
fn test_perfect_game() {
    let Transition { mut session, .. } = start(None, 100);
    let mut last = Vec::new();
    for turn in 0u64..5 {
        let center = session.regions[session.current].center();
        let t = session.handle(Event::DoubleClick {
            point: center,
            now: 104 + turn * 8,
        });
        assert_eq!(
            text(&t.commands, TextTarget::Feedback),
            Some("Your answer is correct!!")
        );
        let expected_score = (turn + 1).to_string();
        assert_eq!(text(&t.commands, TextTarget::Score), Some(expected_score.as_str()));
        assert!(t.commands.contains(&Command::ScheduleAdvance {
            after_secs: ADVANCE_DELAY_SECS,
            generation: 0,
        }));
        assert_eq!(t.session.phase, Phase::Feedback);

        let t = t.session.handle(Event::AdvanceDue {
            generation: 0,
            now: 142,
        });
        last = t.commands;
        session = t.session;
    }
    assert!(session.is_complete());
    assert_eq!(session.score(), 5);
    assert_eq!(text(&last, TextTarget::FinalScore), Some("5 Correct, 0 Incorrect"));
    assert_eq!(text(&last, TextTarget::FinalTime), Some("Time: 42 seconds"));
    assert!(last.contains(&Command::RecordTime { seconds: 42 }));
    assert!(last
        .iter()
        .any(|c| matches!(c, Command::ShowPanel { panel: Panel::GameOver })));
}

#[test]
fn test_miss_counts_incorrect() {
    let Transition { mut session, .. } = start(None, 0);
    let far = LatLng::new(0., 0.);
    let mut last = Vec::new();
    for turn in 0..5 {
        let point = if turn == 0 {
            far
        } else {
            session.regions[session.current].center()
        };
        let t = session.handle(Event::DoubleClick { point, now: 10 });
        if turn == 0 {
            assert_eq!(
                text(&t.commands, TextTarget::Feedback),
                Some("Sorry wrong location.")
            );
            // No score update on a miss
            assert_eq!(text(&t.commands, TextTarget::Score), None);
        }
        let t = t.session.handle(Event::AdvanceDue {
            generation: 0,
            now: 30,
        });
        last = t.commands;
        session = t.session;
    }
    assert_eq!(session.score(), 4);
    assert_eq!(text(&last, TextTarget::FinalScore), Some("4 Correct, 1 Incorrect"));
    assert!(last.contains(&Command::RecordTime { seconds: 30 }));
}

#[test]
fn test_rotated_region_draws_polygon() {
    let Transition { session, .. } = start(None, 0);
    let center = session.regions[0].center();
    let corners = session.regions[0].corners();
    let t = session.handle(Event::DoubleClick {
        point: center,
        now: 1,
    });
    let polygon = t
        .commands
        .iter()
        .find_map(|c| match c {
            Command::DrawPolygon { vertices, .. } => Some(vertices.clone()),
            _ => None,
        })
        .expect("rotated extent should draw a polygon");
    assert_eq!(polygon.len(), 5);
    assert_eq!(polygon[0], corners[0]);
    assert_eq!(polygon[4], corners[0]);
}

#[test]
fn test_radial_region_draws_rectangle() {
    let Transition { session, .. } = start(None, 0);
    let t = session.handle(Event::DoubleClick {
        point: LatLng::new(0., 0.),
        now: 1,
    });
    let t = t.session.handle(Event::AdvanceDue {
        generation: 0,
        now: 3,
    });
    // Campus Store, radius-mode
    let expected = t.session.regions[1].bounds();
    let t = t.session.handle(Event::DoubleClick {
        point: LatLng::new(0., 0.),
        now: 4,
    });
    let bounds = t
        .commands
        .iter()
        .find_map(|c| match c {
            Command::DrawRectangle { bounds, .. } => Some(*bounds),
            _ => None,
        })
        .expect("radial extent should draw a rectangle");
    assert_eq!(bounds, expected);
}

#[test]
fn test_marker_styles_follow_verdict() {
    let Transition { session, .. } = start(None, 0);
    let center = session.regions[0].center();
    let t = session.handle(Event::DoubleClick {
        point: center,
        now: 1,
    });
    let styles: Vec<&MarkerStyle> = t
        .commands
        .iter()
        .filter_map(|c| match c {
            Command::DrawMarker { style, .. } => Some(style),
            _ => None,
        })
        .collect();
    assert_eq!(styles.len(), 2);
    assert_eq!(styles[0], &MarkerStyle::answer(true));
    assert_eq!(styles[1], &MarkerStyle::target(true));
    assert_eq!(styles[0].fill_color, CORRECT_COLOR);
}

#[test]
fn test_click_during_feedback_ignored() {
    let Transition { session, .. } = start(None, 0);
    let center = session.regions[0].center();
    let t = session.handle(Event::DoubleClick {
        point: center,
        now: 1,
    });
    let before = t.session.clone();
    let t = t.session.handle(Event::DoubleClick {
        point: center,
        now: 2,
    });
    assert!(t.commands.is_empty());
    assert_eq!(t.session, before);
}

#[test]
fn test_stale_advance_ignored_after_replay() {
    let Transition { session, .. } = start(None, 0);
    let center = session.regions[0].center();
    let t = session.handle(Event::DoubleClick {
        point: center,
        now: 1,
    });
    assert!(t.commands.contains(&Command::ScheduleAdvance {
        after_secs: ADVANCE_DELAY_SECS,
        generation: 0,
    }));

    // Reset before the deferred advance fires
    let t = t.session.handle(Event::PlayAgain { now: 5 });
    assert_eq!(t.session.generation, 1);
    assert_eq!(t.session.score(), 0);
    assert_eq!(text(&t.commands, TextTarget::LocationName), Some("Bookstein Hall"));

    let before = t.session.clone();
    let t = t.session.handle(Event::AdvanceDue {
        generation: 0,
        now: 3,
    });
    assert!(t.commands.is_empty());
    assert_eq!(t.session, before);
    assert_eq!(t.session.current, 0);
}

#[test]
fn test_advance_without_answer_ignored() {
    let Transition { session, .. } = start(None, 0);
    let before = session.clone();
    let t = session.handle(Event::AdvanceDue {
        generation: 0,
        now: 3,
    });
    assert!(t.commands.is_empty());
    assert_eq!(t.session, before);
}

#[test]
fn test_tick_updates_timer_only() {
    let Transition { session, .. } = start(None, 100);
    let before = session.clone();
    let t = session.handle(Event::Tick { now: 107 });
    assert_eq!(
        t.commands,
        vec![Command::SetText {
            target: TextTarget::Timer,
            text: "7".into(),
        }]
    );
    assert_eq!(t.session, before);
}

#[test]
fn test_tick_after_completion_is_silent() {
    let Transition { mut session, .. } = start(None, 0);
    for _ in 0..5 {
        let center = session.regions[session.current].center();
        session = session
            .handle(Event::DoubleClick {
                point: center,
                now: 1,
            })
            .session;
        session = session
            .handle(Event::AdvanceDue {
                generation: 0,
                now: 9,
            })
            .session;
    }
    assert!(session.is_complete());
    let t = session.handle(Event::Tick { now: 20 });
    assert!(t.commands.is_empty());
}

#[test]
fn test_replay_restarts_clock_and_sequence() {
    let Transition { session, .. } = start(None, 100);
    let t = session.handle(Event::PlayAgain { now: 500 });
    assert_eq!(t.session.started_at, 500);
    assert_eq!(t.session.current, 0);
    assert_eq!(t.session.phase, Phase::Question);
    assert_eq!(t.session.elapsed(507), 7);
}
