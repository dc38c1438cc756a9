use super::state::{PlayerState, PrevAction, SelectAction};

fn mid_track(index: usize, position: f64, duration: f64) -> PlayerState {
    let mut state = PlayerState::new();
    state.current_index = index;
    state.position = position;
    state.duration = duration;
    state
}

#[test]
fn starts_at_first_track_stopped() {
    let state = PlayerState::new();
    assert_eq!(state.current_index, 0);
    assert_eq!(state.position, 0.0);
    assert_eq!(state.duration, 0.0);
    assert!(!state.playing);
    assert!(!state.pending_autoplay);
}

#[test]
fn selecting_another_track_resets_progress_and_arms_autoplay() {
    let mut state = mid_track(0, 42.0, 180.0);
    state.playing = true;

    assert_eq!(state.select(2, 3), SelectAction::Switch);
    assert_eq!(state.current_index, 2);
    assert_eq!(state.position, 0.0);
    assert_eq!(state.duration, 0.0);
    assert!(state.pending_autoplay);
    // The playing flag follows the handle's events, not the selection.
    assert!(state.playing);
}

#[test]
fn selecting_the_current_track_requests_a_toggle() {
    let mut state = mid_track(1, 42.0, 180.0);

    assert_eq!(state.select(1, 3), SelectAction::Toggle);
    assert_eq!(state.current_index, 1);
    assert_eq!(state.position, 42.0);
    assert_eq!(state.duration, 180.0);
    assert!(!state.pending_autoplay);
}

#[test]
fn selecting_out_of_range_is_ignored() {
    let mut state = mid_track(1, 42.0, 180.0);

    assert_eq!(state.select(3, 3), SelectAction::Ignored);
    assert_eq!(state.select(0, 0), SelectAction::Ignored);
    assert_eq!(state.current_index, 1);
    assert_eq!(state.position, 42.0);
}

#[test]
fn next_advances_and_wraps_to_first() {
    let mut state = PlayerState::new();

    state.next(3);
    state.next(3);
    assert_eq!(state.current_index, 2);

    state.next(3);
    assert_eq!(state.current_index, 0);
    assert!(state.pending_autoplay);
}

#[test]
fn previous_early_in_track_wraps_to_last() {
    let mut state = mid_track(0, 2.5, 180.0);

    assert_eq!(state.previous(3), PrevAction::Switched);
    assert_eq!(state.current_index, 2);
    assert_eq!(state.position, 0.0);
    assert!(state.pending_autoplay);
}

#[test]
fn previous_late_in_track_rewinds_in_place() {
    let mut state = mid_track(1, 12.0, 180.0);

    assert_eq!(state.previous(3), PrevAction::Rewound);
    assert_eq!(state.current_index, 1);
    assert_eq!(state.position, 0.0);
    assert_eq!(state.duration, 180.0);
    assert!(!state.pending_autoplay);
}

#[test]
fn previous_at_threshold_still_changes_track() {
    // Exactly 3s is not "past" the threshold.
    let mut state = mid_track(1, 3.0, 180.0);

    assert_eq!(state.previous(3), PrevAction::Switched);
    assert_eq!(state.current_index, 0);
}

#[test]
fn ended_on_last_track_advances_to_first_with_autoplay() {
    let mut state = mid_track(2, 180.0, 180.0);

    state.track_ended(3);
    assert_eq!(state.current_index, 0);
    assert_eq!(state.position, 0.0);
    assert_eq!(state.duration, 0.0);
    assert!(state.pending_autoplay);
}

#[test]
fn transport_is_inert_with_an_empty_playlist() {
    let mut state = PlayerState::new();

    state.next(0);
    state.track_ended(0);
    assert_eq!(state.previous(0), PrevAction::Rewound);
    assert_eq!(state.current_index, 0);
    assert!(!state.pending_autoplay);
}

#[test]
fn seek_mirrors_immediately_and_clamps_to_duration() {
    let mut state = mid_track(0, 10.0, 180.0);

    state.seek(95.5);
    assert_eq!(state.position, 95.5);

    state.seek(500.0);
    assert_eq!(state.position, 180.0);

    state.seek(-4.0);
    assert_eq!(state.position, 0.0);

    state.seek(f64::NAN);
    assert_eq!(state.position, 0.0);
}

#[test]
fn seek_with_unknown_duration_stays_at_zero() {
    let mut state = PlayerState::new();

    state.seek(30.0);
    assert_eq!(state.position, 0.0);
}

#[test]
fn reported_position_is_clamped_to_known_duration() {
    let mut state = mid_track(0, 0.0, 60.0);

    state.report_position(59.0);
    assert_eq!(state.position, 59.0);

    state.report_position(61.2);
    assert_eq!(state.position, 60.0);

    state.report_position(-1.0);
    assert_eq!(state.position, 0.0);

    state.report_position(f64::NAN);
    assert_eq!(state.position, 0.0);
}

#[test]
fn reported_duration_rejects_non_finite_values() {
    let mut state = mid_track(0, 10.0, 0.0);

    state.report_duration(f64::NAN);
    assert_eq!(state.duration, 0.0);

    state.report_duration(-3.0);
    assert_eq!(state.duration, 0.0);

    state.report_duration(180.0);
    assert_eq!(state.duration, 180.0);
}

#[test]
fn reported_duration_pulls_position_back_into_range() {
    let mut state = mid_track(0, 250.0, 0.0);

    state.report_duration(180.0);
    assert_eq!(state.position, 180.0);
}

#[test]
fn pending_autoplay_is_consumed_once() {
    let mut state = PlayerState::new();
    state.switch_to(1);

    assert!(state.take_pending_autoplay());
    assert!(!state.take_pending_autoplay());
    assert!(!state.pending_autoplay);
}

#[test]
fn playing_flag_follows_handle_reports() {
    let mut state = PlayerState::new();

    state.set_playing(true);
    assert!(state.playing);
    state.set_playing(false);
    assert!(!state.playing);
}
