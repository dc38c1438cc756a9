//! Playback state owned by one player widget instance.

/// Rewind in place instead of changing track when the current one is at
/// least this far along.
const REWIND_THRESHOLD_SECS: f64 = 3.0;

/// What `select` asks the component layer to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectAction {
    /// The selected track was picked again: toggle play/pause on the handle.
    Toggle,
    /// Selection moved to another track; a source reload follows.
    Switch,
    /// Index out of range, nothing to do.
    Ignored,
}

/// What `previous` decided to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrevAction {
    /// Stayed on the current track; the handle should seek back to 0.
    Rewound,
    /// Moved to the previous track (wrapping first to last).
    Switched,
}

/// All mutation goes through these methods; the view re-derives every
/// visual from the fields on each change.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    pub current_index: usize,
    /// Seconds into the current track, mirrored from the media handle
    /// (optimistically on seek).
    pub position: f64,
    /// Seconds, 0 until the handle reports metadata.
    pub duration: f64,
    /// Reflects the handle's reported state, never an assumption.
    pub playing: bool,
    /// One-shot: start playback once the newly selected source loads.
    pub pending_autoplay: bool,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerState {
    pub fn new() -> Self {
        Self {
            current_index: 0,
            position: 0.0,
            duration: 0.0,
            playing: false,
            pending_autoplay: false,
        }
    }

    pub fn select(&mut self, index: usize, track_count: usize) -> SelectAction {
        if index >= track_count {
            return SelectAction::Ignored;
        }
        if index == self.current_index {
            return SelectAction::Toggle;
        }
        self.switch_to(index);
        SelectAction::Switch
    }

    /// Move selection and zero out progress before the handle can report
    /// anything for the new source, so stale values from the previous track
    /// never show through.
    pub fn switch_to(&mut self, index: usize) {
        self.current_index = index;
        self.position = 0.0;
        self.duration = 0.0;
        self.pending_autoplay = true;
    }

    pub fn next(&mut self, track_count: usize) {
        if track_count == 0 {
            return;
        }
        self.switch_to((self.current_index + 1) % track_count);
    }

    pub fn previous(&mut self, track_count: usize) -> PrevAction {
        if track_count == 0 {
            return PrevAction::Rewound;
        }
        if self.position > REWIND_THRESHOLD_SECS {
            self.position = 0.0;
            return PrevAction::Rewound;
        }
        let target = if self.current_index == 0 {
            track_count - 1
        } else {
            self.current_index - 1
        };
        self.switch_to(target);
        PrevAction::Switched
    }

    /// End-of-track notification: auto-advance with autoplay.
    pub fn track_ended(&mut self, track_count: usize) {
        self.next(track_count);
    }

    /// Optimistic seek: mirrored into state immediately instead of waiting
    /// for the handle's next timeupdate.
    pub fn seek(&mut self, seconds: f64) {
        if !seconds.is_finite() {
            return;
        }
        self.position = seconds.clamp(0.0, self.duration.max(0.0));
    }

    pub fn report_position(&mut self, seconds: f64) {
        if !seconds.is_finite() {
            return;
        }
        let mut position = seconds.max(0.0);
        if self.duration > 0.0 {
            position = position.min(self.duration);
        }
        self.position = position;
    }

    pub fn report_duration(&mut self, seconds: f64) {
        if !seconds.is_finite() || seconds < 0.0 {
            return;
        }
        self.duration = seconds;
        if seconds > 0.0 && self.position > seconds {
            self.position = seconds;
        }
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    /// Consume the one-shot autoplay flag.
    pub fn take_pending_autoplay(&mut self) -> bool {
        std::mem::take(&mut self.pending_autoplay)
    }
}
