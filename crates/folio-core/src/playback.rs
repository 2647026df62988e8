//! Music player bridge.
//!
//! [`PlaybackBridge`] is the single owner of "which item is selected and is it
//! playing". Transport methods update that state optimistically and return the
//! [`PlayerCommand`]s the caller must forward to the concrete [`Player`].
//! Asynchronous notifications from the player come back through
//! [`PlaybackBridge::on_player_state`].
//!
//! Time is passed in explicitly (milliseconds, any monotonic origin) so the
//! suppression window can be tested without a clock.
//!
//! [`handover`] decides what attaching a backend does to the bridge.

/// How long player notifications are ignored after we issued a command.
pub const SUPPRESS_WINDOW_MS: f64 = 1200.0;

/// Player state as enumerated by the embedded widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerState {
    Unstarted,
    Ended,
    Playing,
    Paused,
    Buffering,
    Cued,
}

impl PlayerState {
    /// Maps the widget's numeric state code.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            -1 => Some(Self::Unstarted),
            0 => Some(Self::Ended),
            1 => Some(Self::Playing),
            2 => Some(Self::Paused),
            3 => Some(Self::Buffering),
            5 => Some(Self::Cued),
            _ => None,
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            Self::Unstarted => -1,
            Self::Ended => 0,
            Self::Playing => 1,
            Self::Paused => 2,
            Self::Buffering => 3,
            Self::Cued => 5,
        }
    }
}

/// Instruction for the underlying player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerCommand {
    /// Load item `index`; start it right away if `autoplay`.
    Load { index: usize, autoplay: bool },
    Play,
    Pause,
}

/// Narrow capability interface over a concrete playback backend.
pub trait Player {
    fn load(&self, index: usize, autoplay: bool);
    fn play(&self);
    fn pause(&self);

    /// Forwards a batch of bridge commands in order.
    fn dispatch(&self, commands: &[PlayerCommand]) {
        for command in commands {
            match *command {
                PlayerCommand::Load { index, autoplay } => self.load(index, autoplay),
                PlayerCommand::Play => self.play(),
                PlayerCommand::Pause => self.pause(),
            }
        }
    }
}

/// Effect of attaching a backend on the shared playback state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handover {
    /// The incoming player is already the active one.
    Unchanged,
    /// A new instance of the active backend over the same list: keep the
    /// selection and restore it on the new instance.
    Rebind,
    /// Another backend or another list: pause the old player and start over.
    Switch,
}

/// Decides how to attach `incoming` given the `active` backend kind.
///
/// `same_instance` says the incoming player is the active one;
/// `same_len` says its list has as many items as the bridge.
pub fn handover<K: PartialEq>(
    active: Option<K>,
    incoming: K,
    same_instance: bool,
    same_len: bool,
) -> Handover {
    match active {
        Some(kind) if kind == incoming && same_instance => Handover::Unchanged,
        Some(kind) if kind == incoming && same_len => Handover::Rebind,
        _ => Handover::Switch,
    }
}

/// Shared playback state with single-writer transport methods.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlaybackBridge {
    index: usize,
    len: usize,
    playing: bool,
    interacted: bool,
    issued_at: Option<f64>,
    last_reported: Option<PlayerState>,
}

impl PlaybackBridge {
    /// Creates a paused bridge over a list of `len` items.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            ..Default::default()
        }
    }

    /// Points the bridge at a different list, keeping the interaction flag.
    pub fn reset(&mut self, len: usize) {
        *self = Self {
            len,
            interacted: self.interacted,
            ..Default::default()
        };
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether the user has started playback at least once this session.
    pub fn has_interacted(&self) -> bool {
        self.interacted
    }

    /// A clock that went backwards never extends the window.
    fn is_suppressed(&self, now_ms: f64) -> bool {
        self.issued_at
            .is_some_and(|at| (0.0..SUPPRESS_WINDOW_MS).contains(&(now_ms - at)))
    }

    fn issue(&mut self, now_ms: f64) {
        self.interacted = true;
        self.issued_at = Some(now_ms);
    }

    /// Commands that put a fresh player instance on the current selection.
    ///
    /// Starts a suppression window but does not count as user interaction.
    pub fn restore(&mut self, now_ms: f64) -> Vec<PlayerCommand> {
        self.last_reported = None;
        if self.len == 0 {
            return Vec::new();
        }
        self.issued_at = Some(now_ms);
        vec![PlayerCommand::Load {
            index: self.index,
            autoplay: self.playing,
        }]
    }

    fn load(&mut self, index: usize, now_ms: f64) -> Vec<PlayerCommand> {
        self.index = index;
        self.playing = true;
        self.issue(now_ms);
        vec![PlayerCommand::Load {
            index,
            autoplay: true,
        }]
    }

    /// Selects the next item, wrapping to the first.
    pub fn next(&mut self, now_ms: f64) -> Vec<PlayerCommand> {
        if self.len == 0 {
            return Vec::new();
        }
        self.load((self.index + 1) % self.len, now_ms)
    }

    /// Selects the previous item, wrapping to the last.
    pub fn previous(&mut self, now_ms: f64) -> Vec<PlayerCommand> {
        if self.len == 0 {
            return Vec::new();
        }
        self.load((self.index + self.len - 1) % self.len, now_ms)
    }

    /// Selects a specific item. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize, now_ms: f64) -> Vec<PlayerCommand> {
        if index >= self.len {
            return Vec::new();
        }
        self.load(index, now_ms)
    }

    /// Flips between playing and paused.
    pub fn toggle(&mut self, now_ms: f64) -> Vec<PlayerCommand> {
        if self.len == 0 {
            return Vec::new();
        }
        self.playing = !self.playing;
        self.issue(now_ms);
        if self.playing {
            vec![PlayerCommand::Play]
        } else {
            vec![PlayerCommand::Pause]
        }
    }

    /// Reconciles a notification from the player.
    ///
    /// Duplicate states are coalesced, and every state is ignored within the
    /// suppression window, so an end report caused by our own load cannot
    /// skip a track.
    pub fn on_player_state(&mut self, state: PlayerState, now_ms: f64) -> Vec<PlayerCommand> {
        if self.last_reported == Some(state) {
            return Vec::new();
        }
        self.last_reported = Some(state);

        match state {
            _ if self.is_suppressed(now_ms) => Vec::new(),
            PlayerState::Ended if self.len > 0 => self.load((self.index + 1) % self.len, now_ms),
            PlayerState::Playing => {
                self.playing = true;
                Vec::new()
            }
            PlayerState::Paused => {
                self.playing = false;
                Vec::new()
            }
            _ => Vec::new(),
        }
    }
}
