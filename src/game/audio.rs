//! Audio Cue Module
//!
//! Feedback cue dispatch for the placement exercise. The scene requests a
//! cue and the host drains it once per frame; a new request replaces any
//! undrained one, matching stop-then-play-one-shot behavior. No mixing.

/// The feedback sounds the scene can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    RightAnswer,
    WrongAnswer,
}

/// Latest-wins pending cue, drained by the host.
#[derive(Debug, Default)]
pub struct AudioDirector {
    pending: Option<AudioCue>,
}

impl AudioDirector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a cue. Replaces any cue not yet drained.
    pub fn play(&mut self, cue: AudioCue) {
        if self.pending.is_some() {
            log::debug!("audio: replacing undrained cue with {:?}", cue);
        }
        self.pending = Some(cue);
    }

    /// Take the pending cue, if any. Called once per frame by the host.
    pub fn take_pending(&mut self) -> Option<AudioCue> {
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_drains() {
        let mut audio = AudioDirector::new();
        audio.play(AudioCue::RightAnswer);
        assert_eq!(audio.take_pending(), Some(AudioCue::RightAnswer));
        assert_eq!(audio.take_pending(), None);
    }

    #[test]
    fn test_latest_wins() {
        let mut audio = AudioDirector::new();
        audio.play(AudioCue::RightAnswer);
        audio.play(AudioCue::WrongAnswer);
        assert_eq!(audio.take_pending(), Some(AudioCue::WrongAnswer));
    }
}
