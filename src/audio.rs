//! Audio stub.
//!
//! Sound playback is out of scope; the game logic still emits cues so a
//! real backend can slot in behind [`play`] later.

/// Moments the presentation layer may voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Cast,
    Splash,
    Success,
    Fail,
}

/// No-op hook. Swallows the cue.
pub fn play(_cue: SoundCue) {}
