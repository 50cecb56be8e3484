//! Audio Module
//!
//! Footstep playback is delegated to an [`AudioTrigger`]. The engine only
//! decides *when* a step plays and at what pitch; mixing and spatialization
//! belong to the host's audio backend.

/// Sink for footstep playback requests.
pub trait AudioTrigger {
    /// Play the footstep clip at the given pitch multiplier, stopping any
    /// footstep that is still playing.
    fn play_footstep(&mut self, pitch_multiplier: f32);

    /// Whether a footstep clip is configured.
    fn has_clip(&self) -> bool;
}

/// Footstep source bound to an optional clip.
///
/// Without a clip every request is a silent no-op; the missing clip is
/// reported once, when the source is created.
#[derive(Debug, Clone)]
pub struct FootstepAudio {
    clip: Option<String>,
    spatialize: bool,
    last_pitch: Option<f32>,
    play_count: u32,
}

impl FootstepAudio {
    /// Create a spatialized footstep source.
    pub fn new(clip: Option<String>) -> Self {
        if clip.is_none() {
            log::warn!("Footstep sound not set; footsteps will be silent");
        }
        Self {
            clip,
            spatialize: true,
            last_pitch: None,
            play_count: 0,
        }
    }

    pub fn clip(&self) -> Option<&str> {
        self.clip.as_deref()
    }

    #[inline]
    pub fn is_spatialized(&self) -> bool {
        self.spatialize
    }

    /// Pitch of the most recent step that actually played.
    #[inline]
    pub fn last_pitch(&self) -> Option<f32> {
        self.last_pitch
    }

    /// Number of steps that actually played.
    #[inline]
    pub fn play_count(&self) -> u32 {
        self.play_count
    }
}

impl AudioTrigger for FootstepAudio {
    fn play_footstep(&mut self, pitch_multiplier: f32) {
        let Some(clip) = self.clip.as_deref() else {
            return;
        };
        log::debug!("footstep '{clip}' at pitch {pitch_multiplier:.2}");
        self.last_pitch = Some(pitch_multiplier);
        self.play_count += 1;
    }

    fn has_clip(&self) -> bool {
        self.clip.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plays_with_clip() {
        let mut audio = FootstepAudio::new(Some("footstep_wood.ogg".into()));
        assert!(audio.has_clip());
        assert!(audio.is_spatialized());

        audio.play_footstep(1.5);
        audio.play_footstep(1.0);
        assert_eq!(audio.play_count(), 2);
        assert_eq!(audio.last_pitch(), Some(1.0));
    }

    #[test]
    fn test_missing_clip_is_silent() {
        let mut audio = FootstepAudio::new(None);
        assert!(!audio.has_clip());

        audio.play_footstep(1.0);
        assert_eq!(audio.play_count(), 0);
        assert_eq!(audio.last_pitch(), None);
    }
}
