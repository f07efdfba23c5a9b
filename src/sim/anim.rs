//! Explosion timers
//!
//! Gameplay only cares whether an explosion has finished; the frame index is
//! derived on demand for the renderer and never feeds back into the simulation.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Explosion {
    pub elapsed: f32,
    pub duration: f32,
}

impl Explosion {
    pub fn new(duration: f32) -> Self {
        Self {
            elapsed: 0.0,
            duration,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// 0..=1
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// Animation frame for an explosion drawn with `frame_count` frames
    pub fn frame(&self, frame_count: u32) -> u32 {
        let last = frame_count.saturating_sub(1);
        ((self.progress() * frame_count as f32) as u32).min(last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_cover_duration() {
        let mut ex = Explosion::new(1.0);
        assert_eq!(ex.frame(8), 0);
        ex.advance(0.5);
        assert_eq!(ex.frame(8), 4);
        assert!(!ex.is_finished());
        ex.advance(0.5);
        assert!(ex.is_finished());
        assert_eq!(ex.frame(8), 7);
    }
}
