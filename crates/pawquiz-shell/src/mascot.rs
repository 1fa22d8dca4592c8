//! The beckoning paw under each question.
//!
//! Purely decorative: its animation profile is a function of the progress
//! percentage and the reduced-motion preference, nothing else.

/// How lively the paw is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    /// Reduced motion: no animation.
    Still,
    Calm,
    /// At least half the questions answered.
    Excited,
}

/// Progress at which the paw gets excited.
pub const EXCITED_AT: u32 = 50;

/// Keyframes and timing of one beckon loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Beckon {
    pub mood: Mood,
    /// Fold towards the viewer, in degrees.
    pub rotate_x: [f32; 5],
    pub duration_ms: u32,
}

const STILL: Beckon = Beckon {
    mood: Mood::Still,
    rotate_x: [0.0; 5],
    duration_ms: 0,
};

const CALM: Beckon = Beckon {
    mood: Mood::Calm,
    rotate_x: [0.0, -22.0, -40.0, -22.0, 0.0],
    duration_ms: 2200,
};

const EXCITED: Beckon = Beckon {
    mood: Mood::Excited,
    rotate_x: [0.0, -26.0, -48.0, -26.0, 0.0],
    duration_ms: 1800,
};

/// Pick the beckon profile for a progress percentage.
pub fn beckon(progress: u32, reduced_motion: bool) -> Beckon {
    if reduced_motion {
        STILL
    } else if progress >= EXCITED_AT {
        EXCITED
    } else {
        CALM
    }
}

impl Beckon {
    /// One-line text rendering of the paw.
    pub fn cue(&self) -> &'static str {
        match self.mood {
            Mood::Still => "🐾",
            Mood::Calm => "🐾 ~",
            Mood::Excited => "🐾 ~~~ !",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mood_follows_progress() {
        assert_eq!(beckon(0, false).mood, Mood::Calm);
        assert_eq!(beckon(49, false).mood, Mood::Calm);
        assert_eq!(beckon(50, false).mood, Mood::Excited);
        assert_eq!(beckon(100, false).mood, Mood::Excited);
    }

    #[test]
    fn reduced_motion_is_still() {
        let paw = beckon(100, true);
        assert_eq!(paw.mood, Mood::Still);
        assert_eq!(paw.duration_ms, 0);
        assert!(paw.rotate_x.iter().all(|d| *d == 0.0));
    }

    #[test]
    fn excited_loops_faster() {
        let calm = beckon(10, false);
        let excited = beckon(90, false);
        assert!(excited.duration_ms < calm.duration_ms);
        assert!(excited.rotate_x[2] < calm.rotate_x[2]);
    }
}
