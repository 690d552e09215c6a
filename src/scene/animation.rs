use crate::util::time;

const PULSE_UP_SCALE: f32 = 1.15;
const PULSE_UP_SECS: f64 = 0.15;
const PULSE_BACK_SECS: f64 = 0.075;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaleKind {
    /// Scale up by 15% then back to 1
    Pulse,
    /// Scale to a target and hold it
    To { scale: f32, duration: f64 },
}

/// A short scale animation attached to a drawable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleAnimation {
    pub kind: ScaleKind,
    pub started_at: f64,
}

impl ScaleAnimation {
    pub fn pulse() -> Self {
        Self::starting_at(ScaleKind::Pulse, time::current_time_secs())
    }

    pub fn scale_to(scale: f32, duration: f64) -> Self {
        Self::starting_at(ScaleKind::To { scale, duration }, time::current_time_secs())
    }

    pub fn starting_at(kind: ScaleKind, started_at: f64) -> Self {
        Self { kind, started_at }
    }

    pub fn duration(&self) -> f64 {
        match self.kind {
            ScaleKind::Pulse => PULSE_UP_SECS + PULSE_BACK_SECS,
            ScaleKind::To { duration, .. } => duration,
        }
    }

    pub fn is_finished(&self, now: f64) -> bool {
        now - self.started_at >= self.duration()
    }

    /// Scale factor at time `now`.
    pub fn scale_at(&self, now: f64) -> f32 {
        let elapsed = (now - self.started_at).max(0.0);
        match self.kind {
            ScaleKind::Pulse => {
                if elapsed < PULSE_UP_SECS {
                    lerp(1.0, PULSE_UP_SCALE, elapsed / PULSE_UP_SECS)
                } else if elapsed < PULSE_UP_SECS + PULSE_BACK_SECS {
                    lerp(PULSE_UP_SCALE, 1.0, (elapsed - PULSE_UP_SECS) / PULSE_BACK_SECS)
                } else {
                    1.0
                }
            }
            ScaleKind::To { scale, duration } => {
                if duration <= 0.0 || elapsed >= duration {
                    scale
                } else {
                    lerp(1.0, scale, elapsed / duration)
                }
            }
        }
    }
}

fn lerp(from: f32, to: f32, t: f64) -> f32 {
    from + (to - from) * t.clamp(0.0, 1.0) as f32
}
