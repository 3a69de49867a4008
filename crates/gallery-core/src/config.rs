use crate::camera::CameraConfig;
use crate::constants::TRANSITION_BASE;
use crate::controls::ControlsConfig;
use crate::easing::Easing;
use std::time::Duration;

/// When the per-frame tick issues a redraw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RedrawPolicy {
    /// One redraw on every tick.
    #[default]
    EveryFrame,
    /// Redraw only while tweens run, the settle timer is live, or the
    /// camera moved.
    OnDemand,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SessionConfig {
    pub transition_base: Duration,
    pub easing: Easing,
    pub redraw: RedrawPolicy,
    /// Fixed seed for scatter and stagger randomness; entropy when `None`.
    pub seed: Option<u64>,
    pub camera: CameraConfig,
    pub controls: ControlsConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            transition_base: TRANSITION_BASE,
            easing: Easing::ExponentialInOut,
            redraw: RedrawPolicy::EveryFrame,
            seed: None,
            camera: CameraConfig::default(),
            controls: ControlsConfig::default(),
        }
    }
}

impl SessionConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_redraw(mut self, redraw: RedrawPolicy) -> Self {
        self.redraw = redraw;
        self
    }

    pub fn with_transition_base(mut self, base: Duration) -> Self {
        self.transition_base = base;
        self
    }
}
