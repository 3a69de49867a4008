//! Per-session animation set driving panels toward a formation.
//!
//! Starting a transition is a hard cutover: every in-flight tween is dropped
//! first, so each panel has at most one position and one rotation writer.

use crate::easing::Easing;
use crate::error::TransitionError;
use crate::formation::Formation;
use crate::scene::{PanelObject, SceneRegistry};
use crate::tween::{SettleTimer, Tween};
use rand::Rng;
use std::time::Duration;

/// Which transform channel of which panel a tween writes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TweenSubject {
    Position(usize),
    Rotation(usize),
}

impl TweenSubject {
    pub fn panel_index(self) -> usize {
        match self {
            TweenSubject::Position(i) | TweenSubject::Rotation(i) => i,
        }
    }
}

#[derive(Clone, Debug)]
struct ActiveTween {
    subject: TweenSubject,
    tween: Tween,
}

/// Outcome of one [`AnimationSet::update`] step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnimationStep {
    /// Some panel transform changed this step.
    pub moved: bool,
    /// The bookkeeping timer is still running and wants a redraw.
    pub settling: bool,
    /// The settle timer ran out during this step.
    pub settled: bool,
}

impl AnimationStep {
    pub fn needs_redraw(&self) -> bool {
        self.moved || self.settling || self.settled
    }
}

#[derive(Clone, Debug, Default)]
pub struct AnimationSet {
    tweens: Vec<ActiveTween>,
    settle: Option<SettleTimer>,
    easing: Easing,
}

impl AnimationSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_easing(easing: Easing) -> Self {
        Self {
            easing,
            ..Self::default()
        }
    }

    /// Start moving every panel toward `targets`.
    ///
    /// Each tween lasts `base + random * base`, drawn independently for the
    /// position and rotation of each panel. A subject-less settle timer of
    /// `2 * base` runs alongside.
    pub fn transform<R: Rng>(
        &mut self,
        scene: &SceneRegistry,
        targets: &Formation,
        base: Duration,
        rng: &mut R,
    ) -> Result<(), TransitionError> {
        if scene.len() != targets.len() {
            return Err(TransitionError::LengthMismatch {
                panels: scene.len(),
                targets: targets.len(),
            });
        }
        self.cancel_all();

        self.tweens.reserve(scene.len() * 2);
        for (i, (panel, target)) in scene.panels().iter().zip(targets.iter()).enumerate() {
            self.tweens.push(ActiveTween {
                subject: TweenSubject::Position(i),
                tween: Tween::new(
                    panel.position(),
                    target.position,
                    staggered(base, rng),
                    self.easing,
                ),
            });
            self.tweens.push(ActiveTween {
                subject: TweenSubject::Rotation(i),
                tween: Tween::new(
                    panel.rotation(),
                    target.rotation,
                    staggered(base, rng),
                    self.easing,
                ),
            });
        }
        self.settle = Some(SettleTimer::new(base * 2));
        Ok(())
    }

    /// Drop every tween and the settle timer. Panels keep whatever values
    /// interpolation had reached.
    pub fn cancel_all(&mut self) {
        self.tweens.clear();
        self.settle = None;
    }

    /// Advance all tweens by `dt`, write sampled values into the scene and
    /// retire the finished ones.
    pub fn update(&mut self, dt: Duration, scene: &mut SceneRegistry) -> AnimationStep {
        let panels = scene.panels_mut();
        let moved = !self.tweens.is_empty();
        self.tweens.retain_mut(|active| {
            let value = active.tween.advance(dt);
            if let Some(panel) = panels.get_mut(active.subject.panel_index()) {
                apply(panel, active.subject, value);
            }
            !active.tween.is_finished()
        });

        let mut step = AnimationStep {
            moved,
            ..AnimationStep::default()
        };
        if let Some(timer) = self.settle.as_mut() {
            timer.advance(dt);
            if timer.is_finished() {
                self.settle = None;
                step.settled = true;
            } else {
                step.settling = true;
            }
        }
        step
    }

    pub fn is_idle(&self) -> bool {
        self.tweens.is_empty() && self.settle.is_none()
    }

    pub fn active_tweens(&self) -> usize {
        self.tweens.len()
    }

    pub fn active_position_tweens(&self) -> usize {
        self.count(|s| matches!(s, TweenSubject::Position(_)))
    }

    pub fn active_rotation_tweens(&self) -> usize {
        self.count(|s| matches!(s, TweenSubject::Rotation(_)))
    }

    pub fn is_settling(&self) -> bool {
        self.settle.is_some()
    }

    /// Longest remaining time before the set goes idle.
    pub fn remaining(&self) -> Duration {
        let settle = self
            .settle
            .as_ref()
            .map(SettleTimer::remaining)
            .unwrap_or_default();
        self.tweens
            .iter()
            .map(|a| {
                let total = a.tween.duration();
                total.mul_f32(1.0 - a.tween.progress())
            })
            .fold(settle, Duration::max)
    }

    fn count(&self, pred: impl Fn(TweenSubject) -> bool) -> usize {
        self.tweens.iter().filter(|a| pred(a.subject)).count()
    }
}

fn apply(panel: &mut PanelObject, subject: TweenSubject, value: glam::Vec3) {
    match subject {
        TweenSubject::Position(_) => panel.set_position(value),
        TweenSubject::Rotation(_) => panel.set_rotation(value),
    }
}

#[inline]
fn staggered<R: Rng>(base: Duration, rng: &mut R) -> Duration {
    base + base.mul_f64(rng.gen::<f64>())
}
