/// Easing curves mapping normalized progress `k` in \[0, 1\] to an eased fraction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    #[default]
    ExponentialInOut,
}

impl Easing {
    pub fn apply(self, k: f32) -> f32 {
        let k = k.clamp(0.0, 1.0);
        match self {
            Easing::Linear => k,
            Easing::ExponentialInOut => exponential_in_out(k),
        }
    }
}

/// Slow start, steep middle, slow settle. Hits 0 and 1 exactly at the ends.
pub fn exponential_in_out(k: f32) -> f32 {
    if k <= 0.0 {
        return 0.0;
    }
    if k >= 1.0 {
        return 1.0;
    }
    let k2 = k * 2.0;
    if k2 < 1.0 {
        0.5 * 1024f32.powf(k2 - 1.0)
    } else {
        0.5 * (2.0 - 2f32.powf(-10.0 * (k2 - 1.0)))
    }
}
