//! Stamina-gated dash.
//!
//! A [`Dash`] holds the dash flag and the stamina reservoir of a pawn. While
//! the dash input is held and stamina remains, [`Dash::tick`] drains stamina
//! and returns the boost multiplier; otherwise it returns `1.0` and, only when
//! the input is released, refills stamina.
//!
//! Holding dash with an empty reservoir gives baseline speed and no refill
//! until the input is let go.

use bevy_ecs::prelude::Component;

/// Stamina capacity, in seconds of dashing.
pub const MAX_DASH_STAMINA: f32 = 5.0;
/// Speed and acceleration multiplier while dashing.
pub const DASH_SPEED_MULTIPLIER: f32 = 1.5;

/// The two dash states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DashMode {
    Dashing,
    NotDashing,
}

/// Dash flag plus stamina reservoir.
///
/// `stamina` always stays within `[0, max_stamina]`.
#[derive(Component, Clone, Copy, Debug)]
pub struct Dash {
    dashing: bool,
    stamina: f32,
    max_stamina: f32,
    multiplier: f32,
}

impl Default for Dash {
    fn default() -> Self {
        Self::new()
    }
}

impl Dash {
    /// Full reservoir of [`MAX_DASH_STAMINA`], multiplier [`DASH_SPEED_MULTIPLIER`].
    pub fn new() -> Self {
        Self::with_params(MAX_DASH_STAMINA, DASH_SPEED_MULTIPLIER)
    }

    /// Full reservoir of `max_stamina` with a custom multiplier.
    ///
    /// `max_stamina` is floored at a small positive value so the stamina rate
    /// stays defined; a negative multiplier is treated as zero.
    pub fn with_params(max_stamina: f32, multiplier: f32) -> Self {
        let max_stamina = max_stamina.max(f32::EPSILON);
        Self {
            dashing: false,
            stamina: max_stamina,
            max_stamina,
            multiplier: multiplier.max(0.0),
        }
    }

    /// Builder: start with `stamina` in the reservoir (clamped).
    pub fn with_stamina(mut self, stamina: f32) -> Self {
        self.stamina = stamina.clamp(0.0, self.max_stamina);
        self
    }

    pub fn start(&mut self) {
        self.dashing = true;
    }

    pub fn stop(&mut self) {
        self.dashing = false;
    }

    pub fn is_dashing(&self) -> bool {
        self.dashing
    }

    pub fn mode(&self) -> DashMode {
        if self.dashing {
            DashMode::Dashing
        } else {
            DashMode::NotDashing
        }
    }

    pub fn stamina(&self) -> f32 {
        self.stamina
    }

    pub fn max_stamina(&self) -> f32 {
        self.max_stamina
    }

    pub fn multiplier(&self) -> f32 {
        self.multiplier
    }

    /// Stamina as a fraction of the reservoir, in `[0, 1]`.
    pub fn stamina_rate(&self) -> f32 {
        self.stamina / self.max_stamina
    }

    /// True while the boost is actually applied: dash held and stamina left.
    pub fn is_boosting(&self) -> bool {
        self.dashing && self.stamina > 0.0
    }

    /// Replace reservoir size and multiplier, keeping the current fraction
    /// of stamina out of the new reservoir.
    pub fn reconfigure(&mut self, max_stamina: f32, multiplier: f32) {
        let rate = self.stamina_rate();
        let max_stamina = max_stamina.max(f32::EPSILON);
        self.max_stamina = max_stamina;
        self.stamina = (rate * max_stamina).clamp(0.0, max_stamina);
        self.multiplier = multiplier.max(0.0);
    }

    /// Advance the reservoir by `dt` seconds and return this tick's speed multiplier.
    ///
    /// Negative `dt` counts as zero.
    pub fn tick(&mut self, dt: f32) -> f32 {
        let dt = dt.max(0.0);
        if self.dashing && self.stamina > 0.0 {
            self.stamina -= dt;
            if self.stamina < 0.0 {
                self.stamina = 0.0;
            }
            self.multiplier
        } else {
            if !self.dashing && self.stamina < self.max_stamina {
                self.stamina += dt;
                if self.stamina > self.max_stamina {
                    self.stamina = self.max_stamina;
                }
            }
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_new_is_full_and_idle() {
        let dash = Dash::new();
        assert!(!dash.is_dashing());
        assert_eq!(dash.mode(), DashMode::NotDashing);
        assert!(approx_eq(dash.stamina(), MAX_DASH_STAMINA));
        assert!(approx_eq(dash.multiplier(), DASH_SPEED_MULTIPLIER));
        assert!(approx_eq(dash.stamina_rate(), 1.0));
    }

    #[test]
    fn test_dashing_drains_and_boosts() {
        let mut dash = Dash::new().with_stamina(2.0);
        dash.start();
        let m = dash.tick(1.0);
        assert!(approx_eq(m, 1.5));
        assert!(approx_eq(dash.stamina(), 1.0));
    }

    #[test]
    fn test_dashing_floors_at_zero() {
        let mut dash = Dash::new().with_stamina(0.5);
        dash.start();
        let m = dash.tick(1.0);
        // boost still applies on the tick that empties the reservoir
        assert!(approx_eq(m, 1.5));
        assert!(approx_eq(dash.stamina(), 0.0));
    }

    #[test]
    fn test_held_dash_with_empty_reservoir_does_not_regenerate() {
        let mut dash = Dash::new().with_stamina(0.0);
        dash.start();
        let m = dash.tick(1.0);
        assert!(approx_eq(m, 1.0));
        assert!(approx_eq(dash.stamina(), 0.0));
        // still nothing after many ticks
        for _ in 0..10 {
            dash.tick(1.0);
        }
        assert!(approx_eq(dash.stamina(), 0.0));
        assert!(!dash.is_boosting());
    }

    #[test]
    fn test_release_regenerates() {
        let mut dash = Dash::new().with_stamina(3.0);
        let m = dash.tick(1.0);
        assert!(approx_eq(m, 1.0));
        assert!(approx_eq(dash.stamina(), 4.0));
    }

    #[test]
    fn test_regeneration_clamps_at_max() {
        let mut dash = Dash::new().with_stamina(4.8);
        dash.tick(1.0);
        assert!(approx_eq(dash.stamina(), 5.0));
    }

    #[test]
    fn test_stamina_rate_half() {
        let dash = Dash::new().with_stamina(2.5);
        assert!(approx_eq(dash.stamina_rate(), 0.5));
    }

    #[test]
    fn test_start_then_stop_leaves_stamina_alone() {
        let mut dash = Dash::new().with_stamina(3.3);
        dash.start();
        assert_eq!(dash.mode(), DashMode::Dashing);
        dash.stop();
        assert!(!dash.is_dashing());
        assert!(approx_eq(dash.stamina(), 3.3));
    }

    #[test]
    fn test_negative_dt_is_ignored() {
        let mut dash = Dash::new().with_stamina(2.0);
        dash.start();
        dash.tick(-3.0);
        assert!(approx_eq(dash.stamina(), 2.0));
        dash.stop();
        dash.tick(-3.0);
        assert!(approx_eq(dash.stamina(), 2.0));
    }

    #[test]
    fn test_stamina_stays_in_bounds_over_mixed_ticks() {
        let mut dash = Dash::new();
        let steps = [0.0, 0.016, 0.5, 1.0, 2.5, 7.0, 0.1];
        for (i, dt) in steps.iter().cycle().take(200).enumerate() {
            if i % 7 == 0 {
                dash.start();
            }
            if i % 11 == 0 {
                dash.stop();
            }
            dash.tick(*dt);
            assert!(dash.stamina() >= 0.0);
            assert!(dash.stamina() <= dash.max_stamina());
        }
    }

    #[test]
    fn test_with_stamina_clamps() {
        assert!(approx_eq(Dash::new().with_stamina(9.0).stamina(), 5.0));
        assert!(approx_eq(Dash::new().with_stamina(-1.0).stamina(), 0.0));
    }

    #[test]
    fn test_reconfigure_keeps_fraction() {
        let mut dash = Dash::new().with_stamina(2.5);
        dash.reconfigure(10.0, 2.0);
        assert!(approx_eq(dash.max_stamina(), 10.0));
        assert!(approx_eq(dash.stamina(), 5.0));
        assert!(approx_eq(dash.multiplier(), 2.0));
    }

    #[test]
    fn test_zero_dt_while_dashing_boosts_without_drain() {
        let mut dash = Dash::new().with_stamina(1.0);
        dash.start();
        assert!(approx_eq(dash.tick(0.0), 1.5));
        assert!(approx_eq(dash.stamina(), 1.0));
    }
}
