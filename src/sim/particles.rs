//! Particle bursts for dust, coin sparkle and goal celebration
//!
//! Purely visual. Randomness comes from a seeded PCG stream so replays of
//! the same input produce the same particles.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

/// Gravity applied to particles each tick
pub const PARTICLE_GRAVITY: f32 = 0.2;
/// Size multiplier applied each tick
pub const PARTICLE_SHRINK: f32 = 0.95;
/// Particles at or below this size are dropped
pub const PARTICLE_MIN_SIZE: f32 = 0.5;

/// Color tag for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ParticleColor {
    /// Grey puffs from jumping and running
    Dust,
    /// Coin pickup sparkle
    Gold,
    /// Goal flag celebration
    Celebration,
}

impl ParticleColor {
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            ParticleColor::Dust => (150, 150, 150),
            ParticleColor::Gold => (255, 215, 0),
            ParticleColor::Celebration => (255, 0, 0),
        }
    }
}

/// A particle for visual effects
#[derive(Debug, Clone, Serialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub color: ParticleColor,
    /// 1 at spawn, fades to 0 over `life` ticks
    pub alpha: f32,
    /// Lifespan in ticks
    pub life: f32,
}

impl Particle {
    /// Advance one tick. Returns false once the particle should be removed.
    fn step(&mut self) -> bool {
        self.pos += self.vel;
        self.vel.y += PARTICLE_GRAVITY;
        self.alpha -= 1.0 / self.life;
        self.size *= PARTICLE_SHRINK;
        self.alpha > 0.0 && self.size > PARTICLE_MIN_SIZE
    }
}

/// The live particle set and the RNG that feeds it
#[derive(Debug, Clone, Serialize)]
pub struct ParticleField {
    particles: Vec<Particle>,
    #[serde(skip)]
    rng: Pcg32,
}

impl ParticleField {
    pub fn new(seed: u64) -> Self {
        Self {
            particles: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Spawn `count` particles at `origin` flying mostly upward
    pub fn spawn_burst(&mut self, origin: Vec2, color: ParticleColor, count: usize) {
        self.particles.reserve(count);
        for _ in 0..count {
            let particle = Particle {
                pos: origin,
                vel: Vec2::new(
                    self.rng.random_range(-3.0..3.0),
                    self.rng.random_range(-7.0..-2.0),
                ),
                size: self.rng.random_range(2.0..7.0),
                color,
                alpha: 1.0,
                life: self.rng.random_range(10.0..40.0),
            };
            self.particles.push(particle);
        }
    }

    /// Move, fade and shrink every particle, dropping the spent ones
    pub fn advance(&mut self) {
        self.particles.retain_mut(Particle::step);
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
