//! The whole simulation: creatures, ripples, the rapid-tap detector and the
//! per-frame driver that keeps them in step with the shared panic sound.

use crate::config::CrowdConfig;
use crate::creature::{Creature, FrameInfo};
use crate::draw::{DrawList, Primitive, Rgba};
use crate::error::Result;
use crate::overlay;
use crate::ripple::RippleField;
use crate::sound::PanicSound;
use crate::touch::TouchRateTracker;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Host-provided input sampled once per tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct TickInput {
    /// Monotonic clock in milliseconds, same base as `touch_started`.
    pub now_ms: f64,
    /// Fingers currently on the surface.
    pub active_touches: usize,
}

pub struct Crowd {
    config: CrowdConfig,
    creatures: Vec<Creature>,
    ripples: RippleField,
    touches: TouchRateTracker,
    bounds: Vec2,
    frame: u64,
    audio_unlocked: bool,
    sound_was_playing: bool,
    rng: StdRng,
}

impl Crowd {
    /// Spawn `config.creature_count` creatures scattered over `bounds`.
    pub fn new(config: CrowdConfig, bounds: Vec2) -> Result<Self> {
        let mut crowd = Self::with_creatures(config, bounds, Vec::new())?;
        let count = crowd.config.creature_count;
        let p = crowd.config.person_probability;
        let rng = &mut crowd.rng;
        crowd.creatures = (0..count)
            .map(|_| {
                if rng.gen::<f32>() < p {
                    Creature::spawn_person(rng, bounds)
                } else {
                    Creature::spawn_dog(rng, bounds)
                }
            })
            .collect();
        let people = crowd.creatures.iter().filter(|c| c.is_person()).count();
        log::info!(
            "[crowd] spawned {} people and {} dogs over {:.0}x{:.0}",
            people,
            count - people,
            bounds.x,
            bounds.y
        );
        Ok(crowd)
    }

    /// Build a crowd around an explicit set of creatures.
    pub fn with_creatures(
        config: CrowdConfig,
        bounds: Vec2,
        creatures: Vec<Creature>,
    ) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            touches: TouchRateTracker::new(config.touch_window_ms),
            config,
            creatures,
            ripples: RippleField::default(),
            bounds,
            frame: 0,
            audio_unlocked: false,
            sound_was_playing: false,
            rng,
        })
    }

    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }

    pub fn creatures_mut(&mut self) -> &mut [Creature] {
        &mut self.creatures
    }

    pub fn ripples(&self) -> &RippleField {
        &self.ripples
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn audio_unlocked(&self) -> bool {
        self.audio_unlocked
    }

    pub fn recent_touches(&self) -> usize {
        self.touches.len()
    }

    /// Only the surface size changes; creatures keep their positions.
    pub fn resize(&mut self, bounds: Vec2) {
        self.bounds = bounds;
    }

    /// Returns `true` only for the call that actually unlocked audio.
    pub fn unlock_audio(&mut self) -> bool {
        if self.audio_unlocked {
            return false;
        }
        self.audio_unlocked = true;
        log::info!("[audio] unlocked by user gesture");
        true
    }

    /// Mouse press. Returns `true` if this press unlocked audio.
    pub fn pointer_pressed(&mut self, at: Vec2) -> bool {
        let unlocked = self.unlock_audio();
        self.trigger_local_panic(at);
        unlocked
    }

    /// Touch start with every current touch point. `fallback` is used when
    /// the host reports no discrete points. Returns `true` if this touch
    /// unlocked audio.
    pub fn touch_started(&mut self, now_ms: f64, points: &[Vec2], fallback: Vec2) -> bool {
        let unlocked = self.unlock_audio();
        self.touches.record(now_ms);
        if points.is_empty() {
            self.trigger_local_panic(fallback);
        } else {
            for &p in points {
                self.trigger_local_panic(p);
            }
        }
        unlocked
    }

    /// Ripple at `at` and frighten everything strictly within the local
    /// radius. Returns how many creatures were frightened.
    pub fn trigger_local_panic(&mut self, at: Vec2) -> usize {
        self.ripples.spawn(at);
        let radius = self.config.local_panic_radius;
        let secs = self.config.local_panic_secs;
        let mut hit = 0;
        for c in self
            .creatures
            .iter_mut()
            .filter(|c| c.pos.distance(at) < radius)
        {
            c.frighten(secs);
            hit += 1;
        }
        log::debug!(
            "[panic] local at ({:.0},{:.0}) frightened {}",
            at.x,
            at.y,
            hit
        );
        hit
    }

    /// Advance one frame and fill `out` with everything to paint.
    pub fn tick(&mut self, input: TickInput, sound: &mut dyn PanicSound, out: &mut DrawList) {
        self.frame += 1;
        out.clear();
        out.push(Primitive::Clear(Rgba::WHITE));

        // End the group panic in lockstep with the audio.
        let playing = sound.is_playing();
        if self.sound_was_playing && !playing {
            for c in &mut self.creatures {
                c.calm();
            }
            log::info!("[panic] sound ended, crowd calmed");
        }
        self.sound_was_playing = playing;

        // A sound with no duration (asset missing) never starts a group panic,
        // or it would zero the local countdowns every frame.
        self.touches.prune(input.now_ms);
        if input.active_touches >= self.config.min_simultaneous_touches
            && self.touches.len() >= self.config.touch_threshold
            && !sound.is_playing()
            && sound.duration_secs() > 0.0
        {
            sound.play();
            let secs = sound.duration_secs();
            for c in &mut self.creatures {
                c.frighten(secs);
            }
            log::info!(
                "[panic] global: {} touches in window, {} fingers, {:.2}s",
                self.touches.len(),
                input.active_touches,
                secs
            );
        }

        let info = FrameInfo {
            frame: self.frame,
            bounds: self.bounds,
            sound_playing: sound.is_playing(),
        };
        for c in &mut self.creatures {
            c.update(&info, &mut self.rng);
            c.draw(&info, out);
        }

        self.ripples.draw_and_age(out);

        if !self.audio_unlocked {
            overlay::push_start_overlay(self.bounds, out);
        } else if info.sound_playing {
            overlay::push_caption(self.bounds, out);
        }
    }
}
