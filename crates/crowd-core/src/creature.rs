use crate::constants::*;
use crate::draw::{DrawList, Rgba};
use glam::Vec2;
use rand::Rng;
use std::f32::consts::{PI, TAU};

/// Default locomotion while calm, fixed at spawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkPattern {
    Vertical,
    Horizontal,
    /// Either axis, re-chosen whenever the velocity is re-rolled.
    AxisRandom,
    Omnidirectional,
}

impl WalkPattern {
    pub const ALL: [WalkPattern; 4] = [
        WalkPattern::Vertical,
        WalkPattern::Horizontal,
        WalkPattern::AxisRandom,
        WalkPattern::Omnidirectional,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PersonPanic {
    /// Dash in a fresh random direction every frame at run speed.
    Flee,
    Jitter,
    /// Run in tight circles driven by the frame counter.
    Spin,
}

impl PersonPanic {
    pub const ALL: [PersonPanic; 3] = [PersonPanic::Flee, PersonPanic::Jitter, PersonPanic::Spin];
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Species {
    Person { panic: PersonPanic, run_speed: f32 },
    Dog,
}

/// Per-frame values every creature needs but none of them own.
#[derive(Clone, Copy, Debug)]
pub struct FrameInfo {
    /// Starts at 1 on the first tick.
    pub frame: u64,
    /// Canvas extent in pixels.
    pub bounds: Vec2,
    pub sound_playing: bool,
}

#[derive(Clone, Debug)]
pub struct Creature {
    pub pos: Vec2,
    pub size: f32,
    pub walk_pattern: WalkPattern,
    pub walk_velocity: Vec2,
    pub species: Species,
    scare_frames: f32,
}

impl Creature {
    /// Build a creature with a freshly rolled walk velocity and no panic.
    pub fn new<R: Rng + ?Sized>(
        species: Species,
        pos: Vec2,
        size: f32,
        walk_pattern: WalkPattern,
        rng: &mut R,
    ) -> Self {
        let mut c = Self {
            pos,
            size,
            walk_pattern,
            walk_velocity: Vec2::ZERO,
            species,
            scare_frames: 0.0,
        };
        c.reroll_walk(rng);
        c
    }

    pub fn spawn_person<R: Rng + ?Sized>(rng: &mut R, bounds: Vec2) -> Self {
        let pos = random_point(rng, bounds);
        let mut size = rng.gen_range(ADULT_SIZE_MIN..ADULT_SIZE_MAX);
        let pattern = random_pattern(rng);
        let panic = PersonPanic::ALL[rng.gen_range(0..PersonPanic::ALL.len())];
        let run_speed = rng.gen_range(RUN_SPEED_MIN..RUN_SPEED_MAX);
        if rng.gen::<f32>() < CHILD_PROBABILITY {
            size = rng.gen_range(CHILD_SIZE_MIN..CHILD_SIZE_MAX);
        }
        Self::new(Species::Person { panic, run_speed }, pos, size, pattern, rng)
    }

    pub fn spawn_dog<R: Rng + ?Sized>(rng: &mut R, bounds: Vec2) -> Self {
        let pos = random_point(rng, bounds);
        let size = rng.gen_range(DOG_SIZE_MIN..DOG_SIZE_MAX);
        let pattern = random_pattern(rng);
        Self::new(Species::Dog, pos, size, pattern, rng)
    }

    pub fn is_person(&self) -> bool {
        matches!(self.species, Species::Person { .. })
    }

    /// Remaining individual panic, in frames.
    pub fn scare_frames(&self) -> f32 {
        self.scare_frames
    }

    /// Panic for `secs` seconds from now, replacing any remaining countdown.
    pub fn frighten(&mut self, secs: f32) {
        let frames = secs * FRAME_RATE;
        self.scare_frames = if frames.is_finite() {
            frames.max(0.0)
        } else {
            0.0
        };
    }

    pub fn calm(&mut self) {
        self.scare_frames = 0.0;
    }

    pub fn is_panicking(&self, sound_playing: bool) -> bool {
        sound_playing || self.scare_frames > 0.0
    }

    pub fn update<R: Rng + ?Sized>(&mut self, info: &FrameInfo, rng: &mut R) {
        if self.is_panicking(info.sound_playing) {
            self.panic_step(info.frame, rng);
            if self.scare_frames > 0.0 {
                self.scare_frames = (self.scare_frames - 1.0).max(0.0);
            }
        } else {
            self.walk_step(info.frame, rng);
        }
        self.wrap(info.bounds);
    }

    fn walk_step<R: Rng + ?Sized>(&mut self, frame: u64, rng: &mut R) {
        self.pos += self.walk_velocity;
        if frame % WALK_REROLL_EVERY_FRAMES == 0 && rng.gen::<f32>() < WALK_REROLL_PROBABILITY {
            self.reroll_walk(rng);
        }
    }

    fn panic_step<R: Rng + ?Sized>(&mut self, frame: u64, rng: &mut R) {
        match self.species {
            Species::Person { panic, run_speed } => match panic {
                PersonPanic::Flee => self.pos += random_unit(rng) * run_speed,
                PersonPanic::Jitter => self.pos += jitter(rng, PERSON_JITTER),
                PersonPanic::Spin => {
                    let angle = frame as f32 * PERSON_SPIN_RATE;
                    self.pos += Vec2::from_angle(angle) * PERSON_SPIN_RADIUS;
                }
            },
            Species::Dog => self.pos += jitter(rng, DOG_JITTER),
        }
    }

    /// Pick a new calm velocity according to the walk pattern.
    pub fn reroll_walk<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let speed = rng.gen_range(WALK_SPEED_MIN..WALK_SPEED_MAX);
        let signed = if rng.gen_bool(0.5) { speed } else { -speed };
        self.walk_velocity = match self.walk_pattern {
            WalkPattern::Vertical => Vec2::new(0.0, signed),
            WalkPattern::Horizontal => Vec2::new(signed, 0.0),
            WalkPattern::AxisRandom => {
                if rng.gen_bool(0.5) {
                    Vec2::new(0.0, signed)
                } else {
                    Vec2::new(signed, 0.0)
                }
            }
            WalkPattern::Omnidirectional => random_unit(rng) * speed,
        };
    }

    /// Leaving one edge re-enters from the opposite one, a full body width
    /// off-screen so nothing pops.
    fn wrap(&mut self, bounds: Vec2) {
        let s = self.size;
        if self.pos.x > bounds.x + s {
            self.pos.x = -s;
        }
        if self.pos.x < -s {
            self.pos.x = bounds.x + s;
        }
        if self.pos.y > bounds.y + s {
            self.pos.y = -s;
        }
        if self.pos.y < -s {
            self.pos.y = bounds.y + s;
        }
    }

    pub fn draw(&self, info: &FrameInfo, out: &mut DrawList) {
        let panicking = self.is_panicking(info.sound_playing);
        match self.species {
            Species::Person { .. } => self.draw_person(info.frame, panicking, out),
            Species::Dog => self.draw_dog(info.frame, panicking, out),
        }
    }

    fn draw_person(&self, frame: u64, panicking: bool, out: &mut DrawList) {
        let s = self.size;
        let o = self.pos;
        let f = frame as f32;
        let mut line = |a: Vec2, b: Vec2| out.line(o + a, o + b, CREATURE_STROKE_WIDTH, Rgba::BLACK);

        line(Vec2::new(0.0, -s * 0.2), Vec2::new(0.0, s * 0.2));
        let hip = Vec2::new(0.0, s * 0.2);
        if panicking {
            let (sin, cos) = (f * 0.5).sin_cos();
            line(Vec2::ZERO, Vec2::new(-s * 0.3 * cos, -s * 0.3 * sin));
            line(Vec2::ZERO, Vec2::new(s * 0.3 * cos, s * 0.3 * sin));
            line(hip, Vec2::new(-s * 0.4 * cos, s * 0.5 * sin));
            line(hip, Vec2::new(s * 0.4 * cos, s * 0.5 * sin));
        } else {
            let cycle = (f * 0.08 + self.pos.x / 10.0).sin();
            let arm = cycle * s * 0.15;
            let leg = cycle * s * 0.25;
            line(Vec2::ZERO, Vec2::new(-arm, s * 0.2));
            line(Vec2::ZERO, Vec2::new(arm, s * 0.2));
            line(hip, Vec2::new(leg, s * 0.5));
            line(hip, Vec2::new(-leg, s * 0.5));
        }
        out.ellipse(
            o + Vec2::new(0.0, -s * 0.35),
            s * 0.3,
            CREATURE_STROKE_WIDTH,
            Rgba::BLACK,
        );
    }

    fn draw_dog(&self, frame: u64, panicking: bool, out: &mut DrawList) {
        let s = self.size;
        let o = self.pos;
        let f = frame as f32;
        let d = if self.walk_velocity.x > 0.0 { 1.0 } else { -1.0 };
        let w = CREATURE_STROKE_WIDTH;

        let (body_start, head_dx, tail_wag) = if panicking {
            let bark = (f * 0.9).sin();
            (bark, bark * 2.0, (f * 1.2).sin() * 4.0)
        } else {
            (0.0, 0.0, 0.0)
        };
        out.line(
            o + Vec2::new(-s * 0.4 * d, body_start),
            o + Vec2::new(s * 0.4 * d, 0.0),
            w,
            Rgba::BLACK,
        );
        out.ellipse(
            o + Vec2::new(s * 0.5 * d + head_dx, -s * 0.1),
            s * 0.3,
            w,
            Rgba::BLACK,
        );
        out.line(
            o + Vec2::new(-s * 0.4 * d, 0.0),
            o + Vec2::new(-s * 0.6 * d, -s * 0.2 + tail_wag),
            w,
            Rgba::BLACK,
        );

        let legs = f * 0.2;
        out.line(
            o + Vec2::new(-s * 0.2 * d, 0.0),
            o + Vec2::new(-s * 0.3 * d, s * 0.3 + (legs + PI).sin() * 3.0),
            w,
            Rgba::BLACK,
        );
        out.line(
            o + Vec2::new(s * 0.2 * d, 0.0),
            o + Vec2::new(s * 0.3 * d, s * 0.3 + legs.sin() * 3.0),
            w,
            Rgba::BLACK,
        );
    }
}

fn random_point<R: Rng + ?Sized>(rng: &mut R, bounds: Vec2) -> Vec2 {
    Vec2::new(
        rng.gen::<f32>() * bounds.x.max(0.0),
        rng.gen::<f32>() * bounds.y.max(0.0),
    )
}

fn random_pattern<R: Rng + ?Sized>(rng: &mut R) -> WalkPattern {
    WalkPattern::ALL[rng.gen_range(0..WalkPattern::ALL.len())]
}

fn random_unit<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    Vec2::from_angle(rng.gen_range(0.0..TAU))
}

fn jitter<R: Rng + ?Sized>(rng: &mut R, half_range: f32) -> Vec2 {
    Vec2::new(
        rng.gen_range(-half_range..half_range),
        rng.gen_range(-half_range..half_range),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn info(frame: u64, sound_playing: bool) -> FrameInfo {
        FrameInfo {
            frame,
            bounds: Vec2::new(800.0, 600.0),
            sound_playing,
        }
    }

    #[test]
    fn walk_velocity_matches_pattern() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let v = Creature::new(
                Species::Dog,
                Vec2::ZERO,
                25.0,
                WalkPattern::Vertical,
                &mut rng,
            )
            .walk_velocity;
            assert_eq!(v.x, 0.0);
            assert!(v.y.abs() >= WALK_SPEED_MIN && v.y.abs() < WALK_SPEED_MAX);

            let v = Creature::new(
                Species::Dog,
                Vec2::ZERO,
                25.0,
                WalkPattern::Omnidirectional,
                &mut rng,
            )
            .walk_velocity;
            assert!(v.length() < WALK_SPEED_MAX + 1e-4);
        }
    }

    #[test]
    fn fractional_countdown_never_goes_negative() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut c = Creature::spawn_dog(&mut rng, Vec2::new(800.0, 600.0));
        c.frighten(0.01); // 0.6 frames
        c.update(&info(1, false), &mut rng);
        assert_eq!(c.scare_frames(), 0.0);
    }

    #[test]
    fn frighten_rejects_negative_and_nan() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut c = Creature::spawn_dog(&mut rng, Vec2::new(800.0, 600.0));
        c.frighten(-2.0);
        assert_eq!(c.scare_frames(), 0.0);
        c.frighten(f32::NAN);
        assert_eq!(c.scare_frames(), 0.0);
    }

    #[test]
    fn wrap_reenters_from_opposite_edge() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut c = Creature::new(
            Species::Dog,
            Vec2::new(831.0, 300.0),
            30.0,
            WalkPattern::Horizontal,
            &mut rng,
        );
        c.walk_velocity = Vec2::new(0.5, 0.0);
        c.update(&info(1, false), &mut rng);
        assert_eq!(c.pos.x, -30.0);
        c.walk_velocity = Vec2::new(-0.5, 0.0);
        c.update(&info(2, false), &mut rng);
        assert_eq!(c.pos.x, 830.0);
    }

    #[test]
    fn dog_faces_its_walking_direction() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut c = Creature::new(
            Species::Dog,
            Vec2::new(100.0, 100.0),
            20.0,
            WalkPattern::Horizontal,
            &mut rng,
        );
        let head_x = |c: &Creature| {
            let mut out = DrawList::new();
            c.draw(&info(1, false), &mut out);
            out.items()
                .iter()
                .find_map(|p| match p {
                    crate::draw::Primitive::Ellipse { center, .. } => Some(center.x),
                    _ => None,
                })
                .unwrap()
        };
        c.walk_velocity = Vec2::new(0.4, 0.0);
        assert!(head_x(&c) > 100.0);
        c.walk_velocity = Vec2::new(-0.4, 0.0);
        assert!(head_x(&c) < 100.0);
    }

    fn panicking_person(panic: PersonPanic, rng: &mut StdRng) -> Creature {
        let species = Species::Person {
            panic,
            run_speed: 10.0,
        };
        let mut c = Creature::new(
            species,
            Vec2::new(400.0, 300.0),
            30.0,
            WalkPattern::Vertical,
            rng,
        );
        c.frighten(10.0);
        c
    }

    #[test]
    fn flee_moves_exactly_run_speed() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut c = panicking_person(PersonPanic::Flee, &mut rng);
        for frame in 1..200 {
            let before = c.pos;
            c.update(&info(frame, false), &mut rng);
            let step = (c.pos - before).length();
            assert!((step - 10.0).abs() < 1e-3, "frame {frame}: step {step}");
            c.pos = Vec2::new(400.0, 300.0);
        }
    }

    #[test]
    fn jitter_stays_within_species_bounds() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut person = panicking_person(PersonPanic::Jitter, &mut rng);
        let mut dog = Creature::new(
            Species::Dog,
            Vec2::new(400.0, 300.0),
            25.0,
            WalkPattern::Horizontal,
            &mut rng,
        );
        dog.frighten(10.0);
        for frame in 1..200 {
            let before = person.pos;
            person.update(&info(frame, false), &mut rng);
            let d = person.pos - before;
            assert!(d.x.abs() <= PERSON_JITTER && d.y.abs() <= PERSON_JITTER);

            let before = dog.pos;
            dog.update(&info(frame, false), &mut rng);
            let d = dog.pos - before;
            assert!(d.x.abs() <= DOG_JITTER && d.y.abs() <= DOG_JITTER);
        }
    }

    #[test]
    fn spin_follows_the_frame_counter() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut c = panicking_person(PersonPanic::Spin, &mut rng);
        for frame in [1u64, 2, 7, 40] {
            let before = c.pos;
            c.update(&info(frame, true), &mut rng);
            let f = frame as f32;
            let expected = Vec2::new((f * 0.5).cos(), (f * 0.5).sin()) * 5.0;
            assert!((c.pos - before - expected).length() < 1e-4);
        }
    }

    #[test]
    fn walk_velocity_rerolls_only_on_hundredth_frames() {
        let mut rng = StdRng::seed_from_u64(14);
        let mut crowd: Vec<Creature> = (0..200)
            .map(|_| {
                Creature::new(
                    Species::Dog,
                    Vec2::new(400.0, 300.0),
                    25.0,
                    WalkPattern::Omnidirectional,
                    &mut rng,
                )
            })
            .collect();
        let initial: Vec<Vec2> = crowd.iter().map(|c| c.walk_velocity).collect();

        for frame in 101..200 {
            for c in &mut crowd {
                c.update(&info(frame, false), &mut rng);
            }
        }
        assert!(crowd
            .iter()
            .zip(&initial)
            .all(|(c, v)| c.walk_velocity == *v));

        for c in &mut crowd {
            c.update(&info(200, false), &mut rng);
        }
        let changed = crowd
            .iter()
            .zip(&initial)
            .filter(|(c, v)| c.walk_velocity != **v)
            .count();
        // roughly one in five
        assert!(changed > 10 && changed < 80, "{changed} re-rolled");
    }
}
