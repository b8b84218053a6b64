// Fixed-size particle collection plus the per-frame math: Euler advance with
// edge bounces, and the quadratic proximity pass that yields the neural-style
// connection lines.

use rand::Rng;

use crate::particle::Particle;

// A renderable line between two nearby particles.
#[derive(Debug, PartialEq)]
pub struct Connection {
    pub from: [f64; 2],
    pub to: [f64; 2],
    pub opacity: f64,
}

pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
}

impl ParticleField {
    pub const PARTICLE_COUNT: usize = 60;
    pub const CONNECTION_DISTANCE: f64 = 150.0;

    pub fn new(width: f64, height: f64) -> ParticleField {
        Self::with_rng(width, height, &mut rand::thread_rng())
    }

    // Seeded construction gives a deterministic position sequence, which the
    // tests rely on.
    pub fn with_rng<R: Rng>(width: f64, height: f64, rng: &mut R) -> ParticleField {
        let mut particles = Vec::with_capacity(Self::PARTICLE_COUNT);
        for _ in 0..Self::PARTICLE_COUNT {
            let pos_x = rng.gen::<f64>() * width;
            let pos_y = rng.gen::<f64>() * height;
            let vel_x = (rng.gen::<f64>() - 0.5) * 0.5;
            let vel_y = (rng.gen::<f64>() - 0.5) * 0.5;
            let radius = rng.gen::<f64>() * 2.0 + 1.0;
            particles.push(Particle::new(pos_x, pos_y, vel_x, vel_y, radius));
        }
        ParticleField {
            particles,
            width,
            height,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    // One frame step for every particle, in stored order.
    pub fn advance(&mut self) {
        for particle in &mut self.particles {
            particle.update(self.width, self.height);
        }
    }

    // Viewport changed. The collection is deliberately left alone: particles
    // stranded outside a shrunk viewport keep bouncing by the normal rule
    // rather than being teleported back in.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    // Line opacity for a pair at the given distance, if close enough to
    // connect. Linear falloff: a touching pair is fully opaque, a pair at the
    // threshold draws nothing at all.
    pub fn connection_opacity(distance: f64) -> Option<f64> {
        if distance < Self::CONNECTION_DISTANCE {
            Some(1.0 - distance / Self::CONNECTION_DISTANCE)
        } else {
            None
        }
    }

    // Every unordered pair close enough to draw. Quadratic over the full
    // collection; at 60 particles that is 1770 distance checks per frame,
    // cheap enough that spatial partitioning would buy nothing.
    pub fn connections(&self) -> Vec<Connection> {
        let mut connections = Vec::new();
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let from = self.particles[i].pos;
                let to = self.particles[j].pos;
                let distance = vecmath::vec2_len(vecmath::vec2_sub(to, from));
                if let Some(opacity) = Self::connection_opacity(distance) {
                    connections.push(Connection { from, to, opacity });
                }
            }
        }
        connections
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded_field(seed: u64) -> ParticleField {
        let mut rng = StdRng::seed_from_u64(seed);
        ParticleField::with_rng(800.0, 600.0, &mut rng)
    }

    #[test]
    fn allocates_exactly_sixty_particles() {
        let field = seeded_field(1);
        assert_eq!(field.particles().len(), ParticleField::PARTICLE_COUNT);
    }

    #[test]
    fn initial_values_are_in_range() {
        let field = seeded_field(2);
        for p in field.particles() {
            assert!(p.pos[0] >= 0.0 && p.pos[0] <= 800.0);
            assert!(p.pos[1] >= 0.0 && p.pos[1] <= 600.0);
            assert!(p.vel[0].abs() <= 0.25);
            assert!(p.vel[1].abs() <= 0.25);
            assert!(p.radius >= 1.0 && p.radius < 3.0);
        }
    }

    #[test]
    fn same_seed_same_trajectory() {
        let mut a = seeded_field(42);
        let mut b = seeded_field(42);
        for _ in 0..100 {
            a.advance();
            b.advance();
        }
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn particles_return_within_one_step_of_a_crossing() {
        let mut field = seeded_field(7);
        for _ in 0..10_000 {
            let before: Vec<bool> = field
                .particles()
                .iter()
                .map(|p| {
                    p.pos[0] >= 0.0 && p.pos[0] <= 800.0 && p.pos[1] >= 0.0 && p.pos[1] <= 600.0
                })
                .collect();
            field.advance();
            // A particle that was inside may overshoot this step, but one that
            // was already outside must have been reflected back in.
            for (particle, was_inside) in field.particles().iter().zip(before) {
                if !was_inside {
                    assert!(particle.pos[0] >= 0.0 && particle.pos[0] <= 800.0);
                    assert!(particle.pos[1] >= 0.0 && particle.pos[1] <= 600.0);
                }
            }
        }
    }

    #[test]
    fn resize_keeps_the_collection() {
        let mut field = seeded_field(3);
        let snapshot: Vec<_> = field.particles().to_vec();
        field.resize(400.0, 300.0);
        assert_eq!(field.width(), 400.0);
        assert_eq!(field.height(), 300.0);
        assert_eq!(field.particles(), snapshot.as_slice());
    }

    #[test]
    fn opacity_is_linear_in_distance() {
        assert_eq!(ParticleField::connection_opacity(0.0), Some(1.0));
        assert_eq!(ParticleField::connection_opacity(75.0), Some(0.5));
        // Exactly at the threshold: no line at all.
        assert_eq!(ParticleField::connection_opacity(150.0), None);
        assert_eq!(ParticleField::connection_opacity(796.0), None);
    }

    #[test]
    fn distant_pair_draws_no_line() {
        // Viewport 800x600, A at (0,0) moving right, B at (798,0) moving left.
        let mut field = ParticleField {
            particles: vec![
                Particle::new(0.0, 0.0, 1.0, 0.0, 1.0),
                Particle::new(798.0, 0.0, -1.0, 0.0, 1.0),
            ],
            width: 800.0,
            height: 600.0,
        };
        field.advance();
        assert_eq!(field.particles()[0].pos, [1.0, 0.0]);
        assert_eq!(field.particles()[1].pos, [797.0, 0.0]);
        // 796 apart, well past the 150 unit threshold.
        assert!(field.connections().is_empty());
    }

    #[test]
    fn coincident_pair_is_fully_opaque() {
        let field = ParticleField {
            particles: vec![
                Particle::new(120.0, 80.0, 0.1, 0.1, 1.0),
                Particle::new(120.0, 80.0, -0.1, 0.2, 2.0),
            ],
            width: 800.0,
            height: 600.0,
        };
        let connections = field.connections();
        assert_eq!(connections.len(), 1);
        assert_eq!(connections[0].opacity, 1.0);
        assert_eq!(connections[0].from, connections[0].to);
    }
}
