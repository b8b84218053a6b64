// Simple particle struct to keep track of individual position, velocity, and radius

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: [f64; 2],
    pub vel: [f64; 2],
    pub radius: f64,
}

impl Particle {
    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64, radius: f64) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            radius,
        }
    }

    // Euler step with a unit timestep, then bounce off the viewport edges.
    // The bounce only flips the velocity sign; the position is left where it
    // landed, so a particle can overshoot by up to one velocity unit before
    // the next step carries it back in.
    pub fn update(&mut self, width: f64, height: f64) {
        self.pos[0] += self.vel[0];
        self.pos[1] += self.vel[1];

        if self.pos[0] < 0.0 || self.pos[0] > width {
            self.vel[0] = -self.vel[0];
        }
        if self.pos[1] < 0.0 || self.pos[1] > height {
            self.vel[1] = -self.vel[1];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_by_velocity() {
        let mut p = Particle::new(10.0, 20.0, 0.25, -0.1, 2.0);
        p.update(800.0, 600.0);
        assert_eq!(p.pos, [10.25, 19.9]);
        assert_eq!(p.vel, [0.25, -0.1]);
    }

    #[test]
    fn edge_crossing_flips_sign_exactly_once() {
        let mut p = Particle::new(99.9, 50.0, 0.25, 0.0, 1.0);
        p.update(100.0, 100.0);
        // Overshot past the right edge, velocity reversed, no clamping.
        assert_eq!(p.pos[0], 100.15);
        assert_eq!(p.vel[0], -0.25);
        p.update(100.0, 100.0);
        // Back inside; no second flip.
        assert_eq!(p.pos[0], 99.9);
        assert_eq!(p.vel[0], -0.25);
    }

    #[test]
    fn velocity_magnitude_never_changes() {
        let mut p = Particle::new(0.5, 0.5, -0.2, -0.15, 1.5);
        for _ in 0..1000 {
            p.update(50.0, 40.0);
            assert_eq!(p.vel[0].abs(), 0.2);
            assert_eq!(p.vel[1].abs(), 0.15);
        }
    }

    #[test]
    fn both_axes_reflect_independently() {
        let mut p = Particle::new(0.1, 99.95, -0.2, 0.1, 1.0);
        p.update(100.0, 100.0);
        assert_eq!(p.vel, [0.2, -0.1]);
    }
}
