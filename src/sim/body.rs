use ratatui::style::Color;

use crate::sim::Scheme;

/// One falling ball. Screen coordinates: `y` grows downward, so gravity is positive.
#[derive(Debug, Clone)]
pub struct Body {
    pub y: f64,
    pub vy: f64,
    x: f64,
    radius: f64,
    color: Color,
    scheme: Scheme,
    initial_y: f64,
}

impl Body {
    pub fn new(scheme: Scheme, x: f64, y: f64, radius: f64, color: Color) -> Self {
        Self {
            y,
            vy: 0.0,
            x,
            radius,
            color,
            scheme,
            initial_y: y,
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Height the body was created at; the reference for its total energy.
    pub fn initial_y(&self) -> f64 {
        self.initial_y
    }

    /// Lowest point of the ball in screen coordinates.
    pub fn bottom(&self) -> f64 {
        self.y + self.radius
    }

    /// Advance one fixed step with the body's own integration scheme.
    pub fn advance(&mut self, gravity: f64, dt: f64) {
        let scheme = self.scheme;
        scheme.advance(self, gravity, dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_body_starts_at_rest() {
        let b = Body::new(Scheme::Verlet, 750.0, 95.2, 20.0, Color::Rgb(147, 189, 179));
        assert_eq!(b.vy, 0.0);
        assert_eq!(b.initial_y(), 95.2);
        assert_eq!(b.bottom(), 115.2);
        assert_eq!(b.scheme(), Scheme::Verlet);
    }

    #[test]
    fn initial_height_survives_motion() {
        let mut b = Body::new(Scheme::Euler, 250.0, 100.0, 20.0, Color::White);
        for _ in 0..10 {
            b.advance(10.0, 0.05);
        }
        assert!(b.y > 100.0);
        assert_eq!(b.initial_y(), 100.0);
        assert_eq!(b.radius(), 20.0);
        assert_eq!(b.x(), 250.0);
    }
}
