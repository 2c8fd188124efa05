//! The base game entity

use super::{Color, Point};

/// A positioned, velocity-bearing, drawable entity.
///
/// Every game object shares this record. Actors are created once at
/// setup and live for the whole session; spent ones are hidden and
/// reparked rather than dropped, so collections never shrink mid-game.
#[derive(Debug, Clone)]
pub struct Actor {
    pub position: Point,
    pub velocity: Point,
    pub color: Color,
    /// Glyph or HUD line drawn at the actor's position
    pub text: String,
}

impl Actor {
    pub fn new(text: &str, position: Point, color: Color) -> Self {
        Self {
            position,
            velocity: Point::default(),
            color,
            text: text.to_string(),
        }
    }

    /// Advance position by velocity, wrapping on both axes so actors
    /// leaving one edge re-enter from the opposite one.
    pub fn move_next(&mut self, max_x: i32, max_y: i32) {
        let next = self.position + self.velocity;
        self.position = Point::new(next.x.rem_euclid(max_x), next.y.rem_euclid(max_y));
    }

    /// Recolor to the background so the actor no longer renders.
    pub fn hide(&mut self) {
        self.color = Color::BLACK;
    }

    pub fn is_hidden(&self) -> bool {
        self.color == Color::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_next_applies_velocity() {
        let mut actor = Actor::new("#", Point::new(100, 200), Color::WHITE);
        actor.velocity = Point::new(15, -5);
        actor.move_next(900, 600);
        assert_eq!(actor.position, Point::new(115, 195));
    }

    #[test]
    fn test_move_next_wraps_past_the_far_edge() {
        let mut actor = Actor::new("*", Point::new(895, 598), Color::WHITE);
        actor.velocity = Point::new(10, 5);
        actor.move_next(900, 600);
        assert_eq!(actor.position, Point::new(5, 3));
    }

    #[test]
    fn test_move_next_wraps_below_zero() {
        let mut actor = Actor::new("|", Point::new(5, 3), Color::WHITE);
        actor.velocity = Point::new(-10, -5);
        actor.move_next(900, 600);
        assert_eq!(actor.position, Point::new(895, 598));
    }

    #[test]
    fn test_hide() {
        let mut actor = Actor::new("|", Point::new(0, 0), Color::YELLOW);
        assert!(!actor.is_hidden());
        actor.hide();
        assert!(actor.is_hidden());
        assert_eq!(actor.color, Color::BLACK);
    }
}
