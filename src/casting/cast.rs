//! The cast of actors, partitioned by role
//!
//! The category-name map of the classic design is re-expressed as
//! typed fields: the one-robot / one-banner invariant holds by
//! construction, and artifacts keep their score without downcasts.
//! The Director only moves, recolors, and retexts cast members; the
//! keyboard service may arm projectiles through `arm_projectile`.

use super::{Actor, Artifact, Color, Point};

pub struct Cast {
    /// The player-controlled actor
    pub robot: Actor,
    /// The single HUD text line
    pub banner: Actor,
    /// Falling hazards; a fixed pool, respawned in place
    pub artifacts: Vec<Artifact>,
    /// Projectile pool; spent members are hidden and parked at the
    /// origin, never removed
    pub projectiles: Vec<Actor>,
}

impl Cast {
    pub fn new(robot: Actor, banner: Actor) -> Self {
        Self {
            robot,
            banner,
            artifacts: Vec::new(),
            projectiles: Vec::new(),
        }
    }

    pub fn add_artifact(&mut self, artifact: Artifact) {
        self.artifacts.push(artifact);
    }

    /// Every actor in draw order. The banner comes last so the HUD
    /// stays on top of anything that wanders under it.
    pub fn all_actors(&self) -> Vec<&Actor> {
        let mut actors = Vec::with_capacity(self.artifacts.len() + self.projectiles.len() + 2);
        actors.extend(self.artifacts.iter().map(|a| &a.actor));
        actors.extend(self.projectiles.iter());
        actors.push(&self.robot);
        actors.push(&self.banner);
        actors
    }

    /// Re-arm a spent projectile at `origin`, or grow the pool when
    /// every member is in flight and there is still room under `cap`.
    /// Returns false when the cap blocks the shot.
    pub fn arm_projectile(&mut self, origin: Point, color: Color, glyph: &str, cap: usize) -> bool {
        if let Some(spent) = self.projectiles.iter_mut().find(|p| p.is_hidden()) {
            spent.position = origin;
            spent.color = color;
            return true;
        }
        if self.projectiles.len() < cap {
            self.projectiles.push(Actor::new(glyph, origin, color));
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_cast() -> Cast {
        let robot = Actor::new("#", Point::new(450, 585), Color::WHITE);
        let banner = Actor::new("", Point::new(15, 0), Color::WHITE);
        Cast::new(robot, banner)
    }

    #[test]
    fn test_all_actors_draw_order() {
        let mut cast = test_cast();
        cast.add_artifact(Artifact::new(
            Actor::new("*", Point::new(30, 0), Color::WHITE),
            10,
        ));
        cast.projectiles
            .push(Actor::new("|", Point::new(450, 300), Color::YELLOW));

        let actors = cast.all_actors();
        assert_eq!(actors.len(), 4);
        assert_eq!(actors[0].text, "*");
        assert_eq!(actors[1].text, "|");
        assert_eq!(actors[2].text, "#");
        // Banner last, on top of everything
        assert_eq!(actors[3].text, "");
    }

    #[test]
    fn test_arm_projectile_grows_pool_under_cap() {
        let mut cast = test_cast();
        assert!(cast.arm_projectile(Point::new(450, 585), Color::YELLOW, "|", 2));
        assert!(cast.arm_projectile(Point::new(450, 585), Color::YELLOW, "|", 2));
        assert_eq!(cast.projectiles.len(), 2);
    }

    #[test]
    fn test_arm_projectile_reuses_spent_member_first() {
        let mut cast = test_cast();
        cast.arm_projectile(Point::new(450, 585), Color::YELLOW, "|", 2);
        cast.projectiles[0].hide();
        cast.projectiles[0].position = Point::default();

        assert!(cast.arm_projectile(Point::new(300, 585), Color::YELLOW, "|", 2));
        // Re-armed in place, pool did not grow
        assert_eq!(cast.projectiles.len(), 1);
        assert_eq!(cast.projectiles[0].position, Point::new(300, 585));
        assert!(!cast.projectiles[0].is_hidden());
    }

    #[test]
    fn test_arm_projectile_respects_cap() {
        let mut cast = test_cast();
        assert!(cast.arm_projectile(Point::new(450, 585), Color::YELLOW, "|", 1));
        assert!(!cast.arm_projectile(Point::new(450, 585), Color::YELLOW, "|", 1));
        assert_eq!(cast.projectiles.len(), 1);
    }
}
