//! Falling hazards

use super::Actor;

/// An Actor that is worth points when shot down.
///
/// Composition instead of subclassing: the shared record lives in
/// `actor`, the artifact-only attributes sit alongside it. Artifacts
/// stay in their own typed collection, so collision code never needs
/// a runtime type check to read the score.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub actor: Actor,
    /// Points awarded when a projectile destroys this artifact
    pub score: u32,
    /// Per-artifact life count; carried from construction, the current
    /// rules never spend it
    #[allow(dead_code)]
    pub lives: u32,
}

impl Artifact {
    pub const DEFAULT_LIVES: u32 = 3;

    pub fn new(actor: Actor, score: u32) -> Self {
        Self {
            actor,
            score,
            lives: Self::DEFAULT_LIVES,
        }
    }
}
