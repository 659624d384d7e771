use serde::{Deserialize, Serialize};

use crate::enums::ProjectileType;
use crate::types::{Position, Speed};

/// A projectile (item, thrown object, effect) as observed on a single frame.
///
/// Projectiles carry no identity across frames; the same fireball on two consecutive frames is
/// two unrelated `Projectile` values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub position: Position,
    pub speed: Speed,

    /// Port of the player who owns this, or `Projectile::NO_OWNER`.
    pub owner: i8,

    #[serde(rename = "type")]
    pub kind: ProjectileType,
    pub subtype: u8,

    /// How many frames this projectile has existed for, or -1 if unknown.
    pub frame: i32,
}

impl Projectile {
    /// Sentinel owner for neutral or unattributable projectiles.
    pub const NO_OWNER: i8 = -1;

    /// Converts the zero-based owner slot the game reports into a port. Anything that isn't one
    /// of the four ports is unowned.
    pub fn owner_from_raw(raw: u8) -> i8 {
        match raw {
            0..=3 => raw as i8 + 1,
            _ => Self::NO_OWNER,
        }
    }

    pub fn owner_port(&self) -> Option<u8> {
        match self.owner {
            1..=4 => Some(self.owner as u8),
            _ => None,
        }
    }

    /// Whether this is a leftover article rather than a live projectile: an exploded Samus
    /// bomb or missile, or a charge shot that's still charging.
    pub fn is_spent(&self) -> bool {
        match self.kind {
            ProjectileType::SamusBomb => self.subtype == 3,
            ProjectileType::SamusMissile => matches!(self.subtype, 2 | 3),
            ProjectileType::SamusChargeShot => self.subtype == 0,
            _ => false,
        }
    }
}

impl Default for Projectile {
    fn default() -> Self {
        Self {
            position: Position::default(),
            speed: Speed::default(),
            owner: Self::NO_OWNER,
            kind: ProjectileType::UnknownProjectile,
            subtype: 0,
            frame: -1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let projectile = Projectile::default();

        assert_eq!(projectile.owner, Projectile::NO_OWNER);
        assert_eq!(projectile.owner_port(), None);
        assert_eq!(projectile.kind, ProjectileType::UnknownProjectile);
        assert_eq!(projectile.subtype, 0);
    }

    #[test]
    fn test_owner_from_raw() {
        assert_eq!(Projectile::owner_from_raw(0), 1);
        assert_eq!(Projectile::owner_from_raw(3), 4);
        assert_eq!(Projectile::owner_from_raw(4), Projectile::NO_OWNER);
        assert_eq!(Projectile::owner_from_raw(0xFF), Projectile::NO_OWNER);
    }

    #[test]
    fn test_spent_samus_articles() {
        let mut projectile = Projectile {
            kind: ProjectileType::SamusBomb,
            subtype: 3,
            ..Default::default()
        };
        assert!(projectile.is_spent());

        projectile.subtype = 1;
        assert!(!projectile.is_spent());

        projectile.kind = ProjectileType::SamusChargeShot;
        projectile.subtype = 0;
        assert!(projectile.is_spent());

        projectile.kind = ProjectileType::FoxLaser;
        assert!(!projectile.is_spent());
    }
}
