use std::fmt::Display;

use num_enum::{FromPrimitive, IntoPrimitive};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// The kind of item/article a projectile is, keyed by the game's item id.
///
/// General items occupy 0x00-0x2A and character articles follow. Stage hazards, enemies and
/// Pokemon come through as `UnknownProjectile`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, IntoPrimitive, Serialize_repr, Deserialize_repr)]
#[repr(u16)]
pub enum ProjectileType {
    Capsule = 0x00,
    Crate = 0x01,
    Barrel = 0x02,
    Egg = 0x03,
    PartyBall = 0x04,
    BarrelCannon = 0x05,
    BobOmb = 0x06,
    MrSaturn = 0x07,
    HeartContainer = 0x08,
    MaximTomato = 0x09,
    Starman = 0x0A,
    HomeRunBat = 0x0B,
    BeamSword = 0x0C,
    Parasol = 0x0D,
    GreenShell = 0x0E,
    RedShell = 0x0F,
    RayGun = 0x10,
    Freezie = 0x11,
    Food = 0x12,
    ProximityMine = 0x13,
    Flipper = 0x14,
    SuperScope = 0x15,
    StarRod = 0x16,
    LipsStick = 0x17,
    Fan = 0x18,
    FireFlower = 0x19,
    SuperMushroom = 0x1A,
    PoisonMushroom = 0x1B,
    Hammer = 0x1C,
    WarpStar = 0x1D,
    ScrewAttack = 0x1E,
    BunnyHood = 0x1F,
    MetalBox = 0x20,
    CloakingDevice = 0x21,
    Pokeball = 0x22,
    RayGunRecoilEffect = 0x23,
    StarRodStar = 0x24,
    LipsStickDust = 0x25,
    SuperScopeBeam = 0x26,
    RayGunBeam = 0x27,
    HammerHead = 0x28,
    Flower = 0x29,
    YoshisEggFromBox = 0x2A,
    MewtwoShadowBall = 0x2B,
    IceClimbersIceShot = 0x2C,
    IceClimbersBlizzard = 0x2D,
    ZeldaDinsFire = 0x2E,
    ZeldaDinsFireExplosion = 0x2F,
    MarioFireball = 0x30,
    DrMarioCapsule = 0x31,
    KirbyCutterBeam = 0x32,
    KirbyHammer = 0x33,
    MarioCape = 0x34,
    LuigiCyclone = 0x35,
    FoxLaser = 0x36,
    FalcoLaser = 0x37,
    FoxShadow = 0x38,
    FalcoShadow = 0x39,
    LinkBomb = 0x3A,
    YoungLinkBomb = 0x3B,
    LinkBoomerang = 0x3C,
    YoungLinkBoomerang = 0x3D,
    LinkHookshot = 0x3E,
    YoungLinkHookshot = 0x3F,
    LinkArrow = 0x40,
    YoungLinkFireArrow = 0x41,
    NessPkFire = 0x42,
    NessPkFlash1 = 0x43,
    NessPkFlash2 = 0x44,
    NessPkThunder1 = 0x45,
    NessPkThunder2 = 0x46,
    NessPkThunder3 = 0x47,
    NessPkThunder4 = 0x48,
    NessPkThunder5 = 0x49,
    FoxBlaster = 0x4A,
    FalcoBlaster = 0x4B,
    SamusBomb = 0x4C,
    SamusChargeShot = 0x4D,
    SamusMissile = 0x4E,
    SamusGrappleBeam = 0x4F,
    SheikChain = 0x50,
    SheikNeedleThrown = 0x51,
    SheikNeedleGround = 0x52,
    PikachuThunderJolt1 = 0x53,
    PikachuThunderJolt2 = 0x54,
    PikachuThunder = 0x55,
    PichuThunderJolt1 = 0x56,
    PichuThunderJolt2 = 0x57,
    PichuThunder = 0x58,
    LuigiFireball = 0x59,
    YoshiEggThrown = 0x5A,
    YoshiTongue = 0x5B,
    YoshiStar = 0x5C,
    MrGameAndWatchSausage = 0x5D,
    MrGameAndWatchChef = 0x5E,
    MrGameAndWatchJudgement = 0x5F,
    MrGameAndWatchBucket = 0x60,
    MrGameAndWatchTurtle = 0x61,
    PeachToadSpore = 0x62,
    PeachTurnip = 0x63,
    PeachParasol = 0x64,
    BowserFlame = 0x65,
    NessYoyo = 0x66,
    NessBaseballBat = 0x67,
    KirbyFinalCutterWave = 0x68,
    MewtwoDisable = 0x69,
    SheikVanishFlash = 0x6A,
    IceClimbersBlizzardBreath = 0x6B,
    JigglypuffRestEffect = 0x6C,
    MarthShieldBreakerEffect = 0x6D,
    RoyFlareBladeExplosion = 0x6E,
    GanondorfWizardsFootEffect = 0x6F,
    #[num_enum(default)]
    UnknownProjectile = 0xFFFF,
}

impl Default for ProjectileType {
    fn default() -> Self {
        Self::UnknownProjectile
    }
}

impl Display for ProjectileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion() {
        assert_eq!(ProjectileType::from(0x4Cu16), ProjectileType::SamusBomb);
        assert_eq!(ProjectileType::from(0x00A0u16), ProjectileType::UnknownProjectile);
        assert_eq!(ProjectileType::default(), ProjectileType::UnknownProjectile);
    }

    #[test]
    fn test_character_articles_keep_their_raw_value() {
        let cases = [
            (0x2Cu16, ProjectileType::IceClimbersIceShot),
            (0x5A, ProjectileType::YoshiEggThrown),
            (0x63, ProjectileType::PeachTurnip),
            (0x69, ProjectileType::MewtwoDisable),
            (0x6A, ProjectileType::SheikVanishFlash),
        ];

        for (raw, kind) in cases {
            assert_eq!(ProjectileType::from(raw), kind);
            assert_eq!(u16::from(kind), raw);
        }
    }
}
