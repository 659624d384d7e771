use std::fmt::Display;

use num_enum::{FromPrimitive, IntoPrimitive};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// A player's action state (what animation/state machine node they're in).
///
/// This is the full table of common action states shared by every character (0x000 through
/// 0x154). Character-specific states (specials and the like) start at 0x155 and come through
/// as `UnknownAnimation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, IntoPrimitive, Serialize_repr, Deserialize_repr)]
#[repr(u16)]
pub enum Action {
    DeadDown = 0x00,
    DeadLeft = 0x01,
    DeadRight = 0x02,
    DeadUp = 0x03,
    DeadFlyStar = 0x04,
    DeadFlyStarIce = 0x05,
    DeadFly = 0x06,
    DeadFlySplatter = 0x07,
    DeadFlySplatterFlat = 0x08,
    DeadFlySplatterIce = 0x09,
    DeadFlySplatterFlatIce = 0x0A,
    Sleep = 0x0B,
    OnHaloDescent = 0x0C,
    OnHaloWait = 0x0D,
    Standing = 0x0E,
    WalkSlow = 0x0F,
    WalkMiddle = 0x10,
    WalkFast = 0x11,
    Turning = 0x12,
    TurningRun = 0x13,
    Dashing = 0x14,
    Running = 0x15,
    RunDirect = 0x16,
    RunBrake = 0x17,
    Kneebend = 0x18,
    JumpingForward = 0x19,
    JumpingBackward = 0x1A,
    JumpingAerialForward = 0x1B,
    JumpingAerialBackward = 0x1C,
    Falling = 0x1D,
    FallingForward = 0x1E,
    FallingBackward = 0x1F,
    FallingAerial = 0x20,
    FallingAerialForward = 0x21,
    FallingAerialBackward = 0x22,
    SpecialFall = 0x23,
    SpecialFallForward = 0x24,
    SpecialFallBackward = 0x25,
    TumblingFall = 0x26,
    Crouch = 0x27,
    CrouchWait = 0x28,
    CrouchEnd = 0x29,
    Landing = 0x2A,
    LandingSpecial = 0x2B,
    NeutralAttack1 = 0x2C,
    NeutralAttack2 = 0x2D,
    NeutralAttack3 = 0x2E,
    LoopingAttackStart = 0x2F,
    LoopingAttackMiddle = 0x30,
    LoopingAttackEnd = 0x31,
    DashAttack = 0x32,
    FtiltHigh = 0x33,
    FtiltHighMid = 0x34,
    FtiltMid = 0x35,
    FtiltLowMid = 0x36,
    FtiltLow = 0x37,
    Uptilt = 0x38,
    Downtilt = 0x39,
    FsmashHigh = 0x3A,
    FsmashMidHigh = 0x3B,
    FsmashMid = 0x3C,
    FsmashMidLow = 0x3D,
    FsmashLow = 0x3E,
    Upsmash = 0x3F,
    Downsmash = 0x40,
    Nair = 0x41,
    Fair = 0x42,
    Bair = 0x43,
    Uair = 0x44,
    Dair = 0x45,
    NairLanding = 0x46,
    FairLanding = 0x47,
    BairLanding = 0x48,
    UairLanding = 0x49,
    DairLanding = 0x4A,
    DamageHigh1 = 0x4B,
    DamageHigh2 = 0x4C,
    DamageHigh3 = 0x4D,
    DamageNeutral1 = 0x4E,
    DamageNeutral2 = 0x4F,
    DamageNeutral3 = 0x50,
    DamageLow1 = 0x51,
    DamageLow2 = 0x52,
    DamageLow3 = 0x53,
    DamageAir1 = 0x54,
    DamageAir2 = 0x55,
    DamageAir3 = 0x56,
    DamageFlyHigh = 0x57,
    DamageFlyNeutral = 0x58,
    DamageFlyLow = 0x59,
    DamageFlyTop = 0x5A,
    DamageFlyRoll = 0x5B,
    ItemPickupLight = 0x5C,
    ItemPickupHeavy = 0x5D,
    ItemThrowLightForward = 0x5E,
    ItemThrowLightBack = 0x5F,
    ItemThrowLightHigh = 0x60,
    ItemThrowLightLow = 0x61,
    ItemThrowLightDash = 0x62,
    ItemThrowLightDrop = 0x63,
    ItemThrowLightAirForward = 0x64,
    ItemThrowLightAirBack = 0x65,
    ItemThrowLightAirHigh = 0x66,
    ItemThrowLightAirLow = 0x67,
    ItemThrowHeavyForward = 0x68,
    ItemThrowHeavyBack = 0x69,
    ItemThrowHeavyHigh = 0x6A,
    ItemThrowHeavyLow = 0x6B,
    ItemThrowLightSmashForward = 0x6C,
    ItemThrowLightSmashBack = 0x6D,
    ItemThrowLightSmashUp = 0x6E,
    ItemThrowLightSmashDown = 0x6F,
    ItemThrowLightAirSmashForward = 0x70,
    ItemThrowLightAirSmashBack = 0x71,
    ItemThrowLightAirSmashHigh = 0x72,
    ItemThrowLightAirSmashLow = 0x73,
    ItemThrowHeavySmashForward = 0x74,
    ItemThrowHeavySmashBack = 0x75,
    ItemThrowHeavySmashHigh = 0x76,
    ItemThrowHeavySmashLow = 0x77,
    BeamSwordSwing1 = 0x78,
    BeamSwordSwing3 = 0x79,
    BeamSwordSwing4 = 0x7A,
    BeamSwordSwingDash = 0x7B,
    HomeRunBatSwing1 = 0x7C,
    HomeRunBatSwing3 = 0x7D,
    HomeRunBatSwing4 = 0x7E,
    HomeRunBatSwingDash = 0x7F,
    ParasolSwing1 = 0x80,
    ParasolSwing3 = 0x81,
    ParasolSwing4 = 0x82,
    ParasolSwingDash = 0x83,
    FanSwing1 = 0x84,
    FanSwing3 = 0x85,
    FanSwing4 = 0x86,
    FanSwingDash = 0x87,
    StarRodSwing1 = 0x88,
    StarRodSwing3 = 0x89,
    StarRodSwing4 = 0x8A,
    StarRodSwingDash = 0x8B,
    LipStickSwing1 = 0x8C,
    LipStickSwing3 = 0x8D,
    LipStickSwing4 = 0x8E,
    LipStickSwingDash = 0x8F,
    ItemParasolOpen = 0x90,
    ItemParasolFall = 0x91,
    ItemParasolFallSpecial = 0x92,
    ItemParasolDamageFall = 0x93,
    RayGunShoot = 0x94,
    RayGunShootAir = 0x95,
    RayGunShootEmpty = 0x96,
    RayGunShootAirEmpty = 0x97,
    FireFlowerShoot = 0x98,
    FireFlowerShootAir = 0x99,
    ItemScrew = 0x9A,
    ItemScrewAir = 0x9B,
    DamageScrew = 0x9C,
    DamageScrewAir = 0x9D,
    ItemScopeStart = 0x9E,
    ItemScopeRapid = 0x9F,
    ItemScopeFire = 0xA0,
    ItemScopeEnd = 0xA1,
    ItemScopeAirStart = 0xA2,
    ItemScopeAirRapid = 0xA3,
    ItemScopeAirFire = 0xA4,
    ItemScopeAirEnd = 0xA5,
    ItemScopeStartEmpty = 0xA6,
    ItemScopeRapidEmpty = 0xA7,
    ItemScopeFireEmpty = 0xA8,
    ItemScopeEndEmpty = 0xA9,
    ItemScopeAirStartEmpty = 0xAA,
    ItemScopeAirRapidEmpty = 0xAB,
    ItemScopeAirFireEmpty = 0xAC,
    ItemScopeAirEndEmpty = 0xAD,
    LiftWait = 0xAE,
    LiftWalk1 = 0xAF,
    LiftWalk2 = 0xB0,
    LiftTurn = 0xB1,
    ShieldStart = 0xB2,
    Shield = 0xB3,
    ShieldRelease = 0xB4,
    ShieldStun = 0xB5,
    ShieldReflect = 0xB6,
    TechMissUpBounce = 0xB7,
    LyingGroundUp = 0xB8,
    LyingGroundUpHit = 0xB9,
    NeutralGetupUp = 0xBA,
    GetupAttackUp = 0xBB,
    RollGetupForwardUp = 0xBC,
    RollGetupBackwardUp = 0xBD,
    TechMissUpSpot = 0xBE,
    TechMissDownBounce = 0xBF,
    LyingGroundDown = 0xC0,
    LyingGroundDownHit = 0xC1,
    NeutralGetupDown = 0xC2,
    GetupAttackDown = 0xC3,
    RollGetupForwardDown = 0xC4,
    RollGetupBackwardDown = 0xC5,
    TechMissDownSpot = 0xC6,
    NeutralTech = 0xC7,
    ForwardTech = 0xC8,
    BackwardTech = 0xC9,
    WallTech = 0xCA,
    WallTechJump = 0xCB,
    CeilingTech = 0xCC,
    ShieldBreakFly = 0xCD,
    ShieldBreakFall = 0xCE,
    ShieldBreakDownUp = 0xCF,
    ShieldBreakDownDown = 0xD0,
    ShieldBreakStandUp = 0xD1,
    ShieldBreakStandDown = 0xD2,
    ShieldBreakTeeter = 0xD3,
    Grab = 0xD4,
    GrabPulling = 0xD5,
    GrabRunning = 0xD6,
    GrabRunningPulling = 0xD7,
    GrabWait = 0xD8,
    GrabPummel = 0xD9,
    GrabBreak = 0xDA,
    ThrowForward = 0xDB,
    ThrowBack = 0xDC,
    ThrowUp = 0xDD,
    ThrowDown = 0xDE,
    GrabPullingHigh = 0xDF,
    GrabbedWaitHigh = 0xE0,
    PummeledHigh = 0xE1,
    GrabPulled = 0xE2,
    GrabbedWait = 0xE3,
    Pummeled = 0xE4,
    GrabEscape = 0xE5,
    GrabJump = 0xE6,
    GrabNeck = 0xE7,
    GrabFoot = 0xE8,
    RollForward = 0xE9,
    RollBackward = 0xEA,
    Spotdodge = 0xEB,
    Airdodge = 0xEC,
    ReboundStop = 0xED,
    Rebound = 0xEE,
    ThrownForward = 0xEF,
    ThrownBack = 0xF0,
    ThrownUp = 0xF1,
    ThrownDown = 0xF2,
    ThrownDownSecondary = 0xF3,
    PlatformDrop = 0xF4,
    EdgeTeeteringStart = 0xF5,
    EdgeTeetering = 0xF6,
    BounceWall = 0xF7,
    BounceCeiling = 0xF8,
    StopWall = 0xF9,
    StopCeiling = 0xFA,
    MissFoot = 0xFB,
    EdgeCatching = 0xFC,
    EdgeHanging = 0xFD,
    EdgeGetupSlow = 0xFE,
    EdgeGetupQuick = 0xFF,
    EdgeAttackSlow = 0x100,
    EdgeAttackQuick = 0x101,
    EdgeRollSlow = 0x102,
    EdgeRollQuick = 0x103,
    EdgeJump1Slow = 0x104,
    EdgeJump2Slow = 0x105,
    EdgeJump1Quick = 0x106,
    EdgeJump2Quick = 0x107,
    TauntRight = 0x108,
    TauntLeft = 0x109,
    ShoulderedWait = 0x10A,
    ShoulderedWalkSlow = 0x10B,
    ShoulderedWalkMiddle = 0x10C,
    ShoulderedWalkFast = 0x10D,
    ShoulderedTurn = 0x10E,
    ThrownFoxForward = 0x10F,
    ThrownFoxBack = 0x110,
    ThrownFoxUp = 0x111,
    ThrownFoxDown = 0x112,
    CapturedByCaptainFalcon = 0x113,
    CapturedByYoshi = 0x114,
    YoshiEgg = 0x115,
    CapturedByBowser = 0x116,
    CapturedDamageBowser = 0x117,
    CapturedWaitBowser = 0x118,
    ThrownBowserForward = 0x119,
    ThrownBowserBack = 0x11A,
    CapturedByBowserAir = 0x11B,
    CapturedDamageBowserAir = 0x11C,
    CapturedWaitBowserAir = 0x11D,
    ThrownBowserAirForward = 0x11E,
    ThrownBowserAirBack = 0x11F,
    CapturedByKirby = 0x120,
    CapturedWaitKirby = 0x121,
    ThrownKirbyStar = 0x122,
    ThrownCopyStar = 0x123,
    ThrownKirby = 0x124,
    BarrelWait = 0x125,
    Bury = 0x126,
    BuryWait = 0x127,
    BuryJump = 0x128,
    DamageSong = 0x129,
    DamageSongWait = 0x12A,
    DamageSongRecover = 0x12B,
    DamageBind = 0x12C,
    CapturedByMewtwo = 0x12D,
    CapturedByMewtwoAir = 0x12E,
    ThrownMewtwo = 0x12F,
    ThrownMewtwoAir = 0x130,
    WarpStarJump = 0x131,
    WarpStarFall = 0x132,
    HammerWait = 0x133,
    HammerWalk = 0x134,
    HammerTurn = 0x135,
    HammerKneebend = 0x136,
    HammerFall = 0x137,
    HammerJump = 0x138,
    HammerLanding = 0x139,
    MushroomGiantStart = 0x13A,
    MushroomGiantStartAir = 0x13B,
    MushroomGiantEnd = 0x13C,
    MushroomGiantEndAir = 0x13D,
    MushroomSmallStart = 0x13E,
    MushroomSmallStartAir = 0x13F,
    MushroomSmallEnd = 0x140,
    MushroomSmallEndAir = 0x141,
    EntryStart = 0x142,
    EntryWait = 0x143,
    EntryEnd = 0x144,
    DamageIce = 0x145,
    DamageIceJump = 0x146,
    CapturedByMasterHand = 0x147,
    CapturedDamageMasterHand = 0x148,
    CapturedWaitMasterHand = 0x149,
    ThrownMasterHand = 0x14A,
    CapturedByKirbyYoshi = 0x14B,
    KirbyYoshiEgg = 0x14C,
    CapturedByRedead = 0x14D,
    CapturedByLikeLike = 0x14E,
    DownReflect = 0x14F,
    CapturedByCrazyHand = 0x150,
    CapturedDamageCrazyHand = 0x151,
    CapturedWaitCrazyHand = 0x152,
    ThrownCrazyHand = 0x153,
    BarrelCannonWait = 0x154,
    #[num_enum(default)]
    UnknownAnimation = 0xFFFF,
}

impl Action {
    /// Normal (A button) attacks sit in one contiguous block, jab through down air.
    pub fn is_a_attack(&self) -> bool {
        let value = u16::from(*self);
        value >= u16::from(Self::NeutralAttack1) && value <= u16::from(Self::Dair)
    }

    pub fn is_dashing_or_turning(&self) -> bool {
        matches!(self, Self::Dashing | Self::Turning)
    }
}

impl Default for Action {
    fn default() -> Self {
        Self::UnknownAnimation
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
