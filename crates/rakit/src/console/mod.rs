mod regions;

pub use regions::{MemoryRegion, MemoryType};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, FromRepr, IntoStaticStr};

/// Console identifiers recognized by the achievements runtime.
///
/// Numeric values must match the defines in `rc_consoles.h` exactly; this is a
/// cross-boundary contract, not an internal choice.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Default,
    FromRepr,
    EnumIter,
    IntoStaticStr,
    Display,
)]
#[repr(i32)]
pub enum Console {
    #[default]
    Unknown = 0,
    #[strum(serialize = "Sega Genesis")]
    MegaDrive = 1,
    #[strum(serialize = "Nintendo 64")]
    Nintendo64 = 2,
    #[strum(serialize = "Super Nintendo Entertainment System")]
    SuperNintendo = 3,
    #[strum(serialize = "Game Boy")]
    GameBoy = 4,
    #[strum(serialize = "Game Boy Advance")]
    GameBoyAdvance = 5,
    #[strum(serialize = "Game Boy Color")]
    GameBoyColor = 6,
    #[strum(serialize = "Nintendo Entertainment System")]
    Nintendo = 7,
    #[strum(serialize = "PC Engine")]
    PcEngine = 8,
    #[strum(serialize = "Sega CD")]
    SegaCd = 9,
    #[strum(serialize = "Sega 32X")]
    Sega32X = 10,
    #[strum(serialize = "Sega Master System")]
    MasterSystem = 11,
    #[strum(serialize = "PlayStation")]
    PlayStation = 12,
    #[strum(serialize = "Atari Lynx")]
    AtariLynx = 13,
    #[strum(serialize = "Neo Geo Pocket")]
    NeoGeoPocket = 14,
    #[strum(serialize = "Game Gear")]
    GameGear = 15,
    #[strum(serialize = "GameCube")]
    GameCube = 16,
    #[strum(serialize = "Atari Jaguar")]
    AtariJaguar = 17,
    #[strum(serialize = "Nintendo DS")]
    NintendoDs = 18,
    #[strum(serialize = "Wii")]
    Wii = 19,
    #[strum(serialize = "Wii U")]
    WiiU = 20,
    #[strum(serialize = "PlayStation 2")]
    PlayStation2 = 21,
    #[strum(serialize = "Xbox")]
    Xbox = 22,
    #[strum(serialize = "Magnavox Odyssey 2")]
    MagnavoxOdyssey2 = 23,
    #[strum(serialize = "Pokemon Mini")]
    PokemonMini = 24,
    #[strum(serialize = "Atari 2600")]
    Atari2600 = 25,
    #[strum(serialize = "MS-DOS")]
    MsDos = 26,
    #[strum(serialize = "Arcade")]
    Arcade = 27,
    #[strum(serialize = "Virtual Boy")]
    VirtualBoy = 28,
    #[strum(serialize = "MSX")]
    Msx = 29,
    #[strum(serialize = "Commodore 64")]
    Commodore64 = 30,
    #[strum(serialize = "ZX81")]
    Zx81 = 31,
    #[strum(serialize = "Oric")]
    Oric = 32,
    #[strum(serialize = "SG-1000")]
    Sg1000 = 33,
    #[strum(serialize = "VIC-20")]
    Vic20 = 34,
    #[strum(serialize = "Amiga")]
    Amiga = 35,
    #[strum(serialize = "Atari ST")]
    AtariSt = 36,
    #[strum(serialize = "Amstrad CPC")]
    AmstradPc = 37,
    #[strum(serialize = "Apple II")]
    AppleII = 38,
    #[strum(serialize = "Sega Saturn")]
    Saturn = 39,
    #[strum(serialize = "Sega Dreamcast")]
    Dreamcast = 40,
    #[strum(serialize = "PlayStation Portable")]
    Psp = 41,
    #[strum(serialize = "CD-I")]
    Cdi = 42,
    #[strum(serialize = "3DO")]
    ThreeDo = 43,
    #[strum(serialize = "ColecoVision")]
    Colecovision = 44,
    #[strum(serialize = "Intellivision")]
    Intellivision = 45,
    #[strum(serialize = "Vectrex")]
    Vectrex = 46,
    #[strum(serialize = "PC-8000/8800")]
    Pc8800 = 47,
    #[strum(serialize = "PC-9800")]
    Pc9800 = 48,
    #[strum(serialize = "PC-FX")]
    PcFx = 49,
    #[strum(serialize = "Atari 5200")]
    Atari5200 = 50,
    #[strum(serialize = "Atari 7800")]
    Atari7800 = 51,
    #[strum(serialize = "Sharp X68000")]
    X68k = 52,
    #[strum(serialize = "WonderSwan")]
    WonderSwan = 53,
    #[strum(serialize = "Cassette Vision")]
    CassetteVision = 54,
    #[strum(serialize = "Super Cassette Vision")]
    SuperCassetteVision = 55,
    #[strum(serialize = "Neo Geo CD")]
    NeoGeoCd = 56,
    #[strum(serialize = "Fairchild Channel F")]
    FairchildChannelF = 57,
    #[strum(serialize = "FM Towns")]
    FmTowns = 58,
    #[strum(serialize = "ZX Spectrum")]
    ZxSpectrum = 59,
    #[strum(serialize = "Game & Watch")]
    GameAndWatch = 60,
    #[strum(serialize = "Nokia N-Gage")]
    NokiaNGage = 61,
    #[strum(serialize = "Nintendo 3DS")]
    Nintendo3ds = 62,
    #[strum(serialize = "Watara Supervision")]
    Supervision = 63,
    #[strum(serialize = "Sharp X1")]
    SharpX1 = 64,
    #[strum(serialize = "TIC-80")]
    Tic80 = 65,
    #[strum(serialize = "Thomson TO8")]
    ThomsonTo8 = 66,
    #[strum(serialize = "PC-6000")]
    Pc6000 = 67,
    #[strum(serialize = "Sega Pico")]
    Pico = 68,
    #[strum(serialize = "Mega Duck")]
    MegaDuck = 69,
    #[strum(serialize = "Zeebo")]
    Zeebo = 70,
    #[strum(serialize = "Arduboy")]
    Arduboy = 71,
    #[strum(serialize = "WASM-4")]
    Wasm4 = 72,
    #[strum(serialize = "Arcadia 2001")]
    Arcadia2001 = 73,
    #[strum(serialize = "Interton VC 4000")]
    IntertonVc4000 = 74,
    #[strum(serialize = "Elektor TV Games Computer")]
    ElektorTvGamesComputer = 75,
    #[strum(serialize = "PC Engine CD")]
    PcEngineCd = 76,
    #[strum(serialize = "Atari Jaguar CD")]
    AtariJaguarCd = 77,
    #[strum(serialize = "Nintendo DSi")]
    NintendoDsi = 78,
    #[strum(serialize = "TI-83")]
    Ti83 = 79,
    #[strum(serialize = "Uzebox")]
    Uzebox = 80,

    #[strum(serialize = "Hubs")]
    Hubs = 100,
    #[strum(serialize = "Events")]
    Events = 101,
}

impl Console {
    /// Look up a console from the raw identifier used by the runtime.
    pub fn from_raw(value: i32) -> Option<Self> {
        Self::from_repr(value)
    }

    /// Human-readable display name.
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Display name for a raw identifier, falling back to `"Unknown"` for
    /// values outside the known set.
    pub fn name_of(value: i32) -> &'static str {
        match Self::from_raw(value) {
            Some(console) => console.name(),
            None => {
                tracing::debug!(value, "unrecognized console identifier");
                Console::Unknown.name()
            }
        }
    }

    /// Known memory regions for this console.
    ///
    /// Returns an empty slice for platforms with no published memory map.
    pub fn memory_regions(&self) -> &'static [MemoryRegion] {
        regions::for_console(*self)
    }
}
