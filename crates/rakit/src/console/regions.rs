//! Static memory maps for emulated platforms.
//!
//! Region tables describe the address space the achievements runtime queries,
//! not the full hardware memory map. Addresses and descriptions are fixed
//! reference data mirroring the runtime's console tables.

use serde::Serialize;
use strum::{Display, FromRepr, IntoStaticStr};

use crate::console::Console;

/// Semantic classification of an address range.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    FromRepr,
    IntoStaticStr,
    Display,
)]
#[repr(u8)]
pub enum MemoryType {
    /// Normal system memory.
    #[strum(serialize = "System RAM")]
    SystemRam = 0,
    /// Memory that persists between sessions.
    #[strum(serialize = "Save RAM")]
    SaveRam = 1,
    /// Memory reserved for graphical processing.
    #[strum(serialize = "Video RAM")]
    VideoRam = 2,
    /// Memory that maps to read-only data.
    #[strum(serialize = "Read-only")]
    ReadOnly = 3,
    /// Memory for interacting with system components.
    #[strum(serialize = "Hardware controller")]
    HardwareController = 4,
    /// Secondary address space that maps back to real system RAM.
    #[strum(serialize = "Virtual RAM")]
    VirtualRam = 5,
    /// Addresses that don't physically exist.
    #[strum(serialize = "Unused")]
    Unused = 6,
}

/// A named address range within an emulated system's address space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MemoryRegion {
    /// First address of the block as queried by the runtime.
    pub start_address: u32,
    /// Last address of the block as queried by the runtime.
    pub end_address: u32,
    /// Real (mapped) address for the first address of the block.
    pub real_address: u32,
    pub memory_type: MemoryType,
    pub description: &'static str,
}

impl MemoryRegion {
    const fn new(
        start_address: u32,
        end_address: u32,
        real_address: u32,
        memory_type: MemoryType,
        description: &'static str,
    ) -> Self {
        Self {
            start_address,
            end_address,
            real_address,
            memory_type,
            description,
        }
    }

    /// Size of the region in bytes.
    pub fn size(&self) -> u32 {
        self.end_address - self.start_address + 1
    }

    pub fn contains(&self, address: u32) -> bool {
        (self.start_address..=self.end_address).contains(&address)
    }
}

use MemoryType::*;

static NES: &[MemoryRegion] = &[
    MemoryRegion::new(0x0000, 0x07FF, 0x0000, SystemRam, "System RAM"),
    MemoryRegion::new(0x0800, 0x1FFF, 0x0800, VirtualRam, "Mirrored RAM"),
    MemoryRegion::new(0x2000, 0x2007, 0x2000, HardwareController, "PPU registers"),
    MemoryRegion::new(0x2008, 0x3FFF, 0x2008, VirtualRam, "Mirrored PPU registers"),
    MemoryRegion::new(0x4000, 0x401F, 0x4000, HardwareController, "APU and I/O registers"),
    MemoryRegion::new(0x4020, 0x5FFF, 0x4020, ReadOnly, "Cartridge data"),
    MemoryRegion::new(0x6000, 0x7FFF, 0x6000, SaveRam, "Cartridge RAM"),
    MemoryRegion::new(0x8000, 0xFFFF, 0x8000, ReadOnly, "Cartridge ROM"),
];

static SNES: &[MemoryRegion] = &[
    MemoryRegion::new(0x000000, 0x01FFFF, 0x7E0000, SystemRam, "System RAM"),
    MemoryRegion::new(0x020000, 0x03FFFF, 0x000000, SaveRam, "Save RAM"),
];

static GAMEBOY: &[MemoryRegion] = &[
    MemoryRegion::new(0x0000, 0x3FFF, 0x0000, ReadOnly, "Cartridge ROM (fixed)"),
    MemoryRegion::new(0x4000, 0x7FFF, 0x4000, ReadOnly, "Cartridge ROM (paged)"),
    MemoryRegion::new(0x8000, 0x97FF, 0x8000, VideoRam, "Tile RAM"),
    MemoryRegion::new(0x9800, 0x9BFF, 0x9800, VideoRam, "BG1 map data"),
    MemoryRegion::new(0x9C00, 0x9FFF, 0x9C00, VideoRam, "BG2 map data"),
    MemoryRegion::new(0xA000, 0xBFFF, 0xA000, SaveRam, "Cartridge RAM"),
    MemoryRegion::new(0xC000, 0xCFFF, 0xC000, SystemRam, "System RAM (fixed)"),
    MemoryRegion::new(0xD000, 0xDFFF, 0xD000, SystemRam, "System RAM (bank 1)"),
    MemoryRegion::new(0xE000, 0xFDFF, 0xC000, VirtualRam, "Echo RAM"),
    MemoryRegion::new(0xFE00, 0xFE9F, 0xFE00, VideoRam, "Sprite RAM"),
    MemoryRegion::new(0xFEA0, 0xFEFF, 0xFEA0, Unused, "Unusable"),
    MemoryRegion::new(0xFF00, 0xFF7F, 0xFF00, HardwareController, "Hardware I/O"),
    MemoryRegion::new(0xFF80, 0xFFFE, 0xFF80, SystemRam, "Quick RAM"),
    MemoryRegion::new(0xFFFF, 0xFFFF, 0xFFFF, HardwareController, "Interrupt enable"),
];

static GAMEBOY_COLOR: &[MemoryRegion] = &[
    MemoryRegion::new(0x0000, 0x3FFF, 0x0000, ReadOnly, "Cartridge ROM (fixed)"),
    MemoryRegion::new(0x4000, 0x7FFF, 0x4000, ReadOnly, "Cartridge ROM (paged)"),
    MemoryRegion::new(0x8000, 0x97FF, 0x8000, VideoRam, "Tile RAM"),
    MemoryRegion::new(0x9800, 0x9BFF, 0x9800, VideoRam, "BG1 map data"),
    MemoryRegion::new(0x9C00, 0x9FFF, 0x9C00, VideoRam, "BG2 map data"),
    MemoryRegion::new(0xA000, 0xBFFF, 0xA000, SaveRam, "Cartridge RAM"),
    MemoryRegion::new(0xC000, 0xCFFF, 0xC000, SystemRam, "System RAM (fixed)"),
    MemoryRegion::new(0xD000, 0xDFFF, 0xD000, SystemRam, "System RAM (bank 1)"),
    MemoryRegion::new(0xE000, 0xFDFF, 0xC000, VirtualRam, "Echo RAM"),
    MemoryRegion::new(0xFE00, 0xFE9F, 0xFE00, VideoRam, "Sprite RAM"),
    MemoryRegion::new(0xFEA0, 0xFEFF, 0xFEA0, Unused, "Unusable"),
    MemoryRegion::new(0xFF00, 0xFF7F, 0xFF00, HardwareController, "Hardware I/O"),
    MemoryRegion::new(0xFF80, 0xFFFE, 0xFF80, SystemRam, "Quick RAM"),
    MemoryRegion::new(0xFFFF, 0xFFFF, 0xFFFF, HardwareController, "Interrupt enable"),
    MemoryRegion::new(0x10000, 0x15FFF, 0xD000, SystemRam, "System RAM (banks 2-7)"),
];

static GAMEBOY_ADVANCE: &[MemoryRegion] = &[
    MemoryRegion::new(0x000000, 0x007FFF, 0x03000000, SystemRam, "On-chip work RAM"),
    MemoryRegion::new(0x008000, 0x047FFF, 0x02000000, SystemRam, "On-board work RAM"),
    MemoryRegion::new(0x048000, 0x057FFF, 0x0E000000, SaveRam, "Cartridge RAM"),
];

static NINTENDO_64: &[MemoryRegion] = &[
    MemoryRegion::new(0x000000, 0x3FFFFF, 0x80000000, SystemRam, "RDRAM"),
    MemoryRegion::new(0x400000, 0x7FFFFF, 0x80400000, SystemRam, "Expansion Pak RAM"),
];

static MEGA_DRIVE: &[MemoryRegion] = &[
    MemoryRegion::new(0x00000, 0x0FFFF, 0xFF0000, SystemRam, "68000 RAM"),
    MemoryRegion::new(0x10000, 0x1FFFF, 0x000000, SaveRam, "Cartridge RAM"),
];

static SEGA_CD: &[MemoryRegion] = &[
    MemoryRegion::new(0x00000, 0x0FFFF, 0xFF0000, SystemRam, "68000 RAM"),
    MemoryRegion::new(0x10000, 0x8FFFF, 0x080000, SystemRam, "CD PRG RAM"),
];

static MASTER_SYSTEM: &[MemoryRegion] = &[
    MemoryRegion::new(0x0000, 0x1FFF, 0xC000, SystemRam, "System RAM"),
];

static GAME_GEAR: &[MemoryRegion] = &[
    MemoryRegion::new(0x0000, 0x1FFF, 0xC000, SystemRam, "System RAM"),
];

static SG1000: &[MemoryRegion] = &[
    MemoryRegion::new(0x0000, 0x03FF, 0xC000, SystemRam, "System RAM"),
];

static PLAYSTATION: &[MemoryRegion] = &[
    MemoryRegion::new(0x000000, 0x00FFFF, 0x00000000, SystemRam, "Kernel RAM"),
    MemoryRegion::new(0x010000, 0x1FFFFF, 0x00010000, SystemRam, "System RAM"),
];

static ATARI_2600: &[MemoryRegion] = &[
    MemoryRegion::new(0x00, 0x7F, 0x80, SystemRam, "System RAM"),
];

static ATARI_LYNX: &[MemoryRegion] = &[
    MemoryRegion::new(0x0000, 0xFBFF, 0x0000, SystemRam, "System RAM"),
    MemoryRegion::new(0xFC00, 0xFCFF, 0xFC00, HardwareController, "Mikey registers"),
    MemoryRegion::new(0xFD00, 0xFDFF, 0xFD00, HardwareController, "Suzy registers"),
    MemoryRegion::new(0xFE00, 0xFFFF, 0xFE00, SystemRam, "Boot and vector space"),
];

static PC_ENGINE: &[MemoryRegion] = &[
    MemoryRegion::new(0x0000, 0x1FFF, 0x1F0000, SystemRam, "System RAM"),
    MemoryRegion::new(0x2000, 0x27FF, 0x000000, SaveRam, "Backup RAM"),
];

static VIRTUAL_BOY: &[MemoryRegion] = &[
    MemoryRegion::new(0x00000, 0x0FFFF, 0x05000000, SystemRam, "System RAM"),
    MemoryRegion::new(0x10000, 0x1FFFF, 0x06000000, SaveRam, "Cartridge RAM"),
];

static POKEMON_MINI: &[MemoryRegion] = &[
    MemoryRegion::new(0x0000, 0x0FFF, 0x1000, SystemRam, "System RAM"),
];

static WONDERSWAN: &[MemoryRegion] = &[
    MemoryRegion::new(0x0000, 0xFFFF, 0x0000, SystemRam, "System RAM"),
];

static NEO_GEO_POCKET: &[MemoryRegion] = &[
    MemoryRegion::new(0x0000, 0x2FFF, 0x004000, SystemRam, "System RAM"),
];

/// Look up the static region table for a console.
pub(crate) fn for_console(console: Console) -> &'static [MemoryRegion] {
    match console {
        Console::Nintendo => NES,
        Console::SuperNintendo => SNES,
        Console::GameBoy => GAMEBOY,
        Console::GameBoyColor => GAMEBOY_COLOR,
        Console::GameBoyAdvance => GAMEBOY_ADVANCE,
        Console::Nintendo64 => NINTENDO_64,
        Console::MegaDrive | Console::Sega32X => MEGA_DRIVE,
        Console::SegaCd => SEGA_CD,
        Console::MasterSystem => MASTER_SYSTEM,
        Console::GameGear => GAME_GEAR,
        Console::Sg1000 => SG1000,
        Console::PlayStation => PLAYSTATION,
        Console::Atari2600 => ATARI_2600,
        Console::AtariLynx => ATARI_LYNX,
        Console::PcEngine | Console::PcEngineCd => PC_ENGINE,
        Console::VirtualBoy => VIRTUAL_BOY,
        Console::PokemonMini => POKEMON_MINI,
        Console::WonderSwan => WONDERSWAN,
        Console::NeoGeoPocket => NEO_GEO_POCKET,
        _ => &[],
    }
}
