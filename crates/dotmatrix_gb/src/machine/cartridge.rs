use anyhow::{ensure, Result};

/// Header byte range covered by the checksum.
const HEADER_CHECKSUM_RANGE: std::ops::RangeInclusive<usize> = 0x0134..=0x014C;
/// Location of the stored header checksum byte.
const HEADER_CHECKSUM_ADDR: usize = 0x014D;
/// Upper-case ASCII title bytes.
const HEADER_TITLE_RANGE: std::ops::Range<usize> = 0x0134..0x0144;
/// Size of the external RAM window at 0xA000..0xBFFF.
const EXTERNAL_RAM_SIZE: usize = 0x2000;

/// A loaded cartridge: the ROM image plus the external RAM window.
///
/// Mapper/bank-switching hardware is not modelled; the ROM is read flat
/// over 0x0000..0x7FFF and writes into the ROM window are ignored.
#[derive(Debug)]
pub struct Cartridge {
    rom: Vec<u8>,
    ram: Vec<u8>,
}

impl Cartridge {
    /// Wrap a ROM image, validating the header checksum.
    ///
    /// The checksum folds `sum = sum - byte - 1` over 0x0134..=0x014C,
    /// masked to 8 bits, and must equal the byte stored at 0x014D. A
    /// mismatch means a corrupted or misread image and the machine must
    /// not start executing it.
    pub fn from_bytes(rom: Vec<u8>) -> Result<Self> {
        ensure!(
            rom.len() > HEADER_CHECKSUM_ADDR,
            "ROM image too small for a cartridge header: {} bytes",
            rom.len()
        );

        let stored = rom[HEADER_CHECKSUM_ADDR];
        let computed = header_checksum(&rom);
        ensure!(
            computed == stored,
            "cartridge header checksum mismatch: computed 0x{computed:02X}, header stores 0x{stored:02X}"
        );

        let cart = Self {
            rom,
            ram: vec![0; EXTERNAL_RAM_SIZE],
        };
        log::info!(
            "loaded cartridge \"{title}\" ({len} bytes, header checksum 0x{stored:02X})",
            title = cart.title(),
            len = cart.rom.len(),
        );
        Ok(cart)
    }

    /// Cartridge title from the header: upper-case ASCII, NUL padded.
    pub fn title(&self) -> String {
        self.rom[HEADER_TITLE_RANGE]
            .iter()
            .take_while(|&&b| b != 0)
            .map(|&b| b as char)
            .collect()
    }

    pub fn rom_read(&self, addr: u16) -> u8 {
        self.rom.get(addr as usize).copied().unwrap_or(0xFF)
    }

    /// ROM-window writes would address the mapper; with none modelled they
    /// have no effect.
    pub fn rom_write(&mut self, _addr: u16, _value: u8) {}

    /// Read from the external RAM window (0xA000..0xBFFF).
    pub fn ram_read(&self, addr: u16) -> u8 {
        self.ram[addr as usize & (EXTERNAL_RAM_SIZE - 1)]
    }

    /// Write to the external RAM window (0xA000..0xBFFF).
    pub fn ram_write(&mut self, addr: u16, value: u8) {
        self.ram[addr as usize & (EXTERNAL_RAM_SIZE - 1)] = value;
    }
}

fn header_checksum(rom: &[u8]) -> u8 {
    rom[HEADER_CHECKSUM_RANGE]
        .iter()
        .fold(0u8, |sum, &byte| sum.wrapping_sub(byte).wrapping_sub(1))
}
