pub const DOTS_PER_LINE: u16 = 0x200;

// TBP24S10: 256 words. Highest address the decode reaches is 0xFF.
pub const PROM_SIZE: usize = 0x100;

pub const HSYNC_LATCH_DOT: u8 = 0xF;
pub const HBLANK_LATCH_QUARTER: u8 = 0b11;
