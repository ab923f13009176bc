#![allow(unused_braces)]

use log::warn;
use modular_bitfield::prelude::*;
use thiserror::Error;

use crate::consts::*;

/// Horizontal position counter as seen by the PROM address lines.
///
/// A0-A3 are driven by `dot`, A4-A7 by `row` and `quarter`.
/// Bit 4 of the counter is not wired to the PROM.
#[bitfield]
#[repr(u16)]
#[derive(Default, Clone, Copy, Debug)]
pub struct ScanPos {
    pub dot: B4,
    #[skip]
    __: B1,
    pub row: B2,
    pub quarter: B2,
    #[skip]
    __: B7,
}

impl ScanPos {
    pub fn prom_addr(&self) -> u16 {
        (self.quarter() as u16) << 6 | (self.row() as u16) << 4 | self.dot() as u16
    }

    pub fn hsync_gate(&self) -> bool {
        self.dot() == HSYNC_LATCH_DOT
    }

    pub fn hblank_gate(&self) -> bool {
        self.quarter() == HBLANK_LATCH_QUARTER
    }
}

#[bitfield]
#[repr(u8)]
#[derive(Default, Clone, Copy, Debug)]
pub struct PromData {
    #[skip]
    __: B1,
    pub hblank: bool,
    #[skip]
    __: B1,
    pub hsync: bool,
    #[skip]
    __: B4,
}

#[derive(Error, Debug)]
pub enum PromError {
    #[error("PROM image too small: {actual} bytes, need at least {required}")]
    TooSmall { actual: usize, required: usize },
}

#[derive(Debug, Clone)]
pub struct Prom {
    data: Vec<u8>,
}

impl Prom {
    pub fn from_bytes(bytes: &[u8]) -> Result<Prom, PromError> {
        if bytes.len() < PROM_SIZE {
            Err(PromError::TooSmall {
                actual: bytes.len(),
                required: PROM_SIZE,
            })?
        }

        if bytes.len() != PROM_SIZE {
            warn!(
                "PROM size does not match TBP24S10: expected: {PROM_SIZE}, actual: {}",
                bytes.len()
            );
        }

        Ok(Self {
            data: bytes.to_vec(),
        })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn data(&self, addr: u16) -> PromData {
        PromData::from(self.data[addr as usize])
    }
}
