use std::{fmt::Display, iter::FusedIterator};

use educe::Educe;
use log::{debug, trace};
use serde::Serialize;

use crate::{
    consts::*,
    prom::{Prom, ScanPos},
};

#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Serialize)]
pub enum Signal {
    #[serde(rename = "HS")]
    HSync,
    #[serde(rename = "HB")]
    HBlank,
}

impl Signal {
    pub fn name(&self) -> &'static str {
        match self {
            Signal::HSync => "HS",
            Signal::HBlank => "HB",
        }
    }
}

impl Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize)]
pub struct Transition {
    pub pos: u16,
    pub signal: Signal,
    pub level: bool,
}

impl Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:03X} {} = {}", self.pos, self.signal, self.level as u8)
    }
}

/// Output latches of the timing generator. Both come up high.
#[derive(Educe, PartialEq, Eq, Clone, Copy, Debug)]
#[educe(Default)]
pub struct Latches {
    #[educe(Default(expression = "true"))]
    pub hsync: bool,
    #[educe(Default(expression = "true"))]
    pub hblank: bool,
}

impl Latches {
    pub fn tick(&mut self, prom: &Prom, pos: ScanPos) {
        let data = prom.data(pos.prom_addr());

        trace!(
            "{:03X}: addr = {:02X}, data = {:02X}",
            u16::from(pos),
            pos.prom_addr(),
            u8::from(data)
        );

        if pos.hsync_gate() {
            self.hsync = data.hsync();
        }
        if pos.hblank_gate() {
            self.hblank = data.hblank();
        }
    }
}

/// Replays one scanline of the timing generator, yielding every latch change
/// in position order.
pub struct Simulator<'a> {
    prom: &'a Prom,
    pos: u16,
    latches: Latches,
    pending: Option<Transition>,
}

impl<'a> Simulator<'a> {
    pub fn new(prom: &'a Prom) -> Self {
        Self {
            prom,
            pos: 0,
            latches: Latches::default(),
            pending: None,
        }
    }

    /// Next position to be evaluated.
    pub fn pos(&self) -> u16 {
        self.pos
    }

    pub fn latches(&self) -> Latches {
        self.latches
    }

    fn step(&mut self) -> (Option<Transition>, Option<Transition>) {
        let pos = self.pos;
        let last = self.latches;

        self.latches.tick(self.prom, ScanPos::from(pos));
        self.pos += 1;

        let hsync = (self.latches.hsync != last.hsync).then(|| Transition {
            pos,
            signal: Signal::HSync,
            level: self.latches.hsync,
        });
        let hblank = (self.latches.hblank != last.hblank).then(|| Transition {
            pos,
            signal: Signal::HBlank,
            level: self.latches.hblank,
        });

        (hsync, hblank)
    }
}

impl<'a> Iterator for Simulator<'a> {
    type Item = Transition;

    fn next(&mut self) -> Option<Transition> {
        if let Some(t) = self.pending.take() {
            debug!("{t}");
            return Some(t);
        }

        while self.pos < DOTS_PER_LINE {
            let t = match self.step() {
                (Some(hsync), hblank) => {
                    self.pending = hblank;
                    hsync
                }
                (None, Some(hblank)) => hblank,
                (None, None) => continue,
            };
            debug!("{t}");
            return Some(t);
        }

        None
    }
}

impl<'a> FusedIterator for Simulator<'a> {}

pub fn transitions(prom: &Prom) -> Vec<Transition> {
    Simulator::new(prom).collect()
}
