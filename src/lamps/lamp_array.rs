// src/lamps/lamp_array.rs

use std::fmt;

use log::trace;
use serde::{Serialize, Serializer};

pub const LAMP_COUNT: usize = 8;

/// Number of distinct arrays of `LAMP_COUNT` binary lamps.
const STATE_COUNT: usize = 1 << LAMP_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lamp {
    #[default]
    Off = 0,
    On = 1,
}

impl Lamp {
    /// Off when both neighbours agree, on when they differ.
    fn from_neighbours(left: Lamp, right: Lamp) -> Lamp {
        if left == right {
            Lamp::Off
        } else {
            Lamp::On
        }
    }

    pub fn from_raw(value: f64) -> Option<Lamp> {
        if value == 0.0 {
            Some(Lamp::Off)
        } else if value == 1.0 {
            Some(Lamp::On)
        } else {
            None
        }
    }
}

impl From<Lamp> for u8 {
    fn from(lamp: Lamp) -> u8 {
        lamp as u8
    }
}

impl Serialize for Lamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*self))
    }
}

/// A row of eight lamps. Each day produces a fresh array from the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct LampArray {
    lamps: [Lamp; LAMP_COUNT],
}

impl LampArray {
    pub fn new(lamps: [Lamp; LAMP_COUNT]) -> Self {
        LampArray { lamps }
    }

    /// Builds an array from raw numbers; `None` unless there are exactly eight 0/1 values.
    pub fn from_raw(values: &[f64]) -> Option<Self> {
        if values.len() != LAMP_COUNT {
            return None;
        }

        let mut lamps = [Lamp::Off; LAMP_COUNT];
        for (slot, &value) in lamps.iter_mut().zip(values) {
            *slot = Lamp::from_raw(value)?;
        }
        Some(LampArray { lamps })
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.lamps.iter().map(|&lamp| u8::from(lamp)).collect()
    }

    /// Packs the array into a byte, lamp `i` at bit `i`.
    pub fn bits(&self) -> u8 {
        self.lamps
            .iter()
            .enumerate()
            .fold(0u8, |acc, (i, &lamp)| acc | (u8::from(lamp) << i))
    }

    /// One day: every lamp is recomputed from the previous day's neighbours.
    /// Neighbours beyond either end are off.
    pub fn step(&self) -> LampArray {
        let mut next = [Lamp::Off; LAMP_COUNT];

        for (i, slot) in next.iter_mut().enumerate() {
            let left = if i == 0 { Lamp::Off } else { self.lamps[i - 1] };
            let right = self.lamps.get(i + 1).copied().unwrap_or(Lamp::Off);
            *slot = Lamp::from_neighbours(left, right);
        }

        LampArray { lamps: next }
    }

    /// State after `days` steps.
    ///
    /// Only 256 states exist, so the sequence of states is eventually periodic. Once a state
    /// repeats the remaining days are reduced modulo the period.
    pub fn advance(&self, days: u64) -> LampArray {
        let mut first_seen: [Option<u64>; STATE_COUNT] = [None; STATE_COUNT];
        let mut state = *self;
        let mut day = 0u64;

        while day < days {
            let key = state.bits() as usize;
            if let Some(start) = first_seen[key] {
                let period = day - start;
                let remaining = (days - day) % period;
                trace!("Cycle of period {} found on day {}, {} steps left", period, day, remaining);
                for _ in 0..remaining {
                    state = state.step();
                }
                return state;
            }

            first_seen[key] = Some(day);
            state = state.step();
            day += 1;
        }

        state
    }
}

impl fmt::Display for LampArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &lamp) in self.lamps.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", u8::from(lamp))?;
        }
        Ok(())
    }
}
