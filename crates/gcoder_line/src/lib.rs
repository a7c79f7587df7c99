use std::mem;

use gcoder_heapsize::LineView;
use serde::{Deserialize, Serialize};

/// One parsed G-code line.
///
/// The motion fields and flags are fixed-layout and counted in
/// [`GcodeLine::BASE_SIZE`]; only the two optional owned string buffers
/// carry a variable heap payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GcodeLine {
    raw: Option<String>,
    command: Option<String>,
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub z: Option<f32>,
    pub e: Option<f32>,
    pub f: Option<f32>,
    pub is_move: bool,
    pub relative: bool,
    pub extruding: bool,
}

impl GcodeLine {
    /// Fixed-layout allocation size of a line, excluding the heap payloads
    /// of the owned buffers.
    pub const BASE_SIZE: usize = mem::size_of::<GcodeLine>();

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_raw(mut self, raw: impl Into<String>) -> Self {
        self.raw = Some(raw.into());
        self
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }
}

impl LineView for GcodeLine {
    fn base_size(&self) -> usize {
        Self::BASE_SIZE
    }

    fn raw_text(&self) -> Option<&[u8]> {
        self.raw.as_deref().map(str::as_bytes)
    }

    fn command_text(&self) -> Option<&[u8]> {
        self.command.as_deref().map(str::as_bytes)
    }
}
