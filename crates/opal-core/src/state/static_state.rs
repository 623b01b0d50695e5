// Copyright 2025 the opal authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The packed static-state buffer for baked viewports and scissors.
//!
//! When a pipeline descriptor carries static viewports or scissors, all
//! records are serialized into one contiguous allocation at compile time:
//! viewport records, then depth-range records, then scissor records,
//! back-to-back. Bind-time replay walks the same fixed order with a
//! monotonic cursor, so the whole scheme costs a single allocation and
//! sequential reads.

use bytemuck::{AnyBitPattern, NoUninit, Pod, Zeroable};
use std::mem::size_of;

/// A packed viewport rectangle, laid out for batched array upload.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct ViewportRecord {
    /// Left edge in pixels.
    pub x: f32,
    /// Top edge in pixels.
    pub y: f32,
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

/// A packed viewport depth range. Kept separate from [`ViewportRecord`]
/// because backends upload depth ranges as a distinct double-precision
/// array.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct DepthRangeRecord {
    /// Minimum depth.
    pub min_depth: f64,
    /// Maximum depth.
    pub max_depth: f64,
}

/// A packed scissor rectangle.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct ScissorRecord {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width.
    pub width: i32,
    /// Height.
    pub height: i32,
}

/// Returns the exact byte size of a packed buffer holding `num_viewports`
/// viewport + depth-range records and `num_scissors` scissor records.
pub const fn packed_size(num_viewports: usize, num_scissors: usize) -> usize {
    num_viewports * (size_of::<ViewportRecord>() + size_of::<DepthRangeRecord>())
        + num_scissors * size_of::<ScissorRecord>()
}

/// The compiled static-state buffer: one exact-sized allocation plus the
/// record counts needed to replay it.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticStateBuffer {
    bytes: Box<[u8]>,
    num_viewports: u32,
    num_scissors: u32,
}

impl StaticStateBuffer {
    /// Creates a buffer from a finished writer and its record counts.
    pub(crate) fn new(writer: StaticStateWriter, num_viewports: u32, num_scissors: u32) -> Self {
        Self {
            bytes: writer.finish(),
            num_viewports,
            num_scissors,
        }
    }

    /// Number of packed viewport (and depth-range) records.
    pub fn num_viewports(&self) -> u32 {
        self.num_viewports
    }

    /// Number of packed scissor records.
    pub fn num_scissors(&self) -> u32 {
        self.num_scissors
    }

    /// A cursor positioned at the start of the packed records.
    pub fn cursor(&self) -> StaticStateCursor<'_> {
        StaticStateCursor {
            bytes: &self.bytes,
            offset: 0,
        }
    }
}

/// Sequentially serializes fixed-layout records into one exact-sized
/// allocation.
#[derive(Debug)]
pub(crate) struct StaticStateWriter {
    buffer: Vec<u8>,
    capacity: usize,
}

impl StaticStateWriter {
    /// Allocates a writer for exactly `size` bytes of records.
    pub(crate) fn with_exact_size(size: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(size),
            capacity: size,
        }
    }

    /// Appends one record at the cursor.
    pub(crate) fn write<T: NoUninit>(&mut self, record: &T) {
        debug_assert!(
            self.buffer.len() + size_of::<T>() <= self.capacity,
            "static-state writer overflow"
        );
        self.buffer.extend_from_slice(bytemuck::bytes_of(record));
    }

    fn finish(self) -> Box<[u8]> {
        debug_assert_eq!(
            self.buffer.len(),
            self.capacity,
            "static-state buffer not fully written"
        );
        self.buffer.into_boxed_slice()
    }
}

/// A monotonic, bounds-checked reader over the packed record sequence.
///
/// Records are read back in exactly the order they were written; reads are
/// unaligned since the byte buffer makes no alignment promise for the
/// record types.
#[derive(Debug)]
pub struct StaticStateCursor<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl StaticStateCursor<'_> {
    /// Reads the next record. Panics if the buffer is exhausted, which
    /// indicates a compiler/binder layout mismatch.
    pub fn next<T: AnyBitPattern>(&mut self) -> T {
        let end = self.offset + size_of::<T>();
        let record = bytemuck::pod_read_unaligned(&self.bytes[self.offset..end]);
        self.offset = end;
        record
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_size_is_exact() {
        // 16 bytes per viewport, 16 per depth range, 16 per scissor.
        assert_eq!(packed_size(0, 0), 0);
        assert_eq!(packed_size(1, 0), 32);
        assert_eq!(packed_size(2, 3), 2 * 32 + 3 * 16);
    }

    #[test]
    fn write_then_read_round_trip() {
        let vp = ViewportRecord {
            x: 8.0,
            y: 16.0,
            width: 640.0,
            height: 480.0,
        };
        let dr = DepthRangeRecord {
            min_depth: 0.25,
            max_depth: 0.75,
        };
        let sc = ScissorRecord {
            x: 1,
            y: 2,
            width: 300,
            height: 200,
        };

        let mut writer = StaticStateWriter::with_exact_size(packed_size(1, 1));
        writer.write(&vp);
        writer.write(&dr);
        writer.write(&sc);

        let buffer = StaticStateBuffer::new(writer, 1, 1);
        let mut cursor = buffer.cursor();
        assert_eq!(cursor.next::<ViewportRecord>(), vp);
        assert_eq!(cursor.next::<DepthRangeRecord>(), dr);
        assert_eq!(cursor.next::<ScissorRecord>(), sc);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    #[should_panic]
    fn cursor_past_end_panics() {
        let writer = StaticStateWriter::with_exact_size(0);
        let buffer = StaticStateBuffer::new(writer, 0, 0);
        let mut cursor = buffer.cursor();
        let _ = cursor.next::<ScissorRecord>();
    }
}
