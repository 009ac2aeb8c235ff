use crate::masking::MaskingInfo;

use super::MaskingUniform;

/// Entries guaranteed to fit the uniform-buffer fallback (16 KiB minimum
/// UBO size, 192 bytes per entry).
pub const MASKING_UBO_CAPACITY: usize = 64;

/// CPU staging for the per-draw masking array.
///
/// Each draw records the index returned by [`push`](Self::push) in its
/// vertices (`v_MaskingIndex`); the shader fetches its `MaskingInfo` from the
/// array. Consecutive pushes of identical state share one entry.
#[derive(Debug, Default, Clone)]
pub struct MaskingBuffer {
    entries: Vec<MaskingUniform>,
}

impl MaskingBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `info` unless it equals the last entry; returns its index.
    pub fn push(&mut self, info: &MaskingInfo) -> i32 {
        let entry = MaskingUniform::from(info);
        if let Some(last) = self.entries.last() {
            if *last == entry {
                return (self.entries.len() - 1) as i32;
            }
        }

        self.entries.push(entry);
        if self.entries.len() == MASKING_UBO_CAPACITY + 1 {
            log::debug!(
                "masking buffer exceeded {MASKING_UBO_CAPACITY} entries; requires a storage buffer"
            );
        }
        (self.entries.len() - 1) as i32
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the contents fit the fixed-size uniform-buffer variant.
    #[inline]
    pub fn fits_uniform_buffer(&self) -> bool {
        self.entries.len() <= MASKING_UBO_CAPACITY
    }

    #[inline]
    pub fn entries(&self) -> &[MaskingUniform] {
        &self.entries
    }

    /// Raw bytes ready for upload.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.entries)
    }

    /// Starts a new frame.
    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
