//! Part arithmetic for multipart uploads.

use serde::Serialize;

/// Byte range `[start, end)` of one upload part. Part numbers start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PartRange {
    pub part_number: u32,
    pub start: u64,
    pub end: u64,
}

impl PartRange {
    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// `ceil(file_size / part_size)`. Zero for an empty file.
pub fn total_parts(file_size: u64, part_size: u64) -> u32 {
    assert!(part_size > 0, "part size must be non-zero");
    file_size.div_ceil(part_size) as u32
}

/// Split `file_size` bytes into consecutive parts of `part_size` bytes; the last may be shorter.
pub fn plan_parts(file_size: u64, part_size: u64) -> Vec<PartRange> {
    (1..=total_parts(file_size, part_size))
        .map(|part_number| {
            let start = u64::from(part_number - 1) * part_size;
            PartRange {
                part_number,
                start,
                end: (start + part_size).min(file_size),
            }
        })
        .collect()
}
