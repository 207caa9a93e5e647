use std::fs::File;
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt};
use memmap2::Mmap;

use crate::error::{Result, VigilError};
use crate::frame::{ColorMode, RgbFrame, SourceInfo};

pub const SER_HEADER_SIZE: usize = 178;
const SER_MAGIC: &[u8; 14] = b"LUCAM-RECORDER";

/// SER color IDs for the two interleaved 3-channel layouts.
const COLOR_ID_RGB: i32 = 100;
const COLOR_ID_BGR: i32 = 101;

/// SER file header (178 bytes).
#[derive(Clone, Debug)]
pub struct SerHeader {
    pub color_id: i32,
    pub width: u32,
    pub height: u32,
    pub pixel_depth: u32,
    pub frame_count: u32,
    pub observer: String,
    pub instrument: String,
    pub telescope: String,
    pub date_time: u64,
    pub date_time_utc: u64,
}

impl SerHeader {
    /// Total bytes per frame (8-bit, 3 planes).
    pub fn frame_byte_size(&self) -> usize {
        let pixels = (self.width as usize)
            .checked_mul(self.height as usize)
            .expect("Image dimensions too large");
        pixels
            .checked_mul(3)
            .expect("Frame size calculation overflow")
    }

    pub fn color_mode(&self) -> ColorMode {
        match self.color_id {
            COLOR_ID_BGR => ColorMode::Bgr,
            _ => ColorMode::Rgb,
        }
    }
}

/// Memory-mapped SER video source.
///
/// Yields frames in playback order through [`SerVideo::read_next`]; once the
/// last frame has been read, `read_next` returns `Ok(None)` permanently.
#[derive(Debug)]
pub struct SerVideo {
    mmap: Mmap,
    pub header: SerHeader,
    cursor: usize,
}

impl SerVideo {
    /// Open a SER file, parse and validate its header.
    ///
    /// Only 8-bit interleaved RGB/BGR sources are accepted; the motion
    /// pipeline needs 3-channel color input.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };

        if mmap.len() < SER_HEADER_SIZE {
            return Err(VigilError::InvalidSer(
                "File too small for SER header".into(),
            ));
        }

        if &mmap[0..14] != SER_MAGIC {
            return Err(VigilError::InvalidSer(
                "Missing LUCAM-RECORDER magic".into(),
            ));
        }

        let header = parse_header(&mmap[..SER_HEADER_SIZE])?;

        if header.pixel_depth != 8 {
            return Err(VigilError::UnsupportedFormat(format!(
                "{}-bit pixel depth (only 8-bit supported)",
                header.pixel_depth
            )));
        }
        if header.color_id != COLOR_ID_RGB && header.color_id != COLOR_ID_BGR {
            return Err(VigilError::UnsupportedFormat(format!(
                "color id {} (only interleaved RGB/BGR supported)",
                header.color_id
            )));
        }

        let expected_data_size =
            SER_HEADER_SIZE + header.frame_byte_size() * header.frame_count as usize;
        if mmap.len() < expected_data_size {
            return Err(VigilError::InvalidSer(format!(
                "File truncated: expected at least {} bytes, got {}",
                expected_data_size,
                mmap.len()
            )));
        }

        Ok(Self {
            mmap,
            header,
            cursor: 0,
        })
    }

    pub fn frame_count(&self) -> usize {
        self.header.frame_count as usize
    }

    pub fn width(&self) -> usize {
        self.header.width as usize
    }

    pub fn height(&self) -> usize {
        self.header.height as usize
    }

    /// Get the raw bytes for a single frame (zero-copy from mmap).
    fn frame_raw(&self, index: usize) -> Result<&[u8]> {
        let count = self.frame_count();
        if index >= count {
            return Err(VigilError::FrameIndexOutOfRange {
                index,
                total: count,
            });
        }
        let offset = SER_HEADER_SIZE + index * self.header.frame_byte_size();
        let end = offset + self.header.frame_byte_size();
        Ok(&self.mmap[offset..end])
    }

    /// Decode the frame at `index`, normalizing BGR sources to RGB.
    pub fn read_frame(&self, index: usize) -> Result<RgbFrame> {
        let raw = self.frame_raw(index)?;
        let mut data = raw.to_vec();
        if self.header.color_mode() == ColorMode::Bgr {
            for px in data.chunks_exact_mut(3) {
                px.swap(0, 2);
            }
        }
        Ok(RgbFrame::new(self.width(), self.height(), data))
    }

    /// Read the next frame in playback order, or `Ok(None)` once the source
    /// is exhausted. Exhaustion is permanent.
    pub fn read_next(&mut self) -> Result<Option<RgbFrame>> {
        if self.cursor >= self.frame_count() {
            return Ok(None);
        }
        let frame = self.read_frame(self.cursor)?;
        self.cursor += 1;
        Ok(Some(frame))
    }

    /// Build SourceInfo from the header.
    pub fn info(&self, path: &Path) -> SourceInfo {
        SourceInfo {
            filename: path.to_path_buf(),
            total_frames: self.frame_count(),
            width: self.header.width,
            height: self.header.height,
            bit_depth: self.header.pixel_depth as u8,
            color_mode: self.header.color_mode(),
            observer: non_empty(&self.header.observer),
            telescope: non_empty(&self.header.telescope),
            instrument: non_empty(&self.header.instrument),
        }
    }
}

fn parse_header(buf: &[u8]) -> Result<SerHeader> {
    let mut cursor = std::io::Cursor::new(&buf[14..]); // skip magic

    let _lu_id = cursor.read_i32::<LittleEndian>()?;
    let color_id = cursor.read_i32::<LittleEndian>()?;
    let _le_flag = cursor.read_i32::<LittleEndian>()?;
    let width = cursor.read_i32::<LittleEndian>()? as u32;
    let height = cursor.read_i32::<LittleEndian>()? as u32;
    let pixel_depth = cursor.read_i32::<LittleEndian>()? as u32;
    let frame_count = cursor.read_i32::<LittleEndian>()? as u32;

    let observer = read_fixed_string(&buf[42..82]);
    let instrument = read_fixed_string(&buf[82..122]);
    let telescope = read_fixed_string(&buf[122..162]);

    let mut cursor = std::io::Cursor::new(&buf[162..]);
    let date_time = cursor.read_u64::<LittleEndian>()?;
    let date_time_utc = cursor.read_u64::<LittleEndian>()?;

    if width == 0 || height == 0 {
        return Err(VigilError::InvalidDimensions { width, height });
    }

    Ok(SerHeader {
        color_id,
        width,
        height,
        pixel_depth,
        frame_count,
        observer,
        instrument,
        telescope,
        date_time,
        date_time_utc,
    })
}

fn read_fixed_string(buf: &[u8]) -> String {
    String::from_utf8_lossy(buf)
        .trim_end_matches('\0')
        .trim()
        .to_string()
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() { None } else { Some(s.to_string()) }
}
