//! Writing a [`Canvas`] out as PNG data, and loading one back in.
//!
//! * [Portable Network Graphics Specification (Second Edition)][png-spec]
//!
//! [png-spec]: https://www.w3.org/TR/2003/REC-PNG-20031110/
//!
//! ## What's supported
//!
//! Exactly one storage format, matching what the canvas itself keeps in
//! memory: 8-bit truecolor with alpha (color type 6), deflate compression,
//! standard filtering, no interlacing. [`Canvas::load_png`] rejects anything
//! else as [`PngError::UnsupportedFormat`]. Palettes, transparency chunks,
//! gamma/ICC data, and every other ancillary chunk are out of scope; unknown
//! chunks still get their CRC verified but are otherwise skipped.
//!
//! ## The shape of the data
//!
//! A PNG is eight signature bytes followed by "chunks". Each chunk is a
//! big-endian data length, a four byte tag, the data, and a CRC-32 over tag
//! plus data. [`Canvas::to_png_vec`] writes exactly three: an `IHDR` with
//! the dimensions and format fields, one `IDAT` holding all the pixel data,
//! and an empty `IEND`.
//!
//! The `IDAT` payload is a zlib stream. Decompressed, it's one scanline per
//! row, each prefixed with a byte naming the scanline's filter. The encoder
//! always writes filter 0 ("nothing done"), so the payload is just the
//! canvas bytes with a zero in front of each row, and encoding then decoding
//! reproduces the canvas buffer byte for byte. The decoder handles all five
//! filter types, since other encoders pick filters per row as they please.
//!
//! ## Errors
//!
//! Chunk CRCs are enforced, unlike the usual lenient decoder: a single
//! flipped byte anywhere in a chunk fails the load with
//! [`PngError::ChunkCrcMismatch`]. On the other hand a stream that simply
//! *ends* early, at a chunk boundary or inside one, is not an error; the
//! chunk sequence just stops. Either way a failed load never touches the
//! canvas: dimensions and pixels only change once the whole image has
//! decoded cleanly.

use alloc::vec::Vec;

use crate::canvas::Canvas;
use crate::source::{fill_exact, ByteSource};

mod crc32;

mod error;
pub use error::*;

mod chunk;
pub use chunk::*;

mod ihdr;
pub use ihdr::*;

mod unfilter;
pub use unfilter::*;

/// The first eight bytes of any PNG datastream.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

impl Canvas {
  /// Serializes the whole canvas as PNG data.
  ///
  /// The output is signature + `IHDR` + one `IDAT` + `IEND`, with every
  /// scanline stored unfiltered and the payload compressed at the maximum
  /// zlib level.
  #[must_use]
  pub fn to_png_vec(&self) -> Vec<u8> {
    let row_size = self.width as usize * 4;
    let mut scanlines: Vec<u8> = Vec::with_capacity(self.height as usize * (row_size + 1));
    for y in 0..self.height as usize {
      scanlines.push(0);
      scanlines.extend_from_slice(&self.bytes[y * row_size..(y + 1) * row_size]);
    }
    let idat = miniz_oxide::deflate::compress_to_vec_zlib(&scanlines, 9);
    //
    let ihdr = Ihdr { width: self.width, height: self.height };
    let mut out: Vec<u8> = Vec::new();
    out.extend_from_slice(&PNG_SIGNATURE);
    push_chunk(&mut out, PngChunkTy::IHDR, &ihdr.to_chunk_data());
    push_chunk(&mut out, PngChunkTy::IDAT, &idat);
    push_chunk(&mut out, PngChunkTy::IEND, &[]);
    out
  }

  /// Loads PNG data from a byte source into this canvas.
  ///
  /// On success the canvas is resized to the image's dimensions (buffer
  /// fully reinitialized to [`bgcolor`](Canvas::bgcolor)) and the pixels are
  /// filled in. On any error the canvas is left exactly as it was.
  ///
  /// All `IDAT` chunks are concatenated and decompressed as a single zlib
  /// stream, so images that split their pixel data across several chunks
  /// load the same as images that don't.
  pub fn load_png<S: ByteSource>(&mut self, source: &mut S) -> PngResult<()> {
    let mut signature = [0_u8; 8];
    if !fill_exact(source, &mut signature) || signature != PNG_SIGNATURE {
      return Err(PngError::BytesAreNotPng);
    }
    let mut chunks = PngChunkReader::new(source);
    let first = chunks.next().ok_or(PngError::NoChunksDetected)??;
    if first.ty != PngChunkTy::IHDR {
      return Err(PngError::NotAnIhdrChunk);
    }
    let ihdr = Ihdr::from_chunk_data(&first.data)?;

    // Everything except IDAT is an ancillary chunk to us. We still drain the
    // whole stream so every chunk's CRC gets checked.
    let mut zlib_data: Vec<u8> = Vec::new();
    for chunk in &mut chunks {
      let chunk = chunk?;
      if chunk.ty == PngChunkTy::IDAT {
        zlib_data.extend_from_slice(&chunk.data);
      }
    }
    if zlib_data.is_empty() {
      // no image data at all: a blank canvas of the declared size
      self.resize(ihdr.width, ihdr.height);
      return Ok(());
    }

    let mut filtered = miniz_oxide::inflate::decompress_to_vec_zlib(&zlib_data)
      .map_err(|_| PngError::IdatDecompressionFailed)?;
    unfilter_lines(&mut filtered, ihdr.width, ihdr.height)?;

    // nothing can fail past this point, so the canvas can be touched now
    self.resize(ihdr.width, ihdr.height);
    let row_size = ihdr.width as usize * 4;
    let stride = ihdr.bytes_per_filterline();
    for y in 0..ihdr.height as usize {
      let line = &filtered[y * stride..(y + 1) * stride];
      self.bytes[y * row_size..(y + 1) * row_size].copy_from_slice(&line[1..]);
    }
    Ok(())
  }
}
