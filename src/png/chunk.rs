use alloc::vec;
use alloc::vec::Vec;

use crate::source::{fill_exact, ByteSource};

use super::crc32::png_crc;
use super::error::{PngError, PngResult};

/// A four byte PNG chunk tag.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct PngChunkTy(pub [u8; 4]);
impl PngChunkTy {
  /// Image header.
  pub const IHDR: Self = Self(*b"IHDR");
  /// Image data.
  pub const IDAT: Self = Self(*b"IDAT");
  /// Image trailer.
  pub const IEND: Self = Self(*b"IEND");
}
impl core::fmt::Debug for PngChunkTy {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    core::fmt::Debug::fmt(core::str::from_utf8(self.0.as_slice()).unwrap_or("?"), f)
  }
}

/// One chunk pulled off a byte source, CRC already verified.
///
/// Chunks only live for the duration of an encode or decode, they're never
/// part of a canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PngRawChunk {
  /// The chunk's tag.
  pub ty: PngChunkTy,
  /// The chunk's data field.
  pub data: Vec<u8>,
}

/// Appends one whole chunk to `out`: big-endian data length, tag, data, and
/// the CRC-32 of tag-then-data.
pub fn push_chunk(out: &mut Vec<u8>, ty: PngChunkTy, data: &[u8]) {
  out.extend_from_slice(&(data.len() as u32).to_be_bytes());
  out.extend_from_slice(&ty.0);
  out.extend_from_slice(data);
  out.extend_from_slice(&png_crc(&ty.0, data).to_be_bytes());
}

/// An iterator that pulls successive chunks off a byte source.
///
/// The sequence is lazy, finite, and can't be restarted. Running out of
/// bytes partway through a chunk ends the sequence cleanly (`None`), because
/// truncation at a chunk boundary isn't distinguishable from the normal end
/// of the data. A chunk whose stored CRC doesn't match yields one
/// `Err(ChunkCrcMismatch)` and then the iterator is done.
#[derive(Debug)]
pub struct PngChunkReader<'s, S: ByteSource> {
  source: &'s mut S,
  done: bool,
}
impl<'s, S: ByteSource> PngChunkReader<'s, S> {
  /// Starts reading chunks. The source should already be positioned past
  /// the PNG signature.
  #[inline]
  pub fn new(source: &'s mut S) -> Self {
    Self { source, done: false }
  }
}
impl<'s, S: ByteSource> Iterator for PngChunkReader<'s, S> {
  type Item = PngResult<PngRawChunk>;

  fn next(&mut self) -> Option<Self::Item> {
    if self.done {
      return None;
    }
    let mut len_bytes = [0_u8; 4];
    if !fill_exact(self.source, &mut len_bytes) {
      self.done = true;
      return None;
    }
    let len = u32::from_be_bytes(len_bytes) as usize;
    let mut ty_bytes = [0_u8; 4];
    if !fill_exact(self.source, &mut ty_bytes) {
      self.done = true;
      return None;
    }
    let mut data = vec![0_u8; len];
    if !fill_exact(self.source, &mut data) {
      self.done = true;
      return None;
    }
    let mut crc_bytes = [0_u8; 4];
    if !fill_exact(self.source, &mut crc_bytes) {
      self.done = true;
      return None;
    }
    let declared_crc = u32::from_be_bytes(crc_bytes);
    if png_crc(&ty_bytes, &data) != declared_crc {
      self.done = true;
      return Some(Err(PngError::ChunkCrcMismatch));
    }
    Some(Ok(PngRawChunk { ty: PngChunkTy(ty_bytes), data }))
  }
}
