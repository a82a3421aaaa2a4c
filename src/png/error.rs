/// Things that can go wrong while loading PNG data.
///
/// A *truncated* stream is deliberately not on this list: running out of
/// bytes while expecting a chunk is treated as the clean end of the chunk
/// sequence, because PNG data cut off after its last complete chunk is
/// still usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PngError {
  /// The stream didn't begin with the eight PNG signature bytes.
  BytesAreNotPng,
  /// The signature was fine but no complete chunk followed it.
  NoChunksDetected,
  /// The first chunk must be `IHDR` and wasn't.
  NotAnIhdrChunk,
  /// The `IHDR` chunk's data field wasn't 13 bytes.
  IhdrIllegalData,
  /// The header declares anything other than 8-bit truecolor with alpha,
  /// deflate compression, standard filtering, and no interlacing.
  UnsupportedFormat,
  /// A chunk's stored CRC-32 disagrees with the one computed over its tag
  /// and data.
  ChunkCrcMismatch,
  /// The concatenated `IDAT` payload wasn't a valid zlib stream.
  IdatDecompressionFailed,
  /// The decompressed image data is shorter than the scanlines the header
  /// promised.
  FilteredBytesLengthMismatch,
  /// A scanline began with a filter type byte outside 0 through 4.
  UnknownFilterType,
}

/// Alias for `Result` with a [`PngError`] error type.
pub type PngResult<T> = Result<T, PngError>;
