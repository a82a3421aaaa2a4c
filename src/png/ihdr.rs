use super::error::{PngError, PngResult};

/// Image header data for the one pixel layout this crate supports.
///
/// The wire header also carries bit depth, color type, and the three method
/// bytes, but since only a single combination of those is accepted, parsing
/// keeps just the dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ihdr {
  /// Width in pixels.
  pub width: u32,
  /// Height in pixels.
  pub height: u32,
}

impl Ihdr {
  /// Parses an `IHDR` chunk's 13-byte data field.
  ///
  /// Anything other than bit depth 8, color type 6 (truecolor with alpha),
  /// compression 0, filter method 0, interlace 0 is an
  /// [`UnsupportedFormat`](PngError::UnsupportedFormat) failure.
  pub fn from_chunk_data(data: &[u8]) -> PngResult<Self> {
    match *data {
      [w0, w1, w2, w3, h0, h1, h2, h3, bit_depth, color_type, compression, filter_method, interlace] => {
        if (bit_depth, color_type, compression, filter_method, interlace) != (8, 6, 0, 0, 0) {
          return Err(PngError::UnsupportedFormat);
        }
        Ok(Self {
          width: u32::from_be_bytes([w0, w1, w2, w3]),
          height: u32::from_be_bytes([h0, h1, h2, h3]),
        })
      }
      _ => Err(PngError::IhdrIllegalData),
    }
  }

  /// The 13 bytes of the `IHDR` data field for these dimensions.
  #[inline]
  #[must_use]
  pub fn to_chunk_data(self) -> [u8; 13] {
    let [w0, w1, w2, w3] = self.width.to_be_bytes();
    let [h0, h1, h2, h3] = self.height.to_be_bytes();
    [w0, w1, w2, w3, h0, h1, h2, h3, 8, 6, 0, 0, 0]
  }

  /// Bytes in one scanline once the filter type byte is included.
  #[inline]
  #[must_use]
  pub(crate) const fn bytes_per_filterline(self) -> usize {
    1 + self.width as usize * 4
  }
}

#[test]
fn test_ihdr_round_trip() {
  let ihdr = Ihdr { width: 640, height: 480 };
  assert_eq!(Ihdr::from_chunk_data(&ihdr.to_chunk_data()), Ok(ihdr));
}

#[test]
fn test_ihdr_rejects_other_formats() {
  let mut grayscale = Ihdr { width: 2, height: 2 }.to_chunk_data();
  grayscale[9] = 0;
  assert_eq!(Ihdr::from_chunk_data(&grayscale), Err(PngError::UnsupportedFormat));

  let mut one_bit = Ihdr { width: 2, height: 2 }.to_chunk_data();
  one_bit[8] = 1;
  assert_eq!(Ihdr::from_chunk_data(&one_bit), Err(PngError::UnsupportedFormat));

  let mut interlaced = Ihdr { width: 2, height: 2 }.to_chunk_data();
  interlaced[12] = 1;
  assert_eq!(Ihdr::from_chunk_data(&interlaced), Err(PngError::UnsupportedFormat));

  assert_eq!(Ihdr::from_chunk_data(&[0; 12]), Err(PngError::IhdrIllegalData));
}
