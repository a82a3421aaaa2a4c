use super::error::{PngError, PngResult};

/// Distance in bytes from a byte to the matching byte of the pixel on its
/// left. Always 4 here: one RGBA pixel.
const BPP: usize = 4;

/// The per-scanline filter methods the PNG format defines.
///
/// Each scanline of stored image data starts with one byte naming how that
/// line was filtered. Decoding has to exactly reverse the named filter,
/// using the previous *reconstructed* line (all zero for the first line).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScanlineFilter {
  /// Bytes are stored as-is.
  None,
  /// Each byte is stored relative to the pixel on its left.
  Sub,
  /// Each byte is stored relative to the byte above it.
  Up,
  /// Each byte is stored relative to the average of left and above.
  Average,
  /// Each byte is stored relative to the Paeth predictor of left, above,
  /// and upper-left.
  Paeth,
}
impl TryFrom<u8> for ScanlineFilter {
  type Error = PngError;
  #[inline]
  fn try_from(value: u8) -> PngResult<Self> {
    Ok(match value {
      0 => Self::None,
      1 => Self::Sub,
      2 => Self::Up,
      3 => Self::Average,
      4 => Self::Paeth,
      _ => return Err(PngError::UnknownFilterType),
    })
  }
}

const fn paeth_predict(a: u8, b: u8, c: u8) -> u8 {
  let a_ = a as i32;
  let b_ = b as i32;
  let c_ = c as i32;
  let p: i32 = a_ + b_ - c_;
  let pa = (p - a_).abs();
  let pb = (p - b_).abs();
  let pc = (p - c_).abs();
  // The PNG spec is extremely specific that you shall not, under any
  // circumstances, alter the order of evaluation of this expression's tests.
  if pa <= pb && pa <= pc {
    a
  } else if pb <= pc {
    b
  } else {
    c
  }
}

/// Reverses one line's filter in place. `prev` is the already-reconstructed
/// line above, or empty for the top line (every missing byte reads as 0).
fn reconstruct_line(filter: ScanlineFilter, cur: &mut [u8], prev: &[u8]) {
  match filter {
    ScanlineFilter::None => (),
    ScanlineFilter::Sub => {
      for x in BPP..cur.len() {
        cur[x] = cur[x].wrapping_add(cur[x - BPP]);
      }
    }
    ScanlineFilter::Up => {
      for (c, b) in cur.iter_mut().zip(prev.iter().copied()) {
        *c = c.wrapping_add(b);
      }
    }
    ScanlineFilter::Average => {
      for x in 0..cur.len() {
        let a = if x < BPP { 0 } else { cur[x - BPP] as u32 };
        let b = if x < prev.len() { prev[x] as u32 } else { 0 };
        cur[x] = cur[x].wrapping_add(((a + b) / 2) as u8);
      }
    }
    ScanlineFilter::Paeth => {
      for x in 0..cur.len() {
        let a = if x < BPP { 0 } else { cur[x - BPP] };
        let b = if x < prev.len() { prev[x] } else { 0 };
        let c = if x < BPP || x - BPP >= prev.len() { 0 } else { prev[x - BPP] };
        cur[x] = cur[x].wrapping_add(paeth_predict(a, b, c));
      }
    }
  }
}

/// Undoes the scanline filtering of a whole decompressed image, in place.
///
/// `data` holds `height` lines, each a filter type byte followed by
/// `width * 4` image bytes. After this returns the image bytes of every line
/// are fully reconstructed (the filter marker bytes are left in between).
/// Reconstruction is strictly top to bottom since each line leans on the
/// one before it.
pub(crate) fn unfilter_lines(data: &mut [u8], width: u32, height: u32) -> PngResult<()> {
  let stride = 1 + width as usize * 4;
  let needed = stride.saturating_mul(height as usize);
  if data.len() < needed {
    return Err(PngError::FilteredBytesLengthMismatch);
  }
  let mut rest = &mut data[..needed];
  let mut prev: &[u8] = &[];
  while !rest.is_empty() {
    let (line, tail) = rest.split_at_mut(stride);
    rest = tail;
    let (filter_byte, cur) = line.split_at_mut(1);
    let filter = ScanlineFilter::try_from(filter_byte[0])?;
    reconstruct_line(filter, cur, prev);
    prev = cur;
  }
  Ok(())
}

#[test]
fn test_paeth_predict_tie_break_order() {
  // all distances tie: a wins
  assert_eq!(paeth_predict(1, 1, 1), 1);
  assert_eq!(paeth_predict(0, 0, 0), 0);
  // the predictor lands on a / b / c exactly
  assert_eq!(paeth_predict(10, 20, 20), 10);
  assert_eq!(paeth_predict(20, 10, 20), 10);
  assert_eq!(paeth_predict(0, 10, 5), 5);
  // first-line behavior: with b and c zero the prediction is just a
  assert_eq!(paeth_predict(12, 0, 0), 12);
  // first-pixel behavior: with a and c zero the prediction is b
  assert_eq!(paeth_predict(0, 12, 0), 12);
}

#[test]
fn test_reconstruct_sub_line() {
  let mut cur = [10, 20, 30, 40, 1, 1, 1, 1, 2, 2, 2, 2];
  reconstruct_line(ScanlineFilter::Sub, &mut cur, &[]);
  assert_eq!(cur, [10, 20, 30, 40, 11, 21, 31, 41, 13, 23, 33, 43]);
}

#[test]
fn test_reconstruct_up_line_with_zero_prev() {
  let mut cur = [5_u8; 8];
  reconstruct_line(ScanlineFilter::Up, &mut cur, &[]);
  assert_eq!(cur, [5_u8; 8]);
  let mut cur = [5_u8; 8];
  reconstruct_line(ScanlineFilter::Up, &mut cur, &[250_u8; 8]);
  assert_eq!(cur, [255_u8; 8]);
}
