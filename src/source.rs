//! Pull-style byte sources for the PNG loader.

/// Something that can be read from, a few bytes at a time.
///
/// This is the input side of [`Canvas::load_png`](crate::Canvas::load_png).
/// It's deliberately tiny so that it works without `std`: a call fills as
/// much of `buf` as it can and returns how many bytes it wrote, with `0`
/// meaning end-of-stream. Short reads are fine, the loader keeps asking.
pub trait ByteSource {
  /// Reads up to `buf.len()` bytes into the front of `buf`, returning how
  /// many were read. `0` means the stream is over.
  fn read(&mut self, buf: &mut [u8]) -> usize;
}

impl ByteSource for &[u8] {
  #[inline]
  fn read(&mut self, buf: &mut [u8]) -> usize {
    let n = self.len().min(buf.len());
    let (head, tail) = self.split_at(n);
    buf[..n].copy_from_slice(head);
    *self = tail;
    n
  }
}

/// Reads until `buf` is full or the source runs out. Returns if it was
/// filled all the way.
pub(crate) fn fill_exact(source: &mut impl ByteSource, buf: &mut [u8]) -> bool {
  let mut filled = 0;
  while filled < buf.len() {
    let n = source.read(&mut buf[filled..]);
    if n == 0 {
      return false;
    }
    filled += n;
  }
  true
}

/// Adapts any [`std::io::Read`] into a [`ByteSource`].
///
/// I/O errors other than [`Interrupted`](std::io::ErrorKind::Interrupted)
/// are reported as end-of-stream, which the PNG loader treats as clean
/// truncation of the chunk sequence.
#[cfg(feature = "std")]
#[cfg_attr(docs_rs, doc(cfg(feature = "std")))]
#[derive(Debug)]
pub struct IoSource<R>(pub R);

#[cfg(feature = "std")]
impl<R: std::io::Read> ByteSource for IoSource<R> {
  fn read(&mut self, buf: &mut [u8]) -> usize {
    loop {
      match self.0.read(buf) {
        Ok(n) => return n,
        Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
        Err(_) => return 0,
      }
    }
  }
}

#[test]
fn test_slice_source_advances() {
  let data = [1_u8, 2, 3, 4, 5];
  let mut source: &[u8] = &data;
  let mut buf = [0_u8; 2];
  assert_eq!(source.read(&mut buf), 2);
  assert_eq!(buf, [1, 2]);
  let mut rest = [0_u8; 8];
  assert_eq!(source.read(&mut rest), 3);
  assert_eq!(&rest[..3], &[3, 4, 5]);
  assert_eq!(source.read(&mut rest), 0);
}
