use easel::{gradient, Canvas, RGBA8};

/// The canvas blend rule, written out separately from the crate so the tests
/// don't just agree with themselves: RGB moves toward the incoming color by
/// its alpha, the stored alpha never changes.
fn blended(dst: RGBA8, src: RGBA8) -> RGBA8 {
  let mix = |d: u8, s: u8| ((d as u32 * (255 - src.a as u32) + s as u32 * src.a as u32) >> 8) as u8;
  RGBA8 { r: mix(dst.r, src.r), g: mix(dst.g, src.g), b: mix(dst.b, src.b), a: dst.a }
}

const BG: RGBA8 = RGBA8 { r: 10, g: 20, b: 30, a: 77 };
const INK: RGBA8 = RGBA8 { r: 200, g: 100, b: 50, a: 0xFF };

fn canvas(width: u32, height: u32) -> Canvas {
  Canvas::with_colors(width, height, BG, INK)
}

#[test]
fn test_horizontal_line_covers_both_endpoints_with_no_spillover() {
  let mut c = canvas(12, 3);
  c.line(0, 0, 10, 0);
  for x in 0..=10 {
    assert_eq!(c.get(x, 0).unwrap(), blended(BG, INK), "x={x}");
  }
  // pixel past the endpoint, and the whole row below, are untouched
  assert_eq!(c.get(11, 0).unwrap(), BG);
  for x in 0..12 {
    assert_eq!(c.get(x, 1).unwrap(), BG, "x={x}");
    assert_eq!(c.get(x, 2).unwrap(), BG, "x={x}");
  }
}

#[test]
fn test_vertical_and_diagonal_lines_are_plain_runs() {
  let mut c = canvas(8, 8);
  c.line(3, 6, 3, 1);
  for y in 1..=6 {
    assert_eq!(c.get(3, y).unwrap(), blended(BG, INK), "y={y}");
  }
  assert_eq!(c.get(3, 0).unwrap(), BG);
  assert_eq!(c.get(3, 7).unwrap(), BG);

  let mut c = canvas(8, 8);
  c.line(7, 0, 0, 7);
  for i in 0..=7 {
    assert_eq!(c.get(7 - i, i).unwrap(), blended(BG, INK), "i={i}");
  }
  // nothing off the diagonal
  assert_eq!(c.get(0, 0).unwrap(), BG);
  assert_eq!(c.get(6, 0).unwrap(), BG);
}

#[test]
fn test_wu_line_endpoints_are_full_intensity() {
  let mut c = canvas(16, 16);
  c.line(0, 0, 3, 7);
  // the final endpoint is drawn exactly once, at full intensity
  assert_eq!(c.get(3, 7).unwrap(), blended(BG, INK));
  // the start endpoint is drawn at full intensity and then picks up the
  // first step's partial cover on top, so just check it got inked
  let start = c.get(0, 0).unwrap();
  assert_ne!(start, BG);
  assert_eq!(start.a, BG.a);
  // every row the line passes through was touched, and only near the line
  for y in 0..=7 {
    let touched: Vec<i32> = (0..16).filter(|&x| c.get(x, y).unwrap() != BG).collect();
    assert!(!touched.is_empty(), "y={y}");
    assert!(touched.iter().all(|&x| x <= 4), "y={y} touched={touched:?}");
  }
  // rows beyond the line weren't
  for y in 8..16 {
    assert!((0..16).all(|x| c.get(x, y).unwrap() == BG), "y={y}");
  }
}

#[test]
fn test_line_clips_quietly() {
  let mut c = canvas(4, 4);
  c.line(-5, -5, 8, 8);
  c.line(-3, 2, 9, 2);
  // only checking that out-of-range travel neither panics nor wraps around
  assert_eq!(c.width, 4);
}

#[test]
fn test_filled_rect_blends_the_box_and_nothing_else() {
  let mut c = canvas(6, 6);
  c.filled_rect(4, 3, 1, 1); // corners in silly order on purpose
  for x in 0..6 {
    for y in 0..6 {
      let expected = if (1..=4).contains(&x) && (1..=3).contains(&y) {
        blended(BG, INK)
      } else {
        BG
      };
      assert_eq!(c.get(x, y).unwrap(), expected, "x={x} y={y}");
    }
  }
}

#[test]
fn test_rect_outline_leaves_the_interior_alone() {
  let mut c = canvas(6, 6);
  c.rect(0, 0, 4, 4);
  for x in 1..=3 {
    for y in 1..=3 {
      assert_eq!(c.get(x, y).unwrap(), BG, "x={x} y={y}");
    }
  }
  // edge midpoints got ink (corners blend twice, so just check they changed)
  assert_eq!(c.get(2, 0).unwrap(), blended(BG, INK));
  assert_eq!(c.get(0, 2).unwrap(), blended(BG, INK));
  assert_ne!(c.get(0, 0).unwrap(), BG);
  assert_ne!(c.get(4, 4).unwrap(), BG);
}

#[test]
fn test_polyline_matches_individual_lines() {
  let mut a = canvas(10, 10);
  a.polyline(&[(0, 9), (5, 0), (9, 9)]);
  let mut b = canvas(10, 10);
  b.line(0, 9, 5, 0);
  b.line(5, 0, 9, 9);
  assert_eq!(a.bytes, b.bytes);
}

#[test]
fn test_vertical_gradient_pins_first_and_last_rows() {
  let start = RGBA8 { r: 0xFF, g: 0, b: 0, a: 0xFF };
  let end = RGBA8 { r: 0x20, g: 0, b: 0xFF, a: 0x80 };
  let mut c = canvas(5, 9);
  c.vertical_gradient(1, 2, 3, 6, start, end);
  for x in 1..=3 {
    assert_eq!(c.get(x, 2).unwrap(), blended(BG, start), "x={x}");
    assert_eq!(c.get(x, 6).unwrap(), blended(BG, end), "x={x}");
  }
  // outside the box nothing happened
  assert_eq!(c.get(0, 4).unwrap(), BG);
  assert_eq!(c.get(4, 4).unwrap(), BG);
  assert_eq!(c.get(2, 1).unwrap(), BG);
  assert_eq!(c.get(2, 7).unwrap(), BG);
}

#[test]
fn test_gradient_channels_are_monotonic() {
  let start = RGBA8 { r: 0, g: 200, b: 7, a: 0 };
  let end = RGBA8 { r: 255, g: 3, b: 7, a: 255 };
  let grad = gradient(start, end, 37);
  assert_eq!(grad.len(), 38);
  assert_eq!(grad[0], start);
  assert_eq!(grad[37], end);
  for pair in grad.windows(2) {
    assert!(pair[1].r >= pair[0].r);
    assert!(pair[1].g <= pair[0].g);
    assert_eq!(pair[1].b, 7);
    assert!(pair[1].a >= pair[0].a);
  }
}

#[test]
fn test_copy_rect_moves_all_four_bytes() {
  let mut c = canvas(8, 8);
  c.filled_rect(0, 0, 1, 1); // blended RGB, original alpha
  c.copy_rect(0, 0, 1, 1, 5, 5);
  for (x, y) in [(5, 5), (6, 5), (5, 6), (6, 6)] {
    assert_eq!(c.get(x, y).unwrap(), blended(BG, INK), "x={x} y={y}");
  }
  // source pixels still in place
  assert_eq!(c.get(0, 0).unwrap(), blended(BG, INK));
  // copy hanging off the canvas just loses the off-canvas part
  c.copy_rect(0, 0, 1, 1, 7, 7);
  assert_eq!(c.get(7, 7).unwrap(), blended(BG, INK));
}

#[test]
fn test_copy_rect_to_another_canvas() {
  let mut src = canvas(4, 4);
  src.filled_rect(0, 0, 3, 3);
  let mut dst = canvas(4, 4);
  src.copy_rect_to(1, 1, 2, 2, 0, 0, &mut dst);
  assert_eq!(dst.get(0, 0).unwrap(), blended(BG, INK));
  assert_eq!(dst.get(1, 1).unwrap(), blended(BG, INK));
  assert_eq!(dst.get(2, 2).unwrap(), BG);
}

#[test]
fn test_blend_rect_forces_the_alpha() {
  let mut src = canvas(4, 4);
  src.filled_rect(0, 0, 3, 3);
  let moved = src.get(0, 0).unwrap();

  // alpha 0 still runs the blend, which nudges channels down by the shift
  let mut dst = canvas(4, 4);
  src.blend_rect_to(0, 0, 1, 1, 0, 0, &mut dst, 0);
  let expected = blended(BG, RGBA8 { a: 0, ..moved });
  assert_eq!(dst.get(0, 0).unwrap(), expected);
  assert_eq!(dst.get(0, 0).unwrap().a, BG.a);

  // full alpha blends the source color in hard
  let mut dst = canvas(4, 4);
  src.blend_rect_to(0, 0, 1, 1, 0, 0, &mut dst, 0xFF);
  let expected = blended(BG, RGBA8 { a: 0xFF, ..moved });
  assert_eq!(dst.get(0, 0).unwrap(), expected);

  // same-canvas version agrees with the two-canvas version
  let mut both = src.clone();
  both.blend_rect(0, 0, 1, 1, 2, 2, 0x80);
  let expected = blended(src.get(2, 2).unwrap(), RGBA8 { a: 0x80, ..moved });
  assert_eq!(both.get(2, 2).unwrap(), expected);
}

#[test]
fn test_grayscale_weights() {
  assert_eq!(RGBA8 { r: 255, g: 0, b: 0, a: 255 }.grayscale(), 76);
  assert_eq!(RGBA8 { r: 0, g: 255, b: 0, a: 255 }.grayscale(), 150);
  assert_eq!(RGBA8 { r: 0, g: 0, b: 255, a: 255 }.grayscale(), 28);
  assert_eq!(RGBA8 { r: 0, g: 0, b: 0, a: 0 }.grayscale(), 0);
}
