//! RGB to RGBA conversion for surfaces that want four bytes per pixel.

/// Same-size RGB to RGBA copy with opaque alpha.
///
/// # Panics
/// Panics if `src` is not whole RGB pixels or `dst` is not exactly one RGBA
/// pixel per source pixel.
pub fn copy_rgb_to_rgba(src: &[u8], dst: &mut [u8]) {
    assert!(src.len() % 3 == 0, "src length {} is not RGB", src.len());
    assert_eq!(dst.len(), src.len() / 3 * 4, "dst is not one RGBA pixel per RGB pixel");

    for (rgb, rgba) in src.chunks_exact(3).zip(dst.chunks_exact_mut(4)) {
        rgba[..3].copy_from_slice(rgb);
        rgba[3] = 255;
    }
}

/// Nearest-neighbour scales an RGB image into an RGBA destination of a
/// different size, setting alpha to 255. Destination pixel `(x, y)` samples
/// source pixel `(x * src_width / dst_width, y * src_height / dst_height)`.
///
/// # Panics
/// Panics if either buffer length does not match its dimensions.
pub fn upscale_rgb_to_rgba(
    src: &[u8],
    src_width: u32,
    src_height: u32,
    dst: &mut [u8],
    dst_width: u32,
    dst_height: u32,
) {
    let (src_w, src_h) = (src_width as usize, src_height as usize);
    let (dst_w, dst_h) = (dst_width as usize, dst_height as usize);

    assert_eq!(src.len(), src_w * src_h * 3, "src length does not match {src_w}x{src_h}");
    assert_eq!(dst.len(), dst_w * dst_h * 4, "dst length does not match {dst_w}x{dst_h}");

    if src_w == dst_w && src_h == dst_h {
        copy_rgb_to_rgba(src, dst);
        return;
    }

    for (y, dst_row) in dst.chunks_exact_mut(dst_w * 4).enumerate() {
        let src_y = y * src_h / dst_h;
        let src_row = &src[src_y * src_w * 3..(src_y + 1) * src_w * 3];

        for (x, dst_pixel) in dst_row.chunks_exact_mut(4).enumerate() {
            let src_x = x * src_w / dst_w;
            let src_pixel = &src_row[src_x * 3..src_x * 3 + 3];

            dst_pixel[0] = src_pixel[0];
            dst_pixel[1] = src_pixel[1];
            dst_pixel[2] = src_pixel[2];
            dst_pixel[3] = 255;
        }
    }
}
