use image::RgbImage;

/// The rectangle retained after cropping.
///
/// `left`/`top`/`right`/`bottom` are pixel positions within an image of
/// resolution `orig_res`, with `right` and `bottom` inclusive: the crop
/// region is `[left, right + 1) x [top, bottom + 1)`, so the detected
/// boundary pixels themselves are kept.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct CropBox {
    pub orig_res: (u32, u32),
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropBox {
    #[must_use]
    pub fn from_edge_positions(
        orig_res: (u32, u32),
        left: u32,
        right: u32,
        top: u32,
        bottom: u32,
    ) -> Self {
        assert!(left < right && right < orig_res.0);
        assert!(top < bottom && bottom < orig_res.1);
        Self {
            orig_res,
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> u32 {
        self.right - self.left + 1
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top + 1
    }

    pub fn area(&self) -> u32 {
        self.width() * self.height()
    }

    /// (x, y, width, height) suitable for taking a sub-view of the image.
    #[must_use]
    pub fn as_view_args(&self) -> (u32, u32, u32, u32) {
        (self.left, self.top, self.width(), self.height())
    }
}

/// Return a new image containing exactly the region described by `cropbox`.
/// The source image is not mutated.
#[must_use]
pub fn crop_frame(frame: &RgbImage, cropbox: &CropBox) -> RgbImage {
    assert!(frame.dimensions() == cropbox.orig_res);
    let (x, y, width, height) = cropbox.as_view_args();
    image::imageops::crop_imm(frame, x, y, width, height).to_image()
}

#[cfg(test)]
mod test {
    use image::{Rgb, RgbImage};

    use super::*;

    #[test]
    fn test_view_args_full_image() {
        let cropbox = CropBox::from_edge_positions((100, 100), 0, 99, 0, 99);
        let exp: (u32, u32, u32, u32) = (0, 0, 100, 100);
        let act = cropbox.as_view_args();
        assert!(act == exp);
    }

    #[test]
    fn test_view_args_1pix_margins() {
        let cropbox = CropBox::from_edge_positions((100, 100), 1, 98, 1, 98);
        let exp: (u32, u32, u32, u32) = (1, 1, 98, 98);
        let act = cropbox.as_view_args();
        assert!(act == exp);
    }

    #[test]
    fn test_view_args_asymmetric() {
        let cropbox = CropBox::from_edge_positions((768, 432), 96, 671, 0, 431);
        let exp: (u32, u32, u32, u32) = (96, 0, 576, 432);
        let act = cropbox.as_view_args();
        assert!(act == exp);
    }

    #[test]
    fn test_dims_are_inclusive() {
        let cropbox = CropBox::from_edge_positions((100, 100), 10, 89, 10, 89);
        assert_eq!(cropbox.width(), 80);
        assert_eq!(cropbox.height(), 80);
        assert_eq!(cropbox.area(), 6400);
    }

    #[test]
    fn test_single_pixel_box() {
        let cropbox = CropBox::from_edge_positions((3, 3), 1, 2, 1, 2);
        assert_eq!(cropbox.width(), 2);
        assert_eq!(cropbox.height(), 2);
    }

    #[test]
    #[should_panic]
    fn test_degenerate_box_rejected() {
        let _ = CropBox::from_edge_positions((100, 100), 50, 50, 10, 89);
    }

    #[test]
    #[should_panic]
    fn test_out_of_bounds_box_rejected() {
        let _ = CropBox::from_edge_positions((100, 100), 10, 100, 10, 89);
    }

    #[test]
    fn test_crop_frame_dims_and_content() {
        let img = RgbImage::from_fn(10, 8, |x, y| Rgb([x as u8, y as u8, 0]));
        let cropbox = CropBox::from_edge_positions((10, 8), 2, 7, 1, 5);

        let cropped = crop_frame(&img, &cropbox);
        assert_eq!(cropped.dimensions(), (6, 5));

        //topleft of the crop is (2, 1) of the source; boundary pixels retained
        assert_eq!(*cropped.get_pixel(0, 0), Rgb([2, 1, 0]));
        assert_eq!(*cropped.get_pixel(5, 4), Rgb([7, 5, 0]));

        //source untouched
        assert_eq!(img.dimensions(), (10, 8));
    }
}
