pub struct GrayRef<'a> {
    width: u32,
    height: u32,
    data: &'a [u8],
}

impl<'a> GrayRef<'a> {
    pub fn new(width: u32, height: u32, data: &'a [u8]) -> GrayRef<'a> {
        assert!(
            data.len() >= (width * height) as usize,
            "gray buffer shorter than its dimensions"
        );
        GrayRef {
            width,
            height,
            data,
        }
    }
    pub fn width(&self) -> u32 {
        self.width
    }
    pub fn height(&self) -> u32 {
        self.height
    }
    pub fn get_pixel(&self, x: u32, y: u32) -> u8 {
        self.data[(x + y * self.width) as usize]
    }
    /// Area-averaging resize: every source pixel contributes in proportion
    /// to its overlap with the destination cell, so targets that are not
    /// integer divisors of the source stay exact.
    pub fn resize_area(&self, new_width: u32, new_height: u32) -> GrayOwned {
        assert!(
            new_width > 0 && new_height > 0,
            "attempted to resize to an empty image"
        );
        let x_scale = f64::from(self.width) / f64::from(new_width);
        let y_scale = f64::from(self.height) / f64::from(new_height);
        let mut resized = GrayOwned::zeroed(new_width, new_height);
        for y in 0..new_height {
            let y0 = f64::from(y) * y_scale;
            let y1 = y0 + y_scale;
            for x in 0..new_width {
                let x0 = f64::from(x) * x_scale;
                let x1 = x0 + x_scale;
                let mut sum = 0.0;
                let mut row = y0.floor() as u32;
                while f64::from(row) < y1 && row < self.height {
                    let row_cover = (y1.min(f64::from(row + 1)) - y0.max(f64::from(row))).max(0.0);
                    let mut col = x0.floor() as u32;
                    while f64::from(col) < x1 && col < self.width {
                        let col_cover =
                            (x1.min(f64::from(col + 1)) - x0.max(f64::from(col))).max(0.0);
                        sum += row_cover * col_cover * f64::from(self.get_pixel(col, row));
                        col += 1;
                    }
                    row += 1;
                }
                let mean = sum / (x_scale * y_scale);
                resized.set_pixel(x, y, mean.round().min(255.0) as u8);
            }
        }
        resized
    }
}

pub struct GrayOwned {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl GrayOwned {
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> GrayOwned {
        assert_eq!(
            data.len(),
            (width * height) as usize,
            "gray buffer does not match its dimensions"
        );
        GrayOwned {
            width,
            height,
            data,
        }
    }
    pub fn zeroed(width: u32, height: u32) -> GrayOwned {
        GrayOwned {
            width,
            height,
            data: vec![0; (width * height) as usize],
        }
    }
    pub fn as_ref(&self) -> GrayRef<'_> {
        GrayRef::new(self.width, self.height, &self.data)
    }
    pub fn set_pixel(&mut self, x: u32, y: u32, value: u8) {
        self.data[(x + y * self.width) as usize] = value;
    }
    pub fn width(&self) -> u32 {
        self.width
    }
    pub fn height(&self) -> u32 {
        self.height
    }
    pub fn data(&self) -> &[u8] {
        self.data.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_image_resizes_to_itself() {
        let gray = GrayOwned::new(256, 192, vec![100; 256 * 192]);
        let resized = gray.as_ref().resize_area(84, 84);
        assert_eq!(resized.width(), 84);
        assert_eq!(resized.height(), 84);
        assert!(resized.data().iter().all(|&v| v == 100));
    }

    #[test]
    fn integer_factor_average_is_exact() {
        let gray = GrayOwned::new(2, 2, vec![0, 255, 255, 0]);
        let resized = gray.as_ref().resize_area(1, 1);
        // (0 + 255 + 255 + 0) / 4 == 127.5, rounds up
        assert_eq!(resized.data(), &[128]);
    }

    #[test]
    fn fractional_factor_covers_every_source_pixel() {
        // 3 -> 2 columns: the middle pixel is split between both cells
        let gray = GrayOwned::new(3, 1, vec![0, 90, 0]);
        let resized = gray.as_ref().resize_area(2, 1);
        // each cell spans 1.5 source pixels: (0 + 90 * 0.5) / 1.5 == 30
        assert_eq!(resized.data(), &[30, 30]);
    }

    #[test]
    fn identity_resize_is_lossless() {
        let gray = GrayOwned::new(2, 2, vec![1, 2, 3, 4]);
        let resized = gray.as_ref().resize_area(2, 2);
        assert_eq!(resized.data(), &[1, 2, 3, 4]);
    }
}
