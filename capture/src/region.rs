use x11_utils::Rect;

pub const NATIVE_WIDTH: i32 = 256;
pub const NATIVE_HEIGHT: i32 = 192;

/// The emulator renders two vertically stacked screens; only the top one
/// carries gameplay. A client tall enough for both gets split in half,
/// anything else gets a native-size window centred at its top edge.
pub fn top_screen_region(client: &Rect) -> Rect {
    const SPLIT_TOLERANCE: i32 = 10;
    let width = client.width();
    let height = client.height();
    if height >= 2 * NATIVE_HEIGHT - SPLIT_TOLERANCE {
        return Rect::new(
            client.left,
            client.top,
            client.right,
            client.top + height / 2,
        );
    }
    let left = client.left + (width - NATIVE_WIDTH).max(0) / 2;
    Rect::new(
        left,
        client.top,
        left + NATIVE_WIDTH,
        client.top + NATIVE_HEIGHT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_height_client_splits_to_the_top_half() {
        let client = Rect::new(100, 50, 612, 818);
        let region = top_screen_region(&client);
        assert_eq!(region, Rect::new(100, 50, 612, 434));
    }

    #[test]
    fn split_applies_within_the_tolerance() {
        // 378 == 2 * 192 - 6, just under double height
        let client = Rect::new(0, 0, 256, 378);
        let region = top_screen_region(&client);
        assert_eq!(region, Rect::new(0, 0, 256, 189));
    }

    #[test]
    fn single_screen_client_centres_the_native_window() {
        let client = Rect::new(100, 50, 400, 270);
        let region = top_screen_region(&client);
        assert_eq!(region, Rect::new(122, 50, 378, 242));
    }

    #[test]
    fn narrow_client_anchors_at_its_left_edge() {
        let client = Rect::new(10, 20, 210, 240);
        let region = top_screen_region(&client);
        assert_eq!(region.left, 10);
        assert_eq!(region.width(), NATIVE_WIDTH);
    }
}
