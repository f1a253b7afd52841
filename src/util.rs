use ratatui::layout::{Flex, Layout, Rect, Size};

/// Return a rectangle of size `size` centered within `area`.  If `area` is
/// too small, the result is clipped to it.
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [area] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(area);
    area
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Rect::new(0, 0, 80, 24), Size::new(20, 10), Rect::new(30, 7, 20, 10))]
    #[case(Rect::new(5, 5, 10, 4), Size::new(10, 4), Rect::new(5, 5, 10, 4))]
    #[case(Rect::new(0, 0, 80, 24), Size::new(80, 24), Rect::new(0, 0, 80, 24))]
    fn test_center_rect(#[case] area: Rect, #[case] size: Size, #[case] r: Rect) {
        assert_eq!(center_rect(area, size), r);
    }
}
