use ratatui::layout::Rect;

/// Split the terminal into header, body and footer bands.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Carve a one-line strip off the top of `area`, returning `(strip, rest)`.
pub fn split_top_line(area: Rect) -> (Rect, Rect) {
    let strip_height = area.height.min(1);
    let strip = Rect {
        height: strip_height,
        ..area
    };
    let rest = Rect {
        y: area.y + strip_height,
        height: area.height - strip_height,
        ..area
    };
    (strip, rest)
}
