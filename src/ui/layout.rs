use ratatui::layout::Rect;

/// Horizontal gap between cards, in cells.
pub const CARD_GAP: u16 = 2;
/// Widest a card gets, in cells.
pub const MAX_CARD_WIDTH: u16 = 48;

/// Screen regions of the carousel view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub strip: Rect,
    pub dots: Vec<Rect>,
    pub footer: Rect,
}

pub fn regions(area: Rect, slide_count: usize) -> Regions {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let dots_height = 1.min(area.height.saturating_sub(header_height + footer_height));
    let strip_height = area
        .height
        .saturating_sub(header_height + footer_height + dots_height);

    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let strip = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: strip_height,
    };
    let dots_row = Rect {
        x: area.x,
        y: strip.y + strip_height,
        width: area.width,
        height: dots_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };

    Regions {
        header,
        strip,
        dots: dot_rects(dots_row, slide_count),
        footer,
    }
}

/// One 1x1 cell per dot, centered, separated by a blank cell.
fn dot_rects(row: Rect, slide_count: usize) -> Vec<Rect> {
    if row.height == 0 || slide_count == 0 {
        return Vec::new();
    }
    let span = (slide_count * 2 - 1).min(row.width as usize) as u16;
    let start = row.x + (row.width - span) / 2;
    (0..slide_count)
        .map(|i| start as usize + i * 2)
        .take_while(|x| *x < (row.x + row.width) as usize)
        .map(|x| Rect {
            x: x as u16,
            y: row.y,
            width: 1,
            height: 1,
        })
        .collect()
}

/// Card width for a strip, in cells.
pub fn card_width(strip: Rect) -> u16 {
    strip.width.saturating_sub(8).clamp(1, MAX_CARD_WIDTH)
}

/// Column where card `index` starts for a strip offset given in cells.
/// May lie outside the strip.
pub fn card_left(strip: Rect, index: usize, offset_cells: f32) -> i32 {
    let width = card_width(strip);
    let margin = (strip.width.saturating_sub(width) / 2) as i32;
    let pitch = (width + CARD_GAP) as i32;
    strip.x as i32 + margin + index as i32 * pitch + offset_cells.round() as i32
}

/// Convert a strip offset in carousel units to cells.
pub fn offset_to_cells(strip: Rect, offset: f32, slide_pitch_px: f32) -> f32 {
    let pitch_cells = (card_width(strip) + CARD_GAP) as f32;
    offset / slide_pitch_px * pitch_cells
}

/// Convert a terminal column to carousel units, so that dragging across one
/// card pitch of cells equals one slide pitch.
pub fn column_to_px(strip: Rect, column: u16, slide_pitch_px: f32) -> f32 {
    let pitch_cells = (card_width(strip) + CARD_GAP) as f32;
    column as f32 * slide_pitch_px / pitch_cells
}

/// Clip a card spanning `[left, left + width)` to the strip.
pub fn clip_card(strip: Rect, left: i32, width: u16) -> Option<Rect> {
    let strip_left = strip.x as i32;
    let strip_right = strip_left + strip.width as i32;
    let x0 = left.max(strip_left);
    let x1 = (left + width as i32).min(strip_right);
    if x1 <= x0 || strip.height == 0 {
        return None;
    }
    Some(Rect {
        x: x0 as u16,
        y: strip.y,
        width: (x1 - x0) as u16,
        height: strip.height,
    })
}

pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}
