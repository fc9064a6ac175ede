use std::time::Instant;

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::config::Slide;
use crate::scheduler::Scheduler;
use crate::ui::app::App;
use crate::ui::layout;
use crate::ui::theme::{
    ACCENT, ACTIVE_BORDER, CARD_BORDER, DOT_INACTIVE, HEADER_TEXT, MUTED_TEXT, STATUS_OK,
    STATUS_PAUSED,
};

pub fn draw<S: Scheduler>(frame: &mut Frame<'_>, app: &App<S>, now: Instant) {
    let regions = layout::regions(frame.area(), app.slides().len());

    let header = Paragraph::new(Line::from(Span::styled(
        "Honors & Awards",
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(CARD_BORDER)),
    );
    frame.render_widget(header, regions.header);

    draw_cards(frame, app, regions.strip, now);

    let active = app.controller().presenter().active();
    for (index, rect) in regions.dots.iter().enumerate() {
        let color = if index == active { ACCENT } else { DOT_INACTIVE };
        frame.render_widget(
            Paragraph::new(Span::styled("●", Style::default().fg(color))),
            *rect,
        );
    }

    let status_color = if app.controller().autoplay_scheduled() {
        STATUS_OK
    } else {
        STATUS_PAUSED
    };
    let footer = Paragraph::new(vec![Line::from(vec![
        Span::styled(status_line(app), Style::default().fg(status_color)),
        Span::styled(
            "  ←/→ move · 1-9 jump · drag to swipe · q quit",
            Style::default().fg(MUTED_TEXT),
        ),
    ])])
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(CARD_BORDER)),
    );
    frame.render_widget(footer, regions.footer);
}

fn draw_cards<S: Scheduler>(frame: &mut Frame<'_>, app: &App<S>, strip: Rect, now: Instant) {
    if app.slides().is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No awards configured",
                Style::default().fg(MUTED_TEXT),
            )),
            strip,
        );
        return;
    }

    let presenter = app.controller().presenter();
    let pitch = app.controller().state().tuning().slide_pitch_px;
    let offset_cells = layout::offset_to_cells(strip, presenter.offset_at(now), pitch);
    let width = layout::card_width(strip);

    for (index, slide) in app.slides().iter().enumerate() {
        let left = layout::card_left(strip, index, offset_cells);
        let Some(rect) = layout::clip_card(strip, left, width) else {
            continue;
        };
        let border = if index == presenter.active() {
            ACTIVE_BORDER
        } else {
            CARD_BORDER
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(format!(" {} ", index + 1));
        frame.render_widget(
            Paragraph::new(card_lines(slide))
                .block(block)
                .wrap(Wrap { trim: true }),
            rect,
        );
    }
}

fn card_lines(slide: &Slide) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        slide.title.clone(),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    ))];
    if !slide.issuer.is_empty() {
        lines.push(Line::from(Span::styled(
            slide.issuer.clone(),
            Style::default().fg(MUTED_TEXT),
        )));
    }
    if let Some(year) = slide.year {
        lines.push(Line::from(year.to_string()));
    }
    if !slide.description.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(slide.description.clone()));
    }
    lines
}

/// One-line summary of the carousel for the footer.
pub fn status_line<S: Scheduler>(app: &App<S>) -> String {
    let state = app.controller().state();
    let position = match state.current_index() {
        Some(index) => format!("{}/{}", index + 1, state.slide_count()),
        None => "0/0".to_string(),
    };
    let autoplay = if app.controller().autoplay_scheduled() {
        "autoplay on"
    } else if state.autoplay_paused() {
        "autoplay paused"
    } else {
        "autoplay off"
    };
    let visibility = if state.visible() { "" } else { " · hidden" };
    format!("{} · {}{}", position, autoplay, visibility)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::CarouselController;
    use crate::config::CarouselTuning;
    use crate::scheduler::VirtualClock;
    use crate::ui::strip::StripPresenter;

    fn app(n: usize) -> App<VirtualClock> {
        let tuning = CarouselTuning::default();
        let controller = CarouselController::new(
            n,
            tuning,
            VirtualClock::new(),
            StripPresenter::new(tuning.settle_duration()),
        );
        App::new(
            controller,
            (0..n).map(Slide::placeholder).collect(),
            Rect {
                x: 0,
                y: 0,
                width: 80,
                height: 24,
            },
        )
    }

    #[test]
    fn status_reflects_visibility_and_autoplay() {
        let mut app = app(4);
        assert_eq!(status_line(&app), "1/4 · autoplay off · hidden");

        app.controller_mut().on_visibility_change(true);
        assert_eq!(status_line(&app), "1/4 · autoplay on");

        app.set_hovering(true);
        assert_eq!(status_line(&app), "1/4 · autoplay paused");
    }

    #[test]
    fn status_for_empty_carousel() {
        assert_eq!(status_line(&app(0)), "0/0 · autoplay off · hidden");
    }

    #[test]
    fn card_lines_skip_empty_fields() {
        let slide = Slide {
            title: "Prize".to_string(),
            issuer: String::new(),
            year: Some(2024),
            description: String::new(),
        };
        assert_eq!(card_lines(&slide).len(), 2);
    }
}
