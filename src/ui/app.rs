use std::time::Instant;

use ratatui::layout::Rect;

use crate::carousel::CarouselController;
use crate::config::Slide;
use crate::scheduler::Scheduler;
use crate::ui::layout::{self, Regions};
use crate::ui::strip::StripPresenter;

/// Terminal host state: the carousel plus what the host itself tracks.
pub struct App<S: Scheduler> {
    controller: CarouselController<S, StripPresenter>,
    slides: Vec<Slide>,
    area: Rect,
    hovering: bool,
    should_quit: bool,
}

impl<S: Scheduler> App<S> {
    pub fn new(
        controller: CarouselController<S, StripPresenter>,
        slides: Vec<Slide>,
        area: Rect,
    ) -> Self {
        Self {
            controller,
            slides,
            area,
            hovering: false,
            should_quit: false,
        }
    }

    pub fn controller(&self) -> &CarouselController<S, StripPresenter> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut CarouselController<S, StripPresenter> {
        &mut self.controller
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn regions(&self) -> Regions {
        layout::regions(self.area, self.slides.len())
    }

    /// Terminal resized: remember the new area and re-emit the current slide.
    pub fn on_resize(&mut self, width: u16, height: u16) {
        self.area = Rect {
            x: 0,
            y: 0,
            width,
            height,
        };
        self.controller.on_resize();
    }

    /// Track hover over the strip, translating edges into enter/leave.
    pub fn set_hovering(&mut self, hovering: bool) {
        if hovering == self.hovering {
            return;
        }
        self.hovering = hovering;
        if hovering {
            self.controller.on_pointer_enter();
        } else {
            self.controller.on_pointer_leave();
        }
    }

    pub fn hovering(&self) -> bool {
        self.hovering
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.controller.presenter().is_animating(now)
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
