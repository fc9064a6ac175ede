use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::carousel::NavKey;
use crate::scheduler::Scheduler;
use crate::ui::app::App;
use crate::ui::layout;

impl From<KeyCode> for NavKey {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Left | KeyCode::Char('h') => NavKey::Left,
            KeyCode::Right | KeyCode::Char('l') => NavKey::Right,
            _ => NavKey::Other,
        }
    }
}

pub fn handle_event<S: Scheduler>(app: &mut App<S>, event: Event) {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        Event::FocusGained => app.controller_mut().on_visibility_change(true),
        Event::FocusLost => {
            app.controller_mut().on_visibility_change(false);
            // No mouse reports arrive once the window is left.
            app.set_hovering(false);
        }
        Event::Resize(cols, rows) => app.on_resize(cols, rows),
        _ => {}
    }
}

fn handle_key<S: Scheduler>(app: &mut App<S>, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.request_quit(),
        KeyCode::Char(c @ '1'..='9') => {
            if let Some(digit) = c.to_digit(10) {
                app.controller_mut().go_to(digit as usize - 1);
            }
        }
        code => app.controller_mut().on_key(NavKey::from(code)),
    }
}

fn handle_mouse<S: Scheduler>(app: &mut App<S>, mouse: MouseEvent) {
    let regions = app.regions();
    let pitch = app.controller().state().tuning().slide_pitch_px;
    let over_strip = layout::contains(regions.strip, mouse.column, mouse.row);
    let x = layout::column_to_px(regions.strip, mouse.column, pitch);

    match mouse.kind {
        MouseEventKind::Moved => app.set_hovering(over_strip),
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(dot) = regions
                .dots
                .iter()
                .position(|rect| layout::contains(*rect, mouse.column, mouse.row))
            {
                app.controller_mut().go_to(dot);
            } else if over_strip {
                app.controller_mut().on_pointer_down(x);
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            app.set_hovering(over_strip);
            app.controller_mut().on_pointer_move(x);
        }
        MouseEventKind::Up(MouseButton::Left) => app.controller_mut().on_pointer_up(),
        _ => {}
    }
}
