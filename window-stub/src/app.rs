use wndloop::{Event, Handler};

/// The application behind the window.
#[derive(Debug, Default)]
pub struct App {
    frames: u64,
    typed: usize
}

impl App {
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Handler for App {
    fn on_destroy(&mut self) -> i32 {
        tracing::info!("Window destroyed after {} idle frames and {} typed characters", self.frames, self.typed);
        0
    }

    fn on_event(&mut self, event: &Event) -> Option<isize> {
        if let Event::Char(c) = event {
            self.typed += 1;
            tracing::trace!("Typed {:?}", c);
        }
        None
    }

    fn on_frame(&mut self) {
        self.frames += 1;
        // per-frame application logic goes here
    }
}

#[cfg(test)]
mod tests {
    use wndloop::{dispatch, LoopState, RawMessage, Reply, WindowId};
    use wndloop::message::{WM_CHAR, WM_DESTROY, WM_KEYDOWN};
    use super::*;

    const WINDOW: WindowId = WindowId(1);

    #[test]
    fn everything_but_destroy_goes_to_the_default_handler() {
        let mut app = App::default();
        let mut state = LoopState::Running;
        for message in [RawMessage::new(WINDOW, WM_KEYDOWN, 0x41, 0), RawMessage::new(WINDOW, WM_CHAR, 'a' as usize, 0)] {
            assert_eq!(dispatch(&mut app, &mut state, &message), Reply::Default);
            assert_eq!(state, LoopState::Running);
        }
        assert_eq!(app.typed, 1);
    }

    #[test]
    fn destroy_exits_cleanly() {
        let mut app = App::default();
        let mut state = LoopState::Running;
        let reply = dispatch(&mut app, &mut state, &RawMessage::new(WINDOW, WM_DESTROY, 0, 0));
        assert_eq!(reply, Reply::Quit(0));
        assert_eq!(state, LoopState::Stopped { exit_code: 0 });
    }

    #[test]
    fn frames_are_counted() {
        let mut app = App::default();
        for _ in 0..3 {
            app.on_frame();
        }
        assert_eq!(app.frames(), 3);
    }
}
