use raylib::prelude::*;
use terrastep_runtime::{InputFrame, InputSource};

/// Polls the held WASD/F keys and the window close request.
pub struct KeyboardInput<'a> {
    rl: &'a RaylibHandle,
}

impl<'a> KeyboardInput<'a> {
    pub fn new(rl: &'a RaylibHandle) -> Self {
        Self { rl }
    }
}

impl InputSource for KeyboardInput<'_> {
    fn poll(&mut self) -> InputFrame {
        let held = |k: KeyboardKey| self.rl.is_key_down(k);
        InputFrame {
            up: held(KeyboardKey::KEY_W),
            down: held(KeyboardKey::KEY_S),
            left: held(KeyboardKey::KEY_A),
            right: held(KeyboardKey::KEY_D),
            place_marker: held(KeyboardKey::KEY_F),
            quit: self.rl.window_should_close(),
        }
    }
}
