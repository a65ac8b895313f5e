use std::collections::VecDeque;

/// Keys held during one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputFrame {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub place_marker: bool,
    pub quit: bool,
}

impl InputFrame {
    pub const QUIT: InputFrame = InputFrame {
        up: false,
        down: false,
        left: false,
        right: false,
        place_marker: false,
        quit: true,
    };

    /// Net step per axis. Opposite keys cancel.
    #[inline]
    pub fn axis(&self) -> (i32, i32) {
        (
            i32::from(self.right) - i32::from(self.left),
            i32::from(self.down) - i32::from(self.up),
        )
    }
}

pub trait InputSource {
    /// Called once per tick.
    fn poll(&mut self) -> InputFrame;
}

// Replays queued frames, then asks to quit.
impl InputSource for VecDeque<InputFrame> {
    fn poll(&mut self) -> InputFrame {
        self.pop_front().unwrap_or(InputFrame::QUIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_keys_cancel() {
        let f = InputFrame {
            up: true,
            down: true,
            right: true,
            ..InputFrame::default()
        };
        assert_eq!(f.axis(), (1, 0));
    }

    #[test]
    fn queue_ends_with_quit() {
        let mut q: VecDeque<InputFrame> = VecDeque::from(vec![InputFrame::default()]);
        assert!(!q.poll().quit);
        assert!(q.poll().quit);
        assert!(q.poll().quit);
    }
}
