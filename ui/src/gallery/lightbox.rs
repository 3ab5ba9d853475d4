//! In-page full-size viewer state.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lightbox {
    #[default]
    Closed,
    Open(usize),
}

/// Keys the viewer reacts to while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerKey {
    Previous,
    Next,
    Close,
}

/// `(index + delta) mod len`, always in `[0, len)`. `len` must be non-zero.
pub fn wrap_index(index: usize, delta: i64, len: usize) -> usize {
    debug_assert!(len > 0);
    let len_i = len as i64;
    let step = delta.rem_euclid(len_i) as usize;
    (index % len + step) % len
}

impl Lightbox {
    /// Open at `index`; stays closed when there is nothing to show.
    pub fn open(index: usize, len: usize) -> Self {
        if len == 0 {
            Self::Closed
        } else {
            Self::Open(wrap_index(index, 0, len))
        }
    }

    pub fn navigate(self, delta: i64, len: usize) -> Self {
        match self {
            Self::Open(index) if len > 0 => Self::Open(wrap_index(index, delta, len)),
            Self::Open(_) => Self::Closed,
            Self::Closed => Self::Closed,
        }
    }

    pub fn close(self) -> Self {
        Self::Closed
    }

    pub fn on_key(self, key: ViewerKey, len: usize) -> Self {
        if !self.is_open() {
            return self;
        }
        match key {
            ViewerKey::Previous => self.navigate(-1, len),
            ViewerKey::Next => self.navigate(1, len),
            ViewerKey::Close => self.close(),
        }
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Open(index) => Some(*index),
            Self::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert_eq!(Lightbox::default(), Lightbox::Closed);
        assert_eq!(Lightbox::default().index(), None);
    }

    #[test]
    fn single_steps_wrap_at_both_ends() {
        let last = Lightbox::open(4, 5);
        assert_eq!(last.navigate(1, 5), Lightbox::Open(0));

        let first = Lightbox::open(0, 5);
        assert_eq!(first.navigate(-1, 5), Lightbox::Open(4));
    }

    #[test]
    fn any_delta_stays_in_bounds() {
        for len in 1..=9usize {
            for start in 0..len {
                for delta in -40i64..=40 {
                    let next = Lightbox::open(start, len).navigate(delta, len);
                    let index = next.index().expect("still open");
                    assert!(index < len);
                    let expected = (start as i64 + delta).rem_euclid(len as i64) as usize;
                    assert_eq!(index, expected);
                }
            }
        }
    }

    #[test]
    fn extreme_deltas_do_not_overflow() {
        for delta in [i64::MIN, i64::MIN + 1, i64::MAX] {
            let index = Lightbox::open(2, 7).navigate(delta, 7).index().unwrap();
            assert!(index < 7);
        }
    }

    #[test]
    fn multi_step_equals_repeated_single_steps() {
        let len = 6;
        let mut stepped = Lightbox::open(1, len);
        for _ in 0..9 {
            stepped = stepped.navigate(1, len);
        }
        assert_eq!(stepped, Lightbox::open(1, len).navigate(9, len));
    }

    #[test]
    fn empty_list_never_opens() {
        assert_eq!(Lightbox::open(0, 0), Lightbox::Closed);
        assert_eq!(Lightbox::Open(3).navigate(1, 0), Lightbox::Closed);
    }

    #[test]
    fn keys_drive_transitions() {
        let open = Lightbox::open(0, 3);
        assert_eq!(open.on_key(ViewerKey::Previous, 3), Lightbox::Open(2));
        assert_eq!(open.on_key(ViewerKey::Next, 3), Lightbox::Open(1));
        assert_eq!(open.on_key(ViewerKey::Close, 3), Lightbox::Closed);
        assert_eq!(Lightbox::Closed.on_key(ViewerKey::Next, 3), Lightbox::Closed);
    }

    #[test]
    fn navigating_closed_is_noop() {
        assert_eq!(Lightbox::Closed.navigate(2, 5), Lightbox::Closed);
    }
}
