//! Index arithmetic shared by every slider
//!
//! `max` is always the last valid index of a non-empty collection, so a
//! single-item collection has `max == 0` and next/prev both land on 0.

/// Last valid index of a collection of `len` items
pub fn max_index(len: usize) -> usize {
    len.saturating_sub(1)
}

/// Restrict `index` to `[0, max]`
pub fn clamp(index: isize, max: usize) -> usize {
    if index <= 0 {
        0
    } else {
        (index as usize).min(max)
    }
}

/// Step forward, returning to 0 after `max`
pub fn wrap_next(index: usize, max: usize) -> usize {
    if index < max {
        index + 1
    } else {
        0
    }
}

/// Step backward, returning to `max` before 0
pub fn wrap_prev(index: usize, max: usize) -> usize {
    if index > 0 {
        index - 1
    } else {
        max
    }
}

/// Step forward by one without wrapping
pub fn step_next(index: usize, max: usize) -> usize {
    clamp(index as isize + 1, max)
}

/// Step backward by one without wrapping
pub fn step_prev(index: usize, max: usize) -> usize {
    clamp(index as isize - 1, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(-3, 4), 0);
        assert_eq!(clamp(2, 4), 2);
        assert_eq!(clamp(9, 4), 4);
        assert_eq!(clamp(isize::MAX, 4), 4);
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap_next(3, 3), 0);
        assert_eq!(wrap_next(1, 3), 2);
        assert_eq!(wrap_prev(0, 3), 3);
        assert_eq!(wrap_prev(2, 3), 1);
    }

    #[test]
    fn test_single_item_self_loop() {
        let max = max_index(1);
        assert_eq!(max, 0);
        assert_eq!(wrap_next(0, max), 0);
        assert_eq!(wrap_prev(0, max), 0);
    }

    #[test]
    fn test_step_does_not_wrap() {
        assert_eq!(step_next(3, 3), 3);
        assert_eq!(step_prev(0, 3), 0);
        assert_eq!(step_next(1, 3), 2);
    }
}
