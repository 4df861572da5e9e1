/// Which data point of one chart the pointer is over.
///
/// Each chart owns its own state; moving the pointer over one chart never
/// highlights a point in another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverState {
    index: Option<usize>,
}

impl HoverState {
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Pointer moved; `nearest` is the point under it, if any. Indices past
    /// `len` are treated as no point. Returns whether the state changed.
    pub fn pointer_move(&mut self, nearest: Option<usize>, len: usize) -> bool {
        let next = nearest.filter(|i| *i < len);
        let changed = next != self.index;
        self.index = next;
        changed
    }

    /// Pointer left the chart. Returns whether the state changed.
    pub fn pointer_leave(&mut self) -> bool {
        self.index.take().is_some()
    }

    pub fn is_hovered(&self, index: usize) -> bool {
        self.index == Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_and_leave() {
        let mut hover = HoverState::default();
        assert!(hover.pointer_move(Some(2), 6));
        assert!(hover.is_hovered(2));
        assert!(!hover.is_hovered(1));

        assert!(!hover.pointer_move(Some(2), 6));

        assert!(hover.pointer_leave());
        assert_eq!(hover.index(), None);
        assert!(!hover.pointer_leave());
    }

    #[test]
    fn test_out_of_range_clears() {
        let mut hover = HoverState::default();
        hover.pointer_move(Some(1), 4);
        assert!(hover.pointer_move(Some(4), 4));
        assert_eq!(hover.index(), None);
    }

    #[test]
    fn test_empty_series_never_hovers() {
        let mut hover = HoverState::default();
        assert!(!hover.pointer_move(Some(0), 0));
        assert_eq!(hover.index(), None);
    }

    #[test]
    fn test_states_are_independent() {
        let mut revenue = HoverState::default();
        let users = HoverState::default();
        revenue.pointer_move(Some(3), 6);

        assert!(revenue.is_hovered(3));
        assert_eq!(users.index(), None);
    }
}
