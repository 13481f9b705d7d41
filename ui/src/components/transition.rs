/// Enter/exit transitions applied through CSS classes. Easing and timing live
/// in the stylesheet; a transition only reports which classes a mounted
/// element carries for a given visibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    SlideFromLeft,
    SlideFromRight,
    Reveal,
}

impl Transition {
    pub fn class(self, visible: bool) -> &'static str {
        match (self, visible) {
            (Self::SlideFromLeft, false) => "animate-left",
            (Self::SlideFromLeft, true) => "animate-left visible",
            (Self::SlideFromRight, false) => "animate-right",
            (Self::SlideFromRight, true) => "animate-right visible",
            (Self::Reveal, false) => "reveal",
            (Self::Reveal, true) => "reveal visible",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_adds_modifier() {
        for t in [
            Transition::SlideFromLeft,
            Transition::SlideFromRight,
            Transition::Reveal,
        ] {
            let hidden = t.class(false);
            assert!(!hidden.contains("visible"));
            assert_eq!(t.class(true), format!("{hidden} visible"));
        }
    }
}
