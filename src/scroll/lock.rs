/// CSS `overflow` values the lock switches between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overflow {
    Hidden,
    Auto,
}

impl Overflow {
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Hidden => "hidden",
            Self::Auto => "auto",
        }
    }
}

/// Something whose CSS `overflow` can be switched, normally the page body.
pub trait OverflowTarget {
    fn set_overflow(&self, value: Overflow);
}

/// Page scrolling stays disabled for as long as the lock is alive.
#[derive(Debug)]
pub struct ScrollLock<T: OverflowTarget> {
    target: T,
}

impl<T: OverflowTarget> ScrollLock<T> {
    pub fn acquire(target: T) -> Self {
        target.set_overflow(Overflow::Hidden);
        Self { target }
    }
}

impl<T: OverflowTarget> Drop for ScrollLock<T> {
    fn drop(&mut self) {
        self.target.set_overflow(Overflow::Auto);
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::scroll::InertiaScroll;

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<&'static str>>>);

    impl OverflowTarget for Recorder {
        fn set_overflow(&self, value: Overflow) {
            self.0.borrow_mut().push(value.as_css());
        }
    }

    /// A page whose wheel smoothing follows the lock.
    #[derive(Clone, Default)]
    struct SmoothedPage(Rc<RefCell<InertiaScroll>>);

    impl OverflowTarget for SmoothedPage {
        fn set_overflow(&self, value: Overflow) {
            let mut engine = self.0.borrow_mut();
            match value {
                Overflow::Hidden => engine.hold(),
                Overflow::Auto => engine.release(),
            }
        }
    }

    #[test]
    fn test_lock_released_on_drop() {
        let rec = Recorder::default();
        let lock = ScrollLock::acquire(rec.clone());
        assert_eq!(*rec.0.borrow(), vec!["hidden"]);
        drop(lock);
        assert_eq!(*rec.0.borrow(), vec!["hidden", "auto"]);
    }

    #[test]
    fn test_lock_released_when_slot_cleared() {
        let rec = Recorder::default();
        let mut slot = Some(ScrollLock::acquire(rec.clone()));
        slot.take();
        assert_eq!(rec.0.borrow().last().copied(), Some("auto"));
        assert!(slot.is_none());
    }

    #[test]
    fn test_release_on_early_return() {
        let rec = Recorder::default();
        let run = |bail: bool| -> Option<()> {
            let _lock = ScrollLock::acquire(rec.clone());
            if bail {
                return None;
            }
            Some(())
        };
        assert_eq!(run(true), None);
        assert_eq!(*rec.0.borrow(), vec!["hidden", "auto"]);
    }

    #[test]
    fn test_locked_page_ignores_wheel() {
        let page = SmoothedPage::default();
        let lock = ScrollLock::acquire(page.clone());
        assert!(!page.0.borrow_mut().wheel(300.0, 5000.0));
        assert_eq!(page.0.borrow_mut().advance(16.0), None);
        assert_eq!(page.0.borrow().position(), 0.0);

        drop(lock);
        assert!(page.0.borrow_mut().wheel(300.0, 5000.0));
    }
}
