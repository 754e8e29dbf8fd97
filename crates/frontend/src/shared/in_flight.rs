//! Флаг "запрос выполняется" с гарантированным сбросом.
//!
//! Guard создаётся после установки флага и переносится внутрь async-задачи;
//! при выходе из задачи по любой ветке `Drop` вызывает `release`.

pub struct InFlightGuard<F: FnOnce()> {
    release: Option<F>,
}

impl<F: FnOnce()> InFlightGuard<F> {
    pub fn new(release: F) -> Self {
        Self {
            release: Some(release),
        }
    }
}

impl<F: FnOnce()> Drop for InFlightGuard<F> {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_release_on_drop() {
        let busy = Cell::new(true);
        {
            let _guard = InFlightGuard::new(|| busy.set(false));
            assert!(busy.get());
        }
        assert!(!busy.get());
    }

    #[test]
    fn test_release_on_early_return() {
        fn work(busy: &Cell<bool>, fail: bool) -> Result<(), String> {
            busy.set(true);
            let _guard = InFlightGuard::new(|| busy.set(false));
            if fail {
                return Err("transport".to_string());
            }
            Ok(())
        }

        let busy = Cell::new(false);
        assert!(work(&busy, true).is_err());
        assert!(!busy.get());
        assert!(work(&busy, false).is_ok());
        assert!(!busy.get());
    }

    #[test]
    fn test_release_runs_once() {
        let calls = Cell::new(0);
        let guard = InFlightGuard::new(|| calls.set(calls.get() + 1));
        drop(guard);
        assert_eq!(calls.get(), 1);
    }
}
