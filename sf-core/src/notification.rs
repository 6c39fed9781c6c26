/// How long a toast stays visible.
pub const TOAST_DURATION_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// At most one visible toast.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Toasts {
    current: Option<Toast>,
    next_id: u64,
}

impl Toasts {
    /// Replaces the visible toast and returns the ID
    /// to dismiss it with later on.
    pub fn show(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.current = Some(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.show(ToastKind::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.show(ToastKind::Error, message)
    }

    /// Closes the toast only if it is still the one with `id`.
    pub fn dismiss(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|t| t.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub const fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_new_toast_replaces_the_visible_one() {
        let mut toasts = Toasts::default();
        let first = toasts.success("찜 목록에 추가되었습니다");
        let second = toasts.error("오류가 발생했습니다");
        assert_ne!(first, second);
        let current = toasts.current().unwrap();
        assert_eq!(current.id, second);
        assert_eq!(current.kind, ToastKind::Error);
    }

    #[test]
    fn a_stale_timer_does_not_close_a_newer_toast() {
        let mut toasts = Toasts::default();
        let first = toasts.success("first");
        let second = toasts.success("second");
        assert!(!toasts.dismiss(first));
        assert_eq!(toasts.current().unwrap().message, "second");
        assert!(toasts.dismiss(second));
        assert!(toasts.current().is_none());
        assert!(!toasts.dismiss(second));
    }
}
