#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Severity {
    Danger,
    #[default]
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialog {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
    pub severity: Severity,
    /// Show the confirm button only.
    pub info_only: bool,
}

impl ConfirmDialog {
    #[must_use]
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            confirm_label: "확인".into(),
            cancel_label: "취소".into(),
            severity: Severity::default(),
            info_only: false,
        }
    }

    #[must_use]
    pub fn danger(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message)
            .with_severity(Severity::Danger)
            .with_confirm_label("삭제")
    }

    /// A notice with a single button.
    #[must_use]
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            info_only: true,
            ..Self::new(title, message).with_severity(Severity::Info)
        }
    }

    #[must_use]
    pub const fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    #[must_use]
    pub fn with_confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = label.into();
        self
    }
}

/// An open dialog together with the action that runs on confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogState<A> {
    pending: Option<(ConfirmDialog, A)>,
}

impl<A> Default for DialogState<A> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<A> DialogState<A> {
    pub fn open(&mut self, dialog: ConfirmDialog, action: A) {
        self.pending = Some((dialog, action));
    }

    #[must_use]
    pub fn dialog(&self) -> Option<&ConfirmDialog> {
        self.pending.as_ref().map(|(dialog, _)| dialog)
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    /// Closes the dialog and hands out the pending action.
    pub fn confirm(&mut self) -> Option<A> {
        self.pending.take().map(|(_, action)| action)
    }

    /// Closes the dialog and drops the pending action.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Action {
        DeleteComment(i64),
    }

    #[test]
    fn cancel_drops_the_action() {
        let mut state = DialogState::default();
        state.open(
            ConfirmDialog::danger("댓글 삭제", "정말 삭제하시겠습니까?"),
            Action::DeleteComment(3),
        );
        assert!(state.is_open());
        assert_eq!(state.dialog().unwrap().severity, Severity::Danger);
        state.cancel();
        assert!(!state.is_open());
        assert_eq!(state.confirm(), None);
    }

    #[test]
    fn confirm_yields_the_action_once() {
        let mut state = DialogState::default();
        state.open(ConfirmDialog::new("a", "b"), Action::DeleteComment(3));
        assert_eq!(state.confirm(), Some(Action::DeleteComment(3)));
        assert_eq!(state.confirm(), None);
    }

    #[test]
    fn info_dialogs_have_a_single_button() {
        let dialog = ConfirmDialog::info("권한 없음", "본인의 게시글만 수정할 수 있습니다.");
        assert!(dialog.info_only);
        assert_eq!(dialog.severity, Severity::Info);
        assert_eq!(dialog.confirm_label, "확인");
    }
}
