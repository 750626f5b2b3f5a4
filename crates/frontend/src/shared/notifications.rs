//! Transient success/error messages.
//!
//! A single message slot: a new notice replaces the visible one and restarts
//! the auto-hide window.

use leptos::prelude::*;

/// How long a notice stays visible, in milliseconds.
const DISMISS_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

pub fn notice_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "message-box message-box--success",
        NoticeKind::Error => "message-box message-box--error",
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    current: RwSignal<Option<Notice>>,
    sequence: RwSignal<u64>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            sequence: RwSignal::new(0),
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(text.into(), NoticeKind::Success);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(text.into(), NoticeKind::Error);
    }

    pub fn current(&self) -> RwSignal<Option<Notice>> {
        self.current
    }

    fn show(&self, text: String, kind: NoticeKind) {
        let seq = self.sequence.get_untracked() + 1;
        self.sequence.set(seq);
        self.current.set(Some(Notice { text, kind }));

        let current = self.current;
        let sequence = self.sequence;
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(DISMISS_MS).await;
            // Only the timer of the latest notice may hide the box.
            if sequence.get_untracked() == seq {
                current.set(None);
            }
        });
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn NotificationHost() -> impl IntoView {
    let notifications =
        use_context::<NotificationService>().expect("NotificationService not found in context");

    view! {
        {move || {
            notifications.current().get().map(|notice| {
                view! {
                    <div class=notice_class(notice.kind)>
                        <span class="message-box__text">{notice.text}</span>
                    </div>
                }
            })
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_class_per_kind() {
        assert_eq!(
            notice_class(NoticeKind::Success),
            "message-box message-box--success"
        );
        assert_eq!(
            notice_class(NoticeKind::Error),
            "message-box message-box--error"
        );
    }
}
