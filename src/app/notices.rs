use egui::{Align2, Area, Context, Frame, Id, Order, RichText, Sense};
use egui_phosphor::regular::{INFO, WARNING};
use std::collections::VecDeque;

/// Seconds a notice stays on screen.
const DURATION: f64 = 5.0;

const MARGIN: f32 = 8.0;

/// Notice kind
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Kind {
    Info,
    Error,
}

impl Kind {
    const fn icon(&self) -> &'static str {
        match self {
            Self::Info => INFO,
            Self::Error => WARNING,
        }
    }
}

/// Notice
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Notice {
    pub(crate) kind: Kind,
    pub(crate) text: String,
    pub(crate) expires: f64,
}

/// Transient notices, dismissed automatically or by a click
#[derive(Clone, Debug, Default)]
pub(crate) struct Notices {
    entries: VecDeque<Notice>,
}

impl Notices {
    pub(crate) fn push(&mut self, kind: Kind, text: String, now: f64) {
        self.entries.push_back(Notice {
            kind,
            text,
            expires: now + DURATION,
        });
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.entries.iter()
    }

    pub(crate) fn expire(&mut self, now: f64) {
        self.entries.retain(|notice| notice.expires > now);
    }

    pub(crate) fn show(&mut self, context: &Context) {
        let now = context.input(|input| input.time);
        self.expire(now);
        if self.is_empty() {
            return;
        }
        let mut dismiss = None;
        Area::new(Id::new("notices"))
            .order(Order::Foreground)
            .anchor(Align2::RIGHT_BOTTOM, [-MARGIN, -MARGIN])
            .show(context, |ui| {
                for (index, notice) in self.entries.iter().enumerate() {
                    let color = match notice.kind {
                        Kind::Info => ui.visuals().text_color(),
                        Kind::Error => ui.visuals().error_fg_color,
                    };
                    let response = Frame::popup(ui.style())
                        .show(ui, |ui| {
                            ui.label(
                                RichText::new(format!("{} {}", notice.kind.icon(), notice.text))
                                    .color(color),
                            );
                        })
                        .response
                        .interact(Sense::click());
                    if response.clicked() {
                        dismiss = Some(index);
                    }
                }
            });
        if let Some(index) = dismiss {
            self.entries.remove(index);
        }
        if let Some(expires) = self.entries.iter().map(|notice| notice.expires).reduce(f64::min) {
            context.request_repaint_after_secs((expires - now).max(0.0) as f32);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_expire() {
        let mut notices = Notices::default();
        notices.push(Kind::Error, "first".to_owned(), 0.0);
        notices.push(Kind::Info, "second".to_owned(), 3.0);
        notices.expire(4.9);
        assert_eq!(notices.len(), 2);
        notices.expire(5.0);
        assert_eq!(notices.len(), 1);
        assert_eq!(notices.iter().next().map(|notice| notice.text.as_str()), Some("second"));
        notices.expire(8.0);
        assert!(notices.is_empty());
    }
}
