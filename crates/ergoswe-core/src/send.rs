// Ergoswe String Sending
// Types text by translating every character and feeding key events to the host

use serde::Deserialize;

use crate::keycode::Keycode;
use crate::layout::{Layout, LayoutTables};
use crate::translate::{translate_char, KeyAction, KeyEvent, TranslateError};

/// Host keystroke primitive
pub trait KeySink {
    fn send(&mut self, event: KeyEvent);
}

/// Sink that keeps every event, in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSink {
    events: Vec<KeyEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[KeyEvent] {
        &self.events
    }

    /// Keys pressed, ignoring releases
    pub fn pressed(&self) -> Vec<Keycode> {
        self.events
            .iter()
            .filter_map(|e| match e {
                KeyEvent::Press(k) => Some(*k),
                KeyEvent::Release(_) => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl KeySink for RecordingSink {
    fn send(&mut self, event: KeyEvent) {
        self.events.push(event);
    }
}

impl<F: FnMut(KeyEvent)> KeySink for F {
    fn send(&mut self, event: KeyEvent) {
        self(event)
    }
}

/// What to do with a character the layout cannot type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnmappedPolicy {
    /// Drop the character and keep going
    #[default]
    Skip,
    /// Type this character instead; skipped if it is unmapped as well
    Substitute(char),
    /// Fail the whole send before anything is emitted
    Abort,
}

/// Key tapped after a dead key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeadKeyFollowUp {
    /// Tap the layout's follow-up key (Space) to get the bare accent
    #[default]
    Space,
    /// Leave the dead key pending for the next typed character
    None,
}

/// Outcome of a send
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SendReport {
    /// Characters typed, substitutes included
    pub sent: usize,
    /// Characters dropped
    pub skipped: usize,
    /// Characters typed as their substitute
    pub substituted: usize,
}

/// Types strings on one layout
#[derive(Debug, Clone, Copy)]
pub struct SendString {
    tables: &'static LayoutTables,
    policy: UnmappedPolicy,
    follow_up: DeadKeyFollowUp,
}

impl SendString {
    pub fn new(layout: Layout) -> Self {
        Self {
            tables: layout.tables(),
            policy: UnmappedPolicy::default(),
            follow_up: DeadKeyFollowUp::default(),
        }
    }

    pub fn with_policy(mut self, policy: UnmappedPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_follow_up(mut self, follow_up: DeadKeyFollowUp) -> Self {
        self.follow_up = follow_up;
        self
    }

    pub fn policy(&self) -> UnmappedPolicy {
        self.policy
    }

    pub fn tables(&self) -> &'static LayoutTables {
        self.tables
    }

    /// Translate every character of `text` without emitting anything
    ///
    /// Entries are `None` for characters the policy drops.
    pub fn plan(&self, text: &str) -> Result<(Vec<Option<KeyAction>>, SendReport), TranslateError> {
        let mut report = SendReport::default();
        let mut actions = Vec::with_capacity(text.len());

        for c in text.chars() {
            let action = match translate_char(self.tables, c) {
                Ok(action) => Some(action),
                Err(err) => match self.policy {
                    UnmappedPolicy::Abort => {
                        log::warn!("aborting send: {}", err);
                        return Err(err);
                    }
                    UnmappedPolicy::Skip => {
                        log::warn!("skipping {:?}: {}", c, err);
                        None
                    }
                    UnmappedPolicy::Substitute(sub) => match translate_char(self.tables, sub) {
                        Ok(action) => {
                            log::debug!("substituting {:?} for {:?}", sub, c);
                            report.substituted += 1;
                            Some(action)
                        }
                        Err(sub_err) => {
                            log::warn!("skipping {:?}, substitute {:?} failed too: {}", c, sub, sub_err);
                            None
                        }
                    },
                },
            };

            match action {
                Some(_) => report.sent += 1,
                None => report.skipped += 1,
            }
            actions.push(action);
        }

        Ok((actions, report))
    }

    /// Type `text` into `sink`
    ///
    /// The whole string is translated first; with `UnmappedPolicy::Abort`
    /// an unmapped character means no event reaches the sink.
    pub fn send<S: KeySink + ?Sized>(&self, text: &str, sink: &mut S) -> Result<SendReport, TranslateError> {
        let (actions, report) = self.plan(text)?;
        let follow_up = match self.follow_up {
            DeadKeyFollowUp::Space => Some(self.tables.dead_key_follow_up),
            DeadKeyFollowUp::None => None,
        };

        for action in actions.into_iter().flatten() {
            log::debug!("send {}", action);
            for event in action.events(self.tables.altgr_modifier, follow_up) {
                sink.send(event);
            }
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keycode::{KC_A, KC_B, KC_LSFT, KC_RBRC, KC_SPC};

    #[test]
    fn test_send_plain_text() {
        let sender = SendString::new(Layout::SwedishIso);
        let mut sink = RecordingSink::new();
        let report = sender.send("ab", &mut sink).unwrap();
        assert_eq!(report.sent, 2);
        assert_eq!(sink.pressed(), vec![KC_A, KC_B]);
        assert_eq!(sink.events().len(), 4);
    }

    #[test]
    fn test_skip_policy_drops_unmapped() {
        let sender = SendString::new(Layout::SwedishIso);
        let mut sink = RecordingSink::new();
        let report = sender.send("a\u{0}b", &mut sink).unwrap();
        assert_eq!(report, SendReport { sent: 2, skipped: 1, substituted: 0 });
        assert_eq!(sink.pressed(), vec![KC_A, KC_B]);
    }

    #[test]
    fn test_abort_policy_emits_nothing() {
        let sender = SendString::new(Layout::SwedishIso).with_policy(UnmappedPolicy::Abort);
        let mut sink = RecordingSink::new();
        let err = sender.send("abc€", &mut sink).unwrap_err();
        assert_eq!(err, TranslateError::UnmappedCharacter { code: '€' as u32 });
        assert!(sink.events().is_empty());
    }

    #[test]
    fn test_substitute_policy() {
        let sender =
            SendString::new(Layout::SwedishIso).with_policy(UnmappedPolicy::Substitute('b'));
        let mut sink = RecordingSink::new();
        let report = sender.send("aé", &mut sink).unwrap();
        assert_eq!(report.substituted, 1);
        assert_eq!(report.sent, 2);
        assert_eq!(sink.pressed(), vec![KC_A, KC_B]);
    }

    #[test]
    fn test_dead_key_follow_up_toggle() {
        let mut sink = RecordingSink::new();
        SendString::new(Layout::SwedishIso).send("^", &mut sink).unwrap();
        assert_eq!(sink.pressed(), vec![KC_LSFT, KC_RBRC, KC_SPC]);

        sink.clear();
        SendString::new(Layout::SwedishIso)
            .with_follow_up(DeadKeyFollowUp::None)
            .send("^", &mut sink)
            .unwrap();
        assert_eq!(sink.pressed(), vec![KC_LSFT, KC_RBRC]);
    }

    #[test]
    fn test_closure_sink() {
        let mut count = 0;
        let mut sink = |_event: KeyEvent| count += 1;
        SendString::new(Layout::SwedishIso).send("A", &mut sink).unwrap();
        assert_eq!(count, 4);
    }
}
