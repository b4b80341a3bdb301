use eframe::egui::{InputState, Key};

use crate::action::{Action, ActionRequestQueue, ConfirmKind, ModalRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Trigger {
    key: Key,
    command: bool,
}

struct Shortcut {
    trigger: Trigger,
    action: Action,
}

impl Shortcut {
    const fn command(key: Key, action: Action) -> Self {
        Self {
            trigger: Trigger { key, command: true },
            action,
        }
    }

    const fn plain(key: Key, action: Action) -> Self {
        Self {
            trigger: Trigger {
                key,
                command: false,
            },
            action,
        }
    }
}

const SHORTCUTS: [Shortcut; 3] = [
    Shortcut::command(Key::Z, Action::Undo),
    Shortcut::command(
        Key::N,
        Action::OpenModal(ModalRequest::Confirm(ConfirmKind::NewGame)),
    ),
    Shortcut::plain(Key::Escape, Action::DismissNotice),
];

fn find_action(mut pressed: impl FnMut(Trigger) -> bool) -> Option<Action> {
    SHORTCUTS
        .iter()
        .find(|shortcut| pressed(shortcut.trigger))
        .map(|shortcut| shortcut.action)
}

pub(crate) fn handle_input(i: &InputState, action_queue: &mut ActionRequestQueue) {
    // `i.modifiers.command` is true when Ctrl (Windows/Linux) or Cmd (Mac) is pressed
    let action = find_action(|trigger| {
        i.key_pressed(trigger.key) && i.modifiers.command == trigger.command
    });
    if let Some(action) = action {
        action_queue.request(action);
    }
}
