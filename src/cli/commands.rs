use tabled::Table;

use crate::{
    types::VoiceCommandTableRow,
    voice::{TRIGGERS, action_for},
};

/// Prints the voice commands in the order they are matched.
pub fn commands() {
    let mut rows = vec![VoiceCommandTableRow {
        priority: 1,
        say: "create <n> <mood> songs [by <artist>] [in <language>]".to_string(),
        action: "create playlist".to_string(),
    }];

    rows.extend(
        TRIGGERS
            .iter()
            .enumerate()
            .map(|(i, (trigger, intent))| VoiceCommandTableRow {
                priority: i + 2,
                say: trigger.to_string(),
                action: action_for(intent.clone())
                    .map(|action| describe(&action))
                    .unwrap_or_default(),
            }),
    );

    println!("{}", Table::new(rows));
}

fn describe(action: &crate::actions::Action) -> String {
    use crate::actions::Action;

    match action {
        Action::SetShuffle(state) => format!("shuffle {}", if *state { "on" } else { "off" }),
        Action::SetRepeat(state) => format!("repeat {}", state),
        Action::Play => "resume playback".to_string(),
        other => other.name().to_string(),
    }
}
