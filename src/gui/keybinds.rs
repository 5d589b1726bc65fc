use iced::keyboard::{key::Named, Key};

use crate::sim::{
    system::Command,
    time_step::RESONANT_TARGETS,
    units::{EIGHTH_DAY, QUARTER_DAY},
};

pub(crate) fn command_for_key(key: &Key) -> Option<Command> {
    match key.as_ref() {
        Key::Named(Named::Escape) => Some(Command::Quit),
        Key::Named(Named::Space) => Some(Command::ToggleRun),
        Key::Named(Named::ArrowRight) => Some(Command::NudgeTimeStep(QUARTER_DAY)),
        Key::Named(Named::ArrowLeft) => Some(Command::NudgeTimeStep(-QUARTER_DAY)),
        Key::Named(Named::ArrowUp) => Some(Command::NudgeTimeStep(EIGHTH_DAY)),
        Key::Named(Named::ArrowDown) => Some(Command::NudgeTimeStep(-EIGHTH_DAY)),
        Key::Character(c) => c
            .parse::<usize>()
            .ok()
            .and_then(|i| RESONANT_TARGETS.get(i))
            .map(|&target| Command::SetResonantTarget(target)),
        _ => None,
    }
}
