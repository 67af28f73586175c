use super::{
    action::{Action, UpdateResult},
    command::Command,
    features,
    state::AppState,
};

/// Run `action` through each feature until one claims it.
pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    let handlers: [fn(&mut AppState, &Action) -> UpdateResult; 4] = [
        features::entries::update,
        features::navigation::update,
        features::filter::update,
        features::ui::update,
    ];

    for handler in handlers {
        if let UpdateResult::Handled(command) = handler(state, &action) {
            return command;
        }
    }
    None
}
