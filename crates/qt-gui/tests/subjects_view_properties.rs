//! Property tests for the subjects view state: mount liveness and the
//! query-string setters.

use proptest::prelude::*;
use qt_gui::state::{MountIds, SubjectsState};
use qt_model::{Column, History, Location, ViewOptions};

#[derive(Debug, Clone)]
enum Event {
    Remount,
    RevealFor(usize),
}

fn events() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec(
        prop_oneof![Just(Event::Remount), (0usize..8).prop_map(Event::RevealFor)],
        0..30,
    )
}

#[derive(Debug, Clone)]
enum Setter {
    ToggleColumn(usize),
    Hide(bool),
}

fn setters() -> impl Strategy<Value = Vec<Setter>> {
    prop::collection::vec(
        prop_oneof![
            (0..Column::ALL.len()).prop_map(Setter::ToggleColumn),
            any::<bool>().prop_map(Setter::Hide),
        ],
        1..20,
    )
}

proptest! {
    #[test]
    fn only_the_current_mount_reveals(events in events()) {
        let mut ids = MountIds::new();
        let mut mounts = vec![ids.next_id()];
        let mut state = SubjectsState::mount(mounts[0], ViewOptions::default(), 3);
        let mut revealed = false;

        for event in events {
            match event {
                Event::Remount => {
                    let mount = ids.next_id();
                    mounts.push(mount);
                    state = SubjectsState::mount(mount, ViewOptions::default(), 3);
                    revealed = false;
                }
                Event::RevealFor(back) => {
                    let index = mounts.len().saturating_sub(1 + back);
                    let is_current = index == mounts.len() - 1;
                    let changed = state.on_reveal_elapsed(mounts[index]);
                    prop_assert_eq!(changed, is_current && !revealed);
                    revealed |= is_current;
                }
            }
            prop_assert_eq!(state.is_revealed(), revealed);
        }
    }

    #[test]
    fn setters_keep_location_in_sync(setters in setters(), keep_unrelated in any::<bool>()) {
        let initial = if keep_unrelated { "?tab=metrics&sort=name" } else { "" };
        let mut location = Location::new("http://localhost:5001/r-1", initial);
        let mut ids = MountIds::new();
        let mut state = SubjectsState::mount(ids.next_id(), ViewOptions::default(), 3);

        for setter in setters {
            match setter {
                Setter::ToggleColumn(i) => {
                    let columns = state.options().toggled_column(Column::ALL[i]);
                    state.set_hidden_columns(columns, &mut location);
                }
                Setter::Hide(hide) => {
                    state.set_hide_metrics_not_requiring_action(hide, &mut location);
                }
            }
            prop_assert_eq!(&ViewOptions::from_search(location.search()), state.options());
            prop_assert_eq!(location.search().contains("tab=metrics"), keep_unrelated);
        }

        if !keep_unrelated {
            prop_assert_eq!(location.search(), state.options().to_search());
        }
    }
}
