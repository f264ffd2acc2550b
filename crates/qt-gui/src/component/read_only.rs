//! Edit gating.

use iced::Element;
use iced::widget::Space;

use crate::state::Permissions;

/// Show `editable` only to users allowed to edit; others see nothing.
pub fn read_only_or_editable<'a, M: 'a>(
    permissions: Permissions,
    editable: impl FnOnce() -> Element<'a, M>,
) -> Element<'a, M> {
    if permissions.can_edit() {
        editable()
    } else {
        Space::new().into()
    }
}
