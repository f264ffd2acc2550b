//! Theme module: spacing constants and widget styles.

pub mod spacing;
pub mod style;

pub use spacing::{
    BORDER_RADIUS_MD, BORDER_RADIUS_SM, METRIC_CARD_WIDTH, METRIC_NAME_WIDTH, SPACING_LG,
    SPACING_MD, SPACING_SM, SPACING_XS,
};
pub use style::{
    button_chip, button_ghost, button_primary, button_secondary, container_card,
    container_error, container_header, container_table_header, quality_theme, status_color,
    text_muted, text_status,
};
