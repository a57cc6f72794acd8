pub(crate) mod palette;
pub(crate) mod week_grid;

pub(crate) use palette::GridPalette;
pub(crate) use week_grid::render_week_grid;
