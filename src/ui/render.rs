use crate::App;
use ratatui::Frame;

use themedeck::model::Route;

use super::{carousel, header, layout, legend, page, palette, status_bar};

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let layout_info = layout::calculate_layout(size);

    header::render_header(
        f,
        layout_info.header_area,
        &app.model.ui.route,
        app.model.palette.theme_count(),
    );

    match app.model.ui.route.clone() {
        Route::Home => {
            // Remember where the cards are so mouse presses can be hit-tested
            app.carousel_area = Some(layout_info.content_area);

            let carousel_model = &app.model.carousel;
            let shift = if app.cell_width > 0.0 {
                (carousel_model.drag_offset / app.cell_width).round() as i32
            } else {
                0
            };
            let cards = carousel_model.visible_with_times(app.clock.now(), app.model.ui.relative_time);
            carousel::render_carousel(
                f,
                layout_info.content_area,
                &cards,
                carousel_model.page_size(),
                shift,
            );
        }
        Route::Theme(slug) => {
            app.carousel_area = None;
            match app.model.current_theme() {
                Some(theme) => page::render_theme(f, layout_info.content_area, theme),
                None => page::render_page(f, layout_info.content_area, &slug),
            }
        }
        Route::Page(slug) => {
            app.carousel_area = None;
            page::render_page(f, layout_info.content_area, &slug);
        }
    }

    let on_home = app.model.ui.carousel_visible();
    legend::render_legend(
        f,
        layout_info.legend_area,
        app.model.ui.vim_mode,
        app.model.palette.open,
        on_home,
    );

    let carousel_model = &app.model.carousel;
    status_bar::render_status_bar(
        f,
        layout_info.status_area,
        carousel_model.current_page(),
        carousel_model.page_count(),
        carousel_model.direction(),
        carousel_model.records().len(),
        app.drag_origin.is_some(),
    );

    // Palette draws last so it sits on top
    if app.model.palette.open {
        palette::render_palette(f, size, &app.model.palette);
    }
}
