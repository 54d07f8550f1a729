use egui::{Color32, Visuals};

use crate::config::Theme;

pub struct Palette {
    pub board_background: Color32,
    pub grid_line: Color32,
    pub x_mark: Color32,
    pub o_mark: Color32,
    pub win_highlight: Color32,
    pub hover: Color32,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                board_background: Color32::from_rgb(30, 34, 45),
                grid_line: Color32::from_rgb(90, 98, 120),
                x_mark: Color32::from_rgb(96, 165, 250),
                o_mark: Color32::from_rgb(251, 146, 60),
                win_highlight: Color32::from_rgba_unmultiplied(74, 222, 128, 70),
                hover: Color32::from_rgba_unmultiplied(148, 163, 184, 40),
            },
            Theme::Light => Self {
                board_background: Color32::from_rgb(240, 240, 240),
                grid_line: Color32::from_rgb(60, 60, 60),
                x_mark: Color32::from_rgb(29, 78, 216),
                o_mark: Color32::from_rgb(194, 65, 12),
                win_highlight: Color32::from_rgba_unmultiplied(22, 163, 74, 60),
                hover: Color32::from_rgba_unmultiplied(100, 150, 255, 50),
            },
        }
    }

    pub fn mark_color(&self, is_x: bool) -> Color32 {
        if is_x { self.x_mark } else { self.o_mark }
    }
}

pub fn visuals(theme: Theme) -> Visuals {
    match theme {
        Theme::Dark => Visuals::dark(),
        Theme::Light => Visuals::light(),
    }
}
