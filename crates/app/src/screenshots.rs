//! Screenshot mode: visits every page, saves a capture of each and exits.
//!
//! Enabled by setting `FOOD_ATLAS_SCREENSHOTS`. Captures land in
//! `/tmp/food_atlas_<page>.png`.

use bevy::prelude::*;
use bevy::render::view::screenshot::{save_to_disk, Screenshot};

use tracts::Page;

pub const SCREENSHOTS_ENV: &str = "FOOD_ATLAS_SCREENSHOTS";

/// Frames to wait before the first capture so fixtures and the map mount.
const WARMUP_FRAMES: u32 = 60;
/// Frames spent on each page: switch, settle, capture.
const FRAMES_PER_PAGE: u32 = 12;
const CAPTURE_PHASE: u32 = 6;

#[derive(Resource, Debug, Default)]
pub struct ScreenshotQueue {
    frame: u32,
    current: usize,
}

pub fn capture_path(page: Page) -> String {
    let name = match page.route().trim_start_matches('/') {
        "" => "home",
        route => route,
    };
    format!("/tmp/food_atlas_{name}.png")
}

pub fn drive_screenshots(
    mut commands: Commands,
    mut queue: ResMut<ScreenshotQueue>,
    mut next_page: ResMut<NextState<Page>>,
    mut exit: EventWriter<AppExit>,
) {
    queue.frame += 1;
    if queue.frame < WARMUP_FRAMES {
        return;
    }

    let Some(&page) = Page::ALL.get(queue.current) else {
        // Let the last save finish before exiting.
        if queue.frame > WARMUP_FRAMES + Page::ALL.len() as u32 * FRAMES_PER_PAGE + 20 {
            exit.send(AppExit::Success);
        }
        return;
    };

    let phase = (queue.frame - WARMUP_FRAMES) % FRAMES_PER_PAGE;
    if phase == 0 {
        next_page.set(page);
    } else if phase == CAPTURE_PHASE {
        let path = capture_path(page);
        info!("Capturing {path}");
        commands
            .spawn(Screenshot::primary_window())
            .observe(save_to_disk(path));
        queue.current += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_paths_are_named_after_routes() {
        assert_eq!(capture_path(Page::Home), "/tmp/food_atlas_home.png");
        assert_eq!(capture_path(Page::Nyc), "/tmp/food_atlas_nyc.png");
    }
}
