use std::time::Duration;

use anyhow::Context;
use glam::Vec3;
use showroom_core::{showroom_scene, Hit, PointerEvent, Showroom, ShowroomConfig};

const FRAME: Duration = Duration::from_millis(16);
const MAX_SETTLE_FRAMES: usize = 600;

/// Pointer clock in milliseconds, advanced by the tour as a user would.
struct Tour {
    showroom: Showroom,
    clock_ms: f64,
}

impl Tour {
    fn hit(&self, name: &str, point: Vec3) -> anyhow::Result<Hit> {
        let surface = self
            .showroom
            .scene()
            .find(name)
            .with_context(|| format!("surface '{}' missing from scene", name))?;
        Ok(Hit { surface, point })
    }

    fn press(&mut self, hit: Option<Hit>, hold_ms: f64) {
        self.showroom.handle(PointerEvent::Down {
            time_ms: self.clock_ms,
        });
        self.clock_ms += hold_ms;
        self.showroom.handle(PointerEvent::Up {
            time_ms: self.clock_ms,
            hit,
        });
        self.clock_ms += 500.0;
    }

    fn click(&mut self, name: &str, point: Vec3) -> anyhow::Result<()> {
        let hit = self.hit(name, point)?;
        self.press(Some(hit), 80.0);
        log::info!(
            "[tour] click {} -> {:?} total={:.2}",
            name,
            self.showroom.last_click(),
            self.showroom.state().total_cost()
        );
        Ok(())
    }

    fn hover(&mut self, name: &str, point: Vec3) -> anyhow::Result<()> {
        let hit = self.hit(name, point)?;
        self.showroom.handle(PointerEvent::Over {
            surface: hit.surface,
        });
        self.showroom.handle(PointerEvent::Move { hit: Some(hit) });
        let marker = self.showroom.marker();
        log::info!(
            "[tour] hover {} marker visible={} at ({:.2},{:.2},{:.2})",
            name,
            marker.is_visible(),
            marker.position().x,
            marker.position().y,
            marker.position().z
        );
        Ok(())
    }

    fn settle(&mut self) -> anyhow::Result<usize> {
        let mut frames = 0;
        while self.showroom.navigator().is_transitioning() {
            self.showroom.tick(FRAME);
            self.clock_ms += FRAME.as_secs_f64() * 1000.0;
            frames += 1;
            if frames > MAX_SETTLE_FRAMES {
                anyhow::bail!("camera did not settle after {} frames", frames);
            }
        }
        let cam = self.showroom.camera();
        log::info!(
            "[tour] settled in {} frames at ({:.2},{:.2},{:.2})",
            frames,
            cam.position.x,
            cam.position.y,
            cam.position.z
        );
        Ok(frames)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let scene = showroom_scene()?;
    log::info!("[tour] scene surfaces={}", scene.len());
    let mut tour = Tour {
        showroom: Showroom::new(scene, ShowroomConfig::default()),
        clock_ms: 0.0,
    };

    tour.hover("first_floor_0", Vec3::new(4.0, 0.0, -6.0))?;

    tour.click("stairs_treads_0_3", Vec3::new(2.0, 1.0, -14.0))?;
    tour.settle()?;
    tour.hover("second_floor_0", Vec3::new(4.0, 3.2, -15.0))?;

    tour.click("first_floor_0", Vec3::new(6.0, 0.0, -8.0))?;
    tour.settle()?;

    tour.click("living_wall_5", Vec3::new(9.0, 2.0, -4.0))?;
    tour.click("entry_wall_1", Vec3::new(7.0, 2.0, -12.0))?;

    tour.showroom.select_option("wallpaper_3")?;
    tour.click("living_wall_5", Vec3::new(9.0, 2.0, -4.0))?;
    tour.click("living_wall_5", Vec3::new(9.0, 2.0, -4.0))?;

    let long = tour.hit("entry_wall_1", Vec3::new(7.0, 2.0, -12.0))?;
    tour.press(Some(long), 400.0);
    log::info!("[tour] long press ignored, last={:?}", tour.showroom.last_click());

    tour.press(None, 60.0);

    let changes = tour.showroom.take_changes();
    let state = tour.showroom.state();
    let walls: Vec<&str> = state
        .selected_walls()
        .iter()
        .filter_map(|id| tour.showroom.scene().surface(*id))
        .map(|s| s.name.as_str())
        .collect();
    log::info!(
        "[tour] done: total={:.2} walls={:?} option={} changes={}",
        state.total_cost(),
        walls,
        state.selection().option,
        changes.len()
    );
    Ok(())
}
