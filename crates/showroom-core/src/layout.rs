//! Declaration of the showroom house: the meshes the renderer reports under
//! the pointer, their areas and starting materials.

use crate::catalog::CATALOG;
use crate::constants::NEUTRAL_MATERIAL;
use crate::error::ShowroomError;
use crate::scene::{MaterialTable, Scene};

const FLOOR_FINISHES: &[&str] = &[
    "Wood Veneer 02",
    "Wood Lumber ButtJoined",
    "Marble Carrara Floor Tile",
    "Marble Carrara Gold Floor Tile",
    "Granite Dark Gray",
];

const STATIC_FINISHES: &[&str] = &[
    "Brick Tumbled",
    "Suede Dark Gray",
    "Translucent Glass Gray2",
    "0136_Charcoal",
    "out_walls_texture",
];

const STAIR_TREADS: usize = 21;
const STAIR_RISERS: usize = 22;

// (name, area) of every wall that can take a wallcovering
const WALLS: &[(&str, f32)] = &[
    ("entry_wall_0", 83.0),
    ("entry_wall_1", 253.0),
    ("stairs_wall_2", 60.0),
    ("corridor_wall_0", 80.0),
    ("corridor_wall_1", 45.0),
    ("corridor_wall_2", 51.0),
    ("corridor_wall_3", 16.0),
    ("corridor_wall_4", 25.0),
    ("corridor_wall_5", 64.0),
    ("corridor_wall_6", 39.0),
    ("corridor_wall_7", 20.0),
    ("kitchen_wall_0", 6.0),
    ("kitchen_wall_1", 22.0),
    ("kitchen_wall_2", 105.0),
    ("kitchen_wall_3", 30.0),
    ("living_wall_o", 16.0),
    ("living_wall_1", 100.0),
    ("living_wall_2", 16.0),
    ("living_wall_3", 120.0),
    ("living_wall_4", 171.0),
    ("living_wall_5", 280.0),
    ("living_wall_6", 28.0),
    ("dining_wall_0", 265.0),
    ("dining_wall_1", 16.0),
];

// meshes that are clickable but neither walkable nor paintable
const STATIC_MESHES: &[(&str, &str)] = &[
    ("out_walls_0", "out_walls_texture"),
    ("out_roofs_0", "0136_Charcoal"),
    ("out_stairs_0", "Granite Dark Gray"),
    ("stairs_skirt_0", "Suede Dark Gray"),
    ("stairs_wall_1", "Brick Tumbled"),
    ("Rail", "Suede Dark Gray"),
    ("Window_Fixed", "Translucent Glass Gray2"),
];

/// Builds the scene the web and native frontends load.
pub fn showroom_scene() -> Result<Scene, ShowroomError> {
    let mut scene = Scene::new(MaterialTable::new(NEUTRAL_MATERIAL));
    for entry in CATALOG {
        scene.add_material(entry.id);
    }
    for finish in FLOOR_FINISHES.iter().chain(STATIC_FINISHES) {
        scene.add_material(finish);
    }

    scene.add_surface("first_floor_0", None, "Wood Veneer 02")?;
    scene.add_surface("second_floor_0", None, "Wood Lumber ButtJoined")?;
    scene.add_surface("marker", None, NEUTRAL_MATERIAL)?;

    for i in 0..STAIR_TREADS {
        scene.add_surface(&stair_part("stairs_treads_0", i), None, "Granite Dark Gray")?;
    }
    for i in 0..STAIR_RISERS {
        scene.add_surface(&stair_part("stairs_risers_0", i), None, "Granite Dark Gray")?;
    }

    for (name, area) in WALLS {
        scene.add_surface(name, Some(*area), NEUTRAL_MATERIAL)?;
    }
    for (name, material) in STATIC_MESHES {
        scene.add_surface(name, None, material)?;
    }

    log::info!(
        "[scene] loaded {} surfaces, {} materials",
        scene.len(),
        scene.materials().len()
    );
    Ok(scene)
}

// stairs_treads_0, stairs_treads_0_1, stairs_treads_0_2, ...
fn stair_part(base: &str, index: usize) -> String {
    if index == 0 {
        base.to_string()
    } else {
        format!("{base}_{index}")
    }
}
