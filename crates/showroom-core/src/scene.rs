//! Surface registry for the loaded house model.
//!
//! Every mesh the renderer can report under the pointer is declared here once,
//! at load time. Its [`SurfaceKind`] is derived from the mesh name and stored,
//! so pointer handling never has to parse names again.

use crate::constants::{
    GROUND_FLOOR_HEIGHT, NEUTRAL_MATERIAL, STOREY_SPLIT_HEIGHT, UPPER_FLOOR_HEIGHT,
};
use crate::error::ShowroomError;
use fnv::FnvHashMap;
use std::fmt;

/// Number of leading name characters compared when classifying meshes.
const KIND_PREFIX_LEN: usize = 13;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MaterialHandle(pub u32);

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MaterialId(String);

impl MaterialId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MaterialId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for MaterialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Storey {
    Ground,
    Upper,
}

impl Storey {
    pub fn height(self) -> f32 {
        match self {
            Storey::Ground => GROUND_FLOOR_HEIGHT,
            Storey::Upper => UPPER_FLOOR_HEIGHT,
        }
    }

    pub fn from_height(height: f32) -> Self {
        if height < STOREY_SPLIT_HEIGHT {
            Storey::Ground
        } else {
            Storey::Upper
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceKind {
    Floor(Storey),
    Stairs,
    /// The marker quad itself; clicking it walks to where it sits.
    MarkerProxy,
    PaintableWall,
    Static,
}

impl SurfaceKind {
    /// Classify a mesh by name. Anything that is not a known floor, stair or
    /// the marker is a wall when it carries an area, otherwise static.
    pub fn classify(name: &str, area: Option<f32>) -> Self {
        let prefix = name.get(..KIND_PREFIX_LEN).unwrap_or(name);
        match (prefix, name) {
            ("first_floor_0", _) => SurfaceKind::Floor(Storey::Ground),
            (_, "second_floor_0") => SurfaceKind::Floor(Storey::Upper),
            (_, "marker") => SurfaceKind::MarkerProxy,
            ("stairs_treads" | "stairs_risers", _) => SurfaceKind::Stairs,
            _ if area.is_some() => SurfaceKind::PaintableWall,
            _ => SurfaceKind::Static,
        }
    }

    #[inline]
    pub fn is_navigable(self) -> bool {
        matches!(
            self,
            SurfaceKind::Floor(_) | SurfaceKind::Stairs | SurfaceKind::MarkerProxy
        )
    }
}

#[derive(Clone, Debug)]
pub struct Surface {
    pub id: SurfaceId,
    pub name: String,
    pub kind: SurfaceKind,
    area: Option<f32>,
    material: MaterialId,
    neutral: MaterialId,
}

impl Surface {
    /// Wall area in square units; zero for surfaces declared without one.
    pub fn area(&self) -> f32 {
        self.area.unwrap_or(0.0)
    }

    pub fn material(&self) -> &MaterialId {
        &self.material
    }

    pub fn neutral(&self) -> &MaterialId {
        &self.neutral
    }

    pub(crate) fn set_material(&mut self, material: MaterialId) {
        self.material = material;
    }
}

/// Lookup from material identifiers to the renderer's material handles.
#[derive(Clone, Debug)]
pub struct MaterialTable {
    handles: FnvHashMap<MaterialId, MaterialHandle>,
    neutral: MaterialId,
}

impl Default for MaterialTable {
    fn default() -> Self {
        Self::new(NEUTRAL_MATERIAL)
    }
}

impl MaterialTable {
    /// The neutral material always gets handle 0.
    pub fn new(neutral: &str) -> Self {
        let neutral = MaterialId::from(neutral);
        let mut handles = FnvHashMap::default();
        handles.insert(neutral.clone(), MaterialHandle(0));
        Self { handles, neutral }
    }

    /// Register a material, returning its handle. Re-registering is a no-op.
    pub fn register(&mut self, id: &str) -> MaterialHandle {
        let next = MaterialHandle(self.handles.len() as u32);
        *self.handles.entry(MaterialId::from(id)).or_insert(next)
    }

    pub fn handle(&self, id: &MaterialId) -> Option<MaterialHandle> {
        self.handles.get(id).copied()
    }

    pub fn neutral(&self) -> &MaterialId {
        &self.neutral
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

#[derive(Clone, Debug, Default)]
pub struct Scene {
    surfaces: Vec<Surface>,
    by_name: FnvHashMap<String, SurfaceId>,
    materials: MaterialTable,
}

impl Scene {
    pub fn new(materials: MaterialTable) -> Self {
        Self {
            surfaces: Vec::new(),
            by_name: FnvHashMap::default(),
            materials,
        }
    }

    pub fn add_material(&mut self, id: &str) -> MaterialHandle {
        self.materials.register(id)
    }

    pub fn add_surface(
        &mut self,
        name: &str,
        area: Option<f32>,
        material: &str,
    ) -> Result<SurfaceId, ShowroomError> {
        if self.by_name.contains_key(name) {
            return Err(ShowroomError::DuplicateSurface(name.to_string()));
        }
        let material = MaterialId::from(material);
        if self.materials.handle(&material).is_none() {
            return Err(ShowroomError::UnknownMaterial {
                surface: name.to_string(),
                material: material.to_string(),
            });
        }
        let id = SurfaceId(self.surfaces.len() as u32);
        let kind = SurfaceKind::classify(name, area);
        log::debug!("[scene] {} -> {:?}", name, kind);
        self.surfaces.push(Surface {
            id,
            name: name.to_string(),
            kind,
            area,
            material,
            neutral: self.materials.neutral().clone(),
        });
        self.by_name.insert(name.to_string(), id);
        Ok(id)
    }

    pub fn find(&self, name: &str) -> Option<SurfaceId> {
        self.by_name.get(name).copied()
    }

    pub fn surface(&self, id: SurfaceId) -> Option<&Surface> {
        self.surfaces.get(id.0 as usize)
    }

    pub fn surface_mut(&mut self, id: SurfaceId) -> Option<&mut Surface> {
        self.surfaces.get_mut(id.0 as usize)
    }

    pub fn surfaces(&self) -> impl Iterator<Item = &Surface> {
        self.surfaces.iter()
    }

    pub fn materials(&self) -> &MaterialTable {
        &self.materials
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Split borrow used by the ledger: one surface mutably plus the table.
    pub(crate) fn surface_and_materials(
        &mut self,
        id: SurfaceId,
    ) -> Option<(&mut Surface, &MaterialTable)> {
        let materials = &self.materials;
        self.surfaces
            .get_mut(id.0 as usize)
            .map(|surface| (surface, materials))
    }
}
