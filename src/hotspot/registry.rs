use glam::{Mat4, Vec2, Vec3};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::camera::{project, Camera, ScreenPosition, Viewport};
use crate::error::ViewerError;

/// Display content shown when a hotspot is opened. Opaque to projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotspotPayload {
    /// Panel heading; also the label in the annotations list.
    pub title: String,
    /// Descriptive body text.
    #[serde(default)]
    pub text: String,
    /// Optional image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A point of interest attached to the model.
#[derive(Debug, Clone, PartialEq)]
pub struct Hotspot {
    /// Stable identifier.
    pub id: String,
    /// Position in model space (world space when no model root is set).
    /// `None` means the hotspot has no marker and is never projected.
    pub anchor: Option<Vec3>,
    /// Panel content.
    pub payload: HotspotPayload,
}

impl Hotspot {
    /// Create a hotspot.
    pub fn new(
        id: impl Into<String>,
        anchor: Option<Vec3>,
        payload: HotspotPayload,
    ) -> Self {
        Self {
            id: id.into(),
            anchor,
            payload,
        }
    }
}

/// Wire format of one entry in the hotspot JSON array.
#[derive(Deserialize)]
struct RawHotspot {
    id: String,
    #[serde(default)]
    position: Option<[f32; 3]>,
    #[serde(flatten)]
    payload: HotspotPayload,
}

/// Parse hotspot definitions from a JSON array.
///
/// ```json
/// [{ "id": "church", "position": [0, 3, 13], "title": "Church", "text": "…" }]
/// ```
///
/// Entries that fail to parse are skipped with a warning. A document that
/// is not an array is an error.
pub fn load_hotspots(json: &str) -> Result<Vec<Hotspot>, ViewerError> {
    let document: serde_json::Value = serde_json::from_str(json)
        .map_err(|e| ViewerError::HotspotParse(e.to_string()))?;
    let serde_json::Value::Array(entries) = document else {
        return Err(ViewerError::HotspotParse(
            "expected a JSON array of hotspots".to_owned(),
        ));
    };

    let mut hotspots = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<RawHotspot>(entry) {
            Ok(raw) => hotspots.push(Hotspot {
                id: raw.id,
                anchor: raw.position.map(Vec3::from_array),
                payload: raw.payload,
            }),
            Err(e) => log::warn!("skipping hotspot #{index}: {e}"),
        }
    }
    Ok(hotspots)
}

/// One row of the annotations side list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Annotation<'a> {
    /// Hotspot id.
    pub id: &'a str,
    /// Hotspot title.
    pub title: &'a str,
}

/// Screen positions of every anchored hotspot for one frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct HotspotScreens {
    positions: FxHashMap<String, ScreenPosition>,
}

impl HotspotScreens {
    /// Screen state of one hotspot, `None` if it is unknown or unanchored.
    pub fn get(&self, id: &str) -> Option<ScreenPosition> {
        self.positions.get(id).copied()
    }

    /// Iterate `(id, position)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ScreenPosition)> {
        self.positions.iter().map(|(id, pos)| (id.as_str(), *pos))
    }

    /// Number of projected hotspots.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether no hotspot was projected.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The visible hotspot closest to `point`, if any lies within `radius`
    /// pixels. A negative or non-finite radius matches nothing.
    pub fn hit_test(&self, point: Vec2, radius: f32) -> Option<&str> {
        if !radius.is_finite() || radius < 0.0 {
            return None;
        }
        let radius_sq = radius * radius;
        self.positions
            .iter()
            .filter_map(|(id, pos)| {
                let d = pos.point()?.distance_squared(point);
                (d <= radius_sq).then_some((id.as_str(), d))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(b.0)))
            .map(|(id, _)| id)
    }
}

/// The fixed set of hotspots for the loaded model.
#[derive(Debug, Clone, Default)]
pub struct HotspotRegistry {
    hotspots: Vec<Hotspot>,
    registered: bool,
}

impl HotspotRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the hotspot list. Only the first call has any effect; later
    /// calls are ignored with a warning. Duplicate ids keep the first
    /// occurrence. Returns how many hotspots were stored.
    pub fn register_all(
        &mut self,
        hotspots: impl IntoIterator<Item = Hotspot>,
    ) -> usize {
        if self.registered {
            log::warn!("hotspots already registered; ignoring new list");
            return 0;
        }
        self.registered = true;

        let mut seen = FxHashSet::default();
        for hotspot in hotspots {
            if !seen.insert(hotspot.id.clone()) {
                log::warn!("skipping duplicate hotspot id {:?}", hotspot.id);
                continue;
            }
            self.hotspots.push(hotspot);
        }
        log::info!("registered {} hotspots", self.hotspots.len());
        self.hotspots.len()
    }

    /// Look up a hotspot by id.
    pub fn get(&self, id: &str) -> Option<&Hotspot> {
        self.hotspots.iter().find(|h| h.id == id)
    }

    /// Hotspots in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Hotspot> {
        self.hotspots.iter()
    }

    /// Number of registered hotspots.
    pub fn len(&self) -> usize {
        self.hotspots.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.hotspots.is_empty()
    }

    /// `(id, title)` rows for the annotations list, in registration order.
    pub fn annotations(&self) -> Vec<Annotation<'_>> {
        self.hotspots
            .iter()
            .map(|h| Annotation {
                id: &h.id,
                title: &h.payload.title,
            })
            .collect()
    }

    /// Project every anchored hotspot through `camera`. Unanchored hotspots
    /// are left out of the result.
    pub fn project_all(
        &self,
        camera: &Camera,
        model_root: Option<&Mat4>,
        viewport: Viewport,
    ) -> HotspotScreens {
        let view_proj = camera.build_matrix();
        let positions = self
            .hotspots
            .iter()
            .filter_map(|h| {
                let anchor = h.anchor?;
                Some((
                    h.id.clone(),
                    project(anchor, model_root, &view_proj, viewport),
                ))
            })
            .collect();
        HotspotScreens { positions }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(title: &str) -> HotspotPayload {
        HotspotPayload {
            title: title.to_owned(),
            text: String::new(),
            image: None,
        }
    }

    fn camera_at_z10(viewport: Viewport) -> Camera {
        let mut camera = Camera::default();
        camera.aspect = viewport.aspect();
        camera.position = Vec3::new(0.0, 0.0, 10.0);
        camera.look_at(Vec3::ZERO);
        camera
    }

    #[test]
    fn load_skips_malformed_entries() {
        let json = r#"[
            { "id": "church", "position": [0, 3, 13], "title": "Church",
              "text": "Round neoclassical church", "image": "church.jpg" },
            { "position": [1, 2, 3], "title": "No id" },
            { "id": "note", "title": "Floating note" }
        ]"#;
        let hotspots = load_hotspots(json).unwrap();
        assert_eq!(hotspots.len(), 2);
        assert_eq!(hotspots[0].anchor, Some(Vec3::new(0.0, 3.0, 13.0)));
        assert_eq!(hotspots[0].payload.image.as_deref(), Some("church.jpg"));
        assert_eq!(hotspots[1].id, "note");
        assert_eq!(hotspots[1].anchor, None);
    }

    #[test]
    fn load_rejects_non_array() {
        assert!(matches!(
            load_hotspots(r#"{ "id": "x" }"#),
            Err(ViewerError::HotspotParse(_))
        ));
        assert!(load_hotspots("not json").is_err());
    }

    #[test]
    fn second_registration_is_ignored() {
        let mut registry = HotspotRegistry::new();
        let first = vec![Hotspot::new("a", Some(Vec3::ZERO), payload("A"))];
        assert_eq!(registry.register_all(first), 1);
        let second = vec![Hotspot::new("b", Some(Vec3::ONE), payload("B"))];
        assert_eq!(registry.register_all(second), 0);
        assert_eq!(registry.len(), 1);
        assert!(registry.get("b").is_none());
    }

    #[test]
    fn duplicate_ids_keep_first() {
        let mut registry = HotspotRegistry::new();
        let _ = registry.register_all(vec![
            Hotspot::new("a", Some(Vec3::ZERO), payload("first")),
            Hotspot::new("a", Some(Vec3::ONE), payload("second")),
            Hotspot::new("b", None, payload("B")),
        ]);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("a").unwrap().payload.title, "first");
        let titles: Vec<_> =
            registry.annotations().iter().map(|a| a.title).collect();
        assert_eq!(titles, ["first", "B"]);
    }

    #[test]
    fn project_all_skips_unanchored() {
        let viewport = Viewport::new(800.0, 600.0);
        let camera = camera_at_z10(viewport);
        let mut registry = HotspotRegistry::new();
        let _ = registry.register_all(vec![
            Hotspot::new("origin", Some(Vec3::ZERO), payload("Origin")),
            Hotspot::new("floating", None, payload("Floating")),
            Hotspot::new("behind", Some(Vec3::new(0.0, 0.0, 30.0)), payload("B")),
        ]);

        let screens = registry.project_all(&camera, None, viewport);
        assert_eq!(screens.len(), 2);
        assert!(screens.get("floating").is_none());
        assert_eq!(screens.get("behind"), Some(ScreenPosition::Hidden));
        let p = screens.get("origin").unwrap().point().unwrap();
        assert!((p - Vec2::new(400.0, 300.0)).length() < 1e-2);
    }

    #[test]
    fn hit_test_picks_nearest_within_radius() {
        let viewport = Viewport::new(800.0, 600.0);
        let camera = camera_at_z10(viewport);
        let mut registry = HotspotRegistry::new();
        let _ = registry.register_all(vec![
            Hotspot::new("center", Some(Vec3::ZERO), payload("C")),
            Hotspot::new("right", Some(Vec3::new(2.0, 0.0, 0.0)), payload("R")),
        ]);
        let screens = registry.project_all(&camera, None, viewport);

        assert_eq!(screens.hit_test(Vec2::new(405.0, 302.0), 16.0), Some("center"));
        assert_eq!(screens.hit_test(Vec2::new(10.0, 10.0), 16.0), None);
    }

    #[test]
    fn hit_test_rejects_invalid_radius() {
        let viewport = Viewport::new(800.0, 600.0);
        let camera = camera_at_z10(viewport);
        let mut registry = HotspotRegistry::new();
        let _ = registry.register_all(vec![Hotspot::new(
            "c",
            Some(Vec3::ZERO),
            payload("C"),
        )]);
        let screens = registry.project_all(&camera, None, viewport);

        let near = Vec2::new(405.0, 300.0);
        assert_eq!(screens.hit_test(near, 16.0), Some("c"));
        assert_eq!(screens.hit_test(near, -16.0), None);
        assert_eq!(screens.hit_test(near, f32::NAN), None);
        assert_eq!(screens.hit_test(near, f32::INFINITY), None);
    }

    #[test]
    fn screens_serialize_by_id() {
        let viewport = Viewport::new(800.0, 600.0);
        let camera = camera_at_z10(viewport);
        let mut registry = HotspotRegistry::new();
        let _ = registry.register_all(vec![Hotspot::new(
            "behind",
            Some(Vec3::new(0.0, 0.0, 30.0)),
            payload("B"),
        )]);
        let json = serde_json::to_value(
            registry.project_all(&camera, None, viewport),
        )
        .unwrap();
        assert_eq!(json["behind"]["state"], "hidden");
    }
}
