use std::fs::File;
use std::io::{ BufReader, BufWriter, Write };
use std::path::Path;

use serde::{ Serialize, Deserialize };

use crate::vector::Vector4D;
use crate::camera::Camera;
use crate::world::World;
use crate::bitmap::Bitmap;
use crate::shape::ShapeType;
use crate::consts::{ DEFAULT_WIDTH, DEFAULT_HEIGHT, DEFAULT_FOV };
use crate::error::Result;

/// A renderable scene: a world, a camera and the output image size.
///
/// Scenes are loaded from and saved to a JSON description (see `SceneJson`).
#[derive(Clone, Debug)]
pub struct Scene {
    pub world: World,
    pub camera: Camera,
    pub width: usize,
    pub height: usize,
}

impl Scene {
    /// Parses a scene from a JSON string.
    pub fn from_json(json: &str) -> Result<Scene> {
        let scene_json: SceneJson = serde_json::from_str(json)?;
        Ok(scene_json.into())
    }

    /// Serializes a scene to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&SceneJson::from(self))?)
    }

    /// Loads a scene description from a JSON file.
    pub fn load(path: &Path) -> Result<Scene> {
        let reader = BufReader::new(File::open(path)?);
        let scene_json: SceneJson = serde_json::from_reader(reader)?;
        log::info!("loaded scene {} ({} objects)", path.display(), scene_json.objects.len());

        Ok(scene_json.into())
    }

    /// Writes the scene description to a JSON file, replacing it if present.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, &SceneJson::from(self))?;
        writeln!(writer)?;
        writer.flush()?;
        log::info!("saved scene {} ({} objects)", path.display(), self.world.len());

        Ok(())
    }

    pub fn render(&self) -> Bitmap {
        self.world.render(self.width, self.height, &self.camera)
    }

    pub fn render_parallel(&self) -> Bitmap {
        self.world.render_parallel(self.width, self.height, &self.camera)
    }
}

/// The two-sphere scene written by `visibility-tracer init`.
impl Default for Scene {
    fn default() -> Scene {
        let mut world = World::new();
        world.add_sphere(Vector4D::point(0.0, -1.0, 4.0), Vector4D::vector_splat(1.0));
        world.add_sphere(Vector4D::point(0.0, 2.0, 10.0), Vector4D::vector_splat(1.0));

        Scene {
            world,
            camera: Camera::default(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// The on-disk scene description.
///
/// Coordinates are plain `[x, y, z]` arrays; whether they denote points or
/// vectors is implied by the field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneJson {
    #[serde(default = "default_width")]
    width: usize,
    #[serde(default = "default_height")]
    height: usize,

    camera: CameraJson,

    #[serde(default)]
    objects: Vec<ObjectJson>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct CameraJson {
    origin: [f64; 3],
    forward: [f64; 3],
    up: [f64; 3],
    #[serde(default = "default_fov")]
    fov: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct ObjectJson {
    #[serde(rename = "type")]
    ty: ShapeType,
    origin: [f64; 3],
    #[serde(default = "unit_scale")]
    scale: [f64; 3],
}

fn default_width() -> usize { DEFAULT_WIDTH }
fn default_height() -> usize { DEFAULT_HEIGHT }
fn default_fov() -> f64 { DEFAULT_FOV }
fn unit_scale() -> [f64; 3] { [1.0, 1.0, 1.0] }

fn point(v: [f64; 3]) -> Vector4D {
    Vector4D::point(v[0], v[1], v[2])
}

fn vector(v: [f64; 3]) -> Vector4D {
    Vector4D::vector(v[0], v[1], v[2])
}

fn xyz(v: Vector4D) -> [f64; 3] {
    [v.x, v.y, v.z]
}

impl From<SceneJson> for Scene {
    fn from(scene_json: SceneJson) -> Scene {
        let camera = Camera::new(
            point(scene_json.camera.origin),
            vector(scene_json.camera.forward),
            vector(scene_json.camera.up),
            scene_json.camera.fov,
        );

        // Objects keep document order, so ids are document indices.
        let mut world = World::new();
        for obj in scene_json.objects {
            world.add(obj.ty, point(obj.origin), vector(obj.scale));
        }

        Scene {
            world,
            camera,
            width: scene_json.width,
            height: scene_json.height,
        }
    }
}

impl From<&Scene> for SceneJson {
    fn from(scene: &Scene) -> SceneJson {
        SceneJson {
            width: scene.width,
            height: scene.height,
            camera: CameraJson {
                origin: xyz(scene.camera.origin),
                forward: xyz(scene.camera.forward),
                up: xyz(scene.camera.up),
                fov: scene.camera.field_of_view,
            },
            objects: scene.world.objects().iter().map(|obj| ObjectJson {
                ty: obj.ty(),
                origin: xyz(obj.model.translation()),
                scale: xyz(obj.model.scale()),
            }).collect(),
        }
    }
}

#[cfg(test)]
const TWO_SPHERES: &str = r#"{
    "width": 16,
    "height": 12,
    "camera": {
        "origin": [0, 0, 0],
        "forward": [0, 0, 1],
        "up": [0, 1, 0],
        "fov": 1.5707963267948966
    },
    "objects": [
        { "type": "sphere", "origin": [0, 0, 0] },
        { "type": "sphere", "origin": [0, 0, 2], "scale": [2, 2, 2] }
    ]
}"#;

#[cfg(test)]
fn assert_same_scene(a: &Scene, b: &Scene) {
    assert_eq!((a.width, a.height), (b.width, b.height));
    assert_eq!(a.camera, b.camera);
    assert_eq!(a.world.len(), b.world.len());

    for (x, y) in a.world.objects().iter().zip(b.world.objects()) {
        assert_eq!(x.ty(), y.ty());
        assert_eq!(x.model, y.model);
    }
}

#[test]
fn parse_scene() {
    let scene = Scene::from_json(TWO_SPHERES).unwrap();

    assert_eq!((scene.width, scene.height), (16, 12));
    assert_eq!(scene.camera, Camera::default());
    assert_eq!(scene.world.len(), 2);

    let second = scene.world.get_object(1).unwrap();
    assert_eq!(second.id(), 1);
    assert_eq!(second.model.translation(), Vector4D::point(0.0, 0.0, 2.0));
    assert_eq!(second.model.scale(), Vector4D::vector_splat(2.0));
    assert_eq!(scene.world.get_object(0).unwrap().model.scale(), Vector4D::vector_splat(1.0));
}

#[test]
fn defaults_fill_missing_fields() {
    let scene = Scene::from_json(
        r#"{ "camera": { "origin": [0, 0, 0], "forward": [0, 0, 1], "up": [0, 1, 0] } }"#
    ).unwrap();

    assert_eq!((scene.width, scene.height), (DEFAULT_WIDTH, DEFAULT_HEIGHT));
    assert!(crate::feq(scene.camera.field_of_view, DEFAULT_FOV));
    assert!(scene.world.is_empty());
}

#[test]
fn unknown_shape_is_rejected() {
    let json = TWO_SPHERES.replacen("\"sphere\"", "\"teapot\"", 1);

    assert!(matches!(Scene::from_json(&json),
        Err(crate::error::TracerError::Scene(_))));
}

#[test]
fn json_survives_a_round_trip() {
    let scene = Scene::from_json(TWO_SPHERES).unwrap();
    let again = Scene::from_json(&scene.to_json().unwrap()).unwrap();

    assert_same_scene(&scene, &again);
}

#[test]
fn save_and_load_file() {
    let path = std::env::temp_dir()
        .join(format!("visibility-tracer-scene-{}.json", std::process::id()));
    let scene = Scene::default();

    scene.save(&path).unwrap();
    let loaded = Scene::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_same_scene(&scene, &loaded);
    assert_eq!(loaded.render(), scene.render_parallel());
}

#[test]
fn missing_file_is_io_error() {
    let path = std::env::temp_dir().join("visibility-tracer-no-such-scene.json");

    assert!(matches!(Scene::load(&path), Err(crate::error::TracerError::Io(_))));
}
