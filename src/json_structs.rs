/*

    Declare data structs needed to parse scene JSON.

    - VertexField: inline "x y z x y z ..." string OR a struct
      pointing at a .ply file (string-or-struct pattern)
    - SingleOrVec: tolerate a single <object> where an array is expected
    - GroupJSON / MeshJSON: raw file forms of the scene graph
    - PlyMesh: serde-ply target for leaf geometry files

    @date: 1 Dec, 2025
    @author: Bartu
*/

use serde::{Deserialize, de::{Deserializer}};
use std::str::FromStr;
use tracing::{warn};
use void::Void;

use crate::json_parser::{deser_string_or_struct, deser_usize, deser_vec3, deser_vertex_data, parse_string_vecvec3};
use crate::numeric::{Vector3};
use crate::prelude::SmartDefault;

// Vertex data of a leaf as it appears in the scene file. Either the
// coordinates inline or a relative path to a .ply file to read them from.
#[derive(Debug, Clone, Default)]
pub struct VertexField {
    pub(crate) _data: Vec<Vector3>,
    pub(crate) _ply_file: String,
}

impl<'de> Deserialize<'de> for VertexField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Helper {
            #[serde(rename = "_data", default, deserialize_with = "deser_vertex_data")]
            _data: Vec<Vector3>,
            #[serde(rename = "_plyFile", default)]
            _ply_file: String,
        }

        let helper = Helper::deserialize(deserializer)?;
        Ok(VertexField {
            _data: helper._data,
            _ply_file: helper._ply_file,
        })
    }
}

// DISCLAIMER: This pattern is taken from
// https://serde.rs/string-or-struct.html
impl FromStr for VertexField {
    type Err = Void;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(VertexField {
            _data: parse_string_vecvec3(s).unwrap_or_else(|e| {
                warn!("Discarding malformed inline vertex data: {}", e);
                vec![]
            }),
            _ply_file: String::from(""),
        })
    }
}


// To handle JSON file having a single <object>
// or an array of <object>s
#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum SingleOrVec<T> {
    Empty,
    Single(T),
    Multiple(Vec<T>),
}

impl<T: Clone> SingleOrVec<T>  {
    pub fn all(&self) -> Vec<T> {
        match &self {
            SingleOrVec::Empty => vec![],
            SingleOrVec::Single(t) => vec![t.clone()],
            SingleOrVec::Multiple(vec) => vec.clone(),
        }
    }
}

impl<T: Default> Default for SingleOrVec<T> {
    fn default() -> Self {
        SingleOrVec::Empty
    }
}


#[derive(Debug, Deserialize)]
pub struct RootSceneJSON {
    #[serde(rename = "Group")]
    pub group: GroupJSON,
}

#[derive(Debug, Deserialize, Clone, SmartDefault)]
#[serde(default)]
pub struct GroupJSON {
    #[serde(rename = "Position", deserialize_with = "deser_vec3")]
    pub position: Vector3,

    #[serde(rename = "Meshes")]
    pub meshes: SingleOrVec<MeshJSON>,

    #[serde(rename = "Groups")]
    pub groups: SingleOrVec<Box<GroupJSON>>,
}

#[derive(Debug, Deserialize, Clone, SmartDefault)]
#[serde(default)]
pub struct MeshJSON {
    #[serde(rename = "_id", deserialize_with = "deser_usize")]
    pub _id: usize,

    #[serde(rename = "Vertices", deserialize_with = "deser_string_or_struct")]
    pub vertices: VertexField,
}


#[derive(Deserialize)]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[derive(Deserialize)]
pub struct Face {
    pub vertex_indices: Vec<usize>,
}

#[derive(Deserialize)]
pub struct PlyMesh {
    pub vertex: Vec<Vertex>,
    pub face: Option<Vec<Face>>,
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_field_from_inline_string() {
        let field = VertexField::from_str("-1 -1 -1 1 1 1").unwrap();
        assert_eq!(field._data.len(), 2);
        assert_eq!(field._data[0], Vector3::new(-1.0, -1.0, -1.0));
        assert_eq!(field._data[1], Vector3::new(1.0, 1.0, 1.0));
        assert!(field._ply_file.is_empty());
    }

    #[test]
    fn mesh_json_accepts_string_or_struct_vertices() {
        let inline: MeshJSON = serde_json::from_str(
            r#"{ "_id": "3", "Vertices": "0 0 0 1 2 3" }"#
        ).unwrap();
        assert_eq!(inline._id, 3);
        assert_eq!(inline.vertices._data.len(), 2);

        let ply: MeshJSON = serde_json::from_str(
            r#"{ "_id": 4, "Vertices": { "_plyFile": "bunny.ply" } }"#
        ).unwrap();
        assert_eq!(ply._id, 4);
        assert!(ply.vertices._data.is_empty());
        assert_eq!(ply.vertices._ply_file, "bunny.ply");
    }

    #[test]
    fn group_json_tolerates_single_mesh_object() {
        let group: GroupJSON = serde_json::from_str(
            r#"{ "Position": "1 2 3", "Meshes": { "_id": "1", "Vertices": "0 0 0" } }"#
        ).unwrap();
        assert_eq!(group.position, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(group.meshes.all().len(), 1);
        assert!(group.groups.all().is_empty());
    }

    #[test]
    fn nested_groups_deserialize() {
        let root: RootSceneJSON = serde_json::from_str(r#"
        {
            "Group": {
                "Position": "0 0 0",
                "Groups": [
                    { "Position": "0 5 0", "Meshes": [ { "_id": "1", "Vertices": "0 0 0 1 1 1" } ] }
                ]
            }
        }"#).unwrap();
        let inner = root.group.groups.all();
        assert_eq!(inner.len(), 1);
        assert_eq!(inner[0].position, Vector3::new(0.0, 5.0, 0.0));
    }
}
