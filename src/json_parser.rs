/*

    Provide utilities to parse scene description JSON files
    into a GroupNode hierarchy.

    The parser is somewhat robust, numbers can be given both in
    quotes (string) or as is:

    e.g. In JSON file both
    "_id": "6" and "_id": 6
    work as _id: usize in source code

    Vector3 fields are "<a> <a> <a>" strings or [a, a, a] arrays.
    Leaf vertices are either inline "x y z x y z ..." strings or
    structs carrying a "_plyFile" path relative to the JSON file.

    @date: 1 Dec, 2025
    @author: bartu
*/

use std::fmt::{self};
use std::marker::PhantomData;
use std::str::FromStr;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use void::Void;
use serde::{Deserialize, Deserializer};
use serde::de::{self, Visitor, SeqAccess, MapAccess};

use crate::prelude::*;
use crate::group::{GroupNode, MeshLeaf};
use crate::json_structs::{GroupJSON, MeshJSON, PlyMesh, RootSceneJSON};
use crate::numeric::{Float, Vector3};

/// Parse a scene file and build the in-memory group hierarchy,
/// loading any referenced .ply geometry relative to the JSON's folder.
pub fn parse_scene(path: &Path) -> Result<GroupNode, Box<dyn Error>> {

    let span = tracing::span!(tracing::Level::INFO, "load_scene");
    let _enter = span.enter();

    let file = File::open(path)?;
    let reader = BufReader::new(file);
    debug!("Reading file from {:?}", path);

    let root: RootSceneJSON = serde_json::from_reader(reader)?;

    let json_dir = path.parent().unwrap_or(Path::new("."));
    build_group(&root.group, json_dir)
}

/// Recursively convert the raw file form into scene-graph nodes.
fn build_group(json: &GroupJSON, json_dir: &Path) -> Result<GroupNode, Box<dyn Error>> {
    let mut group = GroupNode::new_at(json.position);

    for mesh in json.meshes.all() {
        group.push_leaf(build_leaf(&mesh, json_dir)?);
    }
    for child in json.groups.all() {
        group.push_group(build_group(&child, json_dir)?);
    }

    Ok(group)
}

fn build_leaf(mesh: &MeshJSON, json_dir: &Path) -> Result<MeshLeaf, Box<dyn Error>> {
    let vertices = if mesh.vertices._ply_file.is_empty() {
        mesh.vertices._data.clone()
    } else {
        load_ply_verts(&json_dir.join(&mesh.vertices._ply_file), mesh._id)?
    };

    if vertices.is_empty() {
        warn!("Mesh {} has no vertex data, it will not contribute to any bounding volume", mesh._id);
    }

    Ok(MeshLeaf::new_from(mesh._id, vertices))
}

fn load_ply_verts(ply_path: &Path, mesh_id: usize) -> Result<Vec<Vector3>, Box<dyn Error>> {

    if ply_path.exists() {
        debug!("PLY file exists: {:?}", ply_path);
    } else {
        error!("PLY file NOT found at: {:?}", ply_path);
    }

    debug!("Loading mesh {} from PLY file path: {:?}", mesh_id, ply_path);

    let file = File::open(ply_path)?;
    let reader = BufReader::new(file);
    let plymesh: PlyMesh = serde_ply::from_reader(reader)?;

    let verts = plymesh
        .vertex
        .iter()
        .map(|v| Vector3::new(v.x as Float, v.y as Float, v.z as Float))
        .collect();
    // Faces are irrelevant for bounding computation; only note their absence.
    if plymesh.face.is_none() {
        debug!("PLY mesh {} has no face data (vertices are all we need)", mesh_id);
    }

    Ok(verts)
}


// =======================================================================================================
// Deserialization helpers
// =======================================================================================================

pub(crate) fn deser_usize<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    /*
        Deserialize usize type given as either string or number in JSON
    */
    let s: serde_json::Value = Deserialize::deserialize(deserializer)?;
    match s {
        serde_json::Value::Number(n) => n.as_i64()
            .map(|v| v as usize)
            .ok_or_else(|| de::Error::custom("Invalid integer")),
        serde_json::Value::String(s) => s.parse::<usize>()
            .map_err(|_| de::Error::custom("Failed to parse integer from string")),
        t => Err(de::Error::custom(format!("Expected int or string, found {:#?}", t))),
    }
}

pub trait From3<T>: Sized {
    fn new(x: T, y: T, z: T) -> Self;
}

impl From3<f32> for bevy_math::Vec3 {
    fn new(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z)
    }
}

impl From3<f64> for bevy_math::DVec3 {
    fn new(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z)
    }
}

pub(crate) fn deser_vec3<'de, D, V, F>(deserializer: D) -> Result<V, D::Error>
where
    D: Deserializer<'de>,
    F: Deserialize<'de> + FromStr,
    F::Err: fmt::Display,
    V: From3<F>,
{
    struct Vec3Visitor<V, F>(PhantomData<(V, F)>);

    impl<'de, V, F> Visitor<'de> for Vec3Visitor<V, F>
    where
        F: Deserialize<'de> + FromStr,
        F::Err: fmt::Display,
        V: From3<F>,
    {
        type Value = V;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a Vec3 as a string 'x y z' or an array [x, y, z]")
        }

        // Given "X Y Z"
        fn visit_str<E>(self, value: &str) -> Result<V, E>
        where
            E: de::Error,
        {
            parse_vec3_str(value).map_err(de::Error::custom)
        }

        // Given [X, Y, Z]
        fn visit_seq<A>(self, mut seq: A) -> Result<V, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let x: F = seq
                .next_element()?
                .ok_or_else(|| de::Error::custom("Expected 3 elements in Vec3 array"))?;
            let y: F = seq
                .next_element()?
                .ok_or_else(|| de::Error::custom("Expected 3 elements in Vec3 array"))?;
            let z: F = seq
                .next_element()?
                .ok_or_else(|| de::Error::custom("Expected 3 elements in Vec3 array"))?;
            if seq.next_element::<F>()?.is_some() {
                return Err(de::Error::custom("Expected only 3 elements in Vec3 array"));
            }
            Ok(V::new(x, y, z))
        }
    }

    deserializer.deserialize_any(Vec3Visitor(PhantomData))
}

/// Helper function: parse a string like "25 25 25" into Vector3
fn parse_vec3_str<V, F>(s: &str) -> Result<V, String>
where
    F: FromStr,
    F::Err: fmt::Display,
    V: From3<F>,
{
    let parts: Vec<&str> = s.split_whitespace().collect();
    if parts.len() != 3 {
        return Err(format!("Expected 3 values, got {}", parts.len()));
    }
    let x = parts[0].parse::<F>().map_err(|e| e.to_string())?;
    let y = parts[1].parse::<F>().map_err(|e| e.to_string())?;
    let z = parts[2].parse::<F>().map_err(|e| e.to_string())?;
    Ok(V::new(x, y, z))
}


pub fn deser_vertex_data<'de, D>(deserializer: D) -> Result<Vec<Vector3>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: String = Deserialize::deserialize(deserializer)?;
    parse_string_vecvec3(&s).map_err(serde::de::Error::custom)
}


pub fn parse_string_vecvec3(s: &str) -> Result<Vec<Vector3>, String> {
    let nums: Vec<Float> = s
        .split_whitespace()
        .map(|x| x.parse::<Float>().map_err(|e| e.to_string()))
        .collect::<Result<_, _>>()?;

    if nums.len() % 3 != 0 {
        return Err(format!("Input length {} not divisible by 3", nums.len()));
    }

    Ok(nums
        .chunks(3)
        .map(|chunk| Vector3::new(chunk[0], chunk[1], chunk[2]))
        .collect())
}


// DISCLAIMER: This function is taken from
// https://serde.rs/string-or-struct.html
pub fn deser_string_or_struct<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: Deserialize<'de> + FromStr<Err = Void>,
    D: Deserializer<'de>,
{
    // This is a Visitor that forwards string types to T's `FromStr` impl and
    // forwards map types to T's `Deserialize` impl. The `PhantomData` is to
    // keep the compiler from complaining about T being an unused generic type
    // parameter. We need T in order to know the Value type for the Visitor
    // impl.
    struct StringOrStruct<T>(PhantomData<fn() -> T>);

    impl<'de, T> Visitor<'de> for StringOrStruct<T>
    where
        T: Deserialize<'de> + FromStr<Err = Void>,
    {
        type Value = T;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("string or map")
        }

        fn visit_str<E>(self, value: &str) -> Result<T, E>
        where
            E: de::Error,
        {
            Ok(FromStr::from_str(value).unwrap())
        }

        fn visit_map<M>(self, map: M) -> Result<T, M::Error>
        where
            M: MapAccess<'de>,
        {
            // `MapAccessDeserializer` is a wrapper that turns a `MapAccess`
            // into a `Deserializer`, allowing it to be used as the input to T's
            // `Deserialize` implementation.
            Deserialize::deserialize(de::value::MapAccessDeserializer::new(map))
        }
    }

    deserializer.deserialize_any(StringOrStruct(PhantomData))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_group_from_json_forms() {
        let root: RootSceneJSON = serde_json::from_str(r#"
        {
            "Group": {
                "Position": "0 1 0",
                "Meshes": [ { "_id": "1", "Vertices": "-1 -1 -1 1 1 1" } ],
                "Groups": { "Position": "2 0 0", "Meshes": { "_id": 2, "Vertices": "0 0 0" } }
            }
        }"#).unwrap();

        let group = build_group(&root.group, Path::new(".")).unwrap();
        assert_eq!(group.position, Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(group.count_leaves(), 2);
    }

    #[test]
    fn parse_scene_fails_on_missing_file() {
        assert!(parse_scene(Path::new("./definitely_not_here.json")).is_err());
    }

    #[test]
    fn vecvec3_rejects_partial_triplets() {
        assert!(parse_string_vecvec3("1 2 3 4").is_err());
        assert_eq!(parse_string_vecvec3("").unwrap().len(), 0);
    }
}
