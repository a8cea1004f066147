//! Wavefront OBJ parsing into a flat triangle soup.
//!
//! A deliberately small reader: positions, texcoords, normals, and
//! triangular faces only. No materials, no quads, no smoothing groups.
//! Faces with more than three corners are unsupported input and are
//! skipped with a warning rather than guessed at with a fan
//! triangulation.
//!
//! Parsing is two-phase. The first pass fills three independently-indexed
//! attribute tables plus parallel per-corner index lists, strictly in
//! file order ([`ObjBuffers`]). The second pass
//! ([`resolve`](ObjBuffers::resolve)) chases each 1-based cross-reference
//! and emits one [`Vertex`] per corner. The tables are transient; only
//! the resolved soup survives.

use std::fmt;
use std::path::Path;

use glam::{Vec2, Vec3};

use super::Vertex;

/// Errors produced while loading an OBJ file.
#[derive(Debug)]
pub enum ObjError {
    /// The path does not carry the `.obj` extension.
    NotObj(String),
    /// The file could not be read.
    Io(std::io::Error),
    /// A face referenced an index outside its attribute table.
    IndexOutOfRange {
        /// Which table was overrun: "position", "texcoord", or "normal".
        kind: &'static str,
        /// The 1-based index as written in the file.
        index: i32,
        /// Number of entries in the referenced table.
        count: usize,
    },
}

impl fmt::Display for ObjError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotObj(path) => {
                write!(f, "not an .obj file: {path}")
            }
            Self::Io(e) => write!(f, "failed to read model: {e}"),
            Self::IndexOutOfRange { kind, index, count } => write!(
                f,
                "{kind} index {index} out of range (table has {count} entries)"
            ),
        }
    }
}

impl std::error::Error for ObjError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

/// Transient attribute tables and face index lists for one parse.
///
/// Discarded after [`resolve`](Self::resolve); never part of the
/// persistent mesh.
#[derive(Debug, Default)]
pub(crate) struct ObjBuffers {
    positions: Vec<Vec3>,
    texcoords: Vec<Vec2>,
    normals: Vec<Vec3>,
    position_indices: Vec<i32>,
    texcoord_indices: Vec<i32>,
    normal_indices: Vec<i32>,
}

/// One `p[/t[/n]]` corner group, indices as written (1-based).
struct Corner {
    position: i32,
    texcoord: Option<i32>,
    normal: Option<i32>,
}

impl ObjBuffers {
    /// First pass: scan every line of `src` into the tables.
    ///
    /// Malformed face lines are skipped with a warning and do not abort
    /// the parse; unknown record prefixes are ignored.
    pub(crate) fn scan(src: &str) -> Self {
        let mut buffers = Self::default();
        for (line_no, line) in src.lines().enumerate() {
            let mut tokens = line.split_whitespace();
            match tokens.next() {
                Some("v") => buffers.positions.push(read_vec3(tokens)),
                Some("vt") => buffers.texcoords.push(read_vec2(tokens)),
                Some("vn") => {
                    // Normalize on ingest; resolution is a plain lookup.
                    buffers
                        .normals
                        .push(read_vec3(tokens).normalize_or_zero());
                }
                Some("f") => {
                    if !buffers.push_face(tokens) {
                        log::warn!(
                            "skipping malformed face on line {}",
                            line_no + 1
                        );
                    }
                }
                _ => {}
            }
        }
        buffers
    }

    /// Append one triangular face's corners, atomically.
    ///
    /// Returns false (pushing nothing) unless the line has exactly three
    /// well-formed corner groups.
    fn push_face<'a>(
        &mut self,
        groups: impl Iterator<Item = &'a str>,
    ) -> bool {
        let mut corners: Vec<Corner> = Vec::with_capacity(3);
        for group in groups {
            match parse_corner(group) {
                Some(corner) => corners.push(corner),
                None => return false,
            }
        }
        if corners.len() != 3 {
            return false;
        }
        for corner in corners {
            self.position_indices.push(corner.position);
            if let Some(t) = corner.texcoord {
                self.texcoord_indices.push(t);
            }
            if let Some(n) = corner.normal {
                self.normal_indices.push(n);
            }
        }
        true
    }

    /// Second pass: chase every corner's references into a vertex soup.
    ///
    /// Texcoords and normals are looked up only if any such indices were
    /// recorded anywhere in the file; absent attributes stay zeroed. An
    /// out-of-range reference fails the whole load.
    pub(crate) fn resolve(self) -> Result<Vec<Vertex>, ObjError> {
        let mut vertices = Vec::with_capacity(self.position_indices.len());
        for (i, &pos_idx) in self.position_indices.iter().enumerate() {
            let mut vertex = Vertex::ZERO;
            vertex.position =
                lookup(&self.positions, pos_idx, "position")?.to_array();
            // A corner without a recorded texcoord/normal index (none in
            // the file, or lists desynchronized by skipped faces) keeps
            // the zeroed attribute.
            if let Some(&n_idx) = self.normal_indices.get(i) {
                vertex.normal =
                    lookup(&self.normals, n_idx, "normal")?.to_array();
            }
            if let Some(&t_idx) = self.texcoord_indices.get(i) {
                vertex.tex_coord =
                    lookup(&self.texcoords, t_idx, "texcoord")?.to_array();
            }
            vertices.push(vertex);
        }
        Ok(vertices)
    }
}

/// Parse an OBJ document into a resolved vertex soup.
pub(crate) fn parse(src: &str) -> Result<Vec<Vertex>, ObjError> {
    ObjBuffers::scan(src).resolve()
}

/// Check the `.obj` extension before touching the filesystem.
pub(crate) fn check_extension(path: &Path) -> Result<(), ObjError> {
    let ok = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("obj"));
    if ok {
        Ok(())
    } else {
        Err(ObjError::NotObj(path.display().to_string()))
    }
}

/// Read up to three float components; missing or unparsable trailing
/// components default to zero, matching the record's fixed width.
fn read_vec3<'a>(mut tokens: impl Iterator<Item = &'a str>) -> Vec3 {
    let mut v = [0.0f32; 3];
    for slot in &mut v {
        match tokens.next().and_then(|t| t.parse().ok()) {
            Some(value) => *slot = value,
            None => break,
        }
    }
    Vec3::from_array(v)
}

/// Two-component variant of [`read_vec3`].
fn read_vec2<'a>(mut tokens: impl Iterator<Item = &'a str>) -> Vec2 {
    let mut v = [0.0f32; 2];
    for slot in &mut v {
        match tokens.next().and_then(|t| t.parse().ok()) {
            Some(value) => *slot = value,
            None => break,
        }
    }
    Vec2::from_array(v)
}

/// Split one `p[/t[/n]]` group. The position index is mandatory; the
/// other two sub-fields may be empty or absent.
fn parse_corner(group: &str) -> Option<Corner> {
    let mut fields = group.split('/');
    let position = fields.next()?.parse().ok()?;
    let texcoord = match fields.next() {
        Some("") | None => None,
        Some(t) => Some(t.parse().ok()?),
    };
    let normal = match fields.next() {
        Some("") | None => None,
        Some(n) => Some(n.parse().ok()?),
    };
    Some(Corner {
        position,
        texcoord,
        normal,
    })
}

/// Convert a 1-based file index into a table entry.
fn lookup<T: Copy>(
    table: &[T],
    index: i32,
    kind: &'static str,
) -> Result<T, ObjError> {
    usize::try_from(index)
        .ok()
        .filter(|&i| i >= 1)
        .and_then(|i| table.get(i - 1))
        .copied()
        .ok_or(ObjError::IndexOutOfRange {
            kind,
            index,
            count: table.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_triangle_with_texcoords_resolves() {
        let src = "\
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.0 1.0 0.0
vt 0.0 0.0
vt 1.0 0.0
vt 0.0 1.0
f 1/1 2/2 3/3
";
        let vertices = parse(src).unwrap();
        assert_eq!(vertices.len(), 3);
        assert_eq!(vertices[1].position, [1.0, 0.0, 0.0]);
        assert_eq!(vertices[1].tex_coord, [1.0, 0.0]);
        // No normals anywhere in the file: stays zeroed.
        assert_eq!(vertices[1].normal, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn full_corner_groups_resolve_all_attributes() {
        let src = "\
v 0 0 0
v 1 0 0
v 0 1 0
vt 0 0
vt 1 0
vt 0 1
vn 0 0 2
f 1/1/1 2/2/1 3/3/1
";
        let vertices = parse(src).unwrap();
        assert_eq!(vertices.len(), 3);
        // Normals are normalized on ingest.
        assert_eq!(vertices[0].normal, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn position_only_faces_resolve() {
        let src = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
        let vertices = parse(src).unwrap();
        assert_eq!(vertices.len(), 3);
        assert_eq!(vertices[2].position, [0.0, 1.0, 0.0]);
    }

    #[test]
    fn out_of_range_index_fails_the_load() {
        let src = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 99\n";
        let err = parse(src).unwrap_err();
        match err {
            ObjError::IndexOutOfRange { kind, index, count } => {
                assert_eq!(kind, "position");
                assert_eq!(index, 99);
                assert_eq!(count, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn zero_and_negative_indices_fail() {
        assert!(parse("v 0 0 0\nf 0 1 1\n").is_err());
        assert!(parse("v 0 0 0\nf -1 1 1\n").is_err());
    }

    #[test]
    fn malformed_faces_are_skipped_not_fatal() {
        // A quad and a non-numeric corner, between two good triangles.
        let src = "\
v 0 0 0
v 1 0 0
v 0 1 0
v 1 1 0
f 1 2 3
f 1 2 3 4
f 1 x 3
f 2 3 4
";
        let vertices = parse(src).unwrap();
        assert_eq!(vertices.len(), 6);
        assert_eq!(vertices[3].position, [1.0, 0.0, 0.0]);
    }

    #[test]
    fn missing_trailing_components_default_to_zero() {
        let src = "v 5.0\nf 1 1 1\n";
        let vertices = parse(src).unwrap();
        assert_eq!(vertices[0].position, [5.0, 0.0, 0.0]);
    }

    #[test]
    fn cube_soup_is_not_deduplicated() {
        // 8 positions, 12 triangular faces; shared corners must stay
        // distinct entries.
        let mut src = String::from(
            "v -1 -1 -1\nv 1 -1 -1\nv 1 1 -1\nv -1 1 -1\n\
             v -1 -1 1\nv 1 -1 1\nv 1 1 1\nv -1 1 1\n",
        );
        let faces = [
            [1, 2, 3],
            [1, 3, 4],
            [5, 7, 6],
            [5, 8, 7],
            [1, 5, 6],
            [1, 6, 2],
            [2, 6, 7],
            [2, 7, 3],
            [3, 7, 8],
            [3, 8, 4],
            [4, 8, 5],
            [4, 5, 1],
        ];
        for f in faces {
            src.push_str(&format!("f {} {} {}\n", f[0], f[1], f[2]));
        }
        let vertices = parse(&src).unwrap();
        assert_eq!(vertices.len(), 36);
    }

    #[test]
    fn file_with_no_faces_yields_empty_soup() {
        let vertices = parse("v 1 2 3\nvn 0 1 0\n").unwrap();
        assert!(vertices.is_empty());
    }

    #[test]
    fn extension_check() {
        assert!(check_extension(Path::new("models/cube.obj")).is_ok());
        assert!(check_extension(Path::new("models/cube.OBJ")).is_ok());
        assert!(check_extension(Path::new("models/cube.stl")).is_err());
        assert!(check_extension(Path::new("cube")).is_err());
    }
}
