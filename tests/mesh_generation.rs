use fv_mesh::data::mesh_structure::{Axis, MeshStructure};
use fv_mesh::mesh_error::MeshError;
use fv_mesh::mesh_generation::{
    MeshBuilder2D, MeshGen2DOptions, MeshSpec2D, nonuniform_mesh_2d, uniform_mesh_2d,
};
use fv_mesh::prelude::DebugInvariants;

fn line(mesh: &MeshStructure, axis: Axis) -> (&[f64], &[f64], &[f64]) {
    (
        mesh.cell_size().get(axis).as_line().expect("rectangular sizes"),
        mesh.cell_centers().get(axis).as_line().expect("rectangular centers"),
        mesh.face_centers().get(axis).as_line().expect("rectangular faces"),
    )
}

fn assert_close(got: &[f64], want: &[f64]) {
    assert_eq!(got.len(), want.len(), "got={got:?}\nwant={want:?}");
    for (g, w) in got.iter().zip(want) {
        assert!((g - w).abs() < 1e-12, "got={got:?}\nwant={want:?}");
    }
}

#[test]
fn uniform_mesh_counts_and_coords() {
    let mesh = uniform_mesh_2d(5, 7, 10.0, 20.0).unwrap();
    assert_eq!(mesh.dimensions(), 2);
    assert_eq!(mesh.number_of_cells(), [5, 7]);

    let (sx, cx, fx) = line(&mesh, Axis::X);
    assert_eq!(sx, &[2.0; 7]);
    assert_eq!(fx, &[0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    assert_eq!(cx, &[1.0, 3.0, 5.0, 7.0, 9.0]);

    let (sy, cy, fy) = line(&mesh, Axis::Y);
    let dy = 20.0 / 7.0;
    assert_eq!(sy.len(), 9);
    assert!(sy.iter().all(|s| (s - dy).abs() < 1e-12));
    assert!((dy - 2.857).abs() < 1e-3);
    assert_eq!(fy.len(), 8);
    assert_eq!(cy.len(), 7);
    assert!((fy[7] - 20.0).abs() < 1e-12);

    // padded grid is 7 x 9
    assert_eq!(mesh.ghost_cell_indices(), [0, 8, 54, 62]);
}

#[test]
fn nonuniform_mesh_sizes_and_centers() {
    let mesh = nonuniform_mesh_2d(&[0.0, 1.0, 3.0, 6.0], &[0.0, 0.5, 2.0]).unwrap();
    assert_eq!(mesh.number_of_cells(), [3, 2]);

    let (sx, cx, fx) = line(&mesh, Axis::X);
    assert_eq!(&sx[1..=3], &[1.0, 2.0, 3.0]);
    assert_eq!(sx[0], 1.0);
    assert_eq!(sx[4], 3.0);
    assert_eq!(cx, &[0.5, 2.0, 4.5]);
    assert_eq!(fx, &[0.0, 1.0, 3.0, 6.0]);

    let (sy, cy, _) = line(&mesh, Axis::Y);
    assert_eq!(sy, &[0.5, 0.5, 1.5, 1.5]);
    assert_eq!(cy, &[0.25, 1.25]);
}

#[test]
fn nonuniform_rebuild_from_own_faces_is_identical() {
    let first = nonuniform_mesh_2d(&[-1.0, 0.2, 0.9, 4.0], &[3.0, 3.5]).unwrap();
    let fx = first.face_centers().x.as_line().unwrap().to_vec();
    let fy = first.face_centers().y.as_line().unwrap().to_vec();
    let second = nonuniform_mesh_2d(&fx, &fy).unwrap();
    assert_eq!(first.cell_centers(), second.cell_centers());
    assert_eq!(first, second);
}

#[test]
fn builder_is_idempotent() {
    let builder = MeshBuilder2D::new();
    let spec = MeshSpec2D::Uniform {
        nx: 3,
        ny: 4,
        width: 1.5,
        height: 0.7,
    };
    assert_eq!(builder.build(&spec).unwrap(), builder.build(&spec).unwrap());
}

#[test]
fn single_cell_per_axis() {
    let mesh = uniform_mesh_2d(1, 1, 2.0, 3.0).unwrap();
    let (sx, cx, fx) = line(&mesh, Axis::X);
    assert_eq!(fx, &[0.0, 2.0]);
    assert_eq!(cx, &[1.0]);
    assert_eq!(sx, &[2.0, 2.0, 2.0]);
    assert_eq!(mesh.face_centers().y.len(), 2);
    assert_eq!(mesh.ghost_cell_indices(), [0, 2, 6, 8]);

    let mesh = nonuniform_mesh_2d(&[0.0, 0.1], &[5.0, 6.0, 8.0]).unwrap();
    assert_eq!(mesh.number_of_cells(), [1, 2]);
    assert_eq!(mesh.face_centers().x.len(), 2);
}

#[test]
fn rejects_invalid_arguments() {
    let invalid = |r: Result<MeshStructure, MeshError>| {
        assert!(
            matches!(r, Err(MeshError::InvalidArgument(_))),
            "expected InvalidArgument, got {r:?}"
        )
    };
    invalid(uniform_mesh_2d(0, 3, 1.0, 1.0));
    invalid(uniform_mesh_2d(3, 0, 1.0, 1.0));
    invalid(uniform_mesh_2d(3, 3, -1.0, 1.0));
    invalid(uniform_mesh_2d(3, 3, 1.0, 0.0));
    invalid(nonuniform_mesh_2d(&[0.0, 2.0, 1.0], &[0.0, 1.0]));
    invalid(nonuniform_mesh_2d(&[0.0, 1.0], &[1.0]));
    invalid(nonuniform_mesh_2d(&[0.0, 1.0], &[0.0, 0.0]));
}

#[test]
fn declared_cell_counts_must_match_faces() {
    let spec = MeshSpec2D::NonUniform {
        face_locations_x: vec![0.0, 1.0, 2.0],
        face_locations_y: vec![0.0, 1.0, 2.0, 3.0],
        cells: Some([2, 2]),
    };
    assert_eq!(
        MeshBuilder2D::new().build(&spec),
        Err(MeshError::ShapeMismatch {
            axis: Axis::Y,
            expected: 3,
            found: 4
        })
    );
}

#[test]
fn built_meshes_satisfy_invariants_without_builder_check() {
    let builder = MeshBuilder2D::with_options(MeshGen2DOptions {
        check_invariants: false,
        ..Default::default()
    });
    assert!(!builder.options().check_invariants);
    let mesh = builder.non_uniform(&[0.0, 0.3, 1.0], &[0.0, 2.0]).unwrap();
    mesh.validate_invariants().unwrap();
}

#[test]
fn cell_volumes_cover_the_domain() {
    let mesh = nonuniform_mesh_2d(&[0.0, 1.0, 3.0], &[0.0, 2.0, 5.0]).unwrap();
    let volumes = mesh.cell_volumes();
    assert_eq!(volumes.shape(), (2, 2));
    assert_close(volumes.as_slice(), &[2.0, 3.0, 4.0, 6.0]);
    assert!((mesh.domain_area() - 15.0).abs() < 1e-12);
}

#[test]
fn uniform_mesh_near_float_limit_stays_finite() {
    let mesh = uniform_mesh_2d(2, 1, 1.7e308, 1.0).unwrap();
    let (sizes, centers, faces) = line(&mesh, Axis::X);
    assert!(centers.iter().chain(sizes).chain(faces).all(|v| v.is_finite()));
    assert_eq!(faces[2], 1.7e308);
    assert!(centers[1] > faces[1] && centers[1] < faces[2]);
}
