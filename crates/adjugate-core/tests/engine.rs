//! End-to-end behaviour of the matrix engine through the public API.

use adjugate_core::linalg;
use adjugate_core::prelude::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn a() -> Matrix {
    Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap()
}

fn b() -> Matrix {
    Matrix::from_rows(&[[5.0, 6.0], [7.0, 8.0]]).unwrap()
}

#[test]
fn reference_scenario_2x2() {
    init_logging();

    let sum = a().add(&b()).unwrap();
    assert!(sum.approx_eq(&Matrix::from_rows(&[[6.0, 8.0], [10.0, 12.0]]).unwrap()));

    let product = a().matmul(&b()).unwrap();
    assert!(product.approx_eq(&Matrix::from_rows(&[[19.0, 22.0], [43.0, 50.0]]).unwrap()));

    assert!((a().det().unwrap() - -2.0).abs() < EQ_TOLERANCE);

    let cof = a().cofactors().unwrap();
    assert!(cof.approx_eq(&Matrix::from_rows(&[[4.0, -3.0], [-2.0, 1.0]]).unwrap()));

    let inv = a().inv().unwrap();
    assert!(inv.approx_eq(&Matrix::from_rows(&[[-2.0, 1.0], [1.5, -0.5]]).unwrap()));
}

#[test]
fn free_functions_match_methods() {
    let m = Matrix::from_rows(&[[2.0, 0.0, 1.0], [1.0, 3.0, 2.0], [1.0, 1.0, 2.0]]).unwrap();
    assert_eq!(linalg::det(&m).unwrap(), m.det().unwrap());
    assert_eq!(linalg::cofactors(&m).unwrap(), m.cofactors().unwrap());
    assert_eq!(linalg::adjugate(&m).unwrap(), m.adjugate().unwrap());
    assert_eq!(linalg::inv(&m).unwrap(), m.inv().unwrap());
}

#[test]
fn determinant_of_identity_is_one() {
    for n in 1..=5 {
        let eye = Matrix::<f64>::identity(n).unwrap();
        assert!((eye.det().unwrap() - 1.0).abs() < EQ_TOLERANCE, "order {n}");
    }
}

#[test]
fn determinant_5x5() {
    // Upper triangular: determinant is the product of the diagonal.
    let m = Matrix::from_fn(5, 5, |r, c| match r.cmp(&c) {
        std::cmp::Ordering::Equal => (r + 1) as f64,
        std::cmp::Ordering::Less => 3.0,
        std::cmp::Ordering::Greater => 0.0,
    })
    .unwrap();
    assert_eq!(m.det().unwrap(), 120.0);
}

#[test]
fn inverse_times_matrix_is_identity() {
    init_logging();
    let m = Matrix::from_rows(&[
        [4.0, -2.0, 1.0, 0.5],
        [3.0, 6.0, -4.0, 2.0],
        [2.0, 1.0, 8.0, -1.0],
        [0.0, 1.5, -2.0, 5.0],
    ])
    .unwrap();
    let inv = m.inv().unwrap();
    let eye = Matrix::identity(4).unwrap();
    assert!(m.matmul(&inv).unwrap().approx_eq(&eye));
    assert!(inv.matmul(&m).unwrap().approx_eq(&eye));
}

#[test]
fn error_kinds() {
    init_logging();

    let wide = Matrix::<f64>::new(2, 3).unwrap();
    assert!(matches!(
        wide.matmul(&wide),
        Err(CoreError::ShapeMismatch { op: "matmul", .. })
    ));
    assert!(matches!(
        wide.det(),
        Err(CoreError::ShapeMismatch { op: "det", .. })
    ));
    assert!(matches!(
        wide.cofactors(),
        Err(CoreError::ShapeMismatch { .. })
    ));
    assert!(matches!(wide.inv(), Err(CoreError::ShapeMismatch { .. })));

    let singular = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]]).unwrap();
    assert_eq!(singular.inv(), Err(CoreError::Singular));

    assert!(matches!(
        Matrix::<f64>::new(0, 1),
        Err(CoreError::InvalidShape { .. })
    ));
}

#[test]
fn overflowing_shapes_are_rejected() {
    init_logging();

    let huge = usize::MAX / 2 + 1;
    assert!(matches!(
        Matrix::<f64>::new(huge, 2),
        Err(CoreError::InvalidShape { .. })
    ));
    assert!(matches!(
        Matrix::<f64>::from_vec(Vec::new(), 2, huge),
        Err(CoreError::InvalidShape { .. })
    ));
    assert!(matches!(
        Matrix::<f64>::identity(huge),
        Err(CoreError::InvalidShape { .. })
    ));
}

#[test]
fn released_matrix_is_rejected_everywhere() {
    init_logging();

    let mut m = a();
    m.release();
    m.release();
    assert_eq!(m.shape(), (0, 0));

    let other = a();
    assert!(!m.approx_eq(&other));
    for result in [
        m.add(&other),
        other.sub(&m),
        m.scale(2.0),
        m.matmul(&other),
        other.matmul(&m),
        m.transpose(),
        m.cofactors(),
        m.adjugate(),
        m.inv(),
    ] {
        assert!(
            matches!(result, Err(CoreError::InvalidShape { .. })),
            "{result:?}"
        );
    }
    assert!(matches!(m.det(), Err(CoreError::InvalidShape { .. })));
}

#[test]
fn outputs_never_alias_inputs() {
    let m = a();
    let mut t = m.transpose().unwrap();
    t[(0, 1)] = 100.0;
    assert_eq!(m, a());

    let mut s = m.scale(1.0).unwrap();
    s.set(0, 0, -1.0).unwrap();
    assert_eq!(m, a());
}

#[test]
fn errors_are_displayable() {
    let err = Matrix::<f64>::new(2, 3).unwrap().det().unwrap_err();
    assert_eq!(
        err.to_string(),
        "shape mismatch in det: expected (2, 2), got (2, 3)"
    );
    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert!(boxed.source().is_none());
}
