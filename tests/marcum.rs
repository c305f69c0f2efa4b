//! End-to-end checks of the public Marcum API across the admissible box.

use marcumq::special::gamma_inc;
use marcumq::{marcum, marcum_p, marcum_q, MarcumError};

const TOL: f64 = 1e-10;

fn assert_near(a: f64, b: f64, tol: f64, msg: &str) {
    assert!((a - b).abs() < tol, "{}: {} vs {}", msg, a, b);
}

#[test]
fn pair_is_complementary_over_grid() {
    // every strategy region is crossed somewhere in this grid; clamped
    // results satisfy the identity exactly
    let mus: [f64; 6] = [1.0, 3.0, 10.0, 50.0, 140.0, 300.0];
    let xs = [0.0, 1.0, 5.0, 40.0, 90.0];
    let ys = [0.5, 5.0, 30.0, 100.0, 140.0];
    for &mu in &mus {
        for &x in &xs {
            for &y in &ys {
                let r = marcum(mu, x, y)
                    .unwrap_or_else(|e| panic!("marcum({mu}, {x}, {y}): {e}"));
                assert!(r.p.is_finite() && r.q.is_finite());
                assert!((0.0..=1.0).contains(&r.p), "p out of range at ({mu}, {x}, {y})");
                assert!((0.0..=1.0).contains(&r.q), "q out of range at ({mu}, {x}, {y})");
                assert_near(r.p + r.q, 1.0, TOL, &format!("closure at ({mu}, {x}, {y})"));
            }
        }
    }
}

#[test]
fn p_monotone_in_y_across_regions() {
    // fixed mu and x, y sweeping through the quadrature, recurrence and
    // large-xi regions in turn
    let mu = 50.0_f64;
    let x = 80.0_f64.sqrt(); // xx = 40
    let yys: [f64; 6] = [40.0, 80.0, 100.0, 400.0, 2000.0, 9800.0];
    let mut last = -1.0;
    for &yy in &yys {
        let y = (2.0 * yy).sqrt();
        let r = marcum(mu, x, y).unwrap();
        assert!(
            r.p >= last - 1e-10,
            "p not monotone at yy = {yy}: {} after {last}",
            r.p
        );
        last = r.p;
    }
}

#[test]
fn q_increases_with_order() {
    let q5 = marcum_q(5.0_f64, 2.0, 4.0).unwrap();
    let q6 = marcum_q(6.0_f64, 2.0, 4.0).unwrap();
    assert!(q6 > q5, "q5 = {q5}, q6 = {q6}");
}

#[test]
fn zero_x_is_incomplete_gamma_tail() {
    // Q_mu(0, y) is the regularized upper incomplete gamma of yy = y^2/2
    let r = marcum(2.0_f64, 0.0, 3.0).unwrap();
    assert_near(r.p, gamma_inc(2.0, 4.5).unwrap(), 1e-13, "P(2, 4.5)");
}

#[test]
fn wrapper_functions_agree() {
    let r = marcum(7.5_f64, 3.0, 9.0).unwrap();
    assert_eq!(marcum_p(7.5_f64, 3.0, 9.0).unwrap(), r.p);
    assert_eq!(marcum_q(7.5_f64, 3.0, 9.0).unwrap(), r.q);
}

#[test]
fn limits_are_clamped_and_flagged() {
    let r = marcum(3.0_f64, 2.0, 0.0).unwrap();
    assert_eq!((r.p, r.q), (0.0, 1.0));
    assert!(r.underflow);

    let r = marcum(1.0_f64, 1.0, 140.0).unwrap();
    assert_eq!((r.p, r.q), (1.0, 0.0));
    assert!(r.underflow);
}

#[test]
fn rejects_arguments_outside_box() {
    assert_eq!(marcum(20000.0_f64, 1.0, 1.0), Err(MarcumError::OutOfRange));
    assert_eq!(marcum(1.0_f64, 200.0, 1.0), Err(MarcumError::OutOfRange));
    assert_eq!(marcum(0.25_f64, 1.0, 1.0), Err(MarcumError::OutOfRange));
}

#[test]
fn f32_evaluation_is_usable() {
    let r64 = marcum(2.0_f64, 1.0, 3.0).unwrap();
    let r32 = marcum(2.0_f32, 1.0, 3.0).unwrap();
    assert!((r32.p + r32.q - 1.0).abs() < 1e-5);
    assert!((r32.q as f64 - r64.q).abs() < 1e-4);
}
