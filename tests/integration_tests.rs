// tests/integration_tests.rs
//! Integration tests for the vector types and the throughput harness.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use vecmath::numerics::fast_math::{fast_inv_sqrt, FAST_INV_SQRT_MAX_RELATIVE_ERROR};
use vecmath::{measure, Operation, ThroughputConfig, Vec3, Vec4};

fn vec3_samples() -> Vec<Vec3> {
    let values = [-3.5, -1.0, 0.0, 0.1, 2.0, 1.0e3];
    let mut samples = Vec::new();
    for &x in &values {
        for &y in &values {
            for &z in &values {
                samples.push(Vec3::new(x, y, z));
            }
        }
    }
    samples
}

fn vec4_samples() -> Vec<Vec4> {
    vec3_samples()
        .into_iter()
        .enumerate()
        .map(|(i, v)| Vec4::new(v.x as f32, v.y as f32, v.z as f32, (i % 7) as f32 - 3.0))
        .collect()
}

#[test]
fn test_concrete_scenarios() {
    assert_eq!(
        Vec3::new(1.0, 2.0, 3.0) + Vec3::new(4.0, 5.0, 6.0),
        Vec3::new(5.0, 7.0, 9.0)
    );
    assert_eq!(
        Vec3::new(1.0, 0.0, 0.0).cross(&Vec3::new(0.0, 1.0, 0.0)),
        Vec3::new(0.0, 0.0, 1.0)
    );
    assert_eq!(
        Vec4::new(3.0, 4.0, 0.0, 0.0).normalize(),
        Vec4::new(0.6, 0.8, 0.0, 0.0)
    );
    assert_eq!(Vec3::new(0.0, 0.0, 0.0).normalize(), Vec3::new(0.0, 0.0, 0.0));
}

#[test]
fn test_vec3_algebraic_properties() {
    let samples = vec3_samples();
    for &a in samples.iter().step_by(5) {
        for &b in samples.iter().step_by(7) {
            assert_eq!(a + b, b + a);
            assert_eq!(a.dot(&b), b.dot(&a));
            assert_eq!(a.cross(&b), -b.cross(&a));

            let round_trip = (a - b) + b;
            assert_relative_eq!(round_trip.x, a.x, epsilon = 1e-9);
            assert_relative_eq!(round_trip.y, a.y, epsilon = 1e-9);
            assert_relative_eq!(round_trip.z, a.z, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_vec4_algebraic_properties() {
    let samples = vec4_samples();
    for &a in samples.iter().step_by(5) {
        for &b in samples.iter().step_by(7) {
            assert_eq!(a + b, b + a);
            assert_eq!(a.dot(&b), b.dot(&a));

            let ab = a.cross(&b);
            let ba = b.cross(&a);
            assert_eq!(ab.w, 0.0);
            assert_eq!(ba.w, 0.0);
            assert_eq!((ab.x, ab.y, ab.z), (-ba.x, -ba.y, -ba.z));

            let round_trip = (a - b) + b;
            assert_abs_diff_eq!(round_trip.x, a.x, epsilon = 1e-3);
            assert_abs_diff_eq!(round_trip.w, a.w, epsilon = 1e-3);
        }
    }
}

#[test]
fn test_normalize_yields_unit_length() {
    for v in vec3_samples() {
        let n = v.normalize();
        if v == Vec3::zero() {
            assert_eq!(n, Vec3::zero());
        } else {
            assert_abs_diff_eq!(n.length(), 1.0, epsilon = 1e-6);
        }
    }

    for v in vec4_samples() {
        let n = v.normalize();
        if v == Vec4::zero() {
            assert_eq!(n, Vec4::zero());
        } else {
            assert_abs_diff_eq!(n.length(), 1.0, epsilon = 1e-4);
        }
    }
}

#[test]
fn test_fast_and_precise_normalize_agree() {
    for v in vec4_samples() {
        let precise = v.normalize();
        let fast = v.normalize_fast();
        for (p, f) in [
            (precise.x, fast.x),
            (precise.y, fast.y),
            (precise.z, fast.z),
            (precise.w, fast.w),
        ] {
            assert_relative_eq!(f, p, max_relative = 1e-3);
        }
    }
    assert_eq!(Vec4::zero().normalize_fast(), Vec4::zero());
}

#[test]
fn test_documented_error_bound_is_below_tolerance() {
    assert!(FAST_INV_SQRT_MAX_RELATIVE_ERROR < 1e-3);
    let x = 30.0_f32;
    let err = (fast_inv_sqrt(x) * x.sqrt() - 1.0).abs();
    assert!(err <= FAST_INV_SQRT_MAX_RELATIVE_ERROR);
}

#[test]
fn test_operations_are_thread_safe() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let v = Vec4::new(i as f32 + 1.0, 2.0, 3.0, 4.0);
                (v.normalize(), v.normalize_fast())
            })
        })
        .collect();

    for handle in handles {
        let (precise, fast) = handle.join().unwrap();
        assert_abs_diff_eq!(precise.length(), 1.0, epsilon = 1e-4);
        assert_abs_diff_eq!(fast.length(), 1.0, epsilon = 1e-3);
    }
}

#[test]
fn test_harness_measures_both_normalize_variants() {
    let config = ThroughputConfig::quick();
    for operation in [Operation::Vec4Normalize, Operation::Vec4NormalizeFast] {
        let stats = measure(operation, &config).unwrap();
        assert_eq!(stats.operation, operation);
        assert_eq!(stats.total_operations(), config.iterations);
        assert!(stats.ops_per_second() >= 0.0);
    }
}
